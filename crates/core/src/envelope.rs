//! Shared response envelope for API payloads.
//!
//! Every successful Autodocs response wraps its payload as
//! `{ "code": ..., "data": ..., "timestamp": ... }`. Only `data` is
//! guaranteed; the metadata fields vary per endpoint (the upload endpoint
//! sends `time` instead of `timestamp`). Error responses do not carry the
//! envelope at all, so nothing may rely on it when a request fails.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// The typed payload.
    pub data: T,
    /// HTTP-like status code echoed in the body, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// Server-side timestamp, when present.
    #[serde(default, alias = "time", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
}
