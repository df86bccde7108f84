//! Generated document records and the generation request payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;
use crate::refnum::validate_ref_number;
use crate::types::{RefNumber, Timestamp};

/// A generated document as listed by `GET /documents`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Internal identifier (UUID).
    pub id: String,
    #[serde(rename = "documentName")]
    pub document_name: String,
    /// Free-text description captured at generation time.
    #[serde(default)]
    pub description: Option<String>,
    /// Identifier of the template the document was rendered from.
    #[serde(rename = "templateId")]
    pub template_id: String,
    /// Opaque encoded file payload. The server serialises this field as
    /// `"pdf"`; the documented contract says `"data"` — accept both.
    #[serde(alias = "pdf")]
    pub data: String,
    /// External key used in preview/delete URLs.
    #[serde(rename = "refNumber")]
    pub ref_number: RefNumber,
    pub created_at: Timestamp,
}

/// Input to `POST /generate`. Write-only; never cached client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Reference number of the template to render.
    #[serde(rename = "refNumber")]
    pub ref_number: RefNumber,
    pub description: String,
    /// Arbitrary JSON substituted into the template by the server.
    pub data: Value,
}

impl GenerationRequest {
    /// Reject a request whose template ref could not form a valid URL or
    /// lookup key.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_ref_number(&self.ref_number)
    }
}

/// One point of the weekly generation histogram (`GET /document-history`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentHistory {
    /// Weekday name, server-ordered with the current day last.
    pub date: String,
    pub count: i64,
}
