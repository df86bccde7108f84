//! Request log entries.
//!
//! The server appends one entry per handled request (generation, preview,
//! upload, delete). The client reads and clears the log; it never writes
//! entries.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Status / method constants
// ---------------------------------------------------------------------------

/// The logged request completed successfully.
pub const LOG_STATUS_SUCCESS: &str = "SUCCESS";
/// The logged request failed.
pub const LOG_STATUS_FAILED: &str = "FAILED";

/// All statuses the server writes.
pub const VALID_LOG_STATUSES: &[&str] = &[LOG_STATUS_SUCCESS, LOG_STATUS_FAILED];

/// All request methods the server logs.
pub const VALID_LOG_METHODS: &[&str] = &["GET", "POST", "DELETE"];

/// Validate that a log status string is one the server writes.
pub fn validate_log_status(status: &str) -> Result<(), CoreError> {
    if VALID_LOG_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown log status: '{status}'. Valid statuses: {}",
            VALID_LOG_STATUSES.join(", ")
        )))
    }
}

// ---------------------------------------------------------------------------
// Log entry
// ---------------------------------------------------------------------------

/// One request log entry as listed by `GET /logs`.
///
/// Every field the server populates on any code path is present here;
/// apart from the identifying quartet (`id`, `status`, `method`,
/// `created_at`) all are optional because different request kinds fill in
/// different subsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    #[serde(rename = "documentName", default)]
    pub document_name: Option<String>,
    #[serde(rename = "documentDescription", default)]
    pub document_description: Option<String>,
    /// Outcome description for failed or administrative requests.
    #[serde(rename = "logDescription", default)]
    pub log_description: Option<String>,
    /// The generation payload, serialized, when the request carried one.
    #[serde(rename = "jsonPayload", default)]
    pub json_payload: Option<String>,
    /// [`LOG_STATUS_SUCCESS`] or [`LOG_STATUS_FAILED`].
    pub status: String,
    /// HTTP method of the logged request.
    pub method: String,
    #[serde(rename = "templateId", default)]
    pub template_id: Option<String>,
    #[serde(rename = "refNumber", default)]
    pub ref_number: Option<String>,
    pub created_at: Timestamp,
}

impl LogEntry {
    /// Whether this entry records a failed request.
    pub fn is_failure(&self) -> bool {
        self.status == LOG_STATUS_FAILED
    }
}
