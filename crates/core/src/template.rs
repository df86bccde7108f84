//! Template records and the upload input.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{RefNumber, Timestamp};

/// An uploaded HTML template as listed by `GET /templates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Internal identifier (UUID), also the storage object name.
    pub id: String,
    #[serde(rename = "templateName")]
    pub name: String,
    /// External key used in preview/delete URLs.
    #[serde(rename = "refNumber")]
    pub ref_number: RefNumber,
    #[serde(rename = "fileName")]
    pub file_name: String,
    pub created_at: Timestamp,
}

/// Client-side input to the multipart `POST /upload-template` call.
///
/// Not a wire record: it is flattened into a form with a `name` text part
/// and a `template` file part.
#[derive(Debug, Clone)]
pub struct TemplateUpload {
    /// Display name of the template.
    pub name: String,
    /// Filename reported for the uploaded file part.
    pub file_name: String,
    /// Raw template file contents.
    pub content: Vec<u8>,
}

impl TemplateUpload {
    /// Reject an upload that could not produce a meaningful template.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation(
                "Template name must not be empty".to_string(),
            ));
        }
        if self.content.is_empty() {
            return Err(CoreError::Validation(
                "Template file must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
