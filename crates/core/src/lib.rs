//! Autodocs domain types.
//!
//! Entity records exchanged with the Autodocs document-generation API,
//! the `{ "data": ... }` response envelope, reference-number rules, and
//! client-side validation errors. This crate is pure data — no IO.

pub mod document;
pub mod envelope;
pub mod error;
pub mod log;
pub mod refnum;
pub mod template;
pub mod types;

pub use document::{Document, DocumentHistory, GenerationRequest};
pub use envelope::ApiResponse;
pub use error::CoreError;
pub use log::LogEntry;
pub use template::{Template, TemplateUpload};
