/// Domain-level error type.
///
/// The client rejects malformed inputs before a request is issued;
/// everything the server rejects comes back through the transport layer
/// instead.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Input failed client-side validation.
    #[error("Validation error: {0}")]
    Validation(String),
}
