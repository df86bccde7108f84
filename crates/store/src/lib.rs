//! Domain entity stores for the Autodocs client.
//!
//! Each store owns an in-memory cache of its entity list plus the
//! transient per-operation slots (preview payload, last mutation
//! response), and exposes the CRUD-style operations that fill them.
//! Stores are constructed once around a shared [`AutodocsApi`] and passed
//! by reference to consumers — there is no ambient global lookup.
//!
//! Caching contract, shared by all three stores:
//!
//! - fetches replace the cached field wholesale on success and leave it
//!   untouched on failure;
//! - mutations only overwrite their result slot, never the cached list —
//!   callers re-fetch to observe the change;
//! - concurrent operations are not serialised: the last response to
//!   resolve wins. Debounce at the call site if that matters.
//!
//! [`AutodocsApi`]: autodocs_client::AutodocsApi

pub mod documents;
pub mod logs;
pub mod templates;

pub use documents::DocumentStore;
pub use logs::LogStore;
pub use templates::TemplateStore;
