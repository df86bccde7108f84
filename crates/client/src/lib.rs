//! HTTP client adapter for the Autodocs API.
//!
//! One configured [`AutodocsApi`] instance is shared by every store. It
//! owns the transport concerns: the base URL, request-time headers
//! (request id, optional credential), the 401 invalidation hook, and
//! envelope unwrapping. Stores own the endpoint paths.

pub mod api;
pub mod config;
pub mod credentials;

pub use api::{ApiError, AutodocsApi};
pub use config::ClientConfig;
pub use credentials::{CredentialStore, MemoryCredentials, NoopCredentials};
