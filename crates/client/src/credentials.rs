//! Credential attachment and invalidation hooks.
//!
//! The API accepts an `Authorization` header carrying a raw session token.
//! The hooks are first-class so the contract is explicit even while no
//! authentication backend exists: [`NoopCredentials`] keeps the adapter
//! inert, [`MemoryCredentials`] holds a session token in memory.

use std::sync::RwLock;

/// Source of the `Authorization` header value, and the invalidation hook
/// called when the server answers 401.
///
/// A store that yields no token must never block the request — the
/// adapter sends it without the header.
pub trait CredentialStore: Send + Sync {
    /// The current token, if any.
    fn token(&self) -> Option<String>;

    /// Drop any cached credential state. Called once per 401 response.
    fn invalidate(&self);
}

/// Default credential store: never yields a token, never holds state.
#[derive(Debug, Default)]
pub struct NoopCredentials;

impl CredentialStore for NoopCredentials {
    fn token(&self) -> Option<String> {
        None
    }

    fn invalidate(&self) {}
}

/// In-memory session token store.
#[derive(Debug, Default)]
pub struct MemoryCredentials {
    token: RwLock<Option<String>>,
}

impl MemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a session token; subsequent requests carry it.
    pub fn set(&self, token: impl Into<String>) {
        *self.token.write().expect("credential lock poisoned") = Some(token.into());
    }
}

impl CredentialStore for MemoryCredentials {
    fn token(&self) -> Option<String> {
        self.token.read().expect("credential lock poisoned").clone()
    }

    fn invalidate(&self) {
        *self.token.write().expect("credential lock poisoned") = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_store_yields_nothing() {
        let store = NoopCredentials;
        assert_eq!(store.token(), None);
        store.invalidate();
        assert_eq!(store.token(), None);
    }

    #[test]
    fn memory_store_round_trips_token() {
        let store = MemoryCredentials::new();
        assert_eq!(store.token(), None);

        store.set("session-123");
        assert_eq!(store.token().as_deref(), Some("session-123"));
    }

    #[test]
    fn invalidate_clears_token() {
        let store = MemoryCredentials::new();
        store.set("session-123");
        store.invalidate();
        assert_eq!(store.token(), None);
    }
}
