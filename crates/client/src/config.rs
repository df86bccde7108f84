/// Client configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. In production,
/// override via environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Autodocs API, without a trailing slash.
    pub base_url: String,
    /// Transport timeout applied to every request (default: `30`).
    pub request_timeout_secs: u64,
}

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

impl ClientConfig {
    /// Build a configuration for the given base URL with default timeouts.
    ///
    /// A trailing `/` on the URL is stripped so that store paths (which
    /// start with `/`) join cleanly.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                  |
    /// |------------------------|--------------------------|
    /// | `AUTODOCS_BASE_URL`    | `http://localhost:8080`  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                     |
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("AUTODOCS_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".into());

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            request_timeout_secs,
            ..Self::new(base_url)
        }
    }
}
