//! Application composition root.

use std::sync::Arc;

use autodocs_client::{AutodocsApi, ClientConfig, CredentialStore};
use autodocs_store::{DocumentStore, LogStore, TemplateStore};

/// Everything a consumer needs to talk to the Autodocs API: the
/// configuration, one shared adapter, and the three domain stores.
///
/// Constructed once at application start and passed by reference to
/// consumers. All stores share the same adapter instance, so credential
/// state and transport configuration stay consistent across domains.
pub struct AppContext {
    pub config: ClientConfig,
    pub api: Arc<AutodocsApi>,
    pub documents: DocumentStore,
    pub templates: TemplateStore,
    pub logs: LogStore,
}

impl AppContext {
    /// Build a context with inert credentials.
    pub fn new(config: ClientConfig) -> Self {
        let api = Arc::new(AutodocsApi::new(&config));
        Self::with_api(config, api)
    }

    /// Build a context using the given credential store.
    pub fn with_credentials(config: ClientConfig, credentials: Arc<dyn CredentialStore>) -> Self {
        let api = Arc::new(AutodocsApi::with_credentials(&config, credentials));
        Self::with_api(config, api)
    }

    fn with_api(config: ClientConfig, api: Arc<AutodocsApi>) -> Self {
        Self {
            documents: DocumentStore::new(Arc::clone(&api)),
            templates: TemplateStore::new(Arc::clone(&api)),
            logs: LogStore::new(Arc::clone(&api)),
            config,
            api,
        }
    }

    /// Full startup sequence for a shell binary: load `.env`, initialise
    /// tracing, read configuration from the environment, and build the
    /// context.
    pub fn bootstrap() -> Self {
        dotenvy::dotenv().ok();
        init_tracing();

        let config = ClientConfig::from_env();
        tracing::info!(base_url = %config.base_url, "Loaded client configuration");
        Self::new(config)
    }
}

/// Initialise the tracing subscriber from `RUST_LOG`, defaulting to debug
/// output for this crate family.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "autodocs=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
