//! Request-log store. Read and clear only — the server writes entries.

use std::sync::Arc;

use tokio::sync::RwLock;

use autodocs_client::{ApiError, AutodocsApi};
use autodocs_core::log::LogEntry;

/// Cached request-log state.
pub struct LogStore {
    api: Arc<AutodocsApi>,
    logs: RwLock<Option<Vec<LogEntry>>>,
}

impl LogStore {
    pub fn new(api: Arc<AutodocsApi>) -> Self {
        Self {
            api,
            logs: RwLock::new(None),
        }
    }

    /// The cached log entries, in server order.
    pub async fn logs(&self) -> Option<Vec<LogEntry>> {
        self.logs.read().await.clone()
    }

    /// Fetch the request log and replace the cached list.
    pub async fn fetch_logs(&self) -> Result<(), ApiError> {
        let logs: Vec<LogEntry> = self.api.get_data("/logs").await?;
        tracing::debug!(count = logs.len(), "Fetched request log");
        *self.logs.write().await = Some(logs);
        Ok(())
    }

    /// Clear the request log server-side. The cached list is left as-is;
    /// callers re-fetch to observe the cleared state.
    pub async fn clear_logs(&self) -> Result<(), ApiError> {
        self.api.delete("/clear-logs").await?;
        tracing::info!("Cleared request log");
        Ok(())
    }
}
