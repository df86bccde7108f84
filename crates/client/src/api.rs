//! REST client for the Autodocs HTTP endpoints.
//!
//! Wraps a single [`reqwest::Client`] bound to the configured base URL.
//! Every request carries an `x-request-id` and, when the credential store
//! yields one, an `Authorization` token. Failures are never retried; a
//! 401 additionally invalidates the credential store before propagating.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use autodocs_core::envelope::ApiResponse;
use autodocs_core::error::CoreError;

use crate::config::ClientConfig;
use crate::credentials::{CredentialStore, NoopCredentials};

/// HTTP client for one Autodocs deployment.
pub struct AutodocsApi {
    client: reqwest::Client,
    base_url: String,
    credentials: Arc<dyn CredentialStore>,
}

/// Errors from the Autodocs REST layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Input rejected client-side before any request was issued.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The HTTP request itself failed (network, DNS, TLS, decode, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("Autodocs API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl AutodocsApi {
    /// Create an API client with inert credentials.
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_credentials(config, Arc::new(NoopCredentials))
    }

    /// Create an API client using the given credential store.
    pub fn with_credentials(config: &ClientConfig, credentials: Arc<dyn CredentialStore>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("HTTP client construction only fails on invalid TLS config");

        Self {
            client,
            base_url: config.base_url.clone(),
            credentials,
        }
    }

    /// Base URL this client is bound to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET an envelope-wrapped payload and unwrap it.
    pub async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.prepare(self.client.get(self.url(path)));
        let response = self.execute(request).await?;
        let envelope = response.json::<ApiResponse<T>>().await?;
        Ok(envelope.data)
    }

    /// POST a JSON body. The response payload is implementation-defined,
    /// so it is returned as opaque JSON rather than unwrapped.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        let request = self.prepare(self.client.post(self.url(path)).json(body));
        let response = self.execute(request).await?;
        Ok(response.json::<Value>().await?)
    }

    /// POST a multipart form. Same opaque-JSON contract as
    /// [`Self::post_json`].
    pub async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Value, ApiError> {
        let request = self.prepare(self.client.post(self.url(path)).multipart(form));
        let response = self.execute(request).await?;
        Ok(response.json::<Value>().await?)
    }

    /// DELETE a resource. Same opaque-JSON contract as [`Self::post_json`].
    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        let request = self.prepare(self.client.delete(self.url(path)));
        let response = self.execute(request).await?;
        Ok(response.json::<Value>().await?)
    }

    // ---- private helpers ----

    /// Join a store-supplied path onto the base URL.
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Request hook: tag the request and attach the credential if one is
    /// available. A missing token never blocks the request.
    fn prepare(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let builder = builder.header("x-request-id", uuid::Uuid::new_v4().to_string());
        match self.credentials.token() {
            Some(token) => builder.header(reqwest::header::AUTHORIZATION, token),
            None => builder,
        }
    }

    /// Send the request and run the response hook: pass 2xx responses
    /// through unchanged, turn everything else into [`ApiError::Status`].
    /// A 401 invalidates the credential store before the error propagates.
    async fn execute(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            tracing::warn!("Received 401, invalidating cached credentials");
            self.credentials.invalidate();
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- url joining ---------------------------------------------------------

    #[test]
    fn url_joins_leading_slash_path() {
        let api = AutodocsApi::new(&ClientConfig::new("http://localhost:8080"));
        assert_eq!(api.url("/documents"), "http://localhost:8080/documents");
    }

    #[test]
    fn url_joins_bare_path() {
        let api = AutodocsApi::new(&ClientConfig::new("http://localhost:8080/"));
        assert_eq!(api.url("logs"), "http://localhost:8080/logs");
    }
}
