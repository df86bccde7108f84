//! Generated-document store.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

use autodocs_client::{ApiError, AutodocsApi};
use autodocs_core::document::{Document, DocumentHistory, GenerationRequest};
use autodocs_core::refnum::validate_ref_number;

/// Cached document state plus the operations that fill it.
pub struct DocumentStore {
    api: Arc<AutodocsApi>,
    documents: RwLock<Option<Vec<Document>>>,
    file_base64: RwLock<Option<String>>,
    generation_response: RwLock<Option<Value>>,
    history: RwLock<Option<Vec<DocumentHistory>>>,
}

impl DocumentStore {
    pub fn new(api: Arc<AutodocsApi>) -> Self {
        Self {
            api,
            documents: RwLock::new(None),
            file_base64: RwLock::new(None),
            generation_response: RwLock::new(None),
            history: RwLock::new(None),
        }
    }

    // ---- snapshots ----

    /// The cached document list, in server order. `None` until the first
    /// successful fetch.
    pub async fn documents(&self) -> Option<Vec<Document>> {
        self.documents.read().await.clone()
    }

    /// The most recently previewed file payload (base64). One shared
    /// slot: previewing a second document discards the first.
    pub async fn file_base64(&self) -> Option<String> {
        self.file_base64.read().await.clone()
    }

    /// Raw response of the last generation or delete call.
    pub async fn generation_response(&self) -> Option<Value> {
        self.generation_response.read().await.clone()
    }

    /// The cached weekly generation histogram.
    pub async fn history(&self) -> Option<Vec<DocumentHistory>> {
        self.history.read().await.clone()
    }

    // ---- operations ----

    /// Fetch the document collection and replace the cached list.
    pub async fn fetch_documents(&self) -> Result<(), ApiError> {
        let documents: Vec<Document> = self.api.get_data("/documents").await?;
        tracing::debug!(count = documents.len(), "Fetched document list");
        *self.documents.write().await = Some(documents);
        Ok(())
    }

    /// Fetch one document's encoded file into the shared preview slot.
    pub async fn fetch_document_file(&self, ref_number: &str) -> Result<(), ApiError> {
        validate_ref_number(ref_number)?;
        let file: String = self
            .api
            .get_data(&format!("/documents/preview/{ref_number}"))
            .await?;
        *self.file_base64.write().await = Some(file);
        Ok(())
    }

    /// Submit a generation request. The cached list is not refreshed;
    /// callers re-fetch to observe the new document.
    pub async fn send_request(&self, request: &GenerationRequest) -> Result<(), ApiError> {
        request.validate()?;
        let response = self.api.post_json("/generate", request).await?;
        tracing::info!(ref_number = %request.ref_number, "Submitted generation request");
        *self.generation_response.write().await = Some(response);
        Ok(())
    }

    /// Delete a document by reference number. The cached list keeps the
    /// deleted entry until the next fetch.
    pub async fn delete_document(&self, ref_number: &str) -> Result<(), ApiError> {
        validate_ref_number(ref_number)?;
        let response = self.api.delete(&format!("/documents/{ref_number}")).await?;
        tracing::info!(ref_number, "Deleted document");
        *self.generation_response.write().await = Some(response);
        Ok(())
    }

    /// Fetch the weekly generation histogram and replace the cached copy.
    pub async fn fetch_history(&self) -> Result<(), ApiError> {
        let history: Vec<DocumentHistory> = self.api.get_data("/document-history").await?;
        *self.history.write().await = Some(history);
        Ok(())
    }
}
