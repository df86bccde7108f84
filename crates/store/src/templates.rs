//! Template store.

use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tokio::sync::RwLock;

use autodocs_client::{ApiError, AutodocsApi};
use autodocs_core::refnum::validate_ref_number;
use autodocs_core::template::{Template, TemplateUpload};

/// Cached template state plus the operations that fill it.
pub struct TemplateStore {
    api: Arc<AutodocsApi>,
    templates: RwLock<Option<Vec<Template>>>,
    file_base64: RwLock<Option<String>>,
    upload_response: RwLock<Option<Value>>,
}

impl TemplateStore {
    pub fn new(api: Arc<AutodocsApi>) -> Self {
        Self {
            api,
            templates: RwLock::new(None),
            file_base64: RwLock::new(None),
            upload_response: RwLock::new(None),
        }
    }

    // ---- snapshots ----

    /// The cached template list, in server order.
    pub async fn templates(&self) -> Option<Vec<Template>> {
        self.templates.read().await.clone()
    }

    /// The most recently previewed template file. One shared slot.
    pub async fn file_base64(&self) -> Option<String> {
        self.file_base64.read().await.clone()
    }

    /// Raw response of the last upload or delete call.
    pub async fn upload_response(&self) -> Option<Value> {
        self.upload_response.read().await.clone()
    }

    // ---- operations ----

    /// Fetch the template collection and replace the cached list.
    pub async fn fetch_templates(&self) -> Result<(), ApiError> {
        let templates: Vec<Template> = self.api.get_data("/templates").await?;
        tracing::debug!(count = templates.len(), "Fetched template list");
        *self.templates.write().await = Some(templates);
        Ok(())
    }

    /// Fetch one template's file content into the shared preview slot.
    pub async fn fetch_template_file(&self, ref_number: &str) -> Result<(), ApiError> {
        validate_ref_number(ref_number)?;
        let file: String = self
            .api
            .get_data(&format!("/templates/preview/{ref_number}"))
            .await?;
        *self.file_base64.write().await = Some(file);
        Ok(())
    }

    /// Upload a template as a multipart form (`template` file part plus
    /// `name` text part). The cached list is not refreshed.
    pub async fn upload_template(&self, upload: TemplateUpload) -> Result<(), ApiError> {
        upload.validate()?;
        let TemplateUpload {
            name,
            file_name,
            content,
        } = upload;

        let form = Form::new()
            .text("name", name)
            .part("template", Part::bytes(content).file_name(file_name));

        let response = self.api.post_multipart("/upload-template", form).await?;
        tracing::info!("Uploaded template");
        *self.upload_response.write().await = Some(response);
        Ok(())
    }

    /// Delete a template by reference number. The cached list keeps the
    /// deleted entry until the next fetch.
    pub async fn delete_template(&self, ref_number: &str) -> Result<(), ApiError> {
        validate_ref_number(ref_number)?;
        let response = self.api.delete(&format!("/templates/{ref_number}")).await?;
        tracing::info!(ref_number, "Deleted template");
        *self.upload_response.write().await = Some(response);
        Ok(())
    }
}
