// src/core/service_client.rs
//! Upload transport - sends the selected document to the analysis service as multipart form data

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, COOKIE};
use reqwest::multipart::{Form, Part};
use std::path::PathBuf;
use tracing::{info, trace};

use crate::config::ClientConfig;
use crate::core::FsOps;
use crate::types::UploadResponse;

/// Everything one upload needs
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest {
    pub file_path: PathBuf,
    pub file_name: String,
    pub role: String,
}

/// The seam between the orchestrator and the network. The returned response is
/// whatever the server said, success or not; only transport problems are errors.
#[async_trait]
pub trait UploadTransport: Send + Sync {
    async fn upload(&self, request: &UploadRequest) -> Result<UploadResponse>;
}

pub struct HttpUploadClient {
    client: reqwest::Client,
    upload_url: String,
    file_field: String,
    role_field: String,
    session_cookie: Option<String>,
}

impl HttpUploadClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            upload_url: config.upload_url(),
            file_field: config.file_field.clone(),
            role_field: config.role_field.clone(),
            session_cookie: config.session_cookie.clone(),
        })
    }
}

#[async_trait]
impl UploadTransport for HttpUploadClient {
    async fn upload(&self, request: &UploadRequest) -> Result<UploadResponse> {
        let file_content = FsOps::read_bytes(&request.file_path).await?;
        let content_type = content_type_for(&request.file_name);

        let form = Form::new()
            .part(
                self.file_field.clone(),
                Part::bytes(file_content)
                    .file_name(request.file_name.clone())
                    .mime_str(content_type)
                    .context("Failed to create multipart")?,
            )
            .text(self.role_field.clone(), request.role.clone());

        info!(
            "Uploading {} ({}) to {}",
            request.file_name, content_type, self.upload_url
        );

        let mut builder = self.client.post(&self.upload_url).multipart(form);
        if let Some(cookie) = &self.session_cookie {
            builder = builder.header(COOKIE, cookie);
        }

        let response = builder.send().await.context("HTTP request failed")?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let url = response.url().to_string();
        trace!("Response status: {} ({:?}) from {}", status, content_type, url);

        let body = response
            .text()
            .await
            .context("Failed to read response text")?;

        Ok(UploadResponse {
            status,
            content_type,
            url,
            body,
        })
    }
}

/// MIME type for the file part; the service decides what it accepts
pub fn content_type_for(file_name: &str) -> &'static str {
    match FsOps::get_extension(std::path::Path::new(file_name)).as_deref() {
        Some("pdf") => "application/pdf",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        _ => "application/octet-stream",
    }
}
