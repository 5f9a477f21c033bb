use crate::upload::error::UploadError;
use crate::upload::types::{RawResponse, SelectedFile, UploadResponse, UploadResult};
use crate::utils::config::UploaderConfig;
use crate::utils::diagnostics::Diagnostics;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::sync::Arc;

/// Multipart field the server reads the file from.
pub const FILE_FIELD: &str = "file";

/// A single-part multipart POST.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub url: String,
    pub field: &'static str,
    pub file: SelectedFile,
}

#[async_trait]
pub trait UploadTransport: Send + Sync {
    /// Resolves once the full response body has been read. Errors only when
    /// no response was received.
    async fn send(&self, request: UploadRequest) -> Result<RawResponse, UploadError>;
}

#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UploadTransport for ReqwestTransport {
    async fn send(&self, request: UploadRequest) -> Result<RawResponse, UploadError> {
        let UploadRequest { url, field, file } = request;

        let part = Part::bytes(file.bytes)
            .file_name(file.name)
            .mime_str(&file.mime)
            .map_err(|e| UploadError::Transport(e.to_string()))?;
        let form = Form::new().part(field, part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| UploadError::Transport(format!("Failed to read response body: {}", e)))?;

        Ok(RawResponse { status, body })
    }
}

/// Runs one upload attempt against the configured endpoint.
#[derive(Clone)]
pub struct CsvUploader {
    config: UploaderConfig,
    transport: Arc<dyn UploadTransport>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl CsvUploader {
    pub fn new(
        config: UploaderConfig,
        transport: Arc<dyn UploadTransport>,
        diagnostics: Arc<dyn Diagnostics>,
    ) -> Self {
        Self {
            config,
            transport,
            diagnostics,
        }
    }

    pub fn diagnostics(&self) -> &Arc<dyn Diagnostics> {
        &self.diagnostics
    }

    pub async fn upload(&self, file: SelectedFile) -> Result<UploadResult, UploadError> {
        self.diagnostics.info(&format!("Uploading file: {}", file.name));

        let request = UploadRequest {
            url: self.config.upload_url(),
            field: FILE_FIELD,
            file,
        };

        let response = self.transport.send(request).await?;
        self.diagnostics
            .debug(&format!("Response status: {}", response.status));

        if !response.is_success() {
            self.diagnostics
                .error(&format!("Upload failed: {}", response.body));
            return Err(UploadError::rejected(&response.body));
        }

        let parsed: UploadResponse = serde_json::from_str(&response.body)
            .map_err(|e| UploadError::MalformedResponse(e.to_string()))?;

        self.diagnostics.info(&format!(
            "Server response: {} (file: {}, total: {}, successful: {}, duplicates: {}, failed: {})",
            parsed.message,
            parsed.data.filename,
            parsed.data.total_rows,
            parsed.data.successful_rows,
            parsed.data.duplicate_rows,
            parsed.data.failed_rows
        ));

        Ok(parsed.data)
    }
}

/// Replays canned results in order and records every request it receives.
#[cfg(test)]
#[derive(Default)]
pub struct ScriptedTransport {
    replies: std::sync::Mutex<std::collections::VecDeque<Result<RawResponse, UploadError>>>,
    requests: std::sync::Mutex<Vec<UploadRequest>>,
}

#[cfg(test)]
impl ScriptedTransport {
    pub fn new(replies: Vec<Result<RawResponse, UploadError>>) -> Self {
        Self {
            replies: std::sync::Mutex::new(replies.into()),
            requests: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn reply(status: u16, body: &str) -> Result<RawResponse, UploadError> {
        Ok(RawResponse {
            status,
            body: body.to_string(),
        })
    }

    pub fn requests(&self) -> Vec<UploadRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl UploadTransport for ScriptedTransport {
    async fn send(&self, request: UploadRequest) -> Result<RawResponse, UploadError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(UploadError::Transport("no scripted reply".to_string())))
    }
}
