//! Client for the OCR/summarization endpoint.
//!
//! One call is one `multipart/form-data` POST with the document under the
//! `file` field. No timeout and no retry: the request runs until the server
//! answers or the connection fails.

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use std::time::Instant;

use super::document::SelectedFile;
use super::error::UploadError;

/// Multipart field the endpoint reads the document from.
const FILE_FIELD: &str = "file";

pub struct SummarizeClient {
    client: Client,
    endpoint: String,
}

impl SummarizeClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, UploadError> {
        let client = Client::builder().build().map_err(UploadError::Client)?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Upload `file` and return the summary text verbatim.
    ///
    /// Non-2xx responses fail without looking at the body.
    pub async fn summarize(&self, file: &SelectedFile) -> Result<String, UploadError> {
        let bytes = file.read().await?;
        let size = bytes.len();

        let part = Part::bytes(bytes)
            .file_name(file.file_name().to_string())
            .mime_str(file.content_type())
            .map_err(UploadError::Form)?;
        let form = Form::new().part(FILE_FIELD, part);

        tracing::debug!(
            url = %self.endpoint,
            file = %file.file_name(),
            content_type = file.content_type(),
            bytes = size,
            "Sending document"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(UploadError::Transport)?;

        let status = response.status();
        tracing::debug!(
            status = %status,
            latency_ms = start.elapsed().as_millis() as u64,
            "Endpoint responded"
        );

        if !status.is_success() {
            return Err(UploadError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(UploadError::Transport)?;
        decode_summary(&body)
    }
}

/// Success body. Only `summary` matters; `error` is logged when the server
/// reports a failure with HTTP 200.
#[derive(Debug, Deserialize)]
struct SummaryResponse {
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

fn decode_summary(body: &[u8]) -> Result<String, UploadError> {
    let response: SummaryResponse = serde_json::from_slice(body)?;
    match response.summary {
        Some(summary) => Ok(summary),
        None => Err(UploadError::MissingSummary {
            detail: response.error.map(|value| match value {
                serde_json::Value::String(text) => text,
                other => other.to_string(),
            }),
        }),
    }
}
