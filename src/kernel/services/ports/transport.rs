use crate::core::FilePayload;
use reqwest::Url;
use serde::Deserialize;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

pub type UploadFuture =
    Pin<Box<dyn Future<Output = Result<UploadResult, TransportError>> + Send + 'static>>;

/// Sends one file to the upload endpoint.
pub trait UploadTransport: Send + Sync {
    fn upload(&self, endpoint: &Url, file: FilePayload) -> UploadFuture;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("invalid request: {0}")]
    Request(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("upload rejected with status {0}")]
    Status(u16),
    #[error("malformed upload response: {0}")]
    Decode(String),
    #[error("upload timed out")]
    Timeout,
}

/// Response body of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    /// Identifier the server stored the file under.
    pub saved: String,
}

/// Wire shape: the wiki server reports `savedPath`, clients expect
/// `savedFilename`; either may appear, or both.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    saved_filename: Option<String>,
    saved_path: Option<String>,
}

impl UploadResult {
    pub fn new(saved: impl Into<String>) -> Self {
        Self {
            saved: saved.into(),
        }
    }

    pub fn from_json(body: &[u8]) -> Result<Self, TransportError> {
        let response: UploadResponse =
            serde_json::from_slice(body).map_err(|e| TransportError::Decode(e.to_string()))?;
        response
            .saved_filename
            .or(response.saved_path)
            .map(|saved| Self { saved })
            .ok_or_else(|| {
                TransportError::Decode("missing field `savedFilename` or `savedPath`".to_string())
            })
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/transport.rs"]
mod tests;
