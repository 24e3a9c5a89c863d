//! Multipart upload over HTTP.

use crate::core::FilePayload;
use crate::kernel::services::ports::{TransportError, UploadFuture, UploadResult, UploadTransport};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};

pub const FILE_FIELD: &str = "file";

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl UploadTransport for HttpTransport {
    fn upload(&self, endpoint: &Url, file: FilePayload) -> UploadFuture {
        let client = self.client.clone();
        let endpoint = endpoint.clone();
        Box::pin(async move {
            let FilePayload { name, mime, bytes } = file;
            let size = bytes.len();
            let part = Part::bytes(bytes)
                .file_name(name.clone())
                .mime_str(&mime)
                .map_err(|e| TransportError::Request(e.to_string()))?;
            let form = Form::new().part(FILE_FIELD, part);

            tracing::debug!(%endpoint, file = %name, size, "upload request");
            let response = client
                .post(endpoint)
                .multipart(form)
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(TransportError::Status(status.as_u16()));
            }

            let body = response
                .bytes()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            UploadResult::from_json(&body)
        })
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/http.rs"]
mod tests;
