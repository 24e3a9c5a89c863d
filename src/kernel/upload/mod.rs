//! Image upload pipeline: placeholders in, uploads out, markup back in.

pub mod endpoint;
pub mod message;
pub mod pipeline;
pub mod placeholder;

pub use endpoint::upload_endpoint;
pub use message::UploadMessage;
pub use pipeline::{
    image_files, Completion, PendingUpload, UploadId, UploadOutcome, UploadPipeline, UploadStatus,
};
pub use placeholder::{failure_marker, image_markup, placeholder, PlaceholderBlock};

use crate::kernel::services::ports::{FailurePolicy, UploadSettings};
use crate::models::EditError;
use reqwest::Url;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("page {page} has no {segment} route to derive the upload endpoint from")]
    Endpoint { page: String, segment: String },
    #[error("invalid upload url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error(transparent)]
    Edit(#[from] EditError),
}

#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub endpoint: Url,
    /// `None` waits on the transport forever.
    pub timeout: Option<Duration>,
    pub on_failure: FailurePolicy,
}

impl UploadConfig {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            timeout: None,
            on_failure: FailurePolicy::Keep,
        }
    }

    pub fn for_page(page_url: &str, settings: &UploadSettings) -> Result<Self, UploadError> {
        let endpoint =
            upload_endpoint(page_url, &settings.edit_segment, &settings.upload_segment)?;
        Ok(Self {
            endpoint,
            timeout: settings.timeout_ms.map(Duration::from_millis),
            on_failure: settings.on_failure,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.on_failure = policy;
        self
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/upload/config.rs"]
mod tests;
