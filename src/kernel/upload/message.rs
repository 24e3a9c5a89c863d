use super::pipeline::UploadId;
use crate::kernel::services::ports::{TransportError, UploadResult};

/// Sent by an upload task when its request settles.
#[derive(Debug)]
pub enum UploadMessage {
    Finished {
        id: UploadId,
        result: Result<UploadResult, TransportError>,
    },
}

impl UploadMessage {
    pub fn id(&self) -> UploadId {
        match self {
            UploadMessage::Finished { id, .. } => *id,
        }
    }
}
