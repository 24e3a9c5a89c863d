use super::message::UploadMessage;
use super::placeholder::{failure_marker, image_markup, placeholder, PlaceholderBlock};
use super::{UploadConfig, UploadError};
use crate::core::{DataTransferItem, DropEvent, FilePayload, PasteEvent};
use crate::kernel::services::ports::{
    AsyncExecutor, EditorSurface, FailurePolicy, TransportError, UploadResult, UploadTransport,
};
use crate::models::{AnchorId, SelectionRange, Transaction};
use slotmap::{new_key_type, SlotMap};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

new_key_type! { pub struct UploadId; }

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadStatus {
    Pending,
    Failed(TransportError),
}

/// One file between placeholder insertion and resolution. Resolved
/// uploads are dropped; failed ones stay until `clear_failed`.
#[derive(Debug, Clone)]
pub struct PendingUpload {
    name: String,
    mime: String,
    placeholder: String,
    anchor: Option<AnchorId>,
    status: UploadStatus,
}

impl PendingUpload {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn anchor(&self) -> Option<AnchorId> {
        self.anchor
    }

    pub fn status(&self) -> &UploadStatus {
        &self.status
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// No image files; the host keeps its default handling.
    Ignored,
    Started(Vec<UploadId>),
}

impl UploadOutcome {
    pub fn prevent_default(&self) -> bool {
        matches!(self, UploadOutcome::Started(_))
    }

    pub fn ids(&self) -> &[UploadId] {
        match self {
            UploadOutcome::Ignored => &[],
            UploadOutcome::Started(ids) => ids,
        }
    }
}

/// What applying an `UploadMessage` did to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Resolved,
    Failed,
    /// The placeholder was deleted before the upload finished.
    Discarded,
    Unknown,
}

pub struct UploadPipeline {
    config: UploadConfig,
    transport: Arc<dyn UploadTransport>,
    executor: Arc<dyn AsyncExecutor>,
    tx: UnboundedSender<UploadMessage>,
    uploads: SlotMap<UploadId, PendingUpload>,
}

impl UploadPipeline {
    /// The receiver carries task completions; the owner of the surface
    /// drains it and feeds each message to `apply_message`.
    pub fn new(
        config: UploadConfig,
        transport: Arc<dyn UploadTransport>,
        executor: Arc<dyn AsyncExecutor>,
    ) -> (Self, UnboundedReceiver<UploadMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let pipeline = Self {
            config,
            transport,
            executor,
            tx,
            uploads: SlotMap::with_key(),
        };
        (pipeline, rx)
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    /// Pasted images replace the current selection.
    pub fn handle_paste<S: EditorSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        event: &PasteEvent,
    ) -> Result<UploadOutcome, UploadError> {
        let files = image_files(&event.items);
        if files.is_empty() {
            return Ok(UploadOutcome::Ignored);
        }
        let range = surface.selection();
        self.start(surface, range, files)
    }

    /// Dropped images replace a non-empty selection, otherwise land at
    /// the drop point (or the cursor when the point misses the text).
    pub fn handle_drop<S: EditorSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        event: &DropEvent,
    ) -> Result<UploadOutcome, UploadError> {
        let files = image_files(&event.items);
        if files.is_empty() {
            return Ok(UploadOutcome::Ignored);
        }

        let selection = surface.selection();
        let range = if !selection.is_empty() {
            selection
        } else {
            match surface.pos_at_coords(event.point) {
                Some(pos) => SelectionRange::cursor(pos),
                None => {
                    tracing::debug!(point = ?event.point, "drop point outside text, using cursor");
                    SelectionRange::cursor(selection.to)
                }
            }
        };
        self.start(surface, range, files)
    }

    fn start<S: EditorSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        range: SelectionRange,
        files: Vec<&FilePayload>,
    ) -> Result<UploadOutcome, UploadError> {
        let block = PlaceholderBlock::build(files.iter().map(|f| f.name.as_str()));
        surface.apply(&Transaction::replace(range.from, range.to, block.text.as_str()))?;

        let mut ids = Vec::with_capacity(files.len());
        for (file, span) in files.into_iter().zip(&block.spans) {
            let anchor = surface.create_anchor(range.from + span.start..range.from + span.end)?;
            let id = self.uploads.insert(PendingUpload {
                name: file.name.clone(),
                mime: file.mime.clone(),
                placeholder: placeholder(&file.name),
                anchor: Some(anchor),
                status: UploadStatus::Pending,
            });
            self.spawn_upload(id, file.clone());
            ids.push(id);
        }

        tracing::info!(
            count = ids.len(),
            at = range.from,
            endpoint = %self.config.endpoint,
            "uploads started"
        );
        Ok(UploadOutcome::Started(ids))
    }

    fn spawn_upload(&self, id: UploadId, file: FilePayload) {
        let request = self.transport.upload(&self.config.endpoint, file);
        let timeout = self.config.timeout;
        let tx = self.tx.clone();
        self.executor.spawn(Box::pin(async move {
            let result = match timeout {
                Some(limit) => tokio::time::timeout(limit, request)
                    .await
                    .unwrap_or(Err(TransportError::Timeout)),
                None => request.await,
            };
            // receiver gone means the session ended
            let _ = tx.send(UploadMessage::Finished { id, result });
        }));
    }

    pub fn apply_message<S: EditorSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        message: UploadMessage,
    ) -> Result<Completion, UploadError> {
        match message {
            UploadMessage::Finished { id, result } => match result {
                Ok(uploaded) => self.resolve(surface, id, uploaded),
                Err(error) => self.fail(surface, id, error),
            },
        }
    }

    fn resolve<S: EditorSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        id: UploadId,
        uploaded: UploadResult,
    ) -> Result<Completion, UploadError> {
        let Some(upload) = self.uploads.remove(id) else {
            tracing::debug!(?id, "completion for unknown upload");
            return Ok(Completion::Unknown);
        };
        let Some(anchor) = upload.anchor else {
            return Ok(Completion::Discarded);
        };

        let Some(range) = surface.anchor_range(anchor) else {
            surface.release_anchor(anchor);
            tracing::info!(file = %upload.name, "placeholder removed before upload finished");
            return Ok(Completion::Discarded);
        };

        let markup = image_markup(&upload.name, &uploaded.saved);
        let applied = surface.apply(&Transaction::replace(range.start, range.end, markup));
        surface.release_anchor(anchor);
        applied?;

        tracing::info!(file = %upload.name, saved = %uploaded.saved, "upload resolved");
        Ok(Completion::Resolved)
    }

    fn fail<S: EditorSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        id: UploadId,
        error: TransportError,
    ) -> Result<Completion, UploadError> {
        let Some(upload) = self.uploads.get_mut(id) else {
            tracing::debug!(?id, "failure for unknown upload");
            return Ok(Completion::Unknown);
        };
        tracing::warn!(file = %upload.name, error = %error, "upload failed");
        upload.status = UploadStatus::Failed(error);

        if self.config.on_failure == FailurePolicy::Mark {
            if let Some(anchor) = upload.anchor.take() {
                let applied = match surface.anchor_range(anchor) {
                    Some(range) => surface.apply(&Transaction::replace(
                        range.start,
                        range.end,
                        failure_marker(&upload.name),
                    )),
                    None => Ok(()),
                };
                surface.release_anchor(anchor);
                applied?;
            }
        }
        Ok(Completion::Failed)
    }

    pub fn get(&self, id: UploadId) -> Option<&PendingUpload> {
        self.uploads.get(id)
    }

    pub fn uploads(&self) -> impl Iterator<Item = (UploadId, &PendingUpload)> {
        self.uploads.iter()
    }

    pub fn in_flight(&self) -> usize {
        self.uploads
            .values()
            .filter(|u| u.status == UploadStatus::Pending)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.uploads.len() - self.in_flight()
    }

    /// Forgets failed uploads and releases their anchors. Placeholders
    /// stay in the text.
    pub fn clear_failed<S: EditorSurface + ?Sized>(&mut self, surface: &mut S) -> usize {
        let failed: Vec<UploadId> = self
            .uploads
            .iter()
            .filter(|(_, u)| matches!(u.status, UploadStatus::Failed(_)))
            .map(|(id, _)| id)
            .collect();
        for id in &failed {
            if let Some(anchor) = self.uploads.remove(*id).and_then(|u| u.anchor) {
                surface.release_anchor(anchor);
            }
        }
        failed.len()
    }
}

/// Image files attached to a paste or drop, in list order.
pub fn image_files(items: &[DataTransferItem]) -> Vec<&FilePayload> {
    items
        .iter()
        .filter(|item| item.is_image_file())
        .filter_map(DataTransferItem::as_file)
        .collect()
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/upload/pipeline.rs"]
mod tests;
