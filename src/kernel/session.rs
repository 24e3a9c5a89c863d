//! One editing session: the surface, its key dispatcher and its upload
//! pipeline, owned by a single thread.

use crate::core::InputEvent;
use crate::kernel::dispatch::CommandDispatcher;
use crate::kernel::services::adapters::UploadRuntime;
use crate::kernel::services::ports::EditorSurface;
use crate::kernel::upload::{Completion, UploadError, UploadMessage, UploadPipeline};
use std::time::Duration;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::sync::mpsc::UnboundedReceiver;

pub struct Session<S: EditorSurface> {
    surface: S,
    dispatcher: CommandDispatcher,
    pipeline: UploadPipeline,
    rx: UnboundedReceiver<UploadMessage>,
}

impl<S: EditorSurface> Session<S> {
    pub fn new(
        surface: S,
        dispatcher: CommandDispatcher,
        pipeline: UploadPipeline,
        rx: UnboundedReceiver<UploadMessage>,
    ) -> Self {
        Self {
            surface,
            dispatcher,
            pipeline,
            rx,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn pipeline(&self) -> &UploadPipeline {
        &self.pipeline
    }

    pub fn pipeline_mut(&mut self) -> &mut UploadPipeline {
        &mut self.pipeline
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Returns whether the host's default handling must be suppressed.
    pub fn handle(&mut self, event: &InputEvent) -> Result<bool, UploadError> {
        let prevent_default = match event {
            InputEvent::Key(key) => self.dispatcher.handle_key(key).prevent_default(),
            InputEvent::Paste(paste) => self
                .pipeline
                .handle_paste(&mut self.surface, paste)?
                .prevent_default(),
            InputEvent::Drop(drop) => self
                .pipeline
                .handle_drop(&mut self.surface, drop)?
                .prevent_default(),
        };
        Ok(prevent_default)
    }

    /// Applies every completion already queued. Never blocks.
    pub fn poll(&mut self) -> Result<Vec<Completion>, UploadError> {
        let mut applied = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(message) => {
                    applied.push(self.pipeline.apply_message(&mut self.surface, message)?);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        Ok(applied)
    }

    /// Blocks until no upload is in flight. `limit` bounds each wait for
    /// the next completion; `None` waits indefinitely.
    pub fn wait_idle(
        &mut self,
        runtime: &UploadRuntime,
        limit: Option<Duration>,
    ) -> Result<Vec<Completion>, UploadError> {
        let mut applied = self.poll()?;
        while self.pipeline.in_flight() > 0 {
            let rx = &mut self.rx;
            let next = runtime.block_on(async move {
                match limit {
                    Some(limit) => tokio::time::timeout(limit, rx.recv()).await.ok().flatten(),
                    None => rx.recv().await,
                }
            });
            let Some(message) = next else {
                tracing::warn!(
                    in_flight = self.pipeline.in_flight(),
                    "stopped waiting for uploads"
                );
                break;
            };
            applied.push(self.pipeline.apply_message(&mut self.surface, message)?);
        }
        Ok(applied)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/session.rs"]
mod tests;
