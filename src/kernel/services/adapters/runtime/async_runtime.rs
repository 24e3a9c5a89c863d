use crate::kernel::services::ports::{AsyncExecutor, BoxFuture};
use std::future::Future;
use std::io;

/// Tokio runtime the upload tasks run on.
pub struct UploadRuntime {
    runtime: tokio::runtime::Runtime,
}

impl UploadRuntime {
    pub fn new() -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self { runtime })
    }

    pub fn tokio_handle(&self) -> tokio::runtime::Handle {
        self.runtime.handle().clone()
    }

    /// Drives `future` to completion on the calling thread. Must not be
    /// called from inside the runtime.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}

impl AsyncExecutor for UploadRuntime {
    fn spawn(&self, task: BoxFuture) {
        self.runtime.spawn(task);
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime/async_runtime.rs"]
mod tests;
