//! Headless editor core: key dispatch, uploads, and the session tying them
//! to one surface.

pub mod dispatch;
pub mod services;
pub mod session;
pub mod upload;

pub use dispatch::{ActionTarget, CommandDispatcher, KeyDispatch, NavTargets};
pub use session::Session;
pub use upload::{
    Completion, UploadConfig, UploadError, UploadId, UploadMessage, UploadOutcome, UploadPipeline,
};
