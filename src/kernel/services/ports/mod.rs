//! Service ports: traits + data contracts.

pub mod runtime;
pub mod settings;
pub mod surface;
pub mod transport;

pub use runtime::{AsyncExecutor, BoxFuture};
pub use settings::{FailurePolicy, KeybindingRule, Settings, UploadSettings};
pub use surface::EditorSurface;
pub use transport::{TransportError, UploadFuture, UploadResult, UploadTransport};
