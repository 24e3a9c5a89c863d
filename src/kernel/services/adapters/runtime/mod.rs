pub mod async_runtime;

pub use async_runtime::UploadRuntime;
