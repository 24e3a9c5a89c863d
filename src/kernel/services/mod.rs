//! Services layer (ports + adapters).
//!
//! - `ports`: contracts the kernel depends on (surface, transport, executor, settings).
//! - `adapters`: OS/runtime specific implementations (HTTP, tokio, settings files).

pub mod adapters;
pub mod ports;
