//! bulledit - wiki editor keyboard navigation and image uploads
//!
//! Modules:
//! - core: events and actions delivered by the host
//! - models: rope text buffer, selection, anchors, transactions
//! - kernel: command dispatch, upload pipeline, services (ports + adapters)

pub mod core;
pub mod kernel;
pub mod models;
