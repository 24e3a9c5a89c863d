//! Data models: buffer, selection, anchors, transactions.

pub mod anchor;
pub mod text_buffer;
pub mod transaction;

pub use anchor::{Anchor, AnchorId, AnchorSet};
pub use text_buffer::{slice_to_cow, TextBuffer};
pub use transaction::{Change, EditError, SelectionRange, Transaction};
