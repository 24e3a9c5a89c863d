//! Core types shared by the dispatcher and the upload pipeline:
//! - Event: key, paste and drop events as delivered by the host
//! - Action: the targets a key chord can trigger

pub mod command;
pub mod event;

pub use command::Action;
pub use event::{
    DataTransferItem, DropEvent, DropPoint, FilePayload, InputEvent, ItemKind, Key, KeyEvent,
    PasteEvent,
};
