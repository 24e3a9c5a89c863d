//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod dirs;
pub mod document;
pub mod http;
pub mod keybinding;
pub mod runtime;
pub mod settings;

pub use dirs::{ensure_log_dir, get_log_dir};
pub use document::{read_document, write_document};
pub use http::HttpTransport;
pub use keybinding::{KeybindingContext, KeybindingService};
pub use runtime::UploadRuntime;
pub use settings::{
    ensure_settings_file, get_settings_path, load_settings, load_settings_from, parse_keybinding,
    ConfigError,
};
