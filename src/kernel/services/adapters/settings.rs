use crate::core::event::Key;
use crate::kernel::services::ports::settings::Settings;
use std::path::{Path, PathBuf};
use thiserror::Error;

const SETTINGS_DIR: &str = ".bulledit";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn get_settings_path() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

pub fn ensure_settings_file() -> std::io::Result<PathBuf> {
    let path = get_settings_path().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine settings directory",
        )
    })?;
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content =
            serde_json::to_string_pretty(&Settings::default()).unwrap_or_else(|_| "{}".to_string());
        std::fs::write(&path, content)?;
    }
    Ok(path)
}

pub fn load_settings_from(path: &Path) -> Result<Settings, ConfigError> {
    let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Settings from the default location; defaults when the file is missing
/// or broken.
pub fn load_settings() -> Settings {
    let Some(path) = get_settings_path() else {
        return Settings::default();
    };
    if !path.exists() {
        return Settings::default();
    }
    match load_settings_from(&path) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(error = %e, "settings ignored, using defaults");
            Settings::default()
        }
    }
}

/// Parses `"mod+e"`, `"ctrl+e"`, `"cmd+e"`. Control and command are the
/// same modifier here.
pub fn parse_keybinding(value: &str) -> Option<Key> {
    let mut modifier = false;
    let mut key_part: Option<&str> = None;
    for part in value.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match part.to_ascii_lowercase().as_str() {
            "mod" | "ctrl" | "control" | "super" | "meta" | "cmd" | "command" => modifier = true,
            _ => {
                if key_part.is_some() {
                    return None;
                }
                key_part = Some(part);
            }
        }
    }

    let mut chars = key_part?.chars();
    let code = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Some(Key::new(code, modifier))
}

fn get_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".cache"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            return Some(PathBuf::from(local));
        }
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
