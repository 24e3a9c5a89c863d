use super::*;
use crate::kernel::services::ports::settings::{FailurePolicy, DEFAULT_EDIT_SEGMENT};
use tempfile::tempdir;

#[test]
fn parse_keybinding_accepts_modifier_aliases() {
    assert_eq!(parse_keybinding("mod+e"), Some(Key::modifier('e')));
    assert_eq!(parse_keybinding("Ctrl+k"), Some(Key::modifier('k')));
    assert_eq!(parse_keybinding("cmd + s"), Some(Key::modifier('s')));
    assert_eq!(parse_keybinding("j"), Some(Key::simple('j')));
}

#[test]
fn parse_keybinding_rejects_named_and_multiple_keys() {
    assert_eq!(parse_keybinding("ctrl+enter"), None);
    assert_eq!(parse_keybinding("ctrl+a+b"), None);
    assert_eq!(parse_keybinding("ctrl"), None);
    assert_eq!(parse_keybinding(""), None);
}

#[test]
fn load_settings_from_fills_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{
            "upload": { "timeout_ms": 1500, "on_failure": "mark" },
            "keybindings": [ { "key": "mod+j", "command": "search" } ]
        }"#,
    )
    .unwrap();

    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.upload.timeout_ms, Some(1500));
    assert_eq!(settings.upload.on_failure, FailurePolicy::Mark);
    assert_eq!(settings.upload.edit_segment, DEFAULT_EDIT_SEGMENT);
    assert_eq!(settings.keybindings.len(), 1);
    assert_eq!(settings.keybindings[0].context, None);
}

#[test]
fn load_settings_from_reports_parse_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = load_settings_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn load_settings_from_reports_missing_file() {
    let dir = tempdir().unwrap();
    let err = load_settings_from(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn default_settings_serialize_without_timeout() {
    let json = serde_json::to_string(&Settings::default()).unwrap();
    assert!(json.contains("\"on_failure\":\"keep\""));
    assert!(!json.contains("timeout_ms"));
}
