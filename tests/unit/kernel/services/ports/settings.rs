use super::*;

#[test]
fn empty_document_uses_defaults() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.upload.edit_segment, DEFAULT_EDIT_SEGMENT);
    assert_eq!(settings.upload.upload_segment, DEFAULT_UPLOAD_SEGMENT);
    assert_eq!(settings.upload.on_failure, FailurePolicy::Keep);
}

#[test]
fn partial_upload_section_keeps_other_defaults() {
    let settings: Settings =
        serde_json::from_str(r#"{"upload":{"timeout_ms":1500,"on_failure":"mark"}}"#).unwrap();
    assert_eq!(settings.upload.timeout_ms, Some(1500));
    assert_eq!(settings.upload.on_failure, FailurePolicy::Mark);
    assert_eq!(settings.upload.edit_segment, DEFAULT_EDIT_SEGMENT);
}

#[test]
fn keybinding_rules_parse_with_optional_context() {
    let settings: Settings = serde_json::from_str(
        r#"{"keybindings":[{"key":"mod+j","command":"search"},{"key":"mod+w","command":"save","context":"edit"}]}"#,
    )
    .unwrap();
    assert_eq!(settings.keybindings.len(), 2);
    assert_eq!(settings.keybindings[0].context, None);
    assert_eq!(settings.keybindings[1].context.as_deref(), Some("edit"));
}

#[test]
fn unset_timeout_is_not_serialized() {
    let json = serde_json::to_string(&Settings::default()).unwrap();
    assert!(!json.contains("timeout_ms"));
    assert!(json.contains(r#""on_failure":"keep""#));
}
