use serde::{Deserialize, Serialize};

pub const DEFAULT_EDIT_SEGMENT: &str = "/_bull/edit/";
pub const DEFAULT_UPLOAD_SEGMENT: &str = "/_bull/upload/";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub upload: UploadSettings,
    #[serde(default)]
    pub keybindings: Vec<KeybindingRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadSettings {
    /// Route segment of the editing page, replaced to find the endpoint.
    pub edit_segment: String,
    pub upload_segment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
    pub on_failure: FailurePolicy,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            edit_segment: DEFAULT_EDIT_SEGMENT.to_string(),
            upload_segment: DEFAULT_UPLOAD_SEGMENT.to_string(),
            timeout_ms: None,
            on_failure: FailurePolicy::Keep,
        }
    }
}

/// What happens to a placeholder whose upload failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Leave `[Uploading name]()` in place.
    #[default]
    Keep,
    /// Replace it with `[Upload failed name]()`.
    Mark,
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
