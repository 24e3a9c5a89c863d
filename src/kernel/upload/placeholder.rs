//! Placeholder markup.
//!
//! `[Uploading cat.png]()` while pending, `![cat.png](saved-id)` once done.

use std::ops::Range;

pub fn placeholder(name: &str) -> String {
    format!("[Uploading {name}]()")
}

pub fn image_markup(name: &str, saved: &str) -> String {
    format!("![{name}]({saved})")
}

pub fn failure_marker(name: &str) -> String {
    format!("[Upload failed {name}]()")
}

/// The text inserted for one paste/drop, with the char span of every
/// placeholder relative to the start of the block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderBlock {
    pub text: String,
    pub spans: Vec<Range<usize>>,
}

impl PlaceholderBlock {
    /// One placeholder per line, newline-terminated.
    pub fn build<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut text = String::new();
        let mut spans = Vec::new();
        let mut offset = 0usize;
        for name in names {
            let token = placeholder(name);
            let len = token.chars().count();
            spans.push(offset..offset + len);
            text.push_str(&token);
            text.push('\n');
            offset += len + 1;
        }
        Self { text, spans }
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/upload/placeholder.rs"]
mod tests;
