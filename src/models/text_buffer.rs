//! Text buffer model
//!
//! Responsibilities:
//! - text storage (Rope)
//! - main selection
//! - anchors that follow edits
//! - (row, col) ↔ char offset mapping

use super::anchor::{Anchor, AnchorId, AnchorSet};
use super::transaction::{EditError, SelectionRange, Transaction};
use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use std::io::{self, Write};
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// Borrow the slice as `&str` when it is contiguous, copy otherwise.
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

#[derive(Debug, Default)]
pub struct TextBuffer {
    rope: Rope,
    selection: SelectionRange,
    anchors: AnchorSet,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selection: SelectionRange::default(),
            anchors: AnchorSet::new(),
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Streams the buffer into `writer` chunk by chunk.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for chunk in self.rope.chunks() {
            writer.write_all(chunk.as_bytes())?;
        }
        Ok(())
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn line(&self, row: usize) -> Option<String> {
        if row < self.rope.len_lines() {
            Some(self.rope.line(row).to_string())
        } else {
            None
        }
    }

    pub fn slice(&self, range: Range<usize>) -> Option<String> {
        if range.start > range.end || range.end > self.rope.len_chars() {
            return None;
        }
        Some(slice_to_cow(self.rope.slice(range)).into_owned())
    }

    pub fn selection(&self) -> SelectionRange {
        self.selection
    }

    /// Sets the selection, clamped to the buffer.
    pub fn set_selection(&mut self, selection: SelectionRange) {
        let len = self.rope.len_chars();
        self.selection = SelectionRange::new(selection.from.min(len), selection.to.min(len));
    }

    pub fn set_cursor(&mut self, pos: usize) {
        self.set_selection(SelectionRange::cursor(pos));
    }

    pub fn pos_to_char(&self, pos: (usize, usize)) -> usize {
        self.rope.line_to_char(pos.0) + self.grapheme_to_char_index(pos.0, pos.1)
    }

    pub fn grapheme_to_char_index(&self, row: usize, grapheme_index: usize) -> usize {
        let slice = self.rope.line(row);
        let line = slice_to_cow(slice);
        line.graphemes(true)
            .take(grapheme_index)
            .map(|g| g.chars().count())
            .sum()
    }

    pub fn line_grapheme_len(&self, row: usize) -> usize {
        let slice = self.rope.line(row);
        let line = slice_to_cow(slice);
        let without_newline = line.trim_end_matches(['\n', '\r']);
        without_newline.graphemes(true).count()
    }

    /// Char offset of a (row, grapheme column) cell. Columns past the end
    /// of the line clamp to the line end; rows past the last line have no
    /// position.
    pub fn pos_at_cell(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rope.len_lines() {
            return None;
        }
        let col = col.min(self.line_grapheme_len(row));
        Some(self.pos_to_char((row, col)))
    }

    /// Applies every change of `tx` or none of them.
    pub fn apply(&mut self, tx: &Transaction) -> Result<(), EditError> {
        tx.validate(self.rope.len_chars())?;

        // back to front, so earlier offsets stay valid
        for change in tx.changes().iter().rev() {
            if change.from < change.to {
                self.rope.remove(change.from..change.to);
            }
            if !change.insert.is_empty() {
                self.rope.insert(change.from, &change.insert);
            }

            let inserted = change.inserted_chars();
            self.anchors.map_change(change.from, change.to, inserted);
            self.selection = SelectionRange::new(
                map_pos(self.selection.from, change.from, change.to, inserted),
                map_pos(self.selection.to, change.from, change.to, inserted),
            );
        }

        tracing::trace!(
            changes = tx.changes().len(),
            len = self.rope.len_chars(),
            "transaction applied"
        );
        Ok(())
    }

    pub fn create_anchor(&mut self, range: Range<usize>) -> Result<AnchorId, EditError> {
        let len = self.rope.len_chars();
        if range.start > range.end || range.end > len {
            return Err(EditError::OutOfBounds {
                from: range.start,
                to: range.end,
                len,
            });
        }
        Ok(self.anchors.insert(range))
    }

    pub fn anchor(&self, id: AnchorId) -> Option<&Anchor> {
        self.anchors.get(id)
    }

    pub fn anchor_range(&self, id: AnchorId) -> Option<Range<usize>> {
        self.anchors.range(id)
    }

    pub fn release_anchor(&mut self, id: AnchorId) {
        self.anchors.remove(id);
    }

    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }
}

/// Positions inside a replaced range end up after the inserted text.
fn map_pos(pos: usize, from: usize, to: usize, inserted: usize) -> usize {
    if pos < from {
        pos
    } else if pos > to {
        pos - (to - from) + inserted
    } else {
        from + inserted
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;
