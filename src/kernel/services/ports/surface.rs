use crate::core::DropPoint;
use crate::models::{AnchorId, EditError, SelectionRange, TextBuffer, Transaction};
use std::ops::Range;

/// The editor that owns the text. Everything the upload pipeline writes
/// goes through `apply`, one transaction at a time.
pub trait EditorSurface {
    fn text(&self) -> String;

    fn slice(&self, range: Range<usize>) -> Option<String>;

    fn selection(&self) -> SelectionRange;

    fn set_selection(&mut self, selection: SelectionRange);

    /// Buffer position under a drop point, if it lands on the text.
    fn pos_at_coords(&self, point: DropPoint) -> Option<usize>;

    fn apply(&mut self, tx: &Transaction) -> Result<(), EditError>;

    fn create_anchor(&mut self, range: Range<usize>) -> Result<AnchorId, EditError>;

    /// `None` once the anchored text has been deleted.
    fn anchor_range(&self, id: AnchorId) -> Option<Range<usize>>;

    fn release_anchor(&mut self, id: AnchorId);
}

impl EditorSurface for TextBuffer {
    fn text(&self) -> String {
        TextBuffer::text(self)
    }

    fn slice(&self, range: Range<usize>) -> Option<String> {
        TextBuffer::slice(self, range)
    }

    fn selection(&self) -> SelectionRange {
        TextBuffer::selection(self)
    }

    fn set_selection(&mut self, selection: SelectionRange) {
        TextBuffer::set_selection(self, selection)
    }

    fn pos_at_coords(&self, point: DropPoint) -> Option<usize> {
        let row = usize::try_from(point.y).ok()?;
        let col = usize::try_from(point.x).ok()?;
        self.pos_at_cell(row, col)
    }

    fn apply(&mut self, tx: &Transaction) -> Result<(), EditError> {
        TextBuffer::apply(self, tx)
    }

    fn create_anchor(&mut self, range: Range<usize>) -> Result<AnchorId, EditError> {
        TextBuffer::create_anchor(self, range)
    }

    fn anchor_range(&self, id: AnchorId) -> Option<Range<usize>> {
        TextBuffer::anchor_range(self, id)
    }

    fn release_anchor(&mut self, id: AnchorId) {
        TextBuffer::release_anchor(self, id)
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/surface.rs"]
mod tests;
