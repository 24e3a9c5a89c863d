//! Anchors: char ranges that follow edits made elsewhere in the buffer.

use slotmap::{new_key_type, SlotMap};
use std::ops::Range;

new_key_type! { pub struct AnchorId; }

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    start: usize,
    end: usize,
    edited: bool,
    detached: bool,
}

impl Anchor {
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
            edited: false,
            detached: false,
        }
    }

    pub fn range(&self) -> Option<Range<usize>> {
        if self.detached {
            None
        } else {
            Some(self.start..self.end)
        }
    }

    /// Text inside the anchor was changed but some of it survived.
    pub fn is_edited(&self) -> bool {
        self.edited
    }

    /// The anchored text was removed entirely.
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Maps the anchor through one change of `from..to` replaced by
    /// `inserted` chars.
    pub fn map(&mut self, from: usize, to: usize, inserted: usize) {
        if self.detached || from >= self.end {
            return;
        }

        let removed = to - from;
        if to <= self.start {
            // insertion exactly at `start` lands before the anchor
            self.start = self.start - removed + inserted;
            self.end = self.end - removed + inserted;
            return;
        }

        if from <= self.start && to >= self.end {
            self.detached = true;
            return;
        }

        self.edited = true;
        if from <= self.start {
            self.start = from + inserted;
            self.end = self.end - removed + inserted;
        } else if to >= self.end {
            self.end = from;
        } else {
            self.end = self.end - removed + inserted;
        }

        if self.start >= self.end {
            self.detached = true;
        }
    }
}

#[derive(Debug, Default)]
pub struct AnchorSet {
    anchors: SlotMap<AnchorId, Anchor>,
}

impl AnchorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, range: Range<usize>) -> AnchorId {
        self.anchors.insert(Anchor::new(range))
    }

    pub fn get(&self, id: AnchorId) -> Option<&Anchor> {
        self.anchors.get(id)
    }

    pub fn range(&self, id: AnchorId) -> Option<Range<usize>> {
        self.anchors.get(id).and_then(Anchor::range)
    }

    pub fn remove(&mut self, id: AnchorId) -> Option<Anchor> {
        self.anchors.remove(id)
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn map_change(&mut self, from: usize, to: usize, inserted: usize) {
        for (_, anchor) in self.anchors.iter_mut() {
            anchor.map(from, to, inserted);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/anchor.rs"]
mod tests;
