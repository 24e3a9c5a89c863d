//! Buffer changes applied as one atomic unit.
//!
//! Offsets are char offsets into the document *before* the transaction.
//! Changes must be sorted and must not overlap.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("range {from}..{to} is out of bounds (len {len})")]
    OutOfBounds { from: usize, to: usize, len: usize },
    #[error("change {from}..{to} is reversed")]
    Reversed { from: usize, to: usize },
    #[error("change at {from} overlaps the previous change ending at {prev_end}")]
    Overlapping { from: usize, prev_end: usize },
}

/// Main selection, normalized so that `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionRange {
    pub from: usize,
    pub to: usize,
}

impl SelectionRange {
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            from: a.min(b),
            to: a.max(b),
        }
    }

    pub fn cursor(pos: usize) -> Self {
        Self { from: pos, to: pos }
    }

    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }

    pub fn len(&self) -> usize {
        self.to - self.from
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub from: usize,
    pub to: usize,
    pub insert: String,
}

impl Change {
    pub fn new(from: usize, to: usize, insert: impl Into<String>) -> Self {
        Self {
            from,
            to,
            insert: insert.into(),
        }
    }

    pub fn inserted_chars(&self) -> usize {
        self.insert.chars().count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transaction {
    changes: Vec<Change>,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single replacement of `from..to` with `insert`.
    pub fn replace(from: usize, to: usize, insert: impl Into<String>) -> Self {
        Self {
            changes: vec![Change::new(from, to, insert)],
        }
    }

    pub fn with_change(mut self, change: Change) -> Self {
        self.changes.push(change);
        self
    }

    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Checks ordering and bounds against a document of `len` chars.
    pub fn validate(&self, len: usize) -> Result<(), EditError> {
        let mut prev_end: Option<usize> = None;
        for change in &self.changes {
            if change.from > change.to {
                return Err(EditError::Reversed {
                    from: change.from,
                    to: change.to,
                });
            }
            if change.to > len {
                return Err(EditError::OutOfBounds {
                    from: change.from,
                    to: change.to,
                    len,
                });
            }
            if let Some(prev_end) = prev_end {
                if change.from < prev_end {
                    return Err(EditError::Overlapping {
                        from: change.from,
                        prev_end,
                    });
                }
            }
            prev_end = Some(change.to);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/transaction.rs"]
mod tests;
