//! Selection ranges within a single block

use std::fmt;

/// Stable identifier of a block
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockKey(String);

impl BlockKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BlockKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl fmt::Display for BlockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A character range `[start, end)` inside one block
///
/// Offsets count characters, not bytes. `start <= end` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRange {
    pub block_key: BlockKey,
    pub start: usize,
    pub end: usize,
}

impl SelectionRange {
    /// Create a range, ordering the two offsets
    pub fn new(block_key: BlockKey, start: usize, end: usize) -> Self {
        Self {
            block_key,
            start: start.min(end),
            end: start.max(end),
        }
    }

    /// Create a caret at `offset`
    pub fn collapsed(block_key: BlockKey, offset: usize) -> Self {
        Self::new(block_key, offset, offset)
    }

    /// Build a range from possibly out-of-bounds offsets
    ///
    /// The anchor is raised to 0 and the focus lowered to `len`; both ends
    /// then end up inside `[0, len]`.
    pub fn clamped(block_key: BlockKey, anchor: i64, focus: i64, len: usize) -> Self {
        let anchor = anchor.max(0);
        let focus = focus.min(len as i64);
        let start = anchor.min(focus).clamp(0, len as i64) as usize;
        let end = anchor.max(focus).clamp(0, len as i64) as usize;
        Self {
            block_key,
            start,
            end,
        }
    }

    /// Shrink this range so it fits a block of `len` characters
    pub fn clamp_to(&self, len: usize) -> Self {
        Self {
            block_key: self.block_key.clone(),
            start: self.start.min(len),
            end: self.end.min(len),
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }
}
