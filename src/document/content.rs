//! Persistent document content - an ordered collection of blocks
//!
//! Every edit returns a new [`ContentState`]. Blocks are shared behind
//! `Arc`, so a new version only allocates the blocks it touched.

use std::sync::Arc;

use super::block::ContentBlock;
use super::selection::{BlockKey, SelectionRange};
use super::style::StyleSet;
use crate::error::{Error, Result};

/// An immutable version of a document's blocks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentState {
    blocks: Vec<Arc<ContentBlock>>,
}

impl ContentState {
    /// Create content from blocks
    pub fn new(blocks: Vec<ContentBlock>) -> Self {
        let blocks = if blocks.is_empty() {
            // Always have at least one block
            vec![Arc::new(ContentBlock::new(BlockKey::new("block-0"), ""))]
        } else {
            blocks.into_iter().map(Arc::new).collect()
        };
        Self { blocks }
    }

    /// Create unstyled content, one block per line
    pub fn from_text(text: &str) -> Self {
        let blocks = text
            .split('\n')
            .enumerate()
            .map(|(i, line)| ContentBlock::new(BlockKey::new(format!("block-{i}")), line))
            .collect();
        Self::new(blocks)
    }

    /// Iterate blocks in document order
    pub fn blocks(&self) -> impl Iterator<Item = &ContentBlock> {
        self.blocks.iter().map(|b| b.as_ref())
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn first_block(&self) -> &ContentBlock {
        &self.blocks[0]
    }

    /// Look up a block by key
    pub fn block(&self, key: &BlockKey) -> Option<&ContentBlock> {
        self.blocks.iter().find(|b| b.key() == key).map(|b| b.as_ref())
    }

    /// The block immediately preceding `key`
    pub fn block_before(&self, key: &BlockKey) -> Option<&ContentBlock> {
        let idx = self.index_of(key)?;
        idx.checked_sub(1).map(|i| self.blocks[i].as_ref())
    }

    /// Text of every block joined by newlines
    pub fn plain_text(&self) -> String {
        let texts: Vec<&str> = self.blocks().map(|b| b.text()).collect();
        texts.join("\n")
    }

    /// Check whether any character in the document carries a style
    pub fn has_styles(&self) -> bool {
        self.blocks().any(|b| b.has_styles())
    }

    /// Check whether `other` shares every block with this version
    pub fn shares_blocks_with(&self, other: &ContentState) -> bool {
        self.blocks.len() == other.blocks.len()
            && self
                .blocks
                .iter()
                .zip(&other.blocks)
                .all(|(a, b)| Arc::ptr_eq(a, b))
    }

    /// Add `style` to every character in `range`
    pub fn apply_inline_style(&self, range: &SelectionRange, style: &str) -> Result<Self> {
        self.update_block(&range.block_key, |block| {
            block.map_styles(range.start, range.end, |s| {
                s.insert(style);
            })
        })
    }

    /// Remove `style` from every character in `range`
    pub fn remove_inline_style(&self, range: &SelectionRange, style: &str) -> Result<Self> {
        self.update_block(&range.block_key, |block| {
            block.map_styles(range.start, range.end, |s| {
                s.remove(style);
            })
        })
    }

    /// Replace the characters in `range` with `text`, each carrying `styles`
    pub fn replace_text(&self, range: &SelectionRange, text: &str, styles: &StyleSet) -> Result<Self> {
        self.update_block(&range.block_key, |block| {
            block.replaced(range.start, range.end, text, styles)
        })
    }

    fn index_of(&self, key: &BlockKey) -> Option<usize> {
        self.blocks.iter().position(|b| b.key() == key)
    }

    fn update_block(
        &self,
        key: &BlockKey,
        edit: impl FnOnce(&ContentBlock) -> ContentBlock,
    ) -> Result<Self> {
        let idx = self
            .index_of(key)
            .ok_or_else(|| Error::UnknownBlock(key.to_string()))?;
        let mut blocks = self.blocks.clone();
        blocks[idx] = Arc::new(edit(&self.blocks[idx]));
        Ok(Self { blocks })
    }
}

impl Default for ContentState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text() {
        let content = ContentState::from_text("one\ntwo\n");
        assert_eq!(content.block_count(), 3);
        assert_eq!(content.first_block().text(), "one");
        assert_eq!(content.plain_text(), "one\ntwo\n");
        assert!(!content.has_styles());
    }

    #[test]
    fn test_empty_content_has_one_block() {
        let content = ContentState::default();
        assert_eq!(content.block_count(), 1);
        assert!(content.first_block().is_empty());
    }

    #[test]
    fn test_apply_shares_untouched_blocks() {
        let content = ContentState::from_text("one\ntwo");
        let range = SelectionRange::new(BlockKey::new("block-1"), 0, 3);
        let styled = content.apply_inline_style(&range, "BOLD").unwrap();

        assert!(Arc::ptr_eq(&content.blocks[0], &styled.blocks[0]));
        assert!(!Arc::ptr_eq(&content.blocks[1], &styled.blocks[1]));
        assert!(!content.has_styles());
        assert!(styled.has_styles());
        assert!(!content.shares_blocks_with(&styled));
    }

    #[test]
    fn test_remove_inline_style() {
        let content = ContentState::from_text("abc");
        let range = SelectionRange::new(BlockKey::new("block-0"), 0, 3);
        let styled = content.apply_inline_style(&range, "BOLD").unwrap();
        let cleared = styled.remove_inline_style(&range, "BOLD").unwrap();
        assert!(!cleared.has_styles());
    }

    #[test]
    fn test_unknown_block() {
        let content = ContentState::from_text("abc");
        let range = SelectionRange::new(BlockKey::new("missing"), 0, 1);
        let err = content.apply_inline_style(&range, "BOLD").unwrap_err();
        assert!(matches!(err, Error::UnknownBlock(ref key) if key == "missing"));
    }

    #[test]
    fn test_block_before() {
        let content = ContentState::from_text("a\nb");
        assert_eq!(content.block_before(&BlockKey::new("block-1")).unwrap().text(), "a");
        assert!(content.block_before(&BlockKey::new("block-0")).is_none());
    }
}
