//! Editor state - a content version plus selection and pending style override

use std::sync::Arc;

use super::content::ContentState;
use super::selection::SelectionRange;
use super::style::StyleSet;

/// One version of the host editor's state
///
/// Cloning is cheap: the content is shared.
#[derive(Debug, Clone)]
pub struct EditorState {
    content: Arc<ContentState>,
    selection: SelectionRange,
    /// Styles the next typed character will receive, if set
    inline_style_override: Option<StyleSet>,
    /// Whether the selection was forced active
    force_selection: bool,
}

impl EditorState {
    /// Create a state with the caret at the start of the first block
    pub fn create(content: ContentState) -> Self {
        let selection = SelectionRange::collapsed(content.first_block().key().clone(), 0);
        Self {
            content: Arc::new(content),
            selection,
            inline_style_override: None,
            force_selection: false,
        }
    }

    pub fn current_content(&self) -> &Arc<ContentState> {
        &self.content
    }

    pub fn selection(&self) -> &SelectionRange {
        &self.selection
    }

    pub fn inline_style_override(&self) -> Option<&StyleSet> {
        self.inline_style_override.as_ref()
    }

    pub fn is_selection_forced(&self) -> bool {
        self.force_selection
    }

    /// Check whether both states hold the very same content version
    pub fn same_content(&self, other: &EditorState) -> bool {
        Arc::ptr_eq(&self.content, &other.content)
    }

    /// New version with `content`, keeping the selection where it still fits
    pub fn push(&self, content: ContentState) -> Self {
        let selection = self.selection.clone();
        self.push_with_selection(content, selection)
    }

    /// New version with `content` and `selection`
    ///
    /// The selection falls back to the start of the first block when its
    /// block no longer exists, and is clamped to the block length otherwise.
    pub fn push_with_selection(&self, content: ContentState, selection: SelectionRange) -> Self {
        let selection = match content.block(&selection.block_key) {
            Some(block) => selection.clamp_to(block.len()),
            None => SelectionRange::collapsed(content.first_block().key().clone(), 0),
        };
        Self {
            content: Arc::new(content),
            selection,
            inline_style_override: self.inline_style_override.clone(),
            force_selection: false,
        }
    }

    /// Mark `selection` as active
    ///
    /// Forcing a selection drops any pending style override, so the current
    /// inline style is recomputed from the characters around it.
    pub fn force_selection(&self, selection: SelectionRange) -> Self {
        let selection = match self.content.block(&selection.block_key) {
            Some(block) => selection.clamp_to(block.len()),
            None => self.selection.clone(),
        };
        Self {
            content: Arc::clone(&self.content),
            selection,
            inline_style_override: None,
            force_selection: true,
        }
    }

    /// Same state with a different pending style override
    pub fn set_inline_style_override(&self, styles: Option<StyleSet>) -> Self {
        Self {
            inline_style_override: styles,
            ..self.clone()
        }
    }

    /// Styles in effect at the selection
    ///
    /// A pending override wins. For a caret, this is the style of the
    /// character before it; for a range, the style of its first character.
    pub fn current_inline_style(&self) -> StyleSet {
        if let Some(styles) = &self.inline_style_override {
            return styles.clone();
        }

        let Some(block) = self.content.block(&self.selection.block_key) else {
            return StyleSet::new();
        };

        if !self.selection.is_collapsed() {
            return block
                .styles_at(self.selection.start)
                .cloned()
                .unwrap_or_default();
        }

        let offset = self.selection.start;
        if offset > 0 {
            return block.styles_at(offset - 1).cloned().unwrap_or_default();
        }
        if !block.is_empty() {
            return block.styles_at(0).cloned().unwrap_or_default();
        }

        // Empty block: inherit from the end of the nearest non-empty block above
        let mut key = block.key().clone();
        while let Some(prev) = self.content.block_before(&key) {
            if !prev.is_empty() {
                return prev.styles_at(prev.len() - 1).cloned().unwrap_or_default();
            }
            key = prev.key().clone();
        }
        StyleSet::new()
    }
}
