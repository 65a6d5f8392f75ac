//! Block representation and per-character styling

use super::selection::BlockKey;
use super::style::StyleSet;

/// A run of consecutive characters that carry the same style set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    /// Character offset where this run starts (inclusive)
    pub start: usize,
    /// Character offset where this run ends (exclusive)
    pub end: usize,
    /// Styles shared by every character of the run
    pub styles: StyleSet,
}

impl StyledRun {
    /// Check if this run contains a character position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }
}

/// One paragraph of a document
///
/// A block is never modified in place once it is shared by a
/// [`ContentState`](super::ContentState); edits build a new block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    key: BlockKey,
    text: String,
    /// One entry per character of `text`
    styles: Vec<StyleSet>,
}

impl ContentBlock {
    /// Create an unstyled block
    pub fn new(key: BlockKey, text: impl Into<String>) -> Self {
        let text = text.into();
        let styles = vec![StyleSet::new(); text.chars().count()];
        Self { key, text, styles }
    }

    pub fn key(&self) -> &BlockKey {
        &self.key
    }

    /// Get the text content
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Style set of the character at `offset`
    pub fn styles_at(&self, offset: usize) -> Option<&StyleSet> {
        self.styles.get(offset)
    }

    /// Style sets of every character, in order
    pub fn char_styles(&self) -> &[StyleSet] {
        &self.styles
    }

    /// Check whether any character carries a style
    pub fn has_styles(&self) -> bool {
        self.styles.iter().any(|s| !s.is_empty())
    }

    /// Group characters into maximal runs of identical styling
    ///
    /// Unstyled characters are skipped.
    pub fn styled_runs(&self) -> Vec<StyledRun> {
        let mut runs: Vec<StyledRun> = Vec::new();
        for (offset, styles) in self.styles.iter().enumerate() {
            if styles.is_empty() {
                continue;
            }
            match runs.last_mut() {
                Some(run) if run.end == offset && run.styles == *styles => run.end += 1,
                _ => runs.push(StyledRun {
                    start: offset,
                    end: offset + 1,
                    styles: styles.clone(),
                }),
            }
        }
        runs
    }

    /// Convert a character offset to a byte offset into `text`
    fn byte_offset(&self, offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(offset)
            .map(|(byte, _)| byte)
            .unwrap_or(self.text.len())
    }

    /// Copy of this block with `edit` run over the style sets in `[start, end)`
    pub(crate) fn map_styles(&self, start: usize, end: usize, edit: impl Fn(&mut StyleSet)) -> Self {
        let mut block = self.clone();
        let end = end.min(block.styles.len());
        let start = start.min(end);
        block.styles[start..end].iter_mut().for_each(edit);
        block
    }

    /// Copy of this block with `[start, end)` replaced by `text`
    ///
    /// Every inserted character carries `styles`.
    pub(crate) fn replaced(&self, start: usize, end: usize, text: &str, styles: &StyleSet) -> Self {
        let end = end.min(self.len());
        let start = start.min(end);
        let byte_start = self.byte_offset(start);
        let byte_end = self.byte_offset(end);

        let mut new_text = String::with_capacity(self.text.len() + text.len());
        new_text.push_str(&self.text[..byte_start]);
        new_text.push_str(text);
        new_text.push_str(&self.text[byte_end..]);

        let mut new_styles = Vec::with_capacity(new_text.len());
        new_styles.extend_from_slice(&self.styles[..start]);
        new_styles.extend(text.chars().map(|_| styles.clone()));
        new_styles.extend_from_slice(&self.styles[end..]);

        Self {
            key: self.key.clone(),
            text: new_text,
            styles: new_styles,
        }
    }
}
