//! Style reconciliation - folds style changes into a content version

use tracing::trace;

use super::collector::StyleChange;
use crate::document::{ContentState, SelectionRange};
use crate::error::{Error, Result};

/// Outcome of one reconciliation
#[derive(Debug, Clone)]
pub struct Reconciled {
    /// Content with every change applied
    pub content: ContentState,
    /// Number of (change, style) pairs whose range was not already styled
    pub changes_applied: usize,
}

/// Apply every change to `content`, counting those that were needed
///
/// A (change, style) pair counts when any character in its range carries
/// something other than that single style. The style is applied either
/// way, so the count only reports whether styling moved.
pub fn reconcile(content: &ContentState, changes: &[StyleChange]) -> Result<Reconciled> {
    let mut content = content.clone();
    let mut changes_applied = 0;

    for change in changes {
        let block = content
            .block(&change.block_key)
            .ok_or_else(|| Error::UnknownBlock(change.block_key.to_string()))?;
        let range = SelectionRange::clamped(
            change.block_key.clone(),
            change.start,
            change.end,
            block.len(),
        );

        for style in &change.styles {
            let block = content
                .block(&range.block_key)
                .ok_or_else(|| Error::UnknownBlock(range.block_key.to_string()))?;
            let already_styled = block.char_styles()[range.start..range.end]
                .iter()
                .all(|styles| styles.is_only(style));
            if !already_styled {
                trace!(block = %range.block_key, start = range.start, end = range.end, style = %style, "style needed");
                changes_applied += 1;
            }
            content = content.apply_inline_style(&range, style)?;
        }
    }

    Ok(Reconciled {
        content,
        changes_applied,
    })
}
