//! Range collection - runs every rule over every block

use tracing::trace;

use super::rules::RuleSet;
use crate::document::{BlockKey, ContentState};
use crate::error::Result;

/// A request to style `[start, end)` of one block
///
/// Offsets come straight from a matcher and are not yet clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleChange {
    pub block_key: BlockKey,
    pub start: i64,
    pub end: i64,
    pub styles: Vec<String>,
}

/// Collect the style changes every rule asks for
///
/// Changes are ordered by rule, then by block, then in the order the
/// matcher reported them. Overlaps are kept. The first matcher error
/// aborts collection.
pub fn collect(rules: &RuleSet, content: &ContentState) -> Result<Vec<StyleChange>> {
    let mut changes = Vec::new();

    for rule in rules.iter() {
        for block in content.blocks() {
            let key = block.key();
            rule.matcher.find(block, &mut |start, end| {
                trace!(rule = %rule.name, block = %key, start, end, "range matched");
                changes.push(StyleChange {
                    block_key: key.clone(),
                    start,
                    end,
                    styles: rule.styles.clone(),
                });
            })?;
        }
    }

    Ok(changes)
}
