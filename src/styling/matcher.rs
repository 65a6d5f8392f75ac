//! Matching strategies
//!
//! A matcher scans one block and reports the character ranges it wants
//! styled. Offsets are reported through a callback so a matcher can stream
//! results as it finds them; they are clamped later and may be out of bounds.

use regex::Regex;

use crate::document::ContentBlock;
use crate::error::{Error, Result};

/// Something that finds ranges to style in a block
pub trait Matcher: Send + Sync {
    /// Call `report` with `(start, end)` character offsets once per
    /// matching range in `block`
    fn find(&self, block: &ContentBlock, report: &mut dyn FnMut(i64, i64)) -> Result<()>;
}

impl<F> Matcher for F
where
    F: Fn(&ContentBlock, &mut dyn FnMut(i64, i64)) -> Result<()> + Send + Sync,
{
    fn find(&self, block: &ContentBlock, report: &mut dyn FnMut(i64, i64)) -> Result<()> {
        self(block, report)
    }
}

/// Reports every non-overlapping match of a regex
pub struct RegexMatcher {
    pattern: Regex,
}

impl RegexMatcher {
    /// Compile a pattern; `name` identifies the rule in errors
    pub fn new(name: &str, pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
            rule: name.to_string(),
            source,
        })?;
        Ok(Self { pattern })
    }

    pub fn from_regex(pattern: Regex) -> Self {
        Self { pattern }
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Matcher for RegexMatcher {
    fn find(&self, block: &ContentBlock, report: &mut dyn FnMut(i64, i64)) -> Result<()> {
        let text = block.text();
        // Walk matches and chars together to turn byte offsets into char offsets
        let mut chars = text.char_indices().map(|(byte, _)| byte).enumerate().peekable();
        let mut char_offset = |byte: usize| -> usize {
            while let Some(&(idx, b)) = chars.peek() {
                if b >= byte {
                    return idx;
                }
                chars.next();
            }
            block.len()
        };

        for m in self.pattern.find_iter(text) {
            let start = char_offset(m.start());
            let end = char_offset(m.end());
            report(start as i64, end as i64);
        }
        Ok(())
    }
}
