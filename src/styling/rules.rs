//! Style rules
//!
//! A rule pairs a [`Matcher`] with the style names to apply to whatever
//! it matches. Rules are fixed once a [`RuleSet`] is built.

use std::fmt;
use std::sync::Arc;

use super::matcher::{Matcher, RegexMatcher};
use crate::error::Result;

/// One matcher and the styles it applies
pub struct StyleRule {
    /// Name for debugging
    pub name: String,
    /// Strategy finding the ranges to style
    pub matcher: Box<dyn Matcher>,
    /// Styles applied to every matched range, in order
    pub styles: Vec<String>,
}

impl StyleRule {
    /// Create a rule from any matcher
    pub fn new<M, S>(name: &str, matcher: M, styles: impl IntoIterator<Item = S>) -> Self
    where
        M: Matcher + 'static,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            matcher: Box::new(matcher),
            styles: styles.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a rule matching a regex pattern
    pub fn regex<S>(name: &str, pattern: &str, styles: impl IntoIterator<Item = S>) -> Result<Self>
    where
        S: Into<String>,
    {
        Ok(Self::new(name, RegexMatcher::new(name, pattern)?, styles))
    }
}

impl fmt::Debug for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleRule")
            .field("name", &self.name)
            .field("styles", &self.styles)
            .finish_non_exhaustive()
    }
}

/// Ordered, immutable list of rules
///
/// Cloning shares the rules.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Arc<[StyleRule]>,
}

impl RuleSet {
    pub fn new(rules: Vec<StyleRule>) -> Self {
        Self { rules: rules.into() }
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Find a rule by name
    pub fn get(&self, name: &str) -> Option<&StyleRule> {
        self.rules.iter().find(|r| r.name == name)
    }
}

impl FromIterator<StyleRule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = StyleRule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
