//! Inline style sets
//!
//! Styles are uninterpreted labels ("BOLD", "UNDERLINE", ...). Every
//! character of a block carries one [`StyleSet`].

use std::collections::BTreeSet;
use std::fmt;

/// An ordered set of style names attached to a single character
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StyleSet {
    names: BTreeSet<String>,
}

impl StyleSet {
    /// Create an empty style set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set holding exactly one style
    pub fn single(style: &str) -> Self {
        let mut set = Self::new();
        set.insert(style);
        set
    }

    /// Add a style, returning true if it was not present
    pub fn insert(&mut self, style: &str) -> bool {
        self.names.insert(style.to_string())
    }

    /// Remove a style, returning true if it was present
    pub fn remove(&mut self, style: &str) -> bool {
        self.names.remove(style)
    }

    /// Check whether a style is present
    pub fn contains(&self, style: &str) -> bool {
        self.names.contains(style)
    }

    /// Check whether this set holds `style` and nothing else
    pub fn is_only(&self, style: &str) -> bool {
        self.names.len() == 1 && self.contains(style)
    }

    /// Number of styles in the set
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if no style is set
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate style names in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Union of two sets
    pub fn union(&self, other: &StyleSet) -> StyleSet {
        StyleSet {
            names: self.names.union(&other.names).cloned().collect(),
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for StyleSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }
}

impl fmt::Display for StyleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().collect();
        write!(f, "{}", names.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_set_default() {
        let set = StyleSet::default();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(!set.is_only("BOLD"));
    }

    #[test]
    fn test_is_only() {
        let mut set = StyleSet::single("BOLD");
        assert!(set.is_only("BOLD"));
        assert!(!set.is_only("UNDERLINE"));

        set.insert("UNDERLINE");
        assert!(!set.is_only("BOLD"));
    }

    #[test]
    fn test_union_and_display() {
        let a = StyleSet::single("UNDERLINE");
        let b: StyleSet = ["BOLD", "UNDERLINE"].into_iter().collect();
        let both = a.union(&b);
        assert_eq!(both.len(), 2);
        assert_eq!(both.to_string(), "BOLD,UNDERLINE");
    }
}
