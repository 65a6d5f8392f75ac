//! Rules file support
//!
//! Loads regex style rules from a TOML file. The default location is
//! ~/.stylesync.toml (or %USERPROFILE%\.stylesync.toml on Windows).
//!
//! Example:
//! ```toml
//! [[rule]]
//! name = "bold"
//! pattern = '\*.+\*'
//! styles = ["BOLD"]
//!
//! [[rule]]
//! pattern = '~.+~'
//! styles = ["UNDERLINE"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::styling::{RuleSet, StyleRule};

/// Contents of a rules file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    #[serde(default, rename = "rule")]
    pub rules: Vec<RuleConfig>,
}

/// One `[[rule]]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    /// Name for debugging; defaults to `rule-<index>`
    pub name: Option<String>,
    /// Regex matched against each block's text
    pub pattern: String,
    /// Styles applied to each match
    pub styles: Vec<String>,
}

impl RulesConfig {
    /// Get the default rules file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".stylesync.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".stylesync.toml"))
        }
    }

    /// Parse rules file contents
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Compile every rule, in file order
    pub fn build(&self) -> Result<RuleSet> {
        let mut rules = Vec::with_capacity(self.rules.len());
        for (i, rule) in self.rules.iter().enumerate() {
            let name = rule.name.clone().unwrap_or_else(|| format!("rule-{i}"));
            if rule.styles.is_empty() {
                return Err(Error::Config(format!("rule {name} has no styles")));
            }
            rules.push(StyleRule::regex(&name, &rule.pattern, rule.styles.iter().cloned())?);
        }
        Ok(RuleSet::new(rules))
    }
}

impl RuleSet {
    /// Build rules from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        RulesConfig::parse(contents)?.build()
    }

    /// Build rules from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let rules = Self::from_toml(&contents)?;
        debug!(path = %path.display(), count = rules.len(), "loaded rules");
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rules() {
        let contents = r#"
# Comment
[[rule]]
name = "bold"
pattern = '\*.+\*'
styles = ["BOLD"]

[[rule]]
pattern = '~.+~'
styles = ["UNDERLINE", "ITALIC"]
        "#;

        let rules = RuleSet::from_toml(contents).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.get("bold").unwrap().styles, vec!["BOLD".to_string()]);
        assert_eq!(rules.get("rule-1").unwrap().styles.len(), 2);
    }

    #[test]
    fn test_empty_file() {
        assert!(RuleSet::from_toml("").unwrap().is_empty());
    }

    #[test]
    fn test_rule_without_styles() {
        let contents = "[[rule]]\npattern = 'x'\nstyles = []\n";
        assert!(matches!(RuleSet::from_toml(contents), Err(Error::Config(_))));
    }

    #[test]
    fn test_bad_pattern() {
        let contents = "[[rule]]\nname = \"oops\"\npattern = '(x'\nstyles = [\"BOLD\"]\n";
        assert!(matches!(
            RuleSet::from_toml(contents),
            Err(Error::InvalidPattern { ref rule, .. }) if rule == "oops"
        ));
    }

    #[test]
    fn test_unknown_field() {
        let contents = "[[rule]]\npattern = 'x'\nstyles = [\"BOLD\"]\ncolour = \"red\"\n";
        assert!(matches!(RuleSet::from_toml(contents), Err(Error::Toml(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let err = RuleSet::load(Path::new("/nonexistent/stylesync.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
