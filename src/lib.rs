//! stylesync - keep inline styles in a rich-text document in sync with
//! pattern rules
//!
//! Declare "find pattern X, apply style Y" rules once; the
//! [`StyleSyncPlugin`] re-derives the styled ranges whenever the text
//! changes and strips stale styling around structural edits.

pub mod config;
pub mod document;
pub mod error;
pub mod plugin;
pub mod styling;
pub mod tasks;

pub use document::{BlockKey, ContentBlock, ContentState, EditorState, SelectionRange, StyleSet};
pub use error::{Error, Result};
pub use plugin::StyleSyncPlugin;
pub use styling::{Matcher, RegexMatcher, RuleSet, StyleRule};
pub use tasks::{EditorHost, TaskQueue};
