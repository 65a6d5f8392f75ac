//! Persistent rich-text document model
//!
//! This module provides the document the style synchronizer works on:
//! - Blocks of text with one style set per character
//! - Immutable content versions sharing unchanged blocks
//! - Editor state (selection, pending style override)

mod block;
mod content;
mod editor_state;
mod selection;
mod style;

pub use block::{ContentBlock, StyledRun};
pub use content::ContentState;
pub use editor_state::EditorState;
pub use selection::{BlockKey, SelectionRange};
pub use style::StyleSet;
