//! Structural-edit guard
//!
//! Deleting into or splitting a styled run can leave styled characters that
//! no rule derives any more. When an edit starts on styled text, every
//! inline style in the document is dropped and rules are re-run from scratch.

use tracing::debug;

use crate::document::{ContentState, EditorState, SelectionRange, StyleSet};
use crate::error::Result;
use crate::tasks::{EditorHost, TaskQueue};

/// Copy of `content` with no inline style on any character
pub fn strip_styles(content: &ContentState) -> Result<ContentState> {
    let mut stripped = content.clone();
    for block in content.blocks() {
        if !block.has_styles() {
            continue;
        }
        let range = SelectionRange::new(block.key().clone(), 0, block.len());
        stripped = stripped.replace_text(&range, block.text(), &StyleSet::new())?;
    }
    Ok(stripped)
}

/// Check the host's selection for inline styles before a structural edit
///
/// Returns `false` when the selection is unstyled and nothing is scheduled.
/// Otherwise schedules a strip of the state current when the task runs,
/// hands the stripped state to `on_needs_strip`, and returns `true`.
pub fn guard<F>(host: &dyn EditorHost, tasks: &mut TaskQueue, on_needs_strip: F) -> bool
where
    F: FnOnce(&mut dyn EditorHost, &mut TaskQueue, EditorState) -> Result<()> + 'static,
{
    let state = host.editor_state();
    let active = state.force_selection(state.selection().clone());
    let styles = active.current_inline_style();
    if styles.is_empty() {
        return false;
    }

    debug!(styles = %styles, "selection is styled, scheduling strip");
    tasks.defer(move |host, tasks| {
        let state = host.editor_state();
        let stripped = strip_styles(state.current_content())?;
        on_needs_strip(host, tasks, state.push(stripped))
    });
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::BlockKey;

    struct Host(EditorState);

    impl EditorHost for Host {
        fn editor_state(&self) -> EditorState {
            self.0.clone()
        }

        fn set_editor_state(&mut self, state: EditorState) {
            self.0 = state;
        }
    }

    fn styled_host(caret: usize) -> Host {
        let content = ContentState::from_text("*bold* tail\nplain");
        let range = SelectionRange::new(BlockKey::new("block-0"), 0, 6);
        let content = content.apply_inline_style(&range, "BOLD").unwrap();
        let state = EditorState::create(content)
            .force_selection(SelectionRange::collapsed(BlockKey::new("block-0"), caret));
        Host(state)
    }

    #[test]
    fn test_strip_styles() {
        let host = styled_host(0);
        let content = host.0.current_content();
        let stripped = strip_styles(content).unwrap();
        assert!(!stripped.has_styles());
        assert_eq!(stripped.plain_text(), content.plain_text());
        // Unstyled blocks are shared untouched
        assert!(!stripped.shares_blocks_with(content));
        assert!(std::ptr::eq(
            stripped.blocks().nth(1).unwrap(),
            content.blocks().nth(1).unwrap()
        ));
    }

    #[test]
    fn test_guard_unstyled_selection() {
        let host = styled_host(9);
        let mut tasks = TaskQueue::new();
        assert!(!guard(&host, &mut tasks, |_, _, _| Ok(())));
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_guard_styled_selection_strips() {
        let mut host = styled_host(5);
        let mut tasks = TaskQueue::new();
        let handled = guard(&host, &mut tasks, |host, _, stripped| {
            host.set_editor_state(stripped);
            Ok(())
        });
        assert!(handled);
        // Nothing happens until the deferred task runs
        assert!(host.0.current_content().has_styles());

        tasks.run_pending(&mut host).unwrap();
        assert!(!host.0.current_content().has_styles());
        assert_eq!(host.0.selection().start, 5);
    }

    #[test]
    fn test_guard_ignores_override() {
        let host = Host(
            styled_host(9)
                .0
                .set_inline_style_override(Some(StyleSet::single("BOLD"))),
        );
        let mut tasks = TaskQueue::new();
        assert!(!guard(&host, &mut tasks, |_, _, _| Ok(())));
    }
}
