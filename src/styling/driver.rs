//! Convergence driver - one full reconciliation pass

use tracing::debug;

use super::collector::collect;
use super::reconciler::reconcile;
use super::rules::RuleSet;
use crate::document::EditorState;
use crate::error::Result;
use crate::tasks::TaskQueue;

/// Run one reconciliation pass over the state returned by `get_state`
///
/// The state is fetched again between collecting and applying changes.
/// Returns `None` when no range needed styling, so callers keep their
/// current version. A returned state never carries a style override.
pub fn run(rules: &RuleSet, get_state: impl Fn() -> EditorState) -> Result<Option<EditorState>> {
    let changes = collect(rules, get_state().current_content())?;

    let state = get_state();
    let reconciled = reconcile(state.current_content(), &changes)?;
    debug!(
        collected = changes.len(),
        applied = reconciled.changes_applied,
        "reconciliation pass"
    );

    if reconciled.changes_applied == 0 {
        return Ok(None);
    }

    Ok(Some(
        state
            .push(reconciled.content)
            .set_inline_style_override(None),
    ))
}

/// Schedule a pass for after the host's current turn
///
/// When the task runs, the host receives the reconciled state, or its own
/// state with the style override cleared if nothing changed.
pub fn run_deferred(rules: &RuleSet, tasks: &mut TaskQueue) {
    let rules = rules.clone();
    tasks.defer(move |host, _| {
        let current = host.editor_state();
        let next = run(&rules, || host.editor_state())?;
        host.set_editor_state(next.unwrap_or_else(|| current.set_inline_style_override(None)));
        Ok(())
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{ContentState, StyleSet};
    use crate::styling::rules::StyleRule;
    use std::cell::RefCell;

    fn rules() -> RuleSet {
        RuleSet::new(vec![StyleRule::regex("bold", r"\*.+\*", ["BOLD"]).unwrap()])
    }

    #[test]
    fn test_run_returns_none_without_matches() {
        let state = EditorState::create(ContentState::from_text("plain"));
        assert!(run(&rules(), || state.clone()).unwrap().is_none());
    }

    #[test]
    fn test_run_clears_override() {
        let state = EditorState::create(ContentState::from_text("*b*"))
            .set_inline_style_override(Some(StyleSet::single("BOLD")));
        let next = run(&rules(), || state.clone()).unwrap().unwrap();
        assert!(next.inline_style_override().is_none());
        assert!(next.current_content().first_block().styles_at(1).unwrap().is_only("BOLD"));
        assert!(run(&rules(), || next.clone()).unwrap().is_none());
    }

    #[test]
    fn test_run_refetches_before_applying() {
        // The second fetch sees an extra block appended by the host
        let fetches = RefCell::new(0);
        let first = EditorState::create(ContentState::from_text("*a*"));
        let second = first.push(ContentState::from_text("*a*\nmore"));
        let next = run(&rules(), || {
            *fetches.borrow_mut() += 1;
            if *fetches.borrow() == 1 {
                first.clone()
            } else {
                second.clone()
            }
        })
        .unwrap()
        .unwrap();

        assert_eq!(*fetches.borrow(), 2);
        assert_eq!(next.current_content().block_count(), 2);
    }
}
