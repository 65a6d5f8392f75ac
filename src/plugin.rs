//! Editor plugin hooks
//!
//! [`StyleSyncPlugin`] connects host editor events to the styling passes:
//! every change is reconciled immediately, while backspace and return
//! first go through the structural-edit guard and reconcile later.

use tracing::debug;

use crate::document::EditorState;
use crate::error::Result;
use crate::styling::{self, RuleSet};
use crate::tasks::{EditorHost, TaskQueue};

/// Key command name for deleting backwards
pub const BACKSPACE: &str = "backspace";

/// Keeps inline styles in sync with a fixed set of rules
#[derive(Debug, Clone)]
pub struct StyleSyncPlugin {
    rules: RuleSet,
}

impl StyleSyncPlugin {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Reconcile `state` right away
    ///
    /// Returns the reconciled state, or `state` itself when nothing needed
    /// styling. The pending style override is cleared either way.
    pub fn on_change(&self, state: EditorState) -> Result<EditorState> {
        let next = styling::run(&self.rules, || state.clone())?;
        Ok(next.unwrap_or_else(|| state.set_inline_style_override(None)))
    }

    /// Handle a key command before the host applies it
    ///
    /// On backspace over styled text, styles are stripped and rules re-run
    /// once the host has processed the keystroke.
    pub fn handle_key_command(&self, command: &str, host: &dyn EditorHost, tasks: &mut TaskQueue) {
        if command != BACKSPACE {
            return;
        }
        let rules = self.rules.clone();
        let stripping = styling::guard(host, tasks, move |host, tasks, stripped| {
            resume_after_strip(&rules, host, tasks, stripped)
        });
        debug!(command, stripping, "key command");
    }

    /// Handle a return keystroke before the host splits the block
    ///
    /// Rules always re-run afterwards, with a strip first when the
    /// selection is styled.
    pub fn handle_return(&self, host: &dyn EditorHost, tasks: &mut TaskQueue) {
        let rules = self.rules.clone();
        let stripping = styling::guard(host, tasks, move |host, tasks, stripped| {
            resume_after_strip(&rules, host, tasks, stripped)
        });
        if !stripping {
            let rules = self.rules.clone();
            tasks.defer(move |host, tasks| {
                let current = host.editor_state();
                resume_after_strip(&rules, host, tasks, current)
            });
        }
        debug!(stripping, "return");
    }
}

fn resume_after_strip(
    rules: &RuleSet,
    host: &mut dyn EditorHost,
    tasks: &mut TaskQueue,
    stripped: EditorState,
) -> Result<()> {
    host.set_editor_state(stripped);
    styling::run_deferred(rules, tasks);
    Ok(())
}
