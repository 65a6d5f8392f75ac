//! Deferred tasks and the host editor interface
//!
//! Work scheduled with [`TaskQueue::defer`] runs after the host finishes
//! its current turn, when it calls [`TaskQueue::run_pending`]. Tasks read
//! the host's state when they run, never when they were scheduled.

use std::collections::VecDeque;
use std::fmt;

use tracing::debug;

use crate::document::EditorState;
use crate::error::Result;

/// The editor that owns the current state
pub trait EditorHost {
    /// Current editor state
    fn editor_state(&self) -> EditorState;

    /// Replace the current editor state
    fn set_editor_state(&mut self, state: EditorState);
}

/// A unit of deferred work
pub type Task = Box<dyn FnOnce(&mut dyn EditorHost, &mut TaskQueue) -> Result<()>>;

/// FIFO of work to run after the current turn
#[derive(Default)]
pub struct TaskQueue {
    tasks: VecDeque<Task>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` after everything already queued
    pub fn defer<F>(&mut self, task: F)
    where
        F: FnOnce(&mut dyn EditorHost, &mut TaskQueue) -> Result<()> + 'static,
    {
        self.tasks.push_back(Box::new(task));
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Run queued tasks, including ones they schedule, until none are left
    ///
    /// Stops at the first error. Tasks still queued are kept and run on the
    /// next call. Returns how many tasks ran.
    pub fn run_pending(&mut self, host: &mut dyn EditorHost) -> Result<usize> {
        let mut ran = 0;
        while let Some(task) = self.tasks.pop_front() {
            ran += 1;
            task(host, self)?;
        }
        if ran > 0 {
            debug!(ran, "deferred tasks finished");
        }
        Ok(ran)
    }
}

impl fmt::Debug for TaskQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskQueue")
            .field("pending", &self.tasks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ContentState;
    use crate::error::Error;

    struct Host {
        state: EditorState,
        sets: usize,
    }

    impl EditorHost for Host {
        fn editor_state(&self) -> EditorState {
            self.state.clone()
        }

        fn set_editor_state(&mut self, state: EditorState) {
            self.state = state;
            self.sets += 1;
        }
    }

    fn host(text: &str) -> Host {
        Host {
            state: EditorState::create(ContentState::from_text(text)),
            sets: 0,
        }
    }

    #[test]
    fn test_tasks_run_in_order_with_nested() {
        let mut host = host("a");
        let mut queue = TaskQueue::new();

        queue.defer(|host, queue| {
            let state = host.editor_state();
            host.set_editor_state(state.push(ContentState::from_text("first")));
            queue.defer(|host, _| {
                assert_eq!(host.editor_state().current_content().plain_text(), "first");
                let state = host.editor_state();
                host.set_editor_state(state.push(ContentState::from_text("nested")));
                Ok(())
            });
            Ok(())
        });
        assert_eq!(queue.len(), 1);

        assert_eq!(queue.run_pending(&mut host).unwrap(), 2);
        assert!(queue.is_empty());
        assert_eq!(host.sets, 2);
        assert_eq!(host.state.current_content().plain_text(), "nested");
    }

    #[test]
    fn test_error_keeps_remaining_tasks() {
        let mut host = host("a");
        let mut queue = TaskQueue::new();
        queue.defer(|_, _| Err(Error::Matcher("boom".to_string())));
        queue.defer(|host, _| {
            let state = host.editor_state();
            host.set_editor_state(state);
            Ok(())
        });

        assert!(queue.run_pending(&mut host).is_err());
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.run_pending(&mut host).unwrap(), 1);
        assert_eq!(host.sets, 1);
    }
}
