//! Per-frame action batching.
//!
//! The runner drains every pending key event before rendering a frame. The
//! batch is a fixed-capacity stack buffer so draining never allocates; keys
//! beyond capacity are dropped, except that a quit request is always kept.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::DonutAction;

/// Maximum number of actions kept per frame.
pub const MAX_ACTIONS_PER_FRAME: usize = 16;

#[derive(Debug, Clone, Default)]
pub struct ActionBatch {
    actions: ArrayVec<DonutAction, MAX_ACTIONS_PER_FRAME>,
    quit: bool,
}

impl ActionBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.actions.clear();
        self.quit = false;
    }

    /// Map and record one key event. Release and auto-repeat events are ignored.
    ///
    /// Returns the recorded action, if any.
    pub fn push_key(&mut self, key: KeyEvent) -> Option<DonutAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        let action = handle_key_event(key)?;
        self.push(action).then_some(action)
    }

    /// Record an action. Returns `false` when it was dropped for lack of room.
    pub fn push(&mut self, action: DonutAction) -> bool {
        if action == DonutAction::Quit {
            self.quit = true;
        }
        self.actions.try_push(action).is_ok() || action == DonutAction::Quit
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty() && !self.quit
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Non-quit actions in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = DonutAction> + '_ {
        self.actions
            .iter()
            .copied()
            .filter(|&a| a != DonutAction::Quit)
    }
}
