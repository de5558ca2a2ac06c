//! # Deferred Actions
//!
//! The widget needs two things to happen one tick *after* the moment they
//! are requested:
//!
//! - focusing the search input must wait until the first draw has placed it
//!   on screen;
//! - arming the outside-click watcher must wait out the tick in which the
//!   widget was constructed, so the gesture that opened the widget cannot
//!   also dismiss it.
//!
//! Rather than hiding these in toolkit lifecycle side effects, they are an
//! explicit FIFO queue the host loop drains once per tick, after a
//! completed draw.

use std::collections::VecDeque;

/// An action scheduled to run at the end of the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Give the search input focus (requires a completed render).
    FocusSearch,
    /// Arm the outside-click dismissal watcher.
    ArmDismiss,
}

/// FIFO queue of scheduled actions. Drained in scheduling order.
#[derive(Debug, Default)]
pub struct DeferredActions {
    queue: VecDeque<DeferredAction>,
}

impl DeferredActions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, action: DeferredAction) {
        self.queue.push_back(action);
    }

    /// Take every pending action, oldest first.
    pub fn drain(&mut self) -> Vec<DeferredAction> {
        self.queue.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
