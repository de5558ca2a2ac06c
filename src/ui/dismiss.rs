//! # Dismissal Watcher
//!
//! Outside-click dismissal as an explicit, owned subscription instead of an
//! ambient global listener: the root widget registers a watcher at
//! construction (unarmed), arms it one tick later via a deferred action,
//! consults it whenever a click lands outside the popup, and releases it
//! exactly once at teardown. A released watcher never fires again.

/// Tracks whether outside clicks may currently dismiss the widget.
#[derive(Debug)]
pub struct DismissWatcher {
    registered: bool,
    armed: bool,
}

impl DismissWatcher {
    /// Acquire the watcher registration. Starts unarmed: clicks in the
    /// construction tick are ignored.
    pub fn register() -> Self {
        Self {
            registered: true,
            armed: false,
        }
    }

    /// Arm the watcher. No effect after release.
    pub fn arm(&mut self) {
        if self.registered {
            self.armed = true;
        }
    }

    /// Whether an outside click should dismiss right now.
    pub fn armed(&self) -> bool {
        self.registered && self.armed
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Release the registration. Idempotent; must have happened by the time
    /// the owning widget is fully torn down.
    pub fn release(&mut self) {
        self.registered = false;
        self.armed = false;
    }
}
