//! Change notification for [`LineEditor`] content.
//!
//! Observers are plain callbacks registered on the editor. They receive the
//! emitting editor and the new full text, synchronously, after the buffer
//! and cursor have been updated.

use std::fmt;

use super::LineEditor;

/// Callback invoked with `(emitter, new_text)` on every content change.
pub type ChangeCallback = Box<dyn FnMut(&LineEditor, &str)>;

/// Handle returned by [`LineEditor::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Ordered list of change observers.
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, ChangeCallback)>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. Callbacks run in registration order.
    pub fn subscribe(&mut self, callback: ChangeCallback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    /// Remove a callback. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Call every observer with `(emitter, text)`.
    pub(crate) fn emit(&mut self, emitter: &LineEditor, text: &str) {
        for (_, callback) in &mut self.entries {
            callback(emitter, text);
        }
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
