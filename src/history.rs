//! Undo/redo history - a linear stack of topology snapshots.
//!
//! Low-level mutations accumulate in the store until [`History::commit`] closes
//! the window as one user-visible step. Pending changes are detected through the
//! store's revision counter, so committing with nothing new is a no-op.
//!
//! ```text
//! stack:  [s0] [s1] [s2] [s3]
//!                    ^ index
//! undo  -> restore s1      redo -> restore s3
//! commit after undo -> s3 is discarded, new snapshot becomes s3
//! ```

use tracing::debug;

use crate::constants::MAX_HISTORY_STATES;
use crate::store::TopologyStore;
use crate::types::Topology;

/// Availability of undo/redo, for enabling toolbar buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HistoryState {
    pub can_undo: bool,
    pub can_redo: bool,
}

#[derive(Debug)]
pub struct History {
    stack: Vec<Topology>,
    index: usize,
    limit: usize,
    /// Store revision the current step corresponds to
    synced_revision: u64,
}

impl History {
    /// Start a history whose first step is the store's current content.
    pub fn new(store: &TopologyStore) -> Self {
        Self::with_limit(store, MAX_HISTORY_STATES)
    }

    pub fn with_limit(store: &TopologyStore, limit: usize) -> Self {
        Self {
            stack: vec![store.snapshot()],
            index: 0,
            limit: limit.max(1),
            synced_revision: store.revision(),
        }
    }

    /// Whether the store changed since the current step was recorded.
    pub fn has_pending(&self, store: &TopologyStore) -> bool {
        store.revision() != self.synced_revision
    }

    /// Close the current accumulation window as one undoable step.
    ///
    /// Returns `false` when nothing changed since the last step.
    pub fn commit(&mut self, store: &TopologyStore) -> bool {
        if !self.has_pending(store) {
            return false;
        }

        self.stack.truncate(self.index + 1);
        self.stack.push(store.snapshot());
        self.index += 1;

        if self.stack.len() > self.limit {
            let overflow = self.stack.len() - self.limit;
            self.stack.drain(..overflow);
            self.index -= overflow;
        }

        self.synced_revision = store.revision();
        debug!(index = self.index, len = self.stack.len(), "Committed history step");
        true
    }

    /// Step back and restore the previous snapshot. No-op at the oldest step.
    pub fn undo(&mut self, store: &mut TopologyStore) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        self.restore(store);
        true
    }

    /// Step forward and restore the next snapshot. No-op at the newest step.
    pub fn redo(&mut self, store: &mut TopologyStore) -> bool {
        if self.index + 1 >= self.stack.len() {
            return false;
        }
        self.index += 1;
        self.restore(store);
        true
    }

    fn restore(&mut self, store: &mut TopologyStore) {
        store.replace(self.stack[self.index].clone());
        self.synced_revision = store.revision();
        debug!(index = self.index, len = self.stack.len(), "Restored history step");
    }

    /// Forget every step and restart from the store's current content.
    pub fn reset(&mut self, store: &TopologyStore) {
        self.stack.clear();
        self.stack.push(store.snapshot());
        self.index = 0;
        self.synced_revision = store.revision();
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.stack.len()
    }

    pub fn state(&self) -> HistoryState {
        HistoryState {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }

    /// Current position in the step stack.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
