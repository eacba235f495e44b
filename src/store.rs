//! Topology store - the single owner of the points and objects sequences.
//!
//! Reads hand out shared references, so a caller can never change the
//! topology without going through [`TopologyStore::update`] or
//! [`TopologyStore::replace`]. Every mutation bumps a revision counter (used by
//! the history engine to detect pending changes) and then notifies listeners,
//! which therefore only ever observe completed mutations.

use crate::types::Topology;
use std::fmt;

/// Handle returned by [`TopologyStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Topology)>;

#[derive(Default)]
pub struct TopologyStore {
    topology: Topology,
    revision: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl TopologyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_topology(topology: Topology) -> Self {
        Self {
            topology,
            ..Self::default()
        }
    }

    #[inline]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn snapshot(&self) -> Topology {
        self.topology.clone()
    }

    /// Number of mutations applied since construction.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Mutate the topology in place.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut Topology) -> R) -> R {
        let result = f(&mut self.topology);
        self.revision += 1;
        self.notify();
        result
    }

    /// Replace the topology wholesale.
    pub fn replace(&mut self, topology: Topology) {
        self.update(|current| *current = topology);
    }

    /// Register a listener called after every mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&Topology) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        for (_, listener) in &mut self.listeners {
            listener(&self.topology);
        }
    }
}

impl fmt::Debug for TopologyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TopologyStore")
            .field("topology", &self.topology)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
