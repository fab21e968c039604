//! Change notification
//!
//! Observers register a callback and are invoked synchronously, in
//! registration order, after every operation that changed the store. They
//! receive the store itself (read-only) so each one sees the same, fully
//! applied state.

use crate::store::BoardStore;
use serde::Serialize;

/// Handle returned by [`BoardStore::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SubscriptionId(u64);

/// What changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreEvent {
    /// Monotonic change counter, starting at 1 for the first mutation
    pub revision: u64,
    /// Canonical op string of the mutation, e.g. "move card"
    pub op: String,
    /// Ids of the entities the operation touched
    pub affected: Vec<String>,
}

/// Callback signature for observers
pub type Observer = Box<dyn Fn(&BoardStore, &StoreEvent)>;

/// Registered observers in registration order
#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    observers: Vec<(SubscriptionId, Observer)>,
}

impl Subscribers {
    pub(crate) fn add(&mut self, observer: Observer) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.observers.push((id, observer));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Observer> {
        self.observers.iter().map(|(_, observer)| observer)
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.observers.len())
            .finish()
    }
}
