//! Match history store.
//!
//! [`MatchStore`] is the boundary to whatever persists finished matches.
//! [`InMemoryMatchStore`] keeps them in process and notifies subscribers on
//! every insert, which is all the CLI and tests need.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::debug;

use crate::domain::finalize::{MatchRecord, MatchSummary};
use crate::domain::state::MatchId;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

pub trait MatchStore: Send + Sync {
    /// Store a finished match. Ids are unique.
    fn add(&self, record: MatchRecord) -> Result<(), DomainError>;

    /// Summaries, most recently added first.
    fn summaries(&self) -> Vec<MatchSummary>;

    fn get(&self, id: &MatchId) -> Result<MatchRecord, DomainError>;

    /// Every stored record, most recently added first.
    fn records(&self) -> Vec<MatchRecord>;
}

impl<S: MatchStore + ?Sized> MatchStore for Arc<S> {
    fn add(&self, record: MatchRecord) -> Result<(), DomainError> {
        (**self).add(record)
    }

    fn summaries(&self) -> Vec<MatchSummary> {
        (**self).summaries()
    }

    fn get(&self, id: &MatchId) -> Result<MatchRecord, DomainError> {
        (**self).get(id)
    }

    fn records(&self) -> Vec<MatchRecord> {
        (**self).records()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Entries {
    by_id: HashMap<MatchId, MatchRecord>,
    /// Newest first.
    order: Vec<MatchId>,
}

#[derive(Default)]
pub struct InMemoryMatchStore {
    entries: RwLock<Entries>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_subscription: AtomicU64,
}

impl InMemoryMatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Call `listener` after every successful [`MatchStore::add`].
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().push((id, Arc::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(sid, _)| *sid != id);
        listeners.len() != before
    }

    fn emit(&self) {
        // Listeners run outside the lock so they may call back into the store.
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in listeners {
            listener();
        }
    }
}

impl MatchStore for InMemoryMatchStore {
    fn add(&self, record: MatchRecord) -> Result<(), DomainError> {
        {
            let mut entries = self.entries.write();
            if entries.by_id.contains_key(&record.id) {
                return Err(DomainError::conflict(
                    ConflictKind::DuplicateMatch,
                    format!("match {} already recorded", record.id),
                ));
            }
            debug!(match_id = %record.id, "storing match");
            entries.order.insert(0, record.id.clone());
            entries.by_id.insert(record.id.clone(), record);
        }
        self.emit();
        Ok(())
    }

    fn summaries(&self) -> Vec<MatchSummary> {
        let entries = self.entries.read();
        entries
            .order
            .iter()
            .filter_map(|id| entries.by_id.get(id))
            .map(MatchRecord::summary)
            .collect()
    }

    fn get(&self, id: &MatchId) -> Result<MatchRecord, DomainError> {
        self.entries
            .read()
            .by_id
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Match, format!("match {id}")))
    }

    fn records(&self) -> Vec<MatchRecord> {
        let entries = self.entries.read();
        entries
            .order
            .iter()
            .filter_map(|id| entries.by_id.get(id).cloned())
            .collect()
    }
}
