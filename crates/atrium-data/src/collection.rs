//! Collection collaborator interface
//!
//! Remote fetching, pagination and persistence live behind this trait.
//! [`MemoryCollection`] is the in-process implementation used by hosts
//! that preload their data and by tests.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use crate::record::{Attributes, Record, RecordRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Removed,
    Changed,
    Reset,
}

/// Emitted after a collection mutation has been applied
#[derive(Debug, Clone)]
pub struct CollectionEvent {
    pub collection: String,
    pub change: ChangeKind,
    /// Length of the collection after the change
    pub len: usize,
}

pub type CollectionListener = Arc<dyn Fn(&CollectionEvent) + Send + Sync>;

pub trait Collection: Send + Sync {
    fn name(&self) -> &str;

    /// Look up an in-memory record by id
    fn get(&self, id: &str) -> Option<RecordRef>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this collection holds exactly one logical record
    fn is_singular(&self) -> bool;

    /// Construct an unsaved record associated with this collection.
    /// The record is not inserted.
    fn new_record(&self, attributes: Attributes) -> RecordRef {
        Arc::new(Record::new(self.name(), attributes))
    }

    fn subscribe(&self, listener: CollectionListener) -> SubscriptionId;

    fn unsubscribe(&self, id: SubscriptionId);
}

impl std::fmt::Debug for dyn Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection")
            .field("name", &self.name())
            .field("len", &self.len())
            .finish()
    }
}

pub struct MemoryCollection {
    name: String,
    singular: AtomicBool,
    records: RwLock<Vec<RecordRef>>,
    listeners: RwLock<Vec<(SubscriptionId, CollectionListener)>>,
    next_subscription: AtomicU64,
}

impl MemoryCollection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            singular: AtomicBool::new(false),
            records: RwLock::new(Vec::new()),
            listeners: RwLock::new(Vec::new()),
            next_subscription: AtomicU64::new(1),
        }
    }

    /// Build a collection from attribute maps, in order
    pub fn with_records<I>(name: impl Into<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = Attributes>,
    {
        let collection = Self::new(name);
        {
            let mut records = collection.records.write();
            for attrs in rows {
                records.push(Arc::new(Record::new(collection.name.clone(), attrs)));
            }
        }
        collection
    }

    pub fn singular(self, singular: bool) -> Self {
        self.singular.store(singular, Ordering::SeqCst);
        self
    }

    pub fn set_singular(&self, singular: bool) {
        self.singular.store(singular, Ordering::SeqCst);
        self.emit(ChangeKind::Changed);
    }

    /// Insert a record, replacing any record with the same id
    pub fn insert(&self, record: RecordRef) {
        {
            let mut records = self.records.write();
            match record.id() {
                Some(id) => {
                    if let Some(pos) = records.iter().position(|r| r.id().as_deref() == Some(&id))
                    {
                        records[pos] = record;
                    } else {
                        records.push(record);
                    }
                }
                None => records.push(record),
            }
        }
        self.emit(ChangeKind::Added);
    }

    pub fn remove(&self, id: &str) -> Option<RecordRef> {
        let removed = {
            let mut records = self.records.write();
            let pos = records.iter().position(|r| r.id().as_deref() == Some(id))?;
            records.remove(pos)
        };
        self.emit(ChangeKind::Removed);
        Some(removed)
    }

    pub fn reset<I>(&self, rows: I)
    where
        I: IntoIterator<Item = Attributes>,
    {
        {
            let mut records = self.records.write();
            records.clear();
            for attrs in rows {
                records.push(Arc::new(Record::new(self.name.clone(), attrs)));
            }
        }
        self.emit(ChangeKind::Reset);
    }

    pub fn records(&self) -> Vec<RecordRef> {
        self.records.read().clone()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.read().len()
    }

    // Listeners run after every lock is released so they may read back.
    fn emit(&self, change: ChangeKind) {
        let event = CollectionEvent {
            collection: self.name.clone(),
            change,
            len: self.len(),
        };
        let listeners: Vec<CollectionListener> = self
            .listeners
            .read()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        tracing::trace!(
            collection = %self.name,
            change = ?change,
            listeners = listeners.len(),
            "Collection changed"
        );

        for listener in listeners {
            listener(&event);
        }
    }
}

impl Collection for MemoryCollection {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, id: &str) -> Option<RecordRef> {
        self.records
            .read()
            .iter()
            .find(|r| r.id().as_deref() == Some(id))
            .cloned()
    }

    fn len(&self) -> usize {
        self.records.read().len()
    }

    fn is_singular(&self) -> bool {
        self.singular.load(Ordering::SeqCst)
    }

    fn subscribe(&self, listener: CollectionListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::SeqCst));
        self.listeners.write().push((id, listener));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.write().retain(|(sub, _)| *sub != id);
    }
}
