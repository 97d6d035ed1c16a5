//! Resource resolution
//!
//! Resolution is synchronous and never blocks navigation on I/O:
//! - `"new"` → a fresh unsaved record for the collection
//! - a loaded id → the very instance the collection holds
//! - an unknown id → a placeholder seeded with that id, for the screen to
//!   reconcile once it has fetched

use std::sync::Arc;

use crate::collection::Collection;
use crate::record::{Attributes, RecordRef};
use crate::registry::CollectionRegistry;
use crate::Result;

/// Data handed to a record screen
#[derive(Debug, Clone)]
pub enum ResourceHandle {
    /// Record already held by the collection
    Existing(RecordRef),
    /// Fresh unsaved record, no id assigned
    Placeholder(RecordRef),
    /// Record seeded with an id that is not loaded in memory
    Missing(RecordRef),
}

impl ResourceHandle {
    pub fn record(&self) -> &RecordRef {
        match self {
            ResourceHandle::Existing(record)
            | ResourceHandle::Placeholder(record)
            | ResourceHandle::Missing(record) => record,
        }
    }

    pub fn is_existing(&self) -> bool {
        matches!(self, ResourceHandle::Existing(_))
    }

    /// True for both fresh and seeded placeholders
    pub fn is_placeholder(&self) -> bool {
        !self.is_existing()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceHandle::Existing(_) => "existing",
            ResourceHandle::Placeholder(_) => "placeholder",
            ResourceHandle::Missing(_) => "missing",
        }
    }
}

/// Outcome of resolving a named collection and optional record id
#[derive(Debug, Clone)]
pub enum Resolution {
    Record(ResourceHandle),
    Collection(Arc<dyn Collection>),
}

#[derive(Debug, Clone)]
pub struct ResourceResolver {
    /// Record id that requests a new record
    new_sentinel: String,
}

impl ResourceResolver {
    pub fn new() -> Self {
        Self::with_sentinel("new")
    }

    pub fn with_sentinel(sentinel: impl Into<String>) -> Self {
        Self {
            new_sentinel: sentinel.into(),
        }
    }

    pub fn sentinel(&self) -> &str {
        &self.new_sentinel
    }

    /// Resolve a record id within a collection. Always yields a handle.
    pub fn resolve(&self, collection: &dyn Collection, record_id: &str) -> ResourceHandle {
        let handle = if record_id == self.new_sentinel {
            ResourceHandle::Placeholder(collection.new_record(Attributes::new()))
        } else if let Some(record) = collection.get(record_id) {
            ResourceHandle::Existing(record)
        } else {
            let mut seed = Attributes::new();
            seed.insert(
                "id".to_string(),
                serde_json::Value::String(record_id.to_string()),
            );
            ResourceHandle::Missing(collection.new_record(seed))
        };

        tracing::debug!(
            collection = %collection.name(),
            record_id = %record_id,
            handle = handle.as_str(),
            "Resolved record"
        );

        handle
    }

    /// Resolve against a registry. Without a record id the whole
    /// collection is returned.
    pub fn resolve_in(
        &self,
        registry: &CollectionRegistry,
        collection: &str,
        record_id: Option<&str>,
    ) -> Result<Resolution> {
        let collection = registry.require(collection)?;
        Ok(match record_id {
            Some(id) => Resolution::Record(self.resolve(collection.as_ref(), id)),
            None => Resolution::Collection(collection),
        })
    }
}

impl Default for ResourceResolver {
    fn default() -> Self {
        Self::new()
    }
}
