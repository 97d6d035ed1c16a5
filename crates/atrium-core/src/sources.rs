//! Data collaborators the navigator reads from

use std::sync::Arc;

use atrium_data::{Collection, CollectionRegistry, MemoryCollection};

use crate::config::CountSource;

/// Handles to the host's data layer. The navigator only reads these.
#[derive(Clone, Debug)]
pub struct DataSources {
    /// One record per user collection (the collection index)
    pub catalog: Arc<dyn Collection>,
    /// Records of each user collection, by collection name
    pub collections: CollectionRegistry,
    /// Column definitions of each user collection, by collection name
    pub schemas: CollectionRegistry,
    pub activity: Arc<dyn Collection>,
    pub media: Arc<dyn Collection>,
    pub users: Arc<dyn Collection>,
    pub messages: Arc<dyn Collection>,
    /// Settings records keyed by id (`global`, `media`, ...)
    pub settings: Arc<dyn Collection>,
}

impl DataSources {
    /// Empty in-memory sources
    pub fn empty() -> Self {
        Self {
            catalog: Arc::new(MemoryCollection::new("collections")),
            collections: CollectionRegistry::new(),
            schemas: CollectionRegistry::new(),
            activity: Arc::new(MemoryCollection::new("activity")),
            media: Arc::new(MemoryCollection::new("media")),
            users: Arc::new(MemoryCollection::new("users")),
            messages: Arc::new(MemoryCollection::new("messages")),
            settings: Arc::new(MemoryCollection::new("settings")),
        }
    }

    pub(crate) fn count_source(&self, source: CountSource) -> Option<&Arc<dyn Collection>> {
        match source {
            CountSource::Activity => Some(&self.activity),
            CountSource::Catalog => Some(&self.catalog),
            CountSource::Media => Some(&self.media),
            CountSource::Users => Some(&self.users),
            CountSource::None => None,
        }
    }
}

impl Default for DataSources {
    fn default() -> Self {
        Self::empty()
    }
}
