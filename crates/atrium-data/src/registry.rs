//! Name → collection mapping

use std::collections::HashMap;
use std::sync::Arc;

use crate::collection::Collection;
use crate::error::DataError;
use crate::Result;

#[derive(Default, Clone)]
pub struct CollectionRegistry {
    collections: HashMap<String, Arc<dyn Collection>>,
}

impl CollectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a collection under its own name
    pub fn register(&mut self, collection: Arc<dyn Collection>) -> &mut Self {
        self.collections
            .insert(collection.name().to_string(), collection);
        self
    }

    pub fn with(mut self, collection: Arc<dyn Collection>) -> Self {
        self.register(collection);
        self
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Collection>> {
        self.collections.get(name).cloned()
    }

    pub fn require(&self, name: &str) -> Result<Arc<dyn Collection>> {
        self.get(name)
            .ok_or_else(|| DataError::UnknownCollection(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.collections.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// Collection names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.collections.keys().cloned().collect();
        names.sort();
        names
    }
}

impl std::fmt::Debug for CollectionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionRegistry")
            .field("collections", &self.names())
            .finish()
    }
}
