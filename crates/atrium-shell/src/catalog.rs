//! Screen kind → factory registry

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ScreenError;
use crate::screen::{MountOptions, Screen, ScreenFactory, ScreenKind};

#[derive(Default, Clone)]
pub struct ScreenCatalog {
    factories: HashMap<ScreenKind, Arc<dyn ScreenFactory>>,
}

impl ScreenCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, kind: ScreenKind, factory: F) -> &mut Self
    where
        F: ScreenFactory + 'static,
    {
        self.factories.insert(kind, Arc::new(factory));
        self
    }

    pub fn with<F>(mut self, kind: ScreenKind, factory: F) -> Self
    where
        F: ScreenFactory + 'static,
    {
        self.register(kind, factory);
        self
    }

    pub fn contains(&self, kind: ScreenKind) -> bool {
        self.factories.contains_key(&kind)
    }

    pub fn factory(&self, kind: ScreenKind) -> Option<Arc<dyn ScreenFactory>> {
        self.factories.get(&kind).cloned()
    }

    /// Factory for `kind`, or one that fails with
    /// [`ScreenError::Unregistered`] when built
    pub fn resolve(&self, kind: ScreenKind) -> Arc<dyn ScreenFactory> {
        match self.factory(kind) {
            Some(factory) => factory,
            None => Arc::new(Unregistered(kind)),
        }
    }
}

impl std::fmt::Debug for ScreenCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<&str> = self.factories.keys().map(ScreenKind::as_str).collect();
        kinds.sort_unstable();
        f.debug_struct("ScreenCatalog").field("kinds", &kinds).finish()
    }
}

struct Unregistered(ScreenKind);

impl ScreenFactory for Unregistered {
    fn build(&self, _options: &MountOptions) -> Result<Box<dyn Screen>, ScreenError> {
        Err(ScreenError::Unregistered(self.0))
    }
}
