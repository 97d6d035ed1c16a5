//! Read-only chrome handle

use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use atrium_data::SubscriptionId;

use crate::state::{ChromeEvent, ChromeState};
use crate::tab::Tab;

pub type ChromeListener = Arc<dyn Fn(&ChromeEvent) + Send + Sync>;

/// Shared view of the chrome handed to screens. It reads the same state
/// the [`crate::Chrome`] writes, but has no write path of its own.
#[derive(Clone)]
pub struct ChromeView {
    pub(crate) state: Arc<RwLock<ChromeState>>,
    /// Renderers notified on observable changes
    listeners: Arc<RwLock<Vec<(SubscriptionId, ChromeListener)>>>,
    next_listener: Arc<AtomicU64>,
    /// Appended to the document title when set
    pub(crate) site_name: Option<String>,
}

impl ChromeView {
    pub(crate) fn new(state: ChromeState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
            listeners: Arc::new(RwLock::new(Vec::new())),
            next_listener: Arc::new(AtomicU64::new(1)),
            site_name: None,
        }
    }

    pub fn title(&self) -> String {
        self.state.read().title.clone()
    }

    /// Title as rendered in the browser, with the site name appended
    pub fn document_title(&self) -> String {
        let title = self.title();
        match self.site_name.as_deref() {
            Some(site) if title.is_empty() => site.to_string(),
            Some(site) => format!("{} · {}", title, site),
            None => title,
        }
    }

    pub fn active_tab(&self) -> Option<String> {
        self.state.read().active_tab.clone()
    }

    pub fn tabs(&self) -> Vec<Tab> {
        self.state.read().tabs.clone()
    }

    pub fn tab(&self, tab_id: &str) -> Option<Tab> {
        self.state.read().tab(tab_id).cloned()
    }

    pub fn snapshot(&self) -> ChromeState {
        self.state.read().clone()
    }

    pub fn subscribe(&self, listener: ChromeListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_listener.fetch_add(1, Ordering::SeqCst));
        self.listeners.write().push((id, listener));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.write().retain(|(listener, _)| *listener != id);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.read().len()
    }

    pub(crate) fn emit(&self, event: ChromeEvent) {
        let listeners: Vec<ChromeListener> = self
            .listeners
            .read()
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in listeners {
            listener(&event);
        }
    }
}

impl std::fmt::Debug for ChromeView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChromeView")
            .field("state", &*self.state.read())
            .field("site_name", &self.site_name)
            .finish()
    }
}
