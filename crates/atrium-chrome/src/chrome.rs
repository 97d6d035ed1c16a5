//! Chrome Synchronizer
//!
//! Handles title and tab strip writes made by navigation.

use std::sync::Arc;

use atrium_data::{Collection, CollectionEvent};

use crate::state::{ChromeEvent, ChromeState};
use crate::tab::Tab;
use crate::view::ChromeView;
use crate::watch::CountWatch;

/// Write side of the chrome. Only the navigator holds one; screens get a
/// [`ChromeView`].
#[derive(Clone)]
pub struct Chrome {
    view: ChromeView,
}

impl Chrome {
    pub fn new(tabs: Vec<Tab>) -> Self {
        Self {
            view: ChromeView::new(ChromeState {
                tabs,
                ..ChromeState::default()
            }),
        }
    }

    pub fn with_site_name(mut self, site_name: Option<String>) -> Self {
        self.view.site_name = site_name;
        self
    }

    /// Read-only handle over the same state
    pub fn view(&self) -> ChromeView {
        self.view.clone()
    }

    pub fn set_title(&self, title: &str) {
        {
            let mut state = self.view.state.write();
            if state.title == title {
                return;
            }
            state.title = title.to_string();
        }

        tracing::debug!(title = %title, "Set title");
        self.view.emit(ChromeEvent::TitleChanged {
            title: title.to_string(),
        });
    }

    /// Highlight a tab. `None` clears the highlight. Ids not in the strip
    /// are recorded but highlight nothing.
    pub fn set_active_tab(&self, tab_id: Option<&str>) {
        {
            let mut state = self.view.state.write();
            if state.active_tab.as_deref() == tab_id {
                return;
            }
            state.active_tab = tab_id.map(str::to_string);
            state.apply_active();
        }

        tracing::debug!(tab = ?tab_id, "Set active tab");
        self.view.emit(ChromeEvent::ActiveTabChanged {
            tab: tab_id.map(str::to_string),
        });
    }

    pub fn set_tab_count(&self, tab_id: &str, count: Option<usize>) {
        {
            let mut state = self.view.state.write();
            let Some(tab) = state.tabs.iter_mut().find(|t| t.id == tab_id) else {
                return;
            };
            if tab.count == count {
                return;
            }
            tab.count = count;
        }

        tracing::debug!(tab = %tab_id, count = ?count, "Set tab count");
        self.view.emit(ChromeEvent::TabCountChanged {
            tab: tab_id.to_string(),
            count,
        });
    }

    /// Keep a tab's badge equal to a collection's length until the
    /// returned watch is released or dropped
    pub fn watch_count(&self, tab_id: &str, collection: &Arc<dyn Collection>) -> CountWatch {
        self.set_tab_count(tab_id, Some(collection.len()));

        let chrome = self.clone();
        let tab = tab_id.to_string();
        let subscription = collection.subscribe(Arc::new(move |event: &CollectionEvent| {
            chrome.set_tab_count(&tab, Some(event.len));
        }));

        tracing::debug!(
            tab = %tab_id,
            collection = %collection.name(),
            "Watching collection count"
        );

        CountWatch::new(tab_id, collection, subscription)
    }
}

impl std::fmt::Debug for Chrome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chrome").field("view", &self.view).finish()
    }
}
