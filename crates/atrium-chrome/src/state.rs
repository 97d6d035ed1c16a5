//! Chrome state and change events

use serde::Serialize;

use crate::tab::{Tab, TabState};

/// Single process-wide chrome state, owned by [`crate::Chrome`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChromeState {
    pub title: String,
    pub active_tab: Option<String>,
    pub tabs: Vec<Tab>,
}

impl ChromeState {
    pub fn tab(&self, id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub(crate) fn apply_active(&mut self) {
        let active = self.active_tab.as_deref();
        for tab in &mut self.tabs {
            tab.state = if Some(tab.id.as_str()) == active {
                TabState::Active
            } else {
                TabState::Inactive
            };
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChromeEvent {
    TitleChanged { title: String },
    ActiveTabChanged { tab: Option<String> },
    TabCountChanged { tab: String, count: Option<usize> },
}
