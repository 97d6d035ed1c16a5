//! Screen contract

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use atrium_chrome::ChromeView;
use atrium_data::{Collection, ResourceHandle};

use crate::error::ScreenError;
use crate::ui::UiHelpers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenKind {
    Landing,
    CollectionIndex,
    RecordList,
    RecordEdit,
    ActivityList,
    MediaList,
    UserList,
    UserEdit,
    SettingsMain,
    SettingsTables,
    SettingsGlobal,
    SettingsMedia,
    SettingsPermissions,
    SettingsSystem,
    SettingsAbout,
    SettingsSchema,
    MessageList,
    Navbar,
    TabStrip,
    Alert,
    Modal,
}

impl ScreenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenKind::Landing => "landing",
            ScreenKind::CollectionIndex => "collection_index",
            ScreenKind::RecordList => "record_list",
            ScreenKind::RecordEdit => "record_edit",
            ScreenKind::ActivityList => "activity_list",
            ScreenKind::MediaList => "media_list",
            ScreenKind::UserList => "user_list",
            ScreenKind::UserEdit => "user_edit",
            ScreenKind::SettingsMain => "settings_main",
            ScreenKind::SettingsTables => "settings_tables",
            ScreenKind::SettingsGlobal => "settings_global",
            ScreenKind::SettingsMedia => "settings_media",
            ScreenKind::SettingsPermissions => "settings_permissions",
            ScreenKind::SettingsSystem => "settings_system",
            ScreenKind::SettingsAbout => "settings_about",
            ScreenKind::SettingsSchema => "settings_schema",
            ScreenKind::MessageList => "message_list",
            ScreenKind::Navbar => "navbar",
            ScreenKind::TabStrip => "tab_strip",
            ScreenKind::Alert => "alert",
            ScreenKind::Modal => "modal",
        }
    }
}

impl std::fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Data a screen is bound to
#[derive(Debug, Clone)]
pub enum Binding {
    Empty,
    Record(ResourceHandle),
    Collection(Arc<dyn Collection>),
    /// Alert text
    Message(String),
    /// Live, read-only chrome for the tab strip
    Chrome(ChromeView),
}

impl Binding {
    pub fn record(&self) -> Option<&ResourceHandle> {
        match self {
            Binding::Record(handle) => Some(handle),
            _ => None,
        }
    }

    pub fn collection(&self) -> Option<&Arc<dyn Collection>> {
        match self {
            Binding::Collection(collection) => Some(collection),
            _ => None,
        }
    }

    pub fn chrome(&self) -> Option<&ChromeView> {
        match self {
            Binding::Chrome(view) => Some(view),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Binding::Empty => "empty",
            Binding::Record(_) => "record",
            Binding::Collection(_) => "collection",
            Binding::Message(_) => "message",
            Binding::Chrome(_) => "chrome",
        }
    }
}

/// Configuration bag every screen receives
#[derive(Debug, Clone)]
pub struct MountOptions {
    pub kind: ScreenKind,
    pub binding: Binding,
    /// Shared helpers, identical for every screen
    pub ui: Arc<UiHelpers>,
}

pub trait Screen {
    fn render(&mut self) -> Result<(), ScreenError>;

    /// Release timers, subscriptions and anything else the screen holds.
    /// Called exactly once.
    fn teardown(&mut self) {}
}

pub trait ScreenFactory {
    fn build(&self, options: &MountOptions) -> Result<Box<dyn Screen>, ScreenError>;
}

impl<F> ScreenFactory for F
where
    F: Fn(&MountOptions) -> Result<Box<dyn Screen>, ScreenError>,
{
    fn build(&self, options: &MountOptions) -> Result<Box<dyn Screen>, ScreenError> {
        self(options)
    }
}
