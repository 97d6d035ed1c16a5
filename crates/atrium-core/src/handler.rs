//! Route handlers
//!
//! Every route maps to one [`Handler`] variant, fixed at startup.

use serde::{Deserialize, Serialize};

use atrium_routes::RouteTable;
use atrium_shell::ScreenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Handler {
    Index,
    Collections,
    Entries,
    Entry,
    Activity,
    Media,
    Users,
    Settings,
    SettingsSchema,
    Messages,
}

impl Handler {
    /// The application route table, most specific patterns first
    pub fn routes() -> atrium_routes::Result<RouteTable<Handler>> {
        RouteTable::new()
            .route("", Handler::Index)?
            .route("collections", Handler::Collections)?
            .route("collections/:name/:id", Handler::Entry)?
            .route("collections/:name", Handler::Entries)?
            .route("activity", Handler::Activity)?
            .route("media", Handler::Media)?
            .route("users/:id?", Handler::Users)?
            .route("settings/collections/:name", Handler::SettingsSchema)?
            .route("settings/:name?", Handler::Settings)?
            .route("messages", Handler::Messages)
    }

    /// Fixed chrome: title and tab. The index route takes both from config.
    pub(crate) fn chrome(&self) -> (&'static str, Option<&'static str>) {
        match self {
            Handler::Index | Handler::Collections | Handler::Entries | Handler::Entry => {
                ("Tables", Some("tables"))
            }
            Handler::Activity => ("Activity", Some("activity")),
            Handler::Media => ("Media", Some("media")),
            Handler::Users => ("Users", Some("users")),
            Handler::Settings | Handler::SettingsSchema => ("Settings", Some("settings")),
            Handler::Messages => ("Messages", None),
        }
    }
}

/// Settings sub-panels. Unknown names fall back to [`SettingsPanel::Main`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsPanel {
    Main,
    Tables,
    Global,
    Media,
    Permissions,
    System,
    About,
}

impl SettingsPanel {
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("tables") => SettingsPanel::Tables,
            Some("global") => SettingsPanel::Global,
            Some("media") => SettingsPanel::Media,
            Some("permissions") => SettingsPanel::Permissions,
            Some("system") => SettingsPanel::System,
            Some("about") => SettingsPanel::About,
            Some(other) => {
                tracing::warn!(panel = %other, "Unknown settings panel, showing main");
                SettingsPanel::Main
            }
            None => SettingsPanel::Main,
        }
    }

    pub fn screen(&self) -> ScreenKind {
        match self {
            SettingsPanel::Main => ScreenKind::SettingsMain,
            SettingsPanel::Tables => ScreenKind::SettingsTables,
            SettingsPanel::Global => ScreenKind::SettingsGlobal,
            SettingsPanel::Media => ScreenKind::SettingsMedia,
            SettingsPanel::Permissions => ScreenKind::SettingsPermissions,
            SettingsPanel::System => ScreenKind::SettingsSystem,
            SettingsPanel::About => ScreenKind::SettingsAbout,
        }
    }

    /// Settings record the panel edits, if any
    pub fn settings_key(&self) -> Option<&'static str> {
        match self {
            SettingsPanel::Global => Some("global"),
            SettingsPanel::Media => Some("media"),
            _ => None,
        }
    }
}
