//! Atrium Core
//!
//! Navigation controller for the admin application. A [`Navigator`] owns
//! all navigation state: the route table, the chrome, the mounted regions
//! and the overlay stack. A URL change flows through it as:
//!   route match → chrome update → resource resolution → main-region mount

mod config;
mod error;
mod handler;
mod navigator;
mod sources;

pub use config::{CountSource, NavigatorConfig, TabSpec};
pub use error::NavigationError;
pub use handler::{Handler, SettingsPanel};
pub use navigator::Navigator;
pub use sources::DataSources;

pub use atrium_chrome::{ChromeEvent, ChromeListener, ChromeState, ChromeView, Tab, TabState};
pub use atrium_data::{
    Attributes, ChangeKind, Collection, CollectionEvent, CollectionRegistry, DataError,
    MemoryCollection, Record, RecordRef, ResourceHandle, ResourceResolver,
};
pub use atrium_routes::{NavigationRequest, RouteError, RouteTable};
pub use atrium_shell::{
    AlertHandle, Binding, ModalHandle, MountInfo, MountOptions, OverlayError, RegionError,
    Screen, ScreenCatalog, ScreenError, ScreenFactory, ScreenKind, UiHelpers, MAIN_REGION,
    NAVBAR_REGION, TABS_REGION,
};

pub type Result<T> = std::result::Result<T, NavigationError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
