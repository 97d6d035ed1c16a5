//! Atrium Shell
//!
//! Owns what is on screen:
//! - named regions, each hosting at most one live screen
//! - the overlay stack (zero or one alert, any number of modals)
//!
//! Screens themselves are supplied by the host through [`ScreenFactory`]
//! implementations registered in a [`ScreenCatalog`].

mod catalog;
mod error;
mod overlay;
mod region;
mod screen;
mod ui;

pub use catalog::ScreenCatalog;
pub use error::{OverlayError, RegionError, ScreenError};
pub use overlay::{AlertHandle, ModalHandle, OverlayId, OverlayManager};
pub use region::{MountId, MountInfo, RegionManager};
pub use screen::{Binding, MountOptions, Screen, ScreenFactory, ScreenKind};
pub use ui::UiHelpers;

/// Region hosting the navigated screen
pub const MAIN_REGION: &str = "main";
/// Region hosting the navigation bar
pub const NAVBAR_REGION: &str = "navbar";
/// Region hosting the tab strip
pub const TABS_REGION: &str = "tabs";
