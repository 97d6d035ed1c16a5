//! Shell error types

use thiserror::Error;

use crate::screen::ScreenKind;

#[derive(Error, Debug)]
pub enum ScreenError {
    #[error("No screen registered for {0}")]
    Unregistered(ScreenKind),

    #[error("Screen construction failed: {0}")]
    Construction(String),

    #[error("Screen render failed: {0}")]
    Render(String),
}

#[derive(Error, Debug)]
pub enum RegionError {
    /// The previous screen has been torn down and the region is empty
    #[error("Failed to mount screen in region {region:?}: {source}")]
    MountFailure {
        region: String,
        #[source]
        source: ScreenError,
    },
}

#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("Overlay screen error: {0}")]
    Screen(#[from] ScreenError),

    #[error("Unknown modal: {0}")]
    UnknownModal(String),
}
