//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("Route error: {0}")]
    Route(#[from] atrium_routes::RouteError),

    #[error("Data error: {0}")]
    Data(#[from] atrium_data::DataError),

    #[error("Region error: {0}")]
    Region(#[from] atrium_shell::RegionError),

    #[error("Overlay error: {0}")]
    Overlay(#[from] atrium_shell::OverlayError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Navigator has been shut down")]
    ShutDown,
}

impl NavigationError {
    /// True when no route matched the requested path
    pub fn is_route_not_found(&self) -> bool {
        matches!(
            self,
            NavigationError::Route(atrium_routes::RouteError::NotFound(_))
        )
    }
}
