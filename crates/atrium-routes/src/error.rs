//! Routing error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("No route matches path: {0:?}")]
    NotFound(String),

    #[error("Invalid route pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Missing parameter {param:?} for pattern {pattern:?}")]
    MissingParam { pattern: String, param: String },
}
