//! Data error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Unknown collection: {0}")]
    UnknownCollection(String),
}
