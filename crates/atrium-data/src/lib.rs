//! Atrium Data Interface
//!
//! The navigation core never fetches or persists anything. It only sees
//! collections through the [`Collection`] trait and hands screens one of:
//! - an existing in-memory record
//! - a placeholder record (new, or seeded with an id that is not loaded)
//! - a whole collection

mod collection;
mod error;
mod record;
mod registry;
mod resolver;

pub use collection::{
    ChangeKind, Collection, CollectionEvent, CollectionListener, MemoryCollection, SubscriptionId,
};
pub use error::DataError;
pub use record::{Attributes, Record, RecordRef};
pub use registry::CollectionRegistry;
pub use resolver::{Resolution, ResourceHandle, ResourceResolver};

pub type Result<T> = std::result::Result<T, DataError>;
