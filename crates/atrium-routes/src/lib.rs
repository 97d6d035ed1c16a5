//! Atrium Routing
//!
//! Maps normalized URL paths to handlers:
//!   1. Input is normalized (fragment, query and slashes stripped)
//!   2. Routes are tried in registration order
//!   3. The first structural match wins and binds its parameters
//!
//! The table does not infer specificity. Register the most specific
//! patterns first.

mod error;
mod path;
mod pattern;
mod table;

pub use error::RouteError;
pub use path::{normalize, segments};
pub use pattern::{PathPattern, Segment};
pub use table::{NavigationRequest, Params, Route, RouteTable};

pub type Result<T> = std::result::Result<T, RouteError>;
