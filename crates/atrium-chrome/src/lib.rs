//! Atrium Chrome
//!
//! The persistent UI around the main region: document title and tab strip.
//! Writes are applied immediately and are idempotent; listeners only hear
//! about changes that alter observable state. Screens only ever receive a
//! [`ChromeView`].

mod chrome;
mod state;
mod tab;
mod view;
mod watch;

pub use chrome::Chrome;
pub use state::{ChromeEvent, ChromeState};
pub use tab::{Tab, TabState};
pub use view::{ChromeListener, ChromeView};
pub use watch::CountWatch;
