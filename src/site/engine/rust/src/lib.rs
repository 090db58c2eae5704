/* src/site/engine/rust/src/lib.rs */

pub mod content;
pub mod error;
pub mod interact;
pub mod loader;
pub mod page;
pub mod route;
pub mod slot;
pub mod source;

pub use error::{FetchError, LoadError, SubmitError};
pub use loader::{LoadOutcome, apply_content, load_route_content};
pub use page::{PageBodies, PageOptions, PageReport, apply_page, fetch_page, load_page};
pub use route::{ContentKey, Route};
pub use slot::{Slot, SlotCheck, check_slots};
pub use source::{ContentSource, MemorySource};

/// Re-export the document layer so hosts depend on one crate.
pub use reborn_injector;

#[cfg(test)]
mod tests;
