/* src/site/injector/rust/src/lib.rs */

mod document;
mod dom;
mod selector;
pub mod value;
pub mod write;

pub use document::{Document, NodeId};
pub use dom::Dom;
pub use selector::{SelectorError, SelectorList};
pub use write::{Injector, WriteStats};

#[cfg(test)]
mod tests;
