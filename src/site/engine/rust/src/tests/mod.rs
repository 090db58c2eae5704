/* src/site/engine/rust/src/tests/mod.rs */

mod fixtures;
mod forms;
