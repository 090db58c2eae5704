/* src/site/engine/rust/src/interact/mod.rs */

// Page behaviours as plain functions over `Dom`. Hosts own the event
// listeners and call in here; nothing in this module keeps state between
// events.

pub mod anchor;
pub mod form;
pub mod gate;
pub mod menu;
pub mod nav;
pub mod reveal;

pub use form::{
  FormEndpoint, FormKind, FormPayload, FormSubmitter, Notice, SimulatedSubmitter, Timer,
  dismiss_notice, submit_form,
};
pub use gate::{GateDecision, MemorySession, PasswordGate, Prompter, SessionStore};
pub use menu::Menu;
