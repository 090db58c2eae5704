/* src/site/engine/rust/src/interact/gate.rs */

// Prompt-based access check for the presentation page. The secret ships
// with the page, so this keeps casual visitors out and nothing more.

use std::collections::HashMap;

pub const GATED_PATH_MARKER: &str = "presentation.html";
pub const SESSION_KEY: &str = "presentationAccess";
pub const DEFAULT_SECRET: &str = "KH2025";
pub const PROMPT_TEXT: &str = "Ange lösenord för att visa denna sida:";
pub const DENIED_TEXT: &str = "Felaktigt lösenord";
pub const REDIRECT_TARGET: &str = "index.html";

/// Session-scoped key/value storage.
pub trait SessionStore {
  fn get(&self, key: &str) -> Option<String>;
  fn set(&mut self, key: &str, value: &str);
}

/// Modal dialogs.
pub trait Prompter {
  /// `None` when the visitor cancels.
  fn prompt(&mut self, message: &str) -> Option<String>;
  fn alert(&mut self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
  /// The path is not gated.
  Open,
  /// The session already holds the secret; no prompt shown.
  Remembered,
  /// The visitor entered the secret; it is now stored for the session.
  Granted,
  /// Wrong or cancelled entry. The host navigates to `redirect`.
  Denied { redirect: &'static str },
}

impl GateDecision {
  pub fn allows_view(self) -> bool {
    !matches!(self, GateDecision::Denied { .. })
  }
}

#[derive(Debug, Clone)]
pub struct PasswordGate {
  secret: String,
}

impl Default for PasswordGate {
  fn default() -> Self {
    Self::new(DEFAULT_SECRET)
  }
}

impl PasswordGate {
  pub fn new(secret: impl Into<String>) -> Self {
    Self { secret: secret.into() }
  }

  pub fn guards(path: &str) -> bool {
    path.contains(GATED_PATH_MARKER)
  }

  pub fn check<S, P>(&self, path: &str, session: &mut S, prompter: &mut P) -> GateDecision
  where
    S: SessionStore,
    P: Prompter,
  {
    if !Self::guards(path) {
      return GateDecision::Open;
    }
    if session.get(SESSION_KEY).as_deref() == Some(self.secret.as_str()) {
      return GateDecision::Remembered;
    }
    if prompter.prompt(PROMPT_TEXT).as_deref() == Some(self.secret.as_str()) {
      session.set(SESSION_KEY, &self.secret);
      tracing::debug!("presentation unlocked for this session");
      GateDecision::Granted
    } else {
      prompter.alert(DENIED_TEXT);
      GateDecision::Denied { redirect: REDIRECT_TARGET }
    }
  }
}

/// In-memory [`SessionStore`], for hosts without browser storage.
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
  values: HashMap<String, String>,
}

impl SessionStore for MemorySession {
  fn get(&self, key: &str) -> Option<String> {
    self.values.get(key).cloned()
  }

  fn set(&mut self, key: &str, value: &str) {
    self.values.insert(key.to_string(), value.to_string());
  }
}
