/* src/site/engine/wasm/src/storage.rs */

use reborn_engine::interact::{Prompter, SessionStore};
use web_sys::{Storage, Window};

/// `window.sessionStorage`. Reads as empty when storage is unavailable
/// (private mode, sandboxed frames).
#[derive(Debug, Clone)]
pub struct BrowserSession {
  storage: Option<Storage>,
}

impl BrowserSession {
  pub fn new(window: &Window) -> Self {
    Self { storage: window.session_storage().ok().flatten() }
  }
}

impl SessionStore for BrowserSession {
  fn get(&self, key: &str) -> Option<String> {
    self.storage.as_ref()?.get_item(key).ok().flatten()
  }

  fn set(&mut self, key: &str, value: &str) {
    if let Some(storage) = &self.storage {
      logged("sessionStorage write", storage.set_item(key, value));
    }
  }
}

/// `window.prompt` and `window.alert`.
#[derive(Debug, Clone)]
pub struct BrowserDialogs {
  window: Window,
}

impl BrowserDialogs {
  pub fn new(window: Window) -> Self {
    Self { window }
  }
}

impl Prompter for BrowserDialogs {
  fn prompt(&mut self, message: &str) -> Option<String> {
    self.window.prompt_with_message(message).ok().flatten()
  }

  fn alert(&mut self, message: &str) {
    logged("window.alert", self.window.alert_with_message(message));
  }
}

/// Warn about a failed browser call and keep going.
fn logged<T, E: std::fmt::Debug>(call: &str, result: Result<T, E>) -> Option<T> {
  match result {
    Ok(value) => Some(value),
    Err(e) => {
      tracing::warn!(call, error = ?e, "browser call failed");
      None
    }
  }
}
