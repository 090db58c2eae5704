/* src/site/engine/rust/src/source.rs */

use std::collections::HashMap;
use std::future::Future;

use crate::error::FetchError;
use crate::route::ContentKey;

/// Where content documents come from: `fetch` in the browser, the data
/// directory at build time, a deployed site for `pull`.
pub trait ContentSource {
  fn fetch(&self, key: ContentKey) -> impl Future<Output = Result<String, FetchError>>;
}

impl<S: ContentSource> ContentSource for &S {
  fn fetch(&self, key: ContentKey) -> impl Future<Output = Result<String, FetchError>> {
    (**self).fetch(key)
  }
}

/// Fixed bodies held in memory. Unknown keys answer 404.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
  bodies: HashMap<ContentKey, String>,
}

impl MemorySource {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with(mut self, key: ContentKey, body: impl Into<String>) -> Self {
    self.bodies.insert(key, body.into());
    self
  }

  pub fn insert(&mut self, key: ContentKey, body: impl Into<String>) {
    self.bodies.insert(key, body.into());
  }
}

impl ContentSource for MemorySource {
  fn fetch(&self, key: ContentKey) -> impl Future<Output = Result<String, FetchError>> {
    std::future::ready(self.bodies.get(&key).cloned().ok_or(FetchError::Status(404)))
  }
}
