/* src/site/engine/rust/src/error.rs */

/// Failure to obtain a content document's body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
  /// The server answered with a non-success status.
  #[error("HTTP {0}")]
  Status(u16),
  #[error("network error: {0}")]
  Network(String),
  /// Local read failure (filesystem sources, body streams).
  #[error("read failed: {0}")]
  Io(String),
}

/// Why a loader wrote nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
  #[error("fetch failed: {0}")]
  Fetch(#[from] FetchError),
  /// The body is not JSON.
  #[error("invalid JSON: {0}")]
  Parse(String),
  /// The body is JSON but does not fit the page's content document.
  #[error("unexpected content shape: {0}")]
  Shape(String),
}

impl LoadError {
  pub fn kind(&self) -> &'static str {
    match self {
      LoadError::Fetch(_) => "fetch-error",
      LoadError::Parse(_) => "parse-error",
      LoadError::Shape(_) => "shape-error",
    }
  }
}

/// Failure reported by a form submitter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
  #[error("endpoint answered HTTP {0}")]
  Status(u16),
  #[error("network error: {0}")]
  Network(String),
  #[error("submission rejected: {0}")]
  Rejected(String),
}
