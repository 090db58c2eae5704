/* src/site/engine/wasm/src/fetch.rs */

use reborn_engine::{ContentKey, ContentSource, FetchError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

pub(crate) fn describe(value: &JsValue) -> String {
  value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Content documents fetched from the page's own origin.
#[derive(Debug, Clone, Default)]
pub struct WindowFetch {
  /// Prefix for `/data/<key>.json`; empty for same-origin.
  base: String,
}

impl WindowFetch {
  pub fn with_base(base: impl Into<String>) -> Self {
    Self { base: base.into().trim_end_matches('/').to_string() }
  }
}

impl ContentSource for WindowFetch {
  async fn fetch(&self, key: ContentKey) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or_else(|| FetchError::Network("no window".into()))?;
    let url = format!("{}{}", self.base, key.data_path());
    let value = JsFuture::from(window.fetch_with_str(&url))
      .await
      .map_err(|e| FetchError::Network(describe(&e)))?;
    let response: Response =
      value.dyn_into().map_err(|e| FetchError::Network(describe(&e)))?;
    if !response.ok() {
      return Err(FetchError::Status(response.status()));
    }
    let body = response.text().map_err(|e| FetchError::Io(describe(&e)))?;
    let text = JsFuture::from(body).await.map_err(|e| FetchError::Io(describe(&e)))?;
    text.as_string().ok_or_else(|| FetchError::Io("response body is not text".into()))
  }
}
