/* src/site/engine/wasm/src/timer.rs */

use std::time::Duration;

use reborn_engine::interact::Timer;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// `setTimeout` as a future.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
  async fn sleep(&self, duration: Duration) {
    let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
      let scheduled = web_sys::window().map(|w| {
        w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
      });
      // without a timer the wait collapses to zero
      if !matches!(scheduled, Some(Ok(_))) {
        let _ = resolve.call0(&JsValue::NULL);
      }
    });
    let _ = JsFuture::from(promise).await;
  }
}
