/* src/site/engine/wasm/src/lib.rs */

mod dom;
mod events;
mod fetch;
mod storage;
mod submit;
mod timer;

pub use dom::BrowserDom;
pub use fetch::WindowFetch;
pub use storage::{BrowserDialogs, BrowserSession};
pub use submit::{HttpSubmitter, PageSubmitter};
pub use timer::BrowserTimer;

use reborn_engine::content::company::FooterMatching;
use reborn_engine::interact::{GateDecision, PasswordGate};
use reborn_engine::{ContentKey, PageOptions, Route, check_slots, load_page};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Window;

/// `<html data-footer-matching="heuristic">` opts a page into the legacy
/// footer rule.
fn page_options(dom: &BrowserDom) -> PageOptions {
  let footer = dom
    .document()
    .document_element()
    .and_then(|root| root.get_attribute("data-footer-matching"))
    .and_then(|value| serde_json::from_value::<FooterMatching>(value.into()).ok())
    .unwrap_or_default();
  PageOptions { footer }
}

/// Warn about slots the page's loaders expect but the markup lacks.
fn report_missing_slots(dom: &BrowserDom, path: &str, options: &PageOptions) {
  let keys =
    std::iter::once(ContentKey::Company).chain(Route::from_path(path).map(Route::content_key));
  for key in keys {
    for slot in check_slots(dom, key, options.footer).missing {
      tracing::warn!(%key, slot = slot.selector(), "content slot missing from page");
    }
  }
}

fn load_content(dom: &BrowserDom, path: String) {
  let mut dom = dom.clone();
  spawn_local(async move {
    let options = page_options(&dom);
    report_missing_slots(&dom, &path, &options);
    let report = load_page(&WindowFetch::default(), &path, &mut dom, &options).await;
    report.emit();
  });
}

/// Returns `false` when the visitor was sent away.
fn run_gate(window: &Window, path: &str) -> Result<bool, JsValue> {
  let mut session = BrowserSession::new(window);
  let mut dialogs = BrowserDialogs::new(window.clone());
  match PasswordGate::default().check(path, &mut session, &mut dialogs) {
    GateDecision::Denied { redirect } => {
      window.location().set_href(redirect)?;
      Ok(false)
    }
    _ => Ok(true),
  }
}

fn on_ready(window: &Window, dom: &BrowserDom, path: &str) -> Result<(), JsValue> {
  load_content(dom, path.to_string());
  events::install_reveal(dom)?;
  events::install_logo(window, dom)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
  console_error_panic_hook::set_once();
  wasm_logger::init(wasm_logger::Config::default());

  let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
  let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
  let dom = BrowserDom::new(document.clone());
  let path = window.location().pathname()?;

  if !run_gate(&window, &path)? {
    return Ok(());
  }

  events::install_scroll(&window, &dom)?;
  events::install_menu(&dom)?;
  events::install_anchors(&dom)?;
  events::install_forms(&dom)?;

  if document.ready_state() == "loading" {
    let (win, ready_dom) = (window.clone(), dom.clone());
    events::listen(&document, "DOMContentLoaded", move |_| {
      if let Err(e) = on_ready(&win, &ready_dom, &path) {
        tracing::error!(error = ?e, "page setup failed");
      }
    })
  } else {
    on_ready(&window, &dom, &path)
  }
}
