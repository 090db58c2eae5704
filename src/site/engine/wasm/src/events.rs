/* src/site/engine/wasm/src/events.rs */

// Listener wiring. Every listener lives as long as the page, so closures
// are leaked with `forget` once attached.

use reborn_engine::interact::anchor::{anchor_links, anchor_target};
use reborn_engine::interact::nav::{update_cta, update_nav};
use reborn_engine::interact::reveal::{
  REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, animate_logo, prepare_reveal, reveal,
};
use reborn_engine::interact::{FormKind, Menu, dismiss_notice, submit_form};
use reborn_engine::reborn_injector::Dom;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
  Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
  IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::dom::BrowserDom;
use crate::submit::PageSubmitter;
use crate::timer::BrowserTimer;

pub(crate) fn listen(
  target: &EventTarget,
  event: &str,
  handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
  let closure = Closure::<dyn FnMut(Event)>::new(handler);
  target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
  closure.forget();
  Ok(())
}

/// Nav styling and the scroll-dependent CTA label.
pub fn install_scroll(window: &Window, dom: &BrowserDom) -> Result<(), JsValue> {
  let mut dom = dom.clone();
  let win = window.clone();
  listen(window, "scroll", move |_| {
    let scroll_y = win.scroll_y().unwrap_or(0.0);
    update_nav(&mut dom, scroll_y);
    let viewport = win.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(f64::INFINITY);
    update_cta(&mut dom, scroll_y, viewport);
  })
}

pub fn install_menu(dom: &BrowserDom) -> Result<(), JsValue> {
  let Some(menu) = Menu::find(dom) else { return Ok(()) };

  let (mut toggle_dom, toggle_menu) = (dom.clone(), menu.clone());
  listen(&menu.toggle, "click", move |_| {
    toggle_menu.toggle(&mut toggle_dom);
  })?;

  for link in Menu::link_items(dom) {
    let (mut link_dom, link_menu) = (dom.clone(), menu.clone());
    listen(&link, "click", move |_| link_menu.close(&mut link_dom))?;
  }
  Ok(())
}

pub fn install_anchors(dom: &BrowserDom) -> Result<(), JsValue> {
  for anchor in anchor_links(dom) {
    let (dom, link) = (dom.clone(), anchor.clone());
    listen(&anchor, "click", move |event| {
      event.prevent_default();
      let Some(target) = anchor_target(&dom, &link) else { return };
      let options = ScrollIntoViewOptions::new();
      options.set_behavior(ScrollBehavior::Smooth);
      options.set_block(ScrollLogicalPosition::Start);
      target.scroll_into_view_with_scroll_into_view_options(&options);
    })?;
  }
  Ok(())
}

/// Hide cards and steps, then reveal each once it scrolls into view.
pub fn install_reveal(dom: &BrowserDom) -> Result<(), JsValue> {
  let mut dom = dom.clone();
  let targets = prepare_reveal(&mut dom);
  if targets.is_empty() {
    return Ok(());
  }

  let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
    move |entries: js_sys::Array, observer: IntersectionObserver| {
      for entry in entries.iter() {
        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else { continue };
        if entry.is_intersecting() {
          let target = entry.target();
          reveal(&mut dom, &target);
          observer.unobserve(&target);
        }
      }
    },
  );
  let options = IntersectionObserverInit::new();
  options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
  options.set_root_margin(REVEAL_ROOT_MARGIN);
  let observer =
    IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
  callback.forget();
  for target in &targets {
    observer.observe(target);
  }
  Ok(())
}

pub fn install_forms(dom: &BrowserDom) -> Result<(), JsValue> {
  for kind in FormKind::ALL {
    let Some(form) = dom.query(kind.selector()) else { continue };
    let (dom, form_el) = (dom.clone(), form.clone());
    listen(&form, "submit", move |event| {
      event.prevent_default();
      let mut dom = dom.clone();
      let form = form_el.clone();
      let submitter = PageSubmitter::for_form(&dom, &form);
      spawn_local(async move {
        if let Some(notice) = submit_form(&mut dom, kind, form, &submitter).await {
          dismiss_notice(&mut dom, notice, &BrowserTimer).await;
        }
      });
    })?;
  }
  Ok(())
}

pub fn install_logo(window: &Window, dom: &BrowserDom) -> Result<(), JsValue> {
  let mut dom = dom.clone();
  if dom.document().ready_state() == "complete" {
    animate_logo(&mut dom);
    return Ok(());
  }
  listen(window, "load", move |_| {
    animate_logo(&mut dom);
  })
}
