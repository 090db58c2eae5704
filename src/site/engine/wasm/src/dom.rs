/* src/site/engine/wasm/src/dom.rs */

use reborn_engine::reborn_injector::Dom;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, FormData, HtmlElement, HtmlFormElement};

/// [`Dom`] over the live browser document. Cheap to clone; every clone
/// talks to the same page.
#[derive(Debug, Clone)]
pub struct BrowserDom {
  document: Document,
}

fn log_failure(op: &str, result: Result<(), JsValue>) {
  if let Err(e) = result {
    tracing::debug!(op, error = ?e, "DOM call failed");
  }
}

impl BrowserDom {
  pub fn new(document: Document) -> Self {
    Self { document }
  }

  pub fn current() -> Option<Self> {
    web_sys::window().and_then(|w| w.document()).map(Self::new)
  }

  pub fn document(&self) -> &Document {
    &self.document
  }
}

impl Dom for BrowserDom {
  type Node = Element;

  fn query(&self, selector: &str) -> Option<Element> {
    self.document.query_selector(selector).ok().flatten()
  }

  fn query_all(&self, selector: &str) -> Vec<Element> {
    let Ok(list) = self.document.query_selector_all(selector) else { return Vec::new() };
    (0..list.length())
      .filter_map(|i| list.item(i))
      .filter_map(|node| node.dyn_into::<Element>().ok())
      .collect()
  }

  fn query_within(&self, scope: &Element, selector: &str) -> Option<Element> {
    scope.query_selector(selector).ok().flatten()
  }

  fn text(&self, node: &Element) -> String {
    node.text_content().unwrap_or_default()
  }

  fn set_text(&mut self, node: &Element, text: &str) {
    node.set_text_content(Some(text));
  }

  fn set_inner_html(&mut self, node: &Element, html: &str) {
    node.set_inner_html(html);
  }

  fn append_html(&mut self, node: &Element, html: &str) {
    log_failure("insertAdjacentHTML", node.insert_adjacent_html("beforeend", html));
  }

  fn attribute(&self, node: &Element, name: &str) -> Option<String> {
    node.get_attribute(name)
  }

  fn set_attribute(&mut self, node: &Element, name: &str, value: &str) {
    log_failure("setAttribute", node.set_attribute(name, value));
  }

  fn remove_attribute(&mut self, node: &Element, name: &str) {
    log_failure("removeAttribute", node.remove_attribute(name));
  }

  fn has_class(&self, node: &Element, class: &str) -> bool {
    node.class_list().contains(class)
  }

  fn add_class(&mut self, node: &Element, class: &str) {
    log_failure("classList.add", node.class_list().add_1(class));
  }

  fn remove_class(&mut self, node: &Element, class: &str) {
    log_failure("classList.remove", node.class_list().remove_1(class));
  }

  fn toggle_class(&mut self, node: &Element, class: &str) -> bool {
    node.class_list().toggle(class).unwrap_or(false)
  }

  fn set_style(&mut self, node: &Element, property: &str, value: &str) {
    if let Some(el) = node.dyn_ref::<HtmlElement>() {
      log_failure("style.setProperty", el.style().set_property(property, value));
    }
  }

  fn append_element(
    &mut self,
    parent: &Element,
    tag: &str,
    class: &str,
    text: &str,
  ) -> Option<Element> {
    let el = self.document.create_element(tag).ok()?;
    if !class.is_empty() {
      el.set_class_name(class);
    }
    el.set_text_content(Some(text));
    parent.append_child(&el).ok()?;
    Some(el)
  }

  fn remove(&mut self, node: &Element) {
    node.remove();
  }

  fn form_fields(&self, form: &Element) -> Vec<(String, String)> {
    let Some(form) = form.dyn_ref::<HtmlFormElement>() else { return Vec::new() };
    let Ok(data) = FormData::new_with_form(form) else { return Vec::new() };
    let Ok(Some(entries)) = js_sys::try_iter(&data) else { return Vec::new() };
    entries
      .filter_map(Result::ok)
      .filter_map(|entry| {
        let pair = entry.dyn_into::<js_sys::Array>().ok()?;
        // file inputs yield Blob values; only text fields are collected
        Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
      })
      .collect()
  }

  fn reset_form(&mut self, form: &Element) {
    if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
      form.reset();
    }
  }
}
