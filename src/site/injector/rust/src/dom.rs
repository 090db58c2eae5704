/* src/site/injector/rust/src/dom.rs */

use crate::document::{Document, NodeId};
use crate::selector::SelectorList;

/// The operations loaders and page behaviours need from a document.
///
/// Implemented by [`Document`] over a parsed `scraper` tree (build-time
/// rendering, the preview server, tests) and by the browser runtime over
/// `web-sys`.
/// Queries with a selector the implementation cannot parse match nothing.
pub trait Dom {
  type Node: Clone;

  fn query(&self, selector: &str) -> Option<Self::Node>;
  fn query_all(&self, selector: &str) -> Vec<Self::Node>;
  fn query_within(&self, scope: &Self::Node, selector: &str) -> Option<Self::Node>;

  fn text(&self, node: &Self::Node) -> String;
  fn set_text(&mut self, node: &Self::Node, text: &str);
  /// Replace the node's children with raw, trusted markup.
  fn set_inner_html(&mut self, node: &Self::Node, html: &str);
  fn append_html(&mut self, node: &Self::Node, html: &str);

  fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
  fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);
  fn remove_attribute(&mut self, node: &Self::Node, name: &str);

  fn has_class(&self, node: &Self::Node, class: &str) -> bool;
  fn add_class(&mut self, node: &Self::Node, class: &str);
  fn remove_class(&mut self, node: &Self::Node, class: &str);

  /// Flip `class`; returns whether it is present afterwards.
  fn toggle_class(&mut self, node: &Self::Node, class: &str) -> bool {
    if self.has_class(node, class) {
      self.remove_class(node, class);
      false
    } else {
      self.add_class(node, class);
      true
    }
  }

  fn set_style(&mut self, node: &Self::Node, property: &str, value: &str);

  /// Append `<tag class="class">text</tag>` to `parent` and return it;
  /// `None` if the host refused to create the element.
  fn append_element(
    &mut self,
    parent: &Self::Node,
    tag: &str,
    class: &str,
    text: &str,
  ) -> Option<Self::Node>;
  fn remove(&mut self, node: &Self::Node);

  /// Named form controls and their current values, in document order.
  fn form_fields(&self, form: &Self::Node) -> Vec<(String, String)>;
  fn reset_form(&mut self, form: &Self::Node);
}

fn parse_selector(selector: &str) -> Option<SelectorList> {
  match SelectorList::parse(selector) {
    Ok(list) => Some(list),
    Err(e) => {
      tracing::debug!(selector, error = %e, "selector matches nothing");
      None
    }
  }
}

impl Dom for Document {
  type Node = NodeId;

  fn query(&self, selector: &str) -> Option<NodeId> {
    self.select_first(&parse_selector(selector)?)
  }

  fn query_all(&self, selector: &str) -> Vec<NodeId> {
    parse_selector(selector).map(|list| self.select(&list)).unwrap_or_default()
  }

  fn query_within(&self, scope: &NodeId, selector: &str) -> Option<NodeId> {
    let list = parse_selector(selector)?;
    self.select_within(*scope, &list).into_iter().next()
  }

  fn text(&self, node: &NodeId) -> String {
    self.text_content(*node)
  }

  fn set_text(&mut self, node: &NodeId, text: &str) {
    self.set_text_content(*node, text);
  }

  fn set_inner_html(&mut self, node: &NodeId, html: &str) {
    Document::set_inner_html(self, *node, html);
  }

  fn append_html(&mut self, node: &NodeId, html: &str) {
    Document::append_html(self, *node, html);
  }

  fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
    self.attr(*node, name).map(str::to_string)
  }

  fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
    self.set_attr(*node, name, value);
  }

  fn remove_attribute(&mut self, node: &NodeId, name: &str) {
    self.remove_attr(*node, name);
  }

  fn has_class(&self, node: &NodeId, class: &str) -> bool {
    Document::has_class(self, *node, class)
  }

  fn add_class(&mut self, node: &NodeId, class: &str) {
    Document::add_class(self, *node, class);
  }

  fn remove_class(&mut self, node: &NodeId, class: &str) {
    Document::remove_class(self, *node, class);
  }

  fn set_style(&mut self, node: &NodeId, property: &str, value: &str) {
    self.set_style_property(*node, property, value);
  }

  fn append_element(
    &mut self,
    parent: &NodeId,
    tag: &str,
    class: &str,
    text: &str,
  ) -> Option<NodeId> {
    let attrs =
      if class.is_empty() { Vec::new() } else { vec![("class".to_string(), class.to_string())] };
    let id = self.create_element(*parent, tag, &attrs)?;
    self.set_text_content(id, text);
    Some(id)
  }

  fn remove(&mut self, node: &NodeId) {
    self.detach(*node);
  }

  fn form_fields(&self, form: &NodeId) -> Vec<(String, String)> {
    Document::form_fields(self, *form)
  }

  fn reset_form(&mut self, form: &NodeId) {
    self.reset_fields(*form);
  }
}
