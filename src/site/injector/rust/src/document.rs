/* src/site/injector/rust/src/document.rs */

// Mutable view over a `scraper::Html` tree. Parsing follows the HTML5
// algorithm (character references, implied end tags, error recovery).
// Detached nodes stay in the arena: their ids remain valid but no query
// reaches them.

use std::collections::HashMap;

pub use ego_tree::NodeId;
use ego_tree::NodeRef;
use scraper::node::{Element, Text};
use scraper::{ElementRef, Html, Node};

use crate::selector::SelectorList;

const VOID_ELEMENTS: &[&str] = &[
  "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
  "track", "wbr",
];

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const MATHML_NS: &str = "http://www.w3.org/1998/Math/MathML";

#[derive(Debug)]
pub struct Document {
  html: Html,
  /// Parent of the top-level markup: the document node for full pages,
  /// the context element for fragments.
  root: NodeId,
  fragment: bool,
  /// Live values of form controls, as typed by a user. Absent means the
  /// control still shows its default (the `value` attribute or content).
  field_values: HashMap<NodeId, String>,
}

impl Default for Document {
  fn default() -> Self {
    Self::new()
  }
}

impl Document {
  /// An empty fragment.
  pub fn new() -> Self {
    Self::from_html(Html::parse_fragment(""), true)
  }

  /// Parse a full page or a body fragment. Input opening with a doctype or
  /// `<html>` is a page; anything else serializes back without the implied
  /// `html`/`head`/`body` wrapper. Never fails.
  pub fn parse(markup: &str) -> Self {
    let fragment = !is_full_page(markup);
    let html =
      if fragment { Html::parse_fragment(markup) } else { Html::parse_document(markup) };
    if !html.errors.is_empty() {
      tracing::trace!(errors = html.errors.len(), "markup recovered from parse errors");
    }
    Self::from_html(html, fragment)
  }

  fn from_html(html: Html, fragment: bool) -> Self {
    let top = html.tree.root();
    let root = if fragment {
      top.children().find(|n| n.value().is_element()).map_or(top.id(), |n| n.id())
    } else {
      top.id()
    };
    Self { html, root, fragment, field_values: HashMap::new() }
  }

  pub fn root(&self) -> NodeId {
    self.root
  }

  fn node(&self, id: NodeId) -> Option<NodeRef<'_, Node>> {
    self.html.tree.get(id)
  }

  fn element(&self, id: NodeId) -> Option<&Element> {
    self.node(id)?.value().as_element()
  }

  pub fn tag(&self, id: NodeId) -> Option<&str> {
    self.element(id).map(Element::name)
  }

  pub fn is_element(&self, id: NodeId) -> bool {
    self.element(id).is_some()
  }

  /// Whether the node is still reachable from the document root.
  pub fn is_attached(&self, id: NodeId) -> bool {
    let top = self.html.tree.root().id();
    self.node(id).is_some_and(|n| n.ancestors().last().map_or(n.id(), |a| a.id()) == top)
  }

  pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
    self
      .node(id)
      .map(|n| n.children().filter(|c| c.value().is_element()).map(|c| c.id()).collect())
      .unwrap_or_default()
  }

  pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
    self.element(id)?.attr(name)
  }

  fn attrs_of(&self, id: NodeId) -> Option<Vec<(String, String)>> {
    let element = self.element(id)?;
    Some(element.attrs().map(|(k, v)| (k.to_string(), v.to_string())).collect())
  }

  pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
    let Some(mut attrs) = self.attrs_of(id) else { return };
    let name = name.to_ascii_lowercase();
    match attrs.iter_mut().find(|(k, _)| *k == name) {
      Some((_, v)) => *v = value.to_string(),
      None => attrs.push((name, value.to_string())),
    }
    self.rewrite_element(id, &attrs);
  }

  pub fn remove_attr(&mut self, id: NodeId, name: &str) {
    let Some(mut attrs) = self.attrs_of(id) else { return };
    let before = attrs.len();
    attrs.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
    if attrs.len() != before {
      self.rewrite_element(id, &attrs);
    }
  }

  /// Swap the element at `id` for one with the same name and `attrs`,
  /// keeping its children. Parsed elements cache their id and classes, so
  /// attributes are never edited in place.
  fn rewrite_element(&mut self, id: NodeId, attrs: &[(String, String)]) {
    let Some(element) = self.element(id) else { return };
    let name = element.name().to_string();
    let context =
      if matches!(name.as_str(), "svg" | "math") { None } else { foreign_context(element) };
    let Some(rebuilt) = build_element(&name, context, attrs) else {
      tracing::debug!(tag = %name, "element could not be rebuilt, attributes unchanged");
      return;
    };
    if let Some(mut node) = self.html.tree.get_mut(id) {
      *node.value() = Node::Element(rebuilt);
    }
  }

  pub fn classes(&self, id: NodeId) -> Vec<&str> {
    self.attr(id, "class").map(|c| c.split_ascii_whitespace().collect()).unwrap_or_default()
  }

  pub fn has_class(&self, id: NodeId, class: &str) -> bool {
    self.classes(id).contains(&class)
  }

  pub fn add_class(&mut self, id: NodeId, class: &str) {
    if !self.is_element(id) || self.has_class(id, class) {
      return;
    }
    let mut classes: Vec<String> = self.classes(id).into_iter().map(str::to_string).collect();
    classes.push(class.to_string());
    self.set_attr(id, "class", &classes.join(" "));
  }

  pub fn remove_class(&mut self, id: NodeId, class: &str) {
    if !self.has_class(id, class) {
      return;
    }
    let classes: Vec<String> =
      self.classes(id).into_iter().filter(|c| *c != class).map(str::to_string).collect();
    self.set_attr(id, "class", &classes.join(" "));
  }

  /// Read one declaration from the inline `style` attribute.
  pub fn style_property(&self, id: NodeId, property: &str) -> Option<String> {
    let style = self.attr(id, "style")?;
    parse_style(style).into_iter().find(|(k, _)| k == property).map(|(_, v)| v)
  }

  pub fn set_style_property(&mut self, id: NodeId, property: &str, value: &str) {
    if !self.is_element(id) {
      return;
    }
    let mut decls = self.attr(id, "style").map(parse_style).unwrap_or_default();
    match decls.iter_mut().find(|(k, _)| k == property) {
      Some((_, v)) => *v = value.to_string(),
      None => decls.push((property.to_string(), value.to_string())),
    }
    let style = decls.iter().map(|(k, v)| format!("{k}: {v}")).collect::<Vec<_>>().join("; ");
    self.set_attr(id, "style", &style);
  }

  /// Concatenated text of all descendant text nodes, like `textContent`.
  pub fn text_content(&self, id: NodeId) -> String {
    self
      .node(id)
      .map(|n| n.descendants().filter_map(|d| d.value().as_text()).map(|t| &**t).collect::<String>())
      .unwrap_or_default()
  }

  /// Replace all children with a single text node (none when `text` is empty).
  pub fn set_text_content(&mut self, id: NodeId, text: &str) {
    self.clear_children(id);
    if !text.is_empty()
      && let Some(mut node) = self.html.tree.get_mut(id)
    {
      node.append(Node::Text(Text { text: text.into() }));
    }
  }

  pub fn clear_children(&mut self, id: NodeId) {
    let Some(mut node) = self.html.tree.get_mut(id) else { return };
    while let Some(mut child) = node.first_child() {
      child.detach();
    }
  }

  pub fn detach(&mut self, id: NodeId) {
    if let Some(mut node) = self.html.tree.get_mut(id) {
      node.detach();
    }
  }

  /// Append `<tag attrs>` under `parent`, in the parent's namespace.
  pub fn create_element(
    &mut self,
    parent: NodeId,
    tag: &str,
    attrs: &[(String, String)],
  ) -> Option<NodeId> {
    let context = foreign_context(self.element(parent)?);
    let element = build_element(tag, context, attrs)?;
    let mut node = self.html.tree.get_mut(parent)?;
    Some(node.append(Node::Element(element)).id())
  }

  /// Parse `markup` and append the resulting nodes to `parent`. The markup
  /// is parsed in template context, so table rows and list items survive
  /// without their usual parents.
  pub fn append_html(&mut self, parent: NodeId, markup: &str) {
    let parsed = Html::parse_fragment(&format!("<template>{markup}</template>"));
    let Some(template) = first_element_named(parsed.tree.root(), "template") else { return };
    for child in template.children() {
      self.graft(child, parent);
    }
  }

  /// Replace the children of `parent` with the nodes parsed from `markup`.
  pub fn set_inner_html(&mut self, parent: NodeId, markup: &str) {
    self.clear_children(parent);
    self.append_html(parent, markup);
  }

  fn graft(&mut self, source: NodeRef<'_, Node>, parent: NodeId) {
    let Some(mut target) = self.html.tree.get_mut(parent) else { return };
    let copied = target.append(source.value().clone()).id();
    for child in source.children() {
      self.graft(child, copied);
    }
  }

  /// Elements under `scope` in document order, `scope` excluded.
  pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
    self
      .node(scope)
      .map(|n| n.descendants().skip(1).filter(|d| d.value().is_element()).map(|d| d.id()).collect())
      .unwrap_or_default()
  }

  fn matching<'a>(
    &'a self,
    scope: NodeId,
    selectors: &'a SelectorList,
  ) -> impl Iterator<Item = NodeId> + 'a {
    self
      .node(scope)
      .into_iter()
      .flat_map(|n| n.descendants().skip(1))
      .filter(move |n| ElementRef::wrap(*n).is_some_and(|el| selectors.matches(&el)))
      .map(|n| n.id())
  }

  pub fn select(&self, selectors: &SelectorList) -> Vec<NodeId> {
    self.select_within(self.root, selectors)
  }

  pub fn select_within(&self, scope: NodeId, selectors: &SelectorList) -> Vec<NodeId> {
    self.matching(scope, selectors).collect()
  }

  pub fn select_first(&self, selectors: &SelectorList) -> Option<NodeId> {
    self.matching(self.root, selectors).next()
  }

  /// Live value of a form control.
  pub fn field_value(&self, id: NodeId) -> String {
    if let Some(v) = self.field_values.get(&id) {
      return v.clone();
    }
    match self.tag(id) {
      Some("textarea") => self.text_content(id),
      Some("select") => {
        let options: Vec<NodeId> =
          self.descendants(id).into_iter().filter(|o| self.tag(*o) == Some("option")).collect();
        let chosen = options
          .iter()
          .find(|o| self.attr(**o, "selected").is_some())
          .or_else(|| options.first())
          .copied();
        chosen
          .map(|o| self.attr(o, "value").map_or_else(|| self.text_content(o), str::to_string))
          .unwrap_or_default()
      }
      _ => self.attr(id, "value").unwrap_or_default().to_string(),
    }
  }

  /// Simulate user input into a form control.
  pub fn set_field_value(&mut self, id: NodeId, value: &str) {
    self.field_values.insert(id, value.to_string());
  }

  /// Restore every control under `form` to its default value.
  pub fn reset_fields(&mut self, form: NodeId) {
    for id in self.descendants(form) {
      self.field_values.remove(&id);
    }
  }

  /// Named, submittable controls under `form` with their live values.
  pub fn form_fields(&self, form: NodeId) -> Vec<(String, String)> {
    let mut fields = Vec::new();
    for id in self.descendants(form) {
      let Some(tag) = self.tag(id) else { continue };
      if !matches!(tag, "input" | "textarea" | "select") {
        continue;
      }
      let Some(name) = self.attr(id, "name").filter(|n| !n.is_empty()) else { continue };
      if self.attr(id, "disabled").is_some() {
        continue;
      }
      if tag == "input" {
        let ty = self.attr(id, "type").unwrap_or("text").to_ascii_lowercase();
        if matches!(ty.as_str(), "submit" | "button" | "reset" | "image" | "file") {
          continue;
        }
        if matches!(ty.as_str(), "checkbox" | "radio") && self.attr(id, "checked").is_none() {
          continue;
        }
      }
      fields.push((name.to_string(), self.field_value(id)));
    }
    fields
  }

  pub fn to_html(&self) -> String {
    if self.fragment { self.inner_html(self.root) } else { self.html.html() }
  }

  pub fn inner_html(&self, id: NodeId) -> String {
    self.node(id).and_then(ElementRef::wrap).map(|el| el.inner_html()).unwrap_or_default()
  }

  pub fn outer_html(&self, id: NodeId) -> String {
    self.node(id).and_then(ElementRef::wrap).map(|el| el.html()).unwrap_or_default()
  }
}

fn is_full_page(markup: &str) -> bool {
  let lead: String = markup.trim_start().chars().take(9).collect::<String>().to_ascii_lowercase();
  lead.starts_with("<!doctype") || lead.starts_with("<html")
}

/// Wrapper element needed to parse a child of `element` in its namespace.
fn foreign_context(element: &Element) -> Option<&'static str> {
  match &*element.name.ns {
    SVG_NS => Some("svg"),
    MATHML_NS => Some("math"),
    _ => None,
  }
}

fn first_element_named<'a>(scope: NodeRef<'a, Node>, tag: &str) -> Option<NodeRef<'a, Node>> {
  scope.descendants().find(|n| n.value().as_element().is_some_and(|e| e.name() == tag))
}

fn open_tag(tag: &str, attrs: &[(String, String)]) -> String {
  let mut out = format!("<{tag}");
  for (name, value) in attrs {
    let value = value.replace('&', "&amp;").replace('"', "&quot;");
    out.push_str(&format!(" {name}=\"{value}\""));
  }
  out.push('>');
  out
}

/// Parse a lone `<tag attrs>` element. `html`, `head` and `body` only exist
/// in a full page; everything else is parsed inside a template, optionally
/// under an `svg`/`math` wrapper.
fn build_element(
  tag: &str,
  context: Option<&str>,
  attrs: &[(String, String)],
) -> Option<Element> {
  let open = open_tag(tag, attrs);
  if matches!(tag, "html" | "head" | "body") {
    let page = Html::parse_document(&open);
    return first_element_named(page.tree.root(), tag)?.value().as_element().cloned();
  }
  let close = if VOID_ELEMENTS.contains(&tag) { String::new() } else { format!("</{tag}>") };
  let inner = match context {
    Some(wrapper) => format!("<{wrapper}>{open}{close}</{wrapper}>"),
    None => format!("{open}{close}"),
  };
  let parsed = Html::parse_fragment(&format!("<template>{inner}</template>"));
  let template = first_element_named(parsed.tree.root(), "template")?;
  let container = match context {
    Some(_) => template.children().find(|n| n.value().is_element())?,
    None => template,
  };
  container
    .descendants()
    .skip(1)
    .filter_map(|n| n.value().as_element())
    .find(|e| e.name() == tag)
    .cloned()
}

fn parse_style(style: &str) -> Vec<(String, String)> {
  style
    .split(';')
    .filter_map(|decl| {
      let (k, v) = decl.split_once(':')?;
      let k = k.trim();
      if k.is_empty() {
        return None;
      }
      Some((k.to_ascii_lowercase(), v.trim().to_string()))
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn first(doc: &Document) -> NodeId {
    doc.element_children(doc.root())[0]
  }

  #[test]
  fn fragments_serialize_without_wrapper() {
    let html = r#"<section class="hero"><h1>Hej</h1><img src="a.png"></section>"#;
    assert_eq!(Document::parse(html).to_html(), html);
  }

  #[test]
  fn full_page_roundtrip() {
    let html = concat!(
      "<!DOCTYPE html><html><head><title>Reborn</title></head>",
      r#"<body><!-- hero --><section class="hero"><h1>Hej</h1></section></body></html>"#
    );
    assert_eq!(Document::parse(html).to_html(), html);
  }

  #[test]
  fn page_without_doctype_gets_implied_head() {
    let doc = Document::parse("<html><body><p>x</p></body></html>");
    assert_eq!(doc.to_html(), "<html><head></head><body><p>x</p></body></html>");
  }

  #[test]
  fn named_and_numeric_references_decode() {
    let doc = Document::parse("<p>Caf&eacute; &euro;5 &oslash; &#229;&#x00E4;</p>");
    assert_eq!(doc.text_content(first(&doc)), "Café €5 ø åä");
    assert_eq!(doc.to_html(), "<p>Café €5 ø åä</p>");
  }

  #[test]
  fn out_of_range_reference_becomes_replacement_char() {
    let doc = Document::parse("<p>&#xFFFFFFFFF;</p>");
    assert_eq!(doc.to_html(), "<p>\u{FFFD}</p>");
  }

  #[test]
  fn unclosed_paragraphs_and_items_become_siblings() {
    let doc = Document::parse("<div><p>a<p>b</div><ul><li>1<li>2</ul>");
    assert_eq!(doc.to_html(), "<div><p>a</p><p>b</p></div><ul><li>1</li><li>2</li></ul>");
  }

  #[test]
  fn script_text_is_raw() {
    let html = "<script>if (a < b) { go(); }</script>";
    assert_eq!(Document::parse(html).to_html(), html);
  }

  #[test]
  fn text_is_escaped() {
    let mut doc = Document::parse("<p></p>");
    let p = first(&doc);
    doc.set_text_content(p, "<b>bold</b> & more");
    assert_eq!(doc.to_html(), "<p>&lt;b&gt;bold&lt;/b&gt; &amp; more</p>");
  }

  #[test]
  fn boolean_attribute_serializes_empty_value() {
    assert_eq!(Document::parse("<button disabled>x</button>").to_html(), r#"<button disabled="">x</button>"#);
  }

  #[test]
  fn set_attr_keeps_children_and_escapes() {
    let mut doc = Document::parse(r#"<a href="/">Boka <b>nu</b></a>"#);
    let a = first(&doc);
    doc.set_attr(a, "href", r#"/kontakt?a=1&b="2""#);
    assert_eq!(doc.to_html(), r#"<a href="/kontakt?a=1&amp;b=&quot;2&quot;">Boka <b>nu</b></a>"#);
    doc.remove_attr(a, "href");
    assert_eq!(doc.to_html(), "<a>Boka <b>nu</b></a>");
  }

  #[test]
  fn set_attr_on_svg_keeps_namespace() {
    let mut doc = Document::parse(r#"<svg viewBox="0 0 1 1"><path d="M0"></path></svg>"#);
    let svg = first(&doc);
    let path = doc.element_children(svg)[0];
    doc.set_attr(path, "fill", "red");
    assert_eq!(doc.tag(path), Some("path"));
    assert_eq!(doc.attr(path, "fill"), Some("red"));
    assert_eq!(doc.attr(path, "d"), Some("M0"));
  }

  #[test]
  fn append_html_parses_rows_in_template_context() {
    let mut doc = Document::parse("<table><tbody></tbody></table>");
    let tbody = doc.element_children(first(&doc))[0];
    doc.append_html(tbody, "<tr><td>1</td></tr>");
    assert_eq!(doc.inner_html(tbody), "<tr><td>1</td></tr>");
  }

  #[test]
  fn detach_unlinks_from_parent() {
    let mut doc = Document::parse("<ul><li>1</li><li>2</li></ul>");
    let ul = first(&doc);
    let item = doc.element_children(ul)[0];
    doc.detach(item);
    assert!(!doc.is_attached(item));
    assert!(doc.is_attached(ul));
    assert_eq!(doc.inner_html(ul), "<li>2</li>");
  }

  #[test]
  fn create_element_appends_in_order() {
    let mut doc = Document::parse("<form></form>");
    let form = first(&doc);
    let msg = doc.create_element(form, "div", &[("class".into(), "success-message".into())]).unwrap();
    doc.set_text_content(msg, "Tack!");
    assert_eq!(doc.to_html(), r#"<form><div class="success-message">Tack!</div></form>"#);
  }

  #[test]
  fn class_helpers_keep_other_classes() {
    let mut doc = Document::parse(r#"<nav class="main dark"></nav>"#);
    let nav = first(&doc);
    doc.add_class(nav, "scrolled");
    doc.add_class(nav, "scrolled");
    assert_eq!(doc.attr(nav, "class"), Some("main dark scrolled"));
    doc.remove_class(nav, "dark");
    assert_eq!(doc.attr(nav, "class"), Some("main scrolled"));
  }

  #[test]
  fn style_property_roundtrip() {
    let mut doc = Document::parse(r#"<div style="color: red"></div>"#);
    let div = first(&doc);
    doc.set_style_property(div, "opacity", "0");
    doc.set_style_property(div, "color", "blue");
    assert_eq!(doc.attr(div, "style"), Some("color: blue; opacity: 0"));
    assert_eq!(doc.style_property(div, "opacity").as_deref(), Some("0"));
  }

  #[test]
  fn form_fields_skip_unnamed_and_buttons() {
    let doc = Document::parse(concat!(
      r#"<form><input name="name" value="Ada"><input value="x">"#,
      r#"<input type="checkbox" name="news"><textarea name="msg">Hi</textarea>"#,
      r#"<select name="topic"><option value="a">A</option><option value="b" selected>B</option></select>"#,
      r#"<button type="submit">Send</button></form>"#
    ));
    let form = first(&doc);
    assert_eq!(
      doc.form_fields(form),
      vec![
        ("name".to_string(), "Ada".to_string()),
        ("msg".to_string(), "Hi".to_string()),
        ("topic".to_string(), "b".to_string()),
      ]
    );
  }

  #[test]
  fn reset_fields_restores_defaults() {
    let mut doc = Document::parse(r#"<form><input name="email" value=""></form>"#);
    let form = first(&doc);
    let input = doc.element_children(form)[0];
    doc.set_field_value(input, "a@b.se");
    assert_eq!(doc.form_fields(form), vec![("email".to_string(), "a@b.se".to_string())]);
    doc.reset_fields(form);
    assert_eq!(doc.form_fields(form), vec![("email".to_string(), String::new())]);
  }
}
