/* src/site/injector/rust/src/write.rs */

// Null-safe, value-safe writes. Every write is skipped silently when its
// target is missing or its value is absent or empty; a skipped write leaves
// the template's markup untouched.

use crate::dom::Dom;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WriteStats {
  pub applied: usize,
  pub skipped: usize,
}

impl WriteStats {
  pub fn merge(&mut self, other: WriteStats) {
    self.applied += other.applied;
    self.skipped += other.skipped;
  }
}

fn present(value: Option<&str>) -> Option<&str> {
  value.filter(|v| !v.is_empty())
}

/// Set the text of the first element matching `selector`.
pub fn set_text<D: Dom>(dom: &mut D, selector: &str, value: Option<&str>) -> bool {
  let Some(value) = present(value) else { return false };
  let Some(node) = dom.query(selector) else { return false };
  dom.set_text(&node, value);
  true
}

/// Replace the children of the first element matching `selector` with raw markup.
pub fn set_html<D: Dom>(dom: &mut D, selector: &str, value: Option<&str>) -> bool {
  let Some(value) = present(value) else { return false };
  let Some(node) = dom.query(selector) else { return false };
  dom.set_inner_html(&node, value);
  true
}

pub fn set_attr<D: Dom>(dom: &mut D, selector: &str, name: &str, value: Option<&str>) -> bool {
  let Some(value) = present(value) else { return false };
  let Some(node) = dom.query(selector) else { return false };
  dom.set_attribute(&node, name, value);
  true
}

/// Clear the container matching `selector`, then append one fragment per
/// item in order. `None` leaves the container alone; an empty slice clears it.
pub fn replace_children<D: Dom>(dom: &mut D, selector: &str, fragments: Option<&[String]>) -> bool {
  let Some(fragments) = fragments else { return false };
  let Some(container) = dom.query(selector) else { return false };
  dom.set_inner_html(&container, "");
  for fragment in fragments {
    dom.append_html(&container, fragment);
  }
  true
}

/// Write primitives bound to one document, counting applied and skipped writes.
pub struct Injector<'d, D: Dom> {
  dom: &'d mut D,
  stats: WriteStats,
}

impl<'d, D: Dom> Injector<'d, D> {
  pub fn new(dom: &'d mut D) -> Self {
    Self { dom, stats: WriteStats::default() }
  }

  fn record(&mut self, applied: bool) {
    if applied {
      self.stats.applied += 1;
    } else {
      self.stats.skipped += 1;
    }
  }

  pub fn text(&mut self, selector: &str, value: Option<&str>) -> &mut Self {
    let applied = set_text(&mut *self.dom, selector, value);
    self.record(applied);
    self
  }

  pub fn html(&mut self, selector: &str, value: Option<&str>) -> &mut Self {
    let applied = set_html(&mut *self.dom, selector, value);
    self.record(applied);
    self
  }

  pub fn attr(&mut self, selector: &str, name: &str, value: Option<&str>) -> &mut Self {
    let applied = set_attr(&mut *self.dom, selector, name, value);
    self.record(applied);
    self
  }

  pub fn list(&mut self, selector: &str, fragments: Option<&[String]>) -> &mut Self {
    let applied = replace_children(&mut *self.dom, selector, fragments);
    self.record(applied);
    self
  }

  /// Direct access for writes that need custom matching.
  pub fn dom(&mut self) -> &mut D {
    &mut *self.dom
  }

  pub fn record_write(&mut self, applied: bool) {
    self.record(applied);
  }

  pub fn stats(&self) -> WriteStats {
    self.stats
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Document;

  #[test]
  fn set_text_skips_missing_target_and_empty_value() {
    let mut doc = Document::parse("<h1>Default</h1>");
    assert!(!set_text(&mut doc, "h2", Some("x")));
    assert!(!set_text(&mut doc, "h1", Some("")));
    assert!(!set_text(&mut doc, "h1", None));
    assert_eq!(doc.to_html(), "<h1>Default</h1>");
    assert!(set_text(&mut doc, "h1", Some("Ny")));
    assert_eq!(doc.to_html(), "<h1>Ny</h1>");
  }

  #[test]
  fn set_text_does_not_interpret_markup() {
    let mut doc = Document::parse("<p></p>");
    set_text(&mut doc, "p", Some("<em>x</em>"));
    let p = doc.element_children(doc.root())[0];
    assert!(doc.element_children(p).is_empty());
    assert_eq!(doc.text_content(p), "<em>x</em>");
  }

  #[test]
  fn set_html_inserts_markup() {
    let mut doc = Document::parse("<div>old</div>");
    assert!(set_html(&mut doc, "div", Some("<b>new</b>")));
    assert_eq!(doc.to_html(), "<div><b>new</b></div>");
  }

  #[test]
  fn set_attr_writes_only_first_match() {
    let mut doc = Document::parse(r#"<a class="btn" href="/">1</a><a class="btn" href="/">2</a>"#);
    assert!(set_attr(&mut doc, ".btn", "href", Some("/kontakt.html")));
    assert_eq!(
      doc.to_html(),
      r#"<a class="btn" href="/kontakt.html">1</a><a class="btn" href="/">2</a>"#
    );
  }

  #[test]
  fn replace_children_preserves_order() {
    let mut doc = Document::parse(r#"<div class="grid"><div class="card">placeholder</div></div>"#);
    let fragments = vec!["<i>1</i>".to_string(), "<i>2</i>".to_string(), "<i>3</i>".to_string()];
    assert!(replace_children(&mut doc, ".grid", Some(fragments.as_slice())));
    assert_eq!(doc.to_html(), r#"<div class="grid"><i>1</i><i>2</i><i>3</i></div>"#);
  }

  #[test]
  fn replace_children_none_keeps_defaults_and_empty_clears() {
    let mut doc = Document::parse(r#"<ul><li>keep</li></ul>"#);
    assert!(!replace_children(&mut doc, "ul", None));
    assert_eq!(doc.to_html(), "<ul><li>keep</li></ul>");
    assert!(replace_children(&mut doc, "ul", Some(&[][..])));
    assert_eq!(doc.to_html(), "<ul></ul>");
  }

  #[test]
  fn injector_counts_writes() {
    let mut doc = Document::parse("<h1></h1><p></p>");
    let mut inj = Injector::new(&mut doc);
    inj.text("h1", Some("a")).text("p", None).text("h2", Some("b")).attr("h1", "id", Some("x"));
    assert_eq!(inj.stats(), WriteStats { applied: 2, skipped: 2 });
  }
}
