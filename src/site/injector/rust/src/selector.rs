/* src/site/injector/rust/src/selector.rs */

use scraper::{ElementRef, Selector};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid selector \"{selector}\": {reason}")]
pub struct SelectorError {
  pub selector: String,
  pub reason: String,
}

/// A parsed, comma-separated group of CSS selectors.
#[derive(Debug, Clone)]
pub struct SelectorList(Selector);

impl SelectorList {
  pub fn parse(selector: &str) -> Result<Self, SelectorError> {
    Selector::parse(selector).map(Self).map_err(|e| SelectorError {
      selector: selector.to_string(),
      reason: e.to_string(),
    })
  }

  pub fn matches(&self, element: &ElementRef<'_>) -> bool {
    self.0.matches(element)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Document;

  fn select(html: &str, selector: &str) -> Vec<String> {
    let doc = Document::parse(html);
    let list = SelectorList::parse(selector).unwrap();
    doc.select(&list).into_iter().map(|id| doc.outer_html(id)).collect()
  }

  #[test]
  fn parse_rejects_bad_input() {
    assert!(SelectorList::parse("").is_err());
    assert!(SelectorList::parse("#").is_err());
    assert!(SelectorList::parse("div >").is_err());
    assert!(SelectorList::parse("a[href").is_err());
    assert!(SelectorList::parse("p,").is_err());
  }

  #[test]
  fn error_names_the_selector() {
    let err = SelectorList::parse("a[").unwrap_err();
    assert_eq!(err.selector, "a[");
    assert!(err.to_string().starts_with("invalid selector \"a[\""));
  }

  #[test]
  fn descendant_combinator() {
    let html = r#"<section class="hero"><div><h1>A</h1></div></section><h1>B</h1>"#;
    assert_eq!(select(html, ".hero h1"), vec!["<h1>A</h1>"]);
  }

  #[test]
  fn child_combinator() {
    let doc = Document::parse("<ul><li><ul><li>inner</li></ul></li></ul>");
    let list = SelectorList::parse("ul > li > ul > li").unwrap();
    assert_eq!(doc.select(&list).len(), 1);
  }

  #[test]
  fn id_and_compound_classes() {
    let html = r#"<div id="final-cta"><a class="btn btn-primary">Go</a><a class="btn">No</a></div>"#;
    assert_eq!(select(html, "#final-cta .btn-primary"), vec![r#"<a class="btn btn-primary">Go</a>"#]);
    assert_eq!(select(html, "a.btn.btn-primary").len(), 1);
  }

  #[test]
  fn attribute_prefix() {
    let html = r##"<a href="#kontakt">1</a><a href="/om-oss">2</a><a href="#">3</a>"##;
    assert_eq!(select(html, r##"a[href^="#"]"##).len(), 2);
    assert_eq!(select(html, "a[href=\"/om-oss\"]").len(), 1);
  }

  #[test]
  fn structural_pseudo_classes() {
    let html = r#"<div class="footer-contact"><p>a@b.se</p><p>070</p><p>Gata 1</p></div>"#;
    assert_eq!(select(html, ".footer-contact p:first-child"), vec!["<p>a@b.se</p>"]);
    assert_eq!(select(html, ".footer-contact p:last-child"), vec!["<p>Gata 1</p>"]);
    assert_eq!(select(html, ".footer-contact p:nth-child(2)"), vec!["<p>070</p>"]);
  }

  #[test]
  fn group_returns_document_order_without_duplicates() {
    let html = r#"<footer><div class="footer-contact"><p>x@y.se</p></div></footer>"#;
    let found =
      select(html, ".footer-contact p:first-child, footer .footer-contact p:nth-child(1)");
    assert_eq!(found, vec!["<p>x@y.se</p>"]);
  }

  #[test]
  fn universal_and_type_selectors() {
    let html = "<nav><a>1</a><span>2</span></nav>";
    assert_eq!(select(html, "nav > *").len(), 2);
    assert_eq!(select(html, "NAV A").len(), 1);
  }

  #[test]
  fn detached_nodes_never_match() {
    let mut doc = Document::parse(r#"<ul><li class="x">1</li><li>2</li></ul>"#);
    let list = SelectorList::parse(".x").unwrap();
    let first = doc.select(&list)[0];
    doc.detach(first);
    assert!(doc.select(&list).is_empty());
  }
}
