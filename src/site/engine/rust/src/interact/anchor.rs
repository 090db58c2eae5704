/* src/site/engine/rust/src/interact/anchor.rs */

use reborn_injector::Dom;

/// Same-page anchors.
pub const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

pub fn anchor_links<D: Dom>(dom: &D) -> Vec<D::Node> {
  dom.query_all(ANCHOR_SELECTOR)
}

/// The element an anchor's `href` points at. `None` when the target does
/// not exist or the href (e.g. a bare `#`) is not a usable selector.
pub fn anchor_target<D: Dom>(dom: &D, anchor: &D::Node) -> Option<D::Node> {
  let href = dom.attribute(anchor, "href")?;
  dom.query(&href)
}
