/* src/site/engine/rust/src/interact/reveal.rs */

use reborn_injector::Dom;

pub const REVEAL_SELECTOR: &str = ".card, .process-step";
/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Reveal only once an element is 100px inside the bottom edge.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

pub const LOGO_SELECTOR: &str = ".logo img";
pub const LOGO_ANIMATION: &str = "fadeInUp 1s ease-out";

/// Hide every reveal target and return them for observation.
pub fn prepare_reveal<D: Dom>(dom: &mut D) -> Vec<D::Node> {
  let targets = dom.query_all(REVEAL_SELECTOR);
  for node in &targets {
    dom.set_style(node, "opacity", "0");
    dom.set_style(node, "transform", "translateY(30px)");
    dom.set_style(node, "transition", "opacity 0.6s ease, transform 0.6s ease");
  }
  targets
}

/// Show an element that entered the viewport. Never undone.
pub fn reveal<D: Dom>(dom: &mut D, node: &D::Node) {
  dom.set_style(node, "opacity", "1");
  dom.set_style(node, "transform", "translateY(0)");
}

pub fn animate_logo<D: Dom>(dom: &mut D) -> bool {
  let Some(logo) = dom.query(LOGO_SELECTOR) else { return false };
  dom.set_style(&logo, "animation", LOGO_ANIMATION);
  true
}
