/* src/site/engine/rust/src/interact/nav.rs */

use reborn_injector::Dom;

pub const NAV_SELECTOR: &str = "nav";
pub const SCROLLED_CLASS: &str = "scrolled";
/// Pixels scrolled before the nav switches to its compact style.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

pub const CTA_SCROLL_SELECTOR: &str = ".cta-scroll";
pub const CTA_PAST_FOLD: &str = "Skapa något nytt";
pub const CTA_ABOVE_FOLD: &str = "Boka möte";

/// Sync the nav's `scrolled` class with the scroll offset. Returns whether
/// the class is now present; `false` when the page has no nav.
pub fn update_nav<D: Dom>(dom: &mut D, scroll_y: f64) -> bool {
  let Some(nav) = dom.query(NAV_SELECTOR) else { return false };
  if scroll_y > NAV_SCROLL_THRESHOLD {
    dom.add_class(&nav, SCROLLED_CLASS);
    true
  } else {
    dom.remove_class(&nav, SCROLLED_CLASS);
    false
  }
}

/// Relabel `.cta-scroll` once the visitor has scrolled past the first screen.
pub fn update_cta<D: Dom>(dom: &mut D, scroll_y: f64, viewport_height: f64) {
  let Some(cta) = dom.query(CTA_SCROLL_SELECTOR) else { return };
  let label = if scroll_y > viewport_height { CTA_PAST_FOLD } else { CTA_ABOVE_FOLD };
  dom.set_text(&cta, label);
}
