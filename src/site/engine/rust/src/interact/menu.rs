/* src/site/engine/rust/src/interact/menu.rs */

use reborn_injector::Dom;

pub const MENU_TOGGLE_SELECTOR: &str = ".menu-toggle";
pub const NAV_LINKS_SELECTOR: &str = ".nav-links";
pub const NAV_LINK_SELECTOR: &str = ".nav-links a";
pub const ACTIVE_CLASS: &str = "active";

/// The mobile menu's toggle button and the link list it opens.
#[derive(Debug, Clone)]
pub struct Menu<N> {
  pub toggle: N,
  pub links: N,
}

impl<N: Clone> Menu<N> {
  /// `None` unless the page has both a toggle and a link list.
  pub fn find<D: Dom<Node = N>>(dom: &D) -> Option<Self> {
    let toggle = dom.query(MENU_TOGGLE_SELECTOR)?;
    let links = dom.query(NAV_LINKS_SELECTOR)?;
    Some(Self { toggle, links })
  }

  /// Every link inside the menu; clicking any of them closes it.
  pub fn link_items<D: Dom<Node = N>>(dom: &D) -> Vec<N> {
    dom.query_all(NAV_LINK_SELECTOR)
  }

  /// Returns whether the menu is open afterwards.
  pub fn toggle<D: Dom<Node = N>>(&self, dom: &mut D) -> bool {
    dom.toggle_class(&self.links, ACTIVE_CLASS)
  }

  pub fn close<D: Dom<Node = N>>(&self, dom: &mut D) {
    dom.remove_class(&self.links, ACTIVE_CLASS);
  }
}
