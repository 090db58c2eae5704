/* src/site/engine/rust/src/content/company.rs */

use reborn_injector::{Dom, Injector};
use serde::{Deserialize, Serialize};

use super::text;
use crate::slot::Slot;

/// Company details shown in every page footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CompanyInfo {
  #[serde(default, deserialize_with = "text")]
  pub email: Option<String>,
  #[serde(default, deserialize_with = "text")]
  pub phone: Option<String>,
  #[serde(default, deserialize_with = "text")]
  pub copyright: Option<String>,
}

/// How footer email and phone elements are located.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterMatching {
  /// `.footer-email` / `.footer-phone` inside `.footer-contact`.
  #[default]
  Explicit,
  /// First and last paragraphs of `.footer-contact`, overwritten only when
  /// their current text already looks like an email (contains `@`) or a
  /// phone number (contains a digit). For templates that predate the
  /// named slots.
  Heuristic,
}

impl CompanyInfo {
  pub fn apply<D: Dom>(&self, inj: &mut Injector<'_, D>, footer: FooterMatching) {
    match footer {
      FooterMatching::Explicit => {
        inj
          .text(Slot::FooterEmail.selector(), self.email.as_deref())
          .text(Slot::FooterPhone.selector(), self.phone.as_deref());
      }
      FooterMatching::Heuristic => {
        write_guarded(inj, Slot::FooterLegacyEmail, self.email.as_deref(), |t| t.contains('@'));
        write_guarded(inj, Slot::FooterLegacyPhone, self.phone.as_deref(), |t| {
          t.chars().any(|c| c.is_ascii_digit())
        });
      }
    }
    inj.text(Slot::Copyright.selector(), self.copyright.as_deref());
  }
}

/// Overwrite every element matching `slot` whose current text passes `guard`.
fn write_guarded<D: Dom>(
  inj: &mut Injector<'_, D>,
  slot: Slot,
  value: Option<&str>,
  guard: impl Fn(&str) -> bool,
) {
  let Some(value) = value else {
    inj.record_write(false);
    return;
  };
  let dom = inj.dom();
  let targets: Vec<D::Node> =
    dom.query_all(slot.selector()).into_iter().filter(|node| guard(&dom.text(node))).collect();
  for node in &targets {
    dom.set_text(node, value);
  }
  inj.record_write(!targets.is_empty());
}
