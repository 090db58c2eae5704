/* src/site/engine/rust/src/content/mod.rs */

// One module per content document. Every field is optional; a missing
// field leaves the template's default markup in place.

pub mod about;
pub mod company;
pub mod contact;
pub mod home;
pub mod process;
pub mod services;

use reborn_injector::value::{is_truthy, scalar_text};
use reborn_injector::{Dom, Injector};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::slot::Slot;

/// Text field: accepts a string, number or boolean. Falsy values (`null`,
/// `""`, `0`, `false`) read as absent, matching how the page scripts skip
/// writes.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Value::deserialize(deserializer)?;
  match value {
    Value::Array(_) | Value::Object(_) => {
      Err(D::Error::custom("expected a string or number, found a container"))
    }
    v if !is_truthy(&v) => Ok(None),
    v => Ok(scalar_text(&v)),
  }
}

/// List item field: any scalar renders, so `0` and `false` print as text.
/// Only `null` reads as absent.
pub(crate) fn item_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Value::deserialize(deserializer)?;
  match value {
    Value::Array(_) | Value::Object(_) => {
      Err(D::Error::custom("expected a string or number, found a container"))
    }
    v => Ok(scalar_text(&v)),
  }
}

/// `page` block shared by every subpage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PageHeader {
  #[serde(default, deserialize_with = "text")]
  pub title: Option<String>,
  #[serde(default, deserialize_with = "text")]
  pub subtitle: Option<String>,
}

impl PageHeader {
  pub(crate) fn apply<D: Dom>(&self, inj: &mut Injector<'_, D>) {
    inj
      .text(Slot::PageTitle.selector(), self.title.as_deref())
      .text(Slot::PageSubtitle.selector(), self.subtitle.as_deref());
  }
}

/// Closing call-to-action block with a button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CallToAction {
  #[serde(default, deserialize_with = "text")]
  pub title: Option<String>,
  #[serde(default, deserialize_with = "text")]
  pub subtitle: Option<String>,
  #[serde(default, deserialize_with = "text")]
  pub button_text: Option<String>,
  #[serde(default, deserialize_with = "text")]
  pub button_link: Option<String>,
}

/// Slots a call-to-action block writes to.
pub(crate) struct CtaSlots {
  pub title: Slot,
  pub subtitle: Slot,
  pub button: Slot,
}

impl CallToAction {
  pub(crate) fn apply<D: Dom>(&self, inj: &mut Injector<'_, D>, slots: &CtaSlots) {
    inj
      .text(slots.title.selector(), self.title.as_deref())
      .text(slots.subtitle.selector(), self.subtitle.as_deref())
      .text(slots.button.selector(), self.button_text.as_deref())
      .attr(slots.button.selector(), "href", self.button_link.as_deref());
  }
}

/// Title and description, used by home service cards and about values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Card {
  #[serde(default, deserialize_with = "item_text")]
  pub title: Option<String>,
  #[serde(default, deserialize_with = "item_text")]
  pub description: Option<String>,
}

/// Fragment field: raw, empty when absent.
pub(crate) fn raw(field: Option<&str>) -> &str {
  field.unwrap_or("")
}

/// Render each item with `fragment`. `None` when the list itself is absent.
pub(crate) fn fragments<T>(items: Option<&[T]>, fragment: fn(&T) -> String) -> Option<Vec<String>> {
  items.map(|items| items.iter().map(fragment).collect())
}
