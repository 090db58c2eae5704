/* src/site/engine/rust/src/content/services.rs */

use reborn_injector::{Dom, Injector};
use serde::Deserialize;

use super::{PageHeader, fragments, item_text, raw};
use crate::slot::Slot;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServicesContent {
  pub page: Option<PageHeader>,
  pub services: Option<Vec<Service>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Service {
  #[serde(default, deserialize_with = "item_text")]
  pub title: Option<String>,
  #[serde(default, deserialize_with = "item_text")]
  pub description: Option<String>,
  #[serde(default, deserialize_with = "item_text")]
  pub details: Option<String>,
}

pub fn service_fragment(service: &Service) -> String {
  format!(
    r#"<div class="service-card"><h3>{}</h3><p class="service-description">{}</p><p class="service-details">{}</p></div>"#,
    raw(service.title.as_deref()),
    raw(service.description.as_deref()),
    raw(service.details.as_deref())
  )
}

impl ServicesContent {
  pub fn apply<D: Dom>(&self, inj: &mut Injector<'_, D>) {
    if let Some(page) = &self.page {
      page.apply(inj);
    }
    let cards = fragments(self.services.as_deref(), service_fragment);
    inj.list(Slot::ServicesGrid.selector(), cards.as_deref());
  }
}
