/* src/site/engine/rust/src/content/about.rs */

use reborn_injector::{Dom, Injector};
use serde::Deserialize;

use super::{Card, PageHeader, fragments, raw, text};
use crate::slot::Slot;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AboutContent {
  pub page: Option<PageHeader>,
  pub content: Option<AboutSections>,
  pub values: Option<Vec<Card>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AboutSections {
  #[serde(default, deserialize_with = "text")]
  pub intro: Option<String>,
  #[serde(default, deserialize_with = "text")]
  pub mission: Option<String>,
  #[serde(default, deserialize_with = "text")]
  pub approach: Option<String>,
}

pub fn value_fragment(value: &Card) -> String {
  format!(
    r#"<div class="value-card"><h3>{}</h3><p>{}</p></div>"#,
    raw(value.title.as_deref()),
    raw(value.description.as_deref())
  )
}

impl AboutContent {
  pub fn apply<D: Dom>(&self, inj: &mut Injector<'_, D>) {
    if let Some(page) = &self.page {
      page.apply(inj);
    }
    if let Some(sections) = &self.content {
      inj
        .text(Slot::AboutIntro.selector(), sections.intro.as_deref())
        .text(Slot::AboutMission.selector(), sections.mission.as_deref())
        .text(Slot::AboutApproach.selector(), sections.approach.as_deref());
    }
    let values = fragments(self.values.as_deref(), value_fragment);
    inj.list(Slot::ValuesGrid.selector(), values.as_deref());
  }
}
