/* src/site/engine/rust/src/content/home.rs */

use reborn_injector::{Dom, Injector};
use serde::Deserialize;

use super::{CallToAction, Card, CtaSlots, fragments, item_text, raw, text};
use crate::slot::Slot;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HomeContent {
  pub hero: Option<Hero>,
  pub services: Option<Vec<Card>>,
  pub process: Option<ProcessOverview>,
  pub final_cta: Option<CallToAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Hero {
  #[serde(default, deserialize_with = "text")]
  pub title: Option<String>,
  #[serde(default, deserialize_with = "text")]
  pub subtitle: Option<String>,
  #[serde(default, deserialize_with = "text")]
  pub cta_text: Option<String>,
  #[serde(default, deserialize_with = "text")]
  pub cta_link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProcessOverview {
  #[serde(default, deserialize_with = "text")]
  pub title: Option<String>,
  #[serde(default, deserialize_with = "text")]
  pub subtitle: Option<String>,
  pub steps: Option<Vec<Step>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Step {
  #[serde(default, deserialize_with = "item_text")]
  pub number: Option<String>,
  #[serde(default, deserialize_with = "item_text")]
  pub title: Option<String>,
  #[serde(default, deserialize_with = "item_text")]
  pub description: Option<String>,
}

pub fn card_fragment(card: &Card) -> String {
  format!(
    r#"<div class="card"><h3>{}</h3><p>{}</p></div>"#,
    raw(card.title.as_deref()),
    raw(card.description.as_deref())
  )
}

pub fn step_fragment(step: &Step) -> String {
  format!(
    r#"<div class="process-step"><div class="process-number">{}</div><h3>{}</h3><p>{}</p></div>"#,
    raw(step.number.as_deref()),
    raw(step.title.as_deref()),
    raw(step.description.as_deref())
  )
}

const FINAL_CTA: CtaSlots = CtaSlots {
  title: Slot::FinalCtaTitle,
  subtitle: Slot::FinalCtaSubtitle,
  button: Slot::FinalCtaButton,
};

impl HomeContent {
  pub fn apply<D: Dom>(&self, inj: &mut Injector<'_, D>) {
    if let Some(hero) = &self.hero {
      inj
        .text(Slot::HeroTitle.selector(), hero.title.as_deref())
        .text(Slot::HeroSubtitle.selector(), hero.subtitle.as_deref())
        .text(Slot::HeroCta.selector(), hero.cta_text.as_deref())
        .attr(Slot::HeroCta.selector(), "href", hero.cta_link.as_deref());
    }

    let cards = fragments(self.services.as_deref(), card_fragment);
    inj.list(Slot::ServicesTeaser.selector(), cards.as_deref());

    if let Some(process) = &self.process {
      inj
        .text(Slot::ProcessOverviewTitle.selector(), process.title.as_deref())
        .text(Slot::ProcessOverviewSubtitle.selector(), process.subtitle.as_deref());
      let steps = fragments(process.steps.as_deref(), step_fragment);
      inj.list(Slot::ProcessTimeline.selector(), steps.as_deref());
    }

    if let Some(cta) = &self.final_cta {
      cta.apply(inj, &FINAL_CTA);
    }
  }
}
