/* src/site/engine/rust/src/content/process.rs */

use reborn_injector::{Dom, Injector};
use serde::Deserialize;

use super::{CallToAction, CtaSlots, PageHeader, fragments, item_text, raw, text};
use crate::slot::Slot;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProcessContent {
  pub page: Option<PageHeader>,
  #[serde(default, deserialize_with = "text")]
  pub intro: Option<String>,
  pub phases: Option<Vec<Phase>>,
  pub cta: Option<CallToAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Phase {
  #[serde(default, deserialize_with = "item_text")]
  pub number: Option<String>,
  #[serde(default, deserialize_with = "item_text")]
  pub title: Option<String>,
  #[serde(default, deserialize_with = "item_text")]
  pub description: Option<String>,
  #[serde(default, deserialize_with = "item_text")]
  pub details: Option<String>,
}

pub fn phase_fragment(phase: &Phase) -> String {
  format!(
    concat!(
      r#"<div class="phase-card"><div class="phase-number">{}</div><h3>{}</h3>"#,
      r#"<p class="phase-description">{}</p><p class="phase-details">{}</p></div>"#
    ),
    raw(phase.number.as_deref()),
    raw(phase.title.as_deref()),
    raw(phase.description.as_deref()),
    raw(phase.details.as_deref())
  )
}

const PROCESS_CTA: CtaSlots = CtaSlots {
  title: Slot::ProcessCtaTitle,
  subtitle: Slot::ProcessCtaSubtitle,
  button: Slot::ProcessCtaButton,
};

impl ProcessContent {
  pub fn apply<D: Dom>(&self, inj: &mut Injector<'_, D>) {
    if let Some(page) = &self.page {
      page.apply(inj);
    }
    inj.text(Slot::ProcessIntro.selector(), self.intro.as_deref());
    let phases = fragments(self.phases.as_deref(), phase_fragment);
    inj.list(Slot::ProcessPhases.selector(), phases.as_deref());
    if let Some(cta) = &self.cta {
      cta.apply(inj, &PROCESS_CTA);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn phase_fragment_markup() {
    let phase = Phase {
      number: Some("2".into()),
      title: Some("Design".into()),
      description: Some("Skisser".into()),
      details: Some("2 veckor".into()),
    };
    assert_eq!(
      phase_fragment(&phase),
      concat!(
        r#"<div class="phase-card"><div class="phase-number">2</div><h3>Design</h3>"#,
        r#"<p class="phase-description">Skisser</p><p class="phase-details">2 veckor</p></div>"#
      )
    );
  }
}
