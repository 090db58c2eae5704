/* src/site/engine/rust/src/slot.rs */

use reborn_injector::Dom;

use crate::content::company::FooterMatching;
use crate::route::ContentKey;

/// A named location in the page markup that a loader writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
  // home
  HeroTitle,
  HeroSubtitle,
  HeroCta,
  ServicesTeaser,
  ProcessOverviewTitle,
  ProcessOverviewSubtitle,
  ProcessTimeline,
  FinalCtaTitle,
  FinalCtaSubtitle,
  FinalCtaButton,
  // shared page header
  PageTitle,
  PageSubtitle,
  // services
  ServicesGrid,
  // about
  AboutIntro,
  AboutMission,
  AboutApproach,
  ValuesGrid,
  // process
  ProcessIntro,
  ProcessPhases,
  ProcessCtaTitle,
  ProcessCtaSubtitle,
  ProcessCtaButton,
  // contact
  ContactEmail,
  ContactPhone,
  ContactAddress,
  FormTitle,
  FormSubtitle,
  FormCtaText,
  // company, on every page
  FooterEmail,
  FooterPhone,
  FooterLegacyEmail,
  FooterLegacyPhone,
  Copyright,
}

const HOME: &[Slot] = &[
  Slot::HeroTitle,
  Slot::HeroSubtitle,
  Slot::HeroCta,
  Slot::ServicesTeaser,
  Slot::ProcessOverviewTitle,
  Slot::ProcessOverviewSubtitle,
  Slot::ProcessTimeline,
  Slot::FinalCtaTitle,
  Slot::FinalCtaSubtitle,
  Slot::FinalCtaButton,
];

const SERVICES: &[Slot] = &[Slot::PageTitle, Slot::PageSubtitle, Slot::ServicesGrid];

const ABOUT: &[Slot] = &[
  Slot::PageTitle,
  Slot::PageSubtitle,
  Slot::AboutIntro,
  Slot::AboutMission,
  Slot::AboutApproach,
  Slot::ValuesGrid,
];

const PROCESS: &[Slot] = &[
  Slot::PageTitle,
  Slot::PageSubtitle,
  Slot::ProcessIntro,
  Slot::ProcessPhases,
  Slot::ProcessCtaTitle,
  Slot::ProcessCtaSubtitle,
  Slot::ProcessCtaButton,
];

const CONTACT: &[Slot] = &[
  Slot::PageTitle,
  Slot::PageSubtitle,
  Slot::ContactEmail,
  Slot::ContactPhone,
  Slot::ContactAddress,
  Slot::FormTitle,
  Slot::FormSubtitle,
  Slot::FormCtaText,
];

const COMPANY_EXPLICIT: &[Slot] = &[Slot::FooterEmail, Slot::FooterPhone, Slot::Copyright];
const COMPANY_HEURISTIC: &[Slot] =
  &[Slot::FooterLegacyEmail, Slot::FooterLegacyPhone, Slot::Copyright];

impl Slot {
  pub fn selector(self) -> &'static str {
    match self {
      Slot::HeroTitle => ".hero h1",
      Slot::HeroSubtitle => ".hero .subtitle",
      Slot::HeroCta => ".hero .btn-primary",
      Slot::ServicesTeaser => "#services-teaser .cards-grid",
      Slot::ProcessOverviewTitle => "#process-overview .section-title",
      Slot::ProcessOverviewSubtitle => "#process-overview .section-subtitle",
      Slot::ProcessTimeline => ".process-timeline",
      Slot::FinalCtaTitle => "#final-cta .section-title",
      Slot::FinalCtaSubtitle => "#final-cta .section-subtitle",
      Slot::FinalCtaButton => "#final-cta .btn-primary",
      Slot::PageTitle => ".page-header h1",
      Slot::PageSubtitle => ".page-header .subtitle",
      Slot::ServicesGrid => ".services-grid",
      Slot::AboutIntro => ".about-intro",
      Slot::AboutMission => ".about-mission",
      Slot::AboutApproach => ".about-approach",
      Slot::ValuesGrid => ".values-grid",
      Slot::ProcessIntro => ".process-intro",
      Slot::ProcessPhases => ".process-phases",
      Slot::ProcessCtaTitle => ".process-cta .section-title",
      Slot::ProcessCtaSubtitle => ".process-cta .section-subtitle",
      Slot::ProcessCtaButton => ".process-cta .btn-primary",
      Slot::ContactEmail => ".contact-email",
      Slot::ContactPhone => ".contact-phone",
      Slot::ContactAddress => ".contact-address",
      Slot::FormTitle => ".form-section h2",
      Slot::FormSubtitle => ".form-section .subtitle",
      Slot::FormCtaText => ".form-cta-text",
      Slot::FooterEmail => ".footer-contact .footer-email",
      Slot::FooterPhone => ".footer-contact .footer-phone",
      Slot::FooterLegacyEmail => {
        ".footer-contact p:first-child, footer .footer-contact p:nth-child(1)"
      }
      Slot::FooterLegacyPhone => {
        ".footer-contact p:last-child, footer .footer-contact p:nth-child(2)"
      }
      Slot::Copyright => ".footer-bottom p",
    }
  }

  /// The slots the loader for `key` writes to.
  pub fn for_key(key: ContentKey, footer: FooterMatching) -> &'static [Slot] {
    match key {
      ContentKey::Home => HOME,
      ContentKey::Services => SERVICES,
      ContentKey::About => ABOUT,
      ContentKey::Process => PROCESS,
      ContentKey::Contact => CONTACT,
      ContentKey::Company => match footer {
        FooterMatching::Explicit => COMPANY_EXPLICIT,
        FooterMatching::Heuristic => COMPANY_HEURISTIC,
      },
    }
  }
}

impl std::fmt::Display for Slot {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{self:?} ({})", self.selector())
  }
}

/// Result of validating a template against one loader's slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotCheck {
  pub key: ContentKey,
  pub missing: Vec<Slot>,
}

impl SlotCheck {
  pub fn is_complete(&self) -> bool {
    self.missing.is_empty()
  }
}

/// Report which of `key`'s slots have no matching element in `dom`.
pub fn check_slots<D: Dom>(dom: &D, key: ContentKey, footer: FooterMatching) -> SlotCheck {
  let missing = Slot::for_key(key, footer)
    .iter()
    .copied()
    .filter(|slot| dom.query(slot.selector()).is_none())
    .collect();
  SlotCheck { key, missing }
}
