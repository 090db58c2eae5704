/* src/site/engine/rust/src/content/contact.rs */

use reborn_injector::{Dom, Injector};
use serde::Deserialize;

use super::{PageHeader, text};
use crate::slot::Slot;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactContent {
  pub page: Option<PageHeader>,
  pub contact_info: Option<ContactInfo>,
  pub form: Option<FormIntro>,
  #[serde(default, deserialize_with = "text")]
  pub cta_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactInfo {
  #[serde(default, deserialize_with = "text")]
  pub email: Option<String>,
  #[serde(default, deserialize_with = "text")]
  pub phone: Option<String>,
  #[serde(default, deserialize_with = "text")]
  pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FormIntro {
  #[serde(default, deserialize_with = "text")]
  pub title: Option<String>,
  #[serde(default, deserialize_with = "text")]
  pub subtitle: Option<String>,
}

impl ContactContent {
  pub fn apply<D: Dom>(&self, inj: &mut Injector<'_, D>) {
    if let Some(page) = &self.page {
      page.apply(inj);
    }
    if let Some(info) = &self.contact_info {
      inj
        .text(Slot::ContactEmail.selector(), info.email.as_deref())
        .text(Slot::ContactPhone.selector(), info.phone.as_deref())
        .text(Slot::ContactAddress.selector(), info.address.as_deref());
    }
    if let Some(form) = &self.form {
      inj
        .text(Slot::FormTitle.selector(), form.title.as_deref())
        .text(Slot::FormSubtitle.selector(), form.subtitle.as_deref());
    }
    inj.text(Slot::FormCtaText.selector(), self.cta_text.as_deref());
  }
}
