/* src/site/engine/rust/src/tests/forms.rs */

use std::cell::Cell;
use std::time::Duration;

use reborn_injector::{Document, Dom};
use tokio::time::Instant;

use super::fixtures::{CONTACT_BODY, page};
use crate::error::SubmitError;
use crate::interact::form::{ERROR_CLASS, LOADING_MARKUP, SUCCESS_CLASS};
use crate::interact::{
  FormKind, FormPayload, FormSubmitter, SimulatedSubmitter, Timer, dismiss_notice, submit_form,
};

struct TokioTimer;

impl Timer for TokioTimer {
  async fn sleep(&self, duration: Duration) {
    tokio::time::sleep(duration).await;
  }
}

/// Fails after the same delay as the simulated submitter.
struct FailingSubmitter {
  calls: Cell<usize>,
}

impl FormSubmitter for FailingSubmitter {
  async fn submit(&self, _kind: FormKind, _payload: &FormPayload) -> Result<(), SubmitError> {
    self.calls.set(self.calls.get() + 1);
    tokio::time::sleep(Duration::from_millis(1500)).await;
    Err(SubmitError::Network("offline".into()))
  }
}

fn filled_contact_form() -> (Document, reborn_injector::NodeId) {
  let mut doc = page(CONTACT_BODY);
  let input = Dom::query(&doc, r#"input[name="email"]"#).unwrap();
  doc.set_field_value(input, "kund@foretag.se");
  let form = Dom::query(&doc, FormKind::Contact.selector()).unwrap();
  (doc, form)
}

fn button_state(doc: &Document) -> (String, bool) {
  let button = Dom::query(doc, r#"button[type="submit"]"#).unwrap();
  (doc.inner_html(button), doc.attr(button, "disabled").is_some())
}

#[tokio::test(start_paused = true)]
async fn success_restores_button_within_delay_and_notice_expires() {
  let (mut doc, form) = filled_contact_form();
  let submitter = SimulatedSubmitter::new(TokioTimer);
  let start = Instant::now();

  let notice = submit_form(&mut doc, FormKind::Contact, form, &submitter).await.unwrap();
  let elapsed = start.elapsed();
  assert!(elapsed >= Duration::from_millis(1500) && elapsed < Duration::from_millis(1600));
  assert!(notice.success);
  assert_eq!(button_state(&doc), ("Skicka".to_string(), false));
  assert_eq!(Dom::text(&doc, &notice.node), "Tack! Vi återkommer inom 24 timmar.");
  assert!(Dom::has_class(&doc, &notice.node, SUCCESS_CLASS));
  // the form is reset after a successful submission
  assert!(Dom::form_fields(&doc, &form).iter().all(|(_, v)| v.is_empty()));

  dismiss_notice(&mut doc, notice, &TokioTimer).await;
  assert!(start.elapsed() >= Duration::from_millis(6500));
  assert!(Dom::query(&doc, ".success-message").is_none());
}

#[tokio::test(start_paused = true)]
async fn failure_restores_button_and_keeps_fields() {
  let (mut doc, form) = filled_contact_form();
  let submitter = FailingSubmitter { calls: Cell::new(0) };

  let notice = submit_form(&mut doc, FormKind::Contact, form, &submitter).await.unwrap();
  assert_eq!(submitter.calls.get(), 1);
  assert!(!notice.success);
  assert!(Dom::has_class(&doc, &notice.node, ERROR_CLASS));
  assert_eq!(
    Dom::text(&doc, &notice.node),
    "Något gick fel. Vänligen försök igen eller kontakta oss direkt."
  );
  assert_eq!(button_state(&doc), ("Skicka".to_string(), false));
  assert!(Dom::form_fields(&doc, &form).iter().any(|(_, v)| v == "kund@foretag.se"));

  dismiss_notice(&mut doc, notice, &TokioTimer).await;
  assert!(Dom::query(&doc, ".error-message").is_none());
}

#[tokio::test(start_paused = true)]
async fn button_shows_loading_markup_while_pending() {
  let (mut doc, form) = filled_contact_form();
  let (submission, payload) =
    crate::interact::form::begin_submission(&mut doc, FormKind::Contact, form);
  assert_eq!(button_state(&doc), (LOADING_MARKUP.to_string(), true));
  assert_eq!(payload.get("email").map(String::as_str), Some("kund@foretag.se"));

  let result = SimulatedSubmitter::new(TokioTimer).submit(FormKind::Contact, &payload).await;
  crate::interact::form::finish_submission(&mut doc, &submission, &result);
  assert_eq!(button_state(&doc), ("Skicka".to_string(), false));
}
