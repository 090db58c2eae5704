/* src/site/engine/rust/src/interact/form.rs */

use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;

use reborn_injector::Dom;

use crate::error::SubmitError;

pub const SUBMIT_BUTTON_SELECTOR: &str = r#"button[type="submit"]"#;
pub const LOADING_MARKUP: &str = r#"<span class="loading"></span> Skickar..."#;
pub const SUCCESS_CLASS: &str = "success-message";
pub const ERROR_CLASS: &str = "error-message";

/// Delay used by [`SimulatedSubmitter`].
pub const SIMULATED_DELAY: Duration = Duration::from_millis(1500);
/// How long a success or error notice stays on the page.
pub const NOTICE_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
  Contact,
  Booking,
}

impl FormKind {
  pub const ALL: [FormKind; 2] = [FormKind::Contact, FormKind::Booking];

  pub fn selector(self) -> &'static str {
    match self {
      FormKind::Contact => "#contact-form",
      FormKind::Booking => "#booking-form",
    }
  }

  pub fn name(self) -> &'static str {
    match self {
      FormKind::Contact => "contact",
      FormKind::Booking => "booking",
    }
  }

  pub fn success_text(self) -> &'static str {
    match self {
      FormKind::Contact => "Tack! Vi återkommer inom 24 timmar.",
      FormKind::Booking => "Bokningsförfrågan mottagen! Vi kontaktar er inom kort.",
    }
  }

  pub fn error_text(self) -> &'static str {
    match self {
      FormKind::Contact => "Något gick fel. Vänligen försök igen eller kontakta oss direkt.",
      FormKind::Booking => "Något gick fel. Vänligen försök igen.",
    }
  }
}

/// Field name to value. A repeated name keeps its last value.
pub type FormPayload = BTreeMap<String, String>;

/// Delivers a form's fields somewhere.
pub trait FormSubmitter {
  fn submit(
    &self,
    kind: FormKind,
    payload: &FormPayload,
  ) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Host clock for delays and notice expiry.
pub trait Timer {
  fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Waits, then reports success without sending anything. Used when a form
/// declares no endpoint.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter<T> {
  timer: T,
  delay: Duration,
}

impl<T: Timer> SimulatedSubmitter<T> {
  pub fn new(timer: T) -> Self {
    Self { timer, delay: SIMULATED_DELAY }
  }

  pub fn with_delay(timer: T, delay: Duration) -> Self {
    Self { timer, delay }
  }
}

impl<T: Timer> FormSubmitter for SimulatedSubmitter<T> {
  async fn submit(&self, kind: FormKind, payload: &FormPayload) -> Result<(), SubmitError> {
    tracing::debug!(form = kind.name(), fields = payload.len(), "simulated submission");
    self.timer.sleep(self.delay).await;
    Ok(())
  }
}

/// Where a form posts, read from `data-endpoint` and `data-method` on the
/// form element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormEndpoint {
  pub url: String,
  pub method: String,
}

impl FormEndpoint {
  pub fn from_form<D: Dom>(dom: &D, form: &D::Node) -> Option<Self> {
    let url = dom.attribute(form, "data-endpoint").filter(|u| !u.trim().is_empty())?;
    let method = dom
      .attribute(form, "data-method")
      .filter(|m| !m.trim().is_empty())
      .map_or_else(|| "POST".to_string(), |m| m.trim().to_ascii_uppercase());
    Some(Self { url, method })
  }
}

/// A form in flight: its submit button and the label to restore.
#[derive(Debug, Clone)]
pub struct Submission<N> {
  pub kind: FormKind,
  pub form: N,
  button: Option<(N, String)>,
}

/// A success or error message appended to a form.
#[derive(Debug, Clone)]
pub struct Notice<N> {
  pub node: N,
  pub success: bool,
}

/// Put the submit button into its loading state and collect the fields.
pub fn begin_submission<D: Dom>(
  dom: &mut D,
  kind: FormKind,
  form: D::Node,
) -> (Submission<D::Node>, FormPayload) {
  let button = dom.query_within(&form, SUBMIT_BUTTON_SELECTOR).map(|button| {
    let label = dom.text(&button);
    dom.set_inner_html(&button, LOADING_MARKUP);
    dom.set_attribute(&button, "disabled", "");
    (button, label)
  });
  let payload = dom.form_fields(&form).into_iter().collect();
  (Submission { kind, form, button }, payload)
}

/// Show the outcome and restore the button, whatever the outcome was.
/// `None` when the notice could not be added to the page.
pub fn finish_submission<D: Dom>(
  dom: &mut D,
  submission: &Submission<D::Node>,
  result: &Result<(), SubmitError>,
) -> Option<Notice<D::Node>> {
  let kind = submission.kind;
  let notice = match result {
    Ok(()) => {
      let node = dom.append_element(&submission.form, "div", SUCCESS_CLASS, kind.success_text());
      dom.reset_form(&submission.form);
      node.map(|node| Notice { node, success: true })
    }
    Err(e) => {
      tracing::warn!(form = kind.name(), error = %e, "form submission failed");
      let node = dom.append_element(&submission.form, "div", ERROR_CLASS, kind.error_text());
      node.map(|node| Notice { node, success: false })
    }
  };
  if let Some((button, label)) = &submission.button {
    dom.set_text(button, label);
    dom.remove_attribute(button, "disabled");
  }
  notice
}

/// Run one submission end to end. Returns once the button is restored; the
/// notice is still on the page (see [`dismiss_notice`]).
pub async fn submit_form<D, S>(
  dom: &mut D,
  kind: FormKind,
  form: D::Node,
  submitter: &S,
) -> Option<Notice<D::Node>>
where
  D: Dom,
  S: FormSubmitter,
{
  let (submission, payload) = begin_submission(dom, kind, form);
  let result = submitter.submit(kind, &payload).await;
  finish_submission(dom, &submission, &result)
}

/// Remove `notice` after [`NOTICE_LIFETIME`].
pub async fn dismiss_notice<D, T>(dom: &mut D, notice: Notice<D::Node>, timer: &T)
where
  D: Dom,
  T: Timer,
{
  timer.sleep(NOTICE_LIFETIME).await;
  dom.remove(&notice.node);
}
