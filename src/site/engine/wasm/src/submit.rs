/* src/site/engine/wasm/src/submit.rs */

use reborn_engine::SubmitError;
use reborn_engine::interact::{
  FormEndpoint, FormKind, FormPayload, FormSubmitter, SimulatedSubmitter,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, Headers, Request, RequestInit, Response};

use crate::dom::BrowserDom;
use crate::fetch::describe;
use crate::timer::BrowserTimer;

/// Sends the fields as a JSON object to the form's endpoint. Any 2xx is
/// success.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
  endpoint: FormEndpoint,
}

impl HttpSubmitter {
  pub fn new(endpoint: FormEndpoint) -> Self {
    Self { endpoint }
  }

  fn request(&self, payload: &FormPayload) -> Result<Request, JsValue> {
    let body = serde_json::to_string(payload).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let headers = Headers::new()?;
    headers.set("Content-Type", "application/json")?;
    headers.set("Accept", "application/json")?;
    let init = RequestInit::new();
    init.set_method(&self.endpoint.method);
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&body));
    Request::new_with_str_and_init(&self.endpoint.url, &init)
  }
}

impl FormSubmitter for HttpSubmitter {
  async fn submit(&self, kind: FormKind, payload: &FormPayload) -> Result<(), SubmitError> {
    let window = web_sys::window().ok_or_else(|| SubmitError::Network("no window".into()))?;
    let request = self.request(payload).map_err(|e| SubmitError::Rejected(describe(&e)))?;
    tracing::debug!(form = kind.name(), url = %self.endpoint.url, "submitting form");
    let value = JsFuture::from(window.fetch_with_request(&request))
      .await
      .map_err(|e| SubmitError::Network(describe(&e)))?;
    let response: Response =
      value.dyn_into().map_err(|e| SubmitError::Network(describe(&e)))?;
    if response.ok() { Ok(()) } else { Err(SubmitError::Status(response.status())) }
  }
}

/// Submitter chosen per form: HTTP when the form names an endpoint,
/// simulated otherwise.
#[derive(Debug, Clone)]
pub enum PageSubmitter {
  Simulated(SimulatedSubmitter<BrowserTimer>),
  Http(HttpSubmitter),
}

impl PageSubmitter {
  pub fn for_form(dom: &BrowserDom, form: &Element) -> Self {
    match FormEndpoint::from_form(dom, form) {
      Some(endpoint) => PageSubmitter::Http(HttpSubmitter::new(endpoint)),
      None => PageSubmitter::Simulated(SimulatedSubmitter::new(BrowserTimer)),
    }
  }
}

impl FormSubmitter for PageSubmitter {
  async fn submit(&self, kind: FormKind, payload: &FormPayload) -> Result<(), SubmitError> {
    match self {
      PageSubmitter::Simulated(s) => s.submit(kind, payload).await,
      PageSubmitter::Http(s) => s.submit(kind, payload).await,
    }
  }
}
