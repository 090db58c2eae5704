/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Failure while rendering a page, answered as a JSON error body.
#[derive(Debug)]
pub(crate) struct ServerError {
  status: StatusCode,
  message: String,
}

impl ServerError {
  pub(crate) fn not_found(path: &str) -> Self {
    Self { status: StatusCode::NOT_FOUND, message: format!("no template for {path}") }
  }

  pub(crate) fn io(context: &str, err: &std::io::Error) -> Self {
    Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: format!("{context}: {err}") }
  }
}

impl IntoResponse for ServerError {
  fn into_response(self) -> Response {
    if self.status.is_server_error() {
      tracing::error!(status = self.status.as_u16(), message = %self.message, "request failed");
    }
    let body = serde_json::json!({
      "ok": false,
      "error": {
        "code": self.status.canonical_reason().unwrap_or("ERROR"),
        "message": self.message,
      }
    });
    (self.status, axum::Json(body)).into_response()
  }
}
