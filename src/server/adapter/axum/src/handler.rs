/* src/server/adapter/axum/src/handler.rs */

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::response::{Html, IntoResponse, Response};
use reborn_engine::reborn_injector::Document;
use reborn_engine::{PageOptions, apply_page, fetch_page};
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::error::ServerError;
use crate::source::DirSource;

pub(crate) struct SiteState {
  pub(crate) templates: ServeDir,
  pub(crate) templates_dir: PathBuf,
  pub(crate) source: DirSource,
  pub(crate) options: PageOptions,
}

/// Template file for a request path: `/` and `/x/` map to `index.html`
/// inside the directory, `/x.html` maps to itself and `/x` to `x.html`.
/// Paths that climb out of the template root map to nothing.
pub(crate) fn template_candidate(path: &str) -> Option<PathBuf> {
  let rel = path.trim_start_matches('/');
  let rel = Path::new(rel);
  if rel.components().any(|c| !matches!(c, Component::Normal(_))) {
    return None;
  }
  if path.ends_with('/') || rel.as_os_str().is_empty() {
    return Some(rel.join("index.html"));
  }
  match rel.extension() {
    Some(ext) if ext == "html" => Some(rel.to_path_buf()),
    Some(_) => None,
    None => Some(rel.with_extension("html")),
  }
}

/// What a request path resolves to under the template root.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Target {
  Page(PathBuf),
  /// A page path with no template behind it.
  Missing,
  /// Assets, directories to redirect, and files without an extension.
  Static,
}

async fn is_file(path: &Path) -> bool {
  tokio::fs::metadata(path).await.is_ok_and(|meta| meta.is_file())
}

pub(crate) async fn resolve_target(root: &Path, path: &str) -> Target {
  let Some(candidate) = template_candidate(path) else { return Target::Static };
  let file = root.join(&candidate);
  if is_file(&file).await {
    return Target::Page(file);
  }
  let rel = path.trim_start_matches('/');
  let extensionless = !path.ends_with('/') && Path::new(rel).extension().is_none();
  if extensionless && tokio::fs::metadata(root.join(rel)).await.is_ok() {
    return Target::Static;
  }
  Target::Missing
}

async fn render_page(state: &SiteState, path: &str, file: &Path) -> Result<Html<String>, ServerError> {
  let html = tokio::fs::read_to_string(file)
    .await
    .map_err(|e| ServerError::io(&file.display().to_string(), &e))?;
  // the parsed document is not Send, so every await happens before parsing
  let bodies = fetch_page(&state.source, path).await;
  let mut doc = Document::parse(&html);
  let report = apply_page(bodies, &mut doc, &state.options);
  report.emit();
  let stats = report.stats();
  tracing::info!(path, applied = stats.applied, ok = report.is_ok(), "page rendered");
  Ok(Html(doc.to_html()))
}

/// Pages get content injected and missing pages answer a JSON 404;
/// everything else is served as-is from the template directory.
pub(crate) async fn handle(State(state): State<Arc<SiteState>>, req: Request<Body>) -> Response {
  let path = req.uri().path().to_string();
  match resolve_target(&state.templates_dir, &path).await {
    Target::Page(file) => return render_page(&state, &path, &file).await.into_response(),
    Target::Missing => {
      tracing::debug!(path, "no template");
      return ServerError::not_found(&path).into_response();
    }
    Target::Static => {}
  }
  match state.templates.clone().oneshot(req).await {
    Ok(res) => res.into_response(),
    Err(never) => match never {},
  }
}
