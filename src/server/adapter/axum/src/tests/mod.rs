/* src/server/adapter/axum/src/tests/mod.rs */

use std::path::Path;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use reborn_engine::PageOptions;
use tempfile::TempDir;
use tower::ServiceExt;

use crate::{SiteOptions, SiteServer};

const INDEX: &str = concat!(
  r#"<!DOCTYPE html><html><body><section class="hero"><h1>Mallrubrik</h1></section>"#,
  r#"<footer><div class="footer-contact"><p class="footer-email">info@example.se</p></div></footer>"#,
  r#"</body></html>"#,
);

const ABOUT: &str = r#"<html><body><header class="page-header"><h1>Om oss</h1></header></body></html>"#;

fn write(root: &Path, rel: &str, body: &str) {
  let path = root.join(rel);
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent).unwrap();
  }
  std::fs::write(path, body).unwrap();
}

fn site() -> (TempDir, axum::Router) {
  let dir = tempfile::tempdir().unwrap();
  let root = dir.path();
  write(root, "site/index.html", INDEX);
  write(root, "site/om-oss.html", ABOUT);
  write(root, "site/css/style.css", "body{margin:0}");
  write(root, "data/home.json", r#"{"hero":{"title":"Vi bygger webb"}}"#);
  write(root, "data/company.json", r#"{"email":"hej@reborn.se"}"#);
  let router = SiteServer::new(SiteOptions {
    templates_dir: root.join("site"),
    data_dir: root.join("data"),
    page: PageOptions::default(),
  })
  .into_router();
  (dir, router)
}

async fn get(router: axum::Router, uri: &str) -> (StatusCode, String) {
  let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
  let res = router.oneshot(req).await.unwrap();
  let status = res.status();
  let bytes = res.into_body().collect().await.unwrap().to_bytes();
  (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn index_is_served_with_content() {
  let (_dir, router) = site();
  let (status, body) = get(router, "/").await;
  assert_eq!(status, StatusCode::OK);
  assert!(body.contains("<h1>Vi bygger webb</h1>"));
  assert!(body.contains(r#"<p class="footer-email">hej@reborn.se</p>"#));
  assert!(!body.contains("Mallrubrik"));
}

#[tokio::test]
async fn missing_document_keeps_template_text() {
  let (_dir, router) = site();
  let (status, body) = get(router, "/om-oss").await;
  assert_eq!(status, StatusCode::OK);
  assert!(body.contains("<h1>Om oss</h1>"));
}

#[tokio::test]
async fn data_documents_are_served_raw() {
  let (_dir, router) = site();
  let (status, body) = get(router, "/data/company.json").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, r#"{"email":"hej@reborn.se"}"#);
}

#[tokio::test]
async fn assets_pass_through() {
  let (_dir, router) = site();
  let (status, body) = get(router.clone(), "/css/style.css").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, "body{margin:0}");
  let (status, _) = get(router, "/css/saknas.css").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_pages_answer_json_404() {
  let (_dir, router) = site();
  for uri in ["/saknas.html", "/saknas", "/blogg/"] {
    let (status, body) = get(router.clone(), uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["ok"], false);
    assert_eq!(json["error"]["code"], "Not Found");
    assert_eq!(json["error"]["message"], format!("no template for {uri}"));
  }
}
