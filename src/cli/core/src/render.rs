/* src/cli/core/src/render.rs */

use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use reborn_engine::reborn_injector::Document;
use reborn_engine::{ContentSource, PageOptions, PageReport, load_page};

use crate::config::SitePaths;
use crate::ui;

/// One template after its loaders ran.
#[derive(Debug)]
pub struct RenderedPage {
  /// Relative to the template root, and to the output root.
  pub rel: PathBuf,
  pub report: PageReport,
}

fn walk(dir: &Path, skip: &[&Path], out: &mut Vec<PathBuf>) -> Result<()> {
  let entries =
    std::fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))?;
  for entry in entries {
    let path = entry.with_context(|| format!("failed to read {}", dir.display()))?.path();
    let hidden = path.file_name().and_then(|n| n.to_str()).is_some_and(|n| n.starts_with('.'));
    if hidden || skip.iter().any(|s| path.starts_with(s)) {
      continue;
    }
    if path.is_dir() {
      walk(&path, skip, out)?;
    } else if path.extension().is_some_and(|e| e == "html") {
      out.push(path);
    }
  }
  Ok(())
}

/// Every `*.html` under the template root, relative to it and sorted.
/// The data and output directories are skipped.
pub fn discover_templates(paths: &SitePaths) -> Result<Vec<PathBuf>> {
  let mut found = Vec::new();
  walk(&paths.templates_dir, &[&paths.data_dir, &paths.out_dir], &mut found)?;
  let mut rel: Vec<PathBuf> = found
    .into_iter()
    .filter_map(|p| p.strip_prefix(&paths.templates_dir).ok().map(Path::to_path_buf))
    .collect();
  rel.sort();
  Ok(rel)
}

/// The pathname a browser sees for a template: `index.html` files are
/// addressed by their directory.
pub fn url_path(rel: &Path) -> String {
  let parts: Vec<String> = rel
    .components()
    .filter_map(|c| match c {
      Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
      _ => None,
    })
    .collect();
  match parts.split_last() {
    Some((last, dirs)) if last == "index.html" => {
      let dirs = dirs.join("/");
      if dirs.is_empty() { "/".to_string() } else { format!("/{dirs}/") }
    }
    _ => format!("/{}", parts.join("/")),
  }
}

/// Inject content into every template and write the results under the
/// output root.
pub async fn render_site<S: ContentSource>(
  source: &S,
  paths: &SitePaths,
  options: &PageOptions,
) -> Result<Vec<RenderedPage>> {
  let mut pages = Vec::new();
  for rel in discover_templates(paths)? {
    let src = paths.templates_dir.join(&rel);
    let html =
      std::fs::read_to_string(&src).with_context(|| format!("failed to read {}", src.display()))?;
    let mut doc = Document::parse(&html);
    let report = load_page(source, &url_path(&rel), &mut doc, options).await;
    report.emit();

    let dest = paths.out_dir.join(&rel);
    if let Some(parent) = dest.parent() {
      std::fs::create_dir_all(parent)
        .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(&dest, doc.to_html())
      .with_context(|| format!("failed to write {}", dest.display()))?;
    pages.push(RenderedPage { rel, report });
  }
  Ok(pages)
}

/// Print one line per page; returns how many pages had a loader fail.
pub fn summarize(pages: &[RenderedPage]) -> usize {
  let mut failed = 0;
  for page in pages {
    let stats = page.report.stats();
    let line = format!("{}  {}", page.rel.display(), ui::plural(stats.applied, "write", "writes"));
    if page.report.is_ok() {
      ui::ok(&line);
    } else {
      failed += 1;
      ui::fail(&line);
      for (key, err) in page.report.failures() {
        ui::detail(&format!("{key}: {err}"));
      }
    }
  }
  failed
}

#[cfg(test)]
mod tests {
  use reborn_server_axum::DirSource;

  use super::*;

  fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, body).unwrap();
  }

  fn site_paths(root: &Path) -> SitePaths {
    SitePaths {
      templates_dir: root.to_path_buf(),
      data_dir: root.join("data"),
      out_dir: root.join("dist"),
    }
  }

  #[test]
  fn url_paths() {
    assert_eq!(url_path(Path::new("index.html")), "/");
    assert_eq!(url_path(Path::new("tjanster/index.html")), "/tjanster/");
    assert_eq!(url_path(Path::new("om-oss.html")), "/om-oss.html");
    assert_eq!(url_path(Path::new("blogg/post.html")), "/blogg/post.html");
  }

  #[test]
  fn discovery_skips_data_and_output() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "index.html", "");
    write(root, "kontakt.html", "");
    write(root, "data/preview.html", "");
    write(root, "dist/index.html", "");
    write(root, ".cache/x.html", "");
    write(root, "css/style.css", "");
    let found = discover_templates(&site_paths(root)).unwrap();
    assert_eq!(found, vec![PathBuf::from("index.html"), PathBuf::from("kontakt.html")]);
  }

  #[tokio::test]
  async fn renders_pages_with_content() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "index.html", r#"<html><body><section class="hero"><h1>Mall</h1></section></body></html>"#);
    write(
      root,
      "process.html",
      r#"<html><body><header class="page-header"><h1>Process</h1></header></body></html>"#,
    );
    write(root, "data/home.json", r#"{"hero":{"title":"Ny rubrik"}}"#);
    write(root, "data/process.json", "{not json");

    let paths = site_paths(root);
    let pages = render_site(&DirSource::new(&paths.data_dir), &paths, &PageOptions::default())
      .await
      .unwrap();
    assert_eq!(pages.len(), 2);

    let home = std::fs::read_to_string(root.join("dist/index.html")).unwrap();
    assert!(home.contains("<h1>Ny rubrik</h1>"));
    // a broken document leaves the template as it was
    let process = std::fs::read_to_string(root.join("dist/process.html")).unwrap();
    assert!(process.contains("<h1>Process</h1>"));

    let process_page = pages.iter().find(|p| p.rel == Path::new("process.html")).unwrap();
    let kinds: Vec<_> = process_page.report.failures().iter().map(|(_, e)| e.kind()).collect();
    // company.json is absent too
    assert_eq!(kinds, vec!["fetch-error", "parse-error"]);
  }
}
