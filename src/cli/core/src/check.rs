/* src/cli/core/src/check.rs */

use std::path::PathBuf;

use anyhow::{Context, Result};
use reborn_engine::content::company::FooterMatching;
use reborn_engine::reborn_injector::Document;
use reborn_engine::{ContentKey, Route, SlotCheck, check_slots};

use crate::config::SitePaths;
use crate::render::{discover_templates, url_path};
use crate::ui;

#[derive(Debug)]
pub struct TemplateCheck {
  pub rel: PathBuf,
  pub route: Option<Route>,
  pub slots: Vec<SlotCheck>,
}

impl TemplateCheck {
  pub fn missing(&self) -> usize {
    self.slots.iter().map(|c| c.missing.len()).sum()
  }
}

/// Check every template for the slots its loaders write: the company slots
/// everywhere, plus the route's own slots where the path has a route.
pub fn check_site(paths: &SitePaths, footer: FooterMatching) -> Result<Vec<TemplateCheck>> {
  let mut checks = Vec::new();
  for rel in discover_templates(paths)? {
    let src = paths.templates_dir.join(&rel);
    let html =
      std::fs::read_to_string(&src).with_context(|| format!("failed to read {}", src.display()))?;
    let doc = Document::parse(&html);
    let route = Route::from_path(&url_path(&rel));
    let slots = std::iter::once(ContentKey::Company)
      .chain(route.map(Route::content_key))
      .map(|key| check_slots(&doc, key, footer))
      .collect();
    checks.push(TemplateCheck { rel, route, slots });
  }
  Ok(checks)
}

/// Print the results; returns the total number of missing slots.
pub fn report(checks: &[TemplateCheck]) -> usize {
  let mut total = 0;
  for check in checks {
    let missing = check.missing();
    total += missing;
    let route = check.route.map_or("no route".to_string(), |r| r.content_key().to_string());
    let line = format!("{}  ({route})", check.rel.display());
    if missing == 0 {
      ui::ok(&line);
      continue;
    }
    ui::fail(&line);
    for slot_check in &check.slots {
      for slot in &slot_check.missing {
        ui::detail(&format!("{}: {}", slot_check.key, slot.selector()));
      }
    }
  }
  total
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use super::*;

  #[test]
  fn reports_missing_slots_per_template() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let footer = concat!(
      r#"<footer><div class="footer-contact"><p class="footer-email">e</p>"#,
      r#"<p class="footer-phone">p</p></div><div class="footer-bottom"><p>c</p></div></footer>"#,
    );
    std::fs::write(
      root.join("om-oss.html"),
      format!(
        r#"<html><body><header class="page-header"><h1>O</h1><p class="subtitle">S</p></header>{footer}</body></html>"#
      ),
    )
    .unwrap();
    std::fs::write(root.join("presentation.html"), format!("<html><body>{footer}</body></html>"))
      .unwrap();

    let paths = SitePaths {
      templates_dir: root.to_path_buf(),
      data_dir: root.join("data"),
      out_dir: root.join("dist"),
    };
    let checks = check_site(&paths, FooterMatching::Explicit).unwrap();
    assert_eq!(checks.len(), 2);

    let about = checks.iter().find(|c| c.rel == Path::new("om-oss.html")).unwrap();
    assert_eq!(about.route, Some(Route::About));
    // intro, mission, approach and values are absent
    assert_eq!(about.missing(), 4);

    let presentation = checks.iter().find(|c| c.rel == Path::new("presentation.html")).unwrap();
    assert_eq!(presentation.route, None);
    assert_eq!(presentation.missing(), 0);
  }
}
