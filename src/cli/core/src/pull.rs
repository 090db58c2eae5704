/* src/cli/core/src/pull.rs */

use std::path::Path;

use anyhow::{Context, Result, bail};
use reborn_engine::{ContentKey, ContentSource};

use crate::remote::HttpSource;
use crate::ui;

/// Download every content document from a deployed site into `data_dir`.
/// A body that is not JSON is never written. Keeps going past failures and
/// errors at the end if any document could not be pulled.
pub async fn pull_content(base_url: &str, data_dir: &Path) -> Result<usize> {
  let source = HttpSource::new(base_url);
  std::fs::create_dir_all(data_dir)
    .with_context(|| format!("failed to create {}", data_dir.display()))?;

  let mut failed = Vec::new();
  let mut pulled = 0;
  for key in ContentKey::ALL {
    let url = source.url_for(key);
    ui::arrow(&url);
    let body = match source.fetch(key).await {
      Ok(body) => body,
      Err(e) => {
        ui::fail(&format!("{key}: {e}"));
        failed.push(key);
        continue;
      }
    };
    if let Err(e) = serde_json::from_str::<serde_json::Value>(&body) {
      ui::fail(&format!("{key}: not JSON ({e})"));
      failed.push(key);
      continue;
    }
    let dest = data_dir.join(key.file_name());
    std::fs::write(&dest, &body).with_context(|| format!("failed to write {}", dest.display()))?;
    ui::ok(&format!("saved {}", dest.display()));
    pulled += 1;
  }

  if !failed.is_empty() {
    let names: Vec<_> = failed.iter().map(ToString::to_string).collect();
    bail!("failed to pull {}", names.join(", "));
  }
  Ok(pulled)
}
