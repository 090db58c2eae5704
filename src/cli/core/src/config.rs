/* src/cli/core/src/config.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use reborn_engine::PageOptions;
use reborn_engine::content::company::FooterMatching;
use serde::Deserialize;

pub const CONFIG_FILE: &str = "reborn.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RebornConfig {
  #[serde(default)]
  pub site: SiteSection,
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub footer: FooterSection,
  #[serde(default)]
  pub remote: RemoteSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSection {
  #[serde(default = "default_name")]
  pub name: String,
  #[serde(default = "default_templates_dir")]
  pub templates_dir: String,
  #[serde(default = "default_data_dir")]
  pub data_dir: String,
  #[serde(default = "default_out_dir")]
  pub out_dir: String,
}

impl Default for SiteSection {
  fn default() -> Self {
    Self {
      name: default_name(),
      templates_dir: default_templates_dir(),
      data_dir: default_data_dir(),
      out_dir: default_out_dir(),
    }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_port")]
  pub port: u16,
  #[serde(default = "default_host")]
  pub host: String,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self { port: default_port(), host: default_host() }
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FooterSection {
  #[serde(default)]
  pub matching: FooterMatching,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteSection {
  pub base_url: Option<String>,
}

fn default_name() -> String {
  "reborn".to_string()
}
fn default_templates_dir() -> String {
  ".".to_string()
}
fn default_data_dir() -> String {
  "data".to_string()
}
fn default_out_dir() -> String {
  "dist".to_string()
}
fn default_port() -> u16 {
  3000
}
fn default_host() -> String {
  "127.0.0.1".to_string()
}

impl RebornConfig {
  pub fn page_options(&self) -> PageOptions {
    PageOptions { footer: self.footer.matching }
  }
}

/// Config paths resolved against the directory holding `reborn.toml`.
#[derive(Debug, Clone)]
pub struct SitePaths {
  pub templates_dir: PathBuf,
  pub data_dir: PathBuf,
  pub out_dir: PathBuf,
}

impl SitePaths {
  pub fn resolve(config: &RebornConfig, base_dir: &Path) -> Self {
    Self {
      templates_dir: base_dir.join(&config.site.templates_dir),
      data_dir: base_dir.join(&config.site.data_dir),
      out_dir: base_dir.join(&config.site.out_dir),
    }
  }
}

/// Walk upward from `start` to find `reborn.toml`, like Cargo.toml discovery
pub fn find_reborn_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("{CONFIG_FILE} not found (searched upward from {})", start.display());
    }
  }
}

pub fn load_reborn_config(path: &Path) -> Result<RebornConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}
