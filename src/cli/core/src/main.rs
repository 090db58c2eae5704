/* src/cli/core/src/main.rs */

mod check;
mod config;
mod logging;
mod pull;
mod remote;
mod render;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use reborn_server_axum::{DirSource, SiteOptions, SiteServer};

use config::{RebornConfig, SitePaths, find_reborn_config, load_reborn_config};
use remote::HttpSource;

#[derive(Parser)]
#[command(name = "reborn", about = "Reborn site CLI")]
struct Cli {
  /// Log engine decisions at debug level
  #[arg(short, long, global = true)]
  verbose: bool,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Write every template to the output directory with its content injected
  Render {
    /// Path to reborn.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Output directory (overrides site.out_dir)
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Read content from the deployed site instead of the data directory
    #[arg(long)]
    remote: bool,
  },
  /// Report content slots missing from the templates
  Check {
    /// Path to reborn.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
  /// Serve the templates with content injected on every request
  Serve {
    /// Path to reborn.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Port to listen on (overrides server.port)
    #[arg(short, long)]
    port: Option<u16>,
  },
  /// Download the content documents of a deployed site into the data directory
  Pull {
    /// Path to reborn.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Base URL of the site (overrides remote.base_url)
    #[arg(short, long)]
    url: Option<String>,
  },
}

/// Resolve config path (explicit or auto-detected) and parse it. Without a
/// `reborn.toml` anywhere above the working directory, the defaults apply
/// relative to it.
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, RebornConfig)> {
  let cwd = std::env::current_dir().context("failed to get cwd")?;
  let path = match explicit {
    Some(p) if p.is_absolute() => p,
    Some(p) => cwd.join(p),
    None => match find_reborn_config(&cwd) {
      Ok(p) => p,
      Err(e) => {
        tracing::debug!(error = %e, "using default config");
        return Ok((cwd, RebornConfig::default()));
      }
    },
  };
  let config = load_reborn_config(&path)?;
  let base_dir = path.parent().map_or_else(|| PathBuf::from("."), Path::to_path_buf);
  Ok((base_dir, config))
}

/// Config plus its directories, announced on the way in.
fn load_site(explicit: Option<PathBuf>) -> Result<(RebornConfig, SitePaths)> {
  let (base_dir, config) = resolve_config(explicit)?;
  let paths = SitePaths::resolve(&config, &base_dir);
  ui::arrow(&format!("site {} ({})", config.site.name, base_dir.display()));
  Ok((config, paths))
}

fn remote_url(config: &RebornConfig, flag: Option<String>) -> Result<String> {
  match flag.or_else(|| config.remote.base_url.clone()) {
    Some(url) => Ok(url),
    None => bail!("no site URL: pass --url or set remote.base_url in reborn.toml"),
  }
}

async fn run_render(
  config: &RebornConfig,
  mut paths: SitePaths,
  out: Option<PathBuf>,
  remote: bool,
) -> Result<()> {
  if let Some(out) = out {
    paths.out_dir = out;
  }
  let options = config.page_options();
  let pages = if remote {
    let url = remote_url(config, None)?;
    ui::arrow(&format!("content from {url}"));
    render::render_site(&HttpSource::new(&url), &paths, &options).await?
  } else {
    ui::arrow(&format!("content from {}", paths.data_dir.display()));
    render::render_site(&DirSource::new(&paths.data_dir), &paths, &options).await?
  };
  let failed = render::summarize(&pages);
  ui::blank();
  ui::ok(&format!(
    "{} written to {}",
    ui::plural(pages.len(), "page", "pages"),
    paths.out_dir.display()
  ));
  if failed > 0 {
    let pages = ui::plural(failed, "page", "pages");
    ui::warn(&format!("{pages} kept template text where content failed to load"));
  }
  Ok(())
}

fn run_check(config: &RebornConfig, paths: &SitePaths) -> Result<()> {
  let checks = check::check_site(paths, config.footer.matching)?;
  let missing = check::report(&checks);
  ui::blank();
  if missing > 0 {
    bail!("{} missing", ui::plural(missing, "slot", "slots"));
  }
  ui::ok(&format!("{} complete", ui::plural(checks.len(), "template", "templates")));
  Ok(())
}

async fn run_serve(config: &RebornConfig, paths: SitePaths, port: Option<u16>) -> Result<()> {
  let addr = format!("{}:{}", config.server.host, port.unwrap_or(config.server.port));
  ui::arrow(&format!("templates {}", paths.templates_dir.display()));
  ui::arrow(&format!("content   {}", paths.data_dir.display()));
  let server = SiteServer::new(SiteOptions {
    templates_dir: paths.templates_dir,
    data_dir: paths.data_dir,
    page: config.page_options(),
  });
  server.serve(&addr).await.map_err(|e| anyhow::anyhow!("server error: {e}"))
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  logging::init(cli.verbose);

  match cli.command {
    Command::Render { config, out, remote } => {
      ui::banner("render");
      let (cfg, paths) = load_site(config)?;
      run_render(&cfg, paths, out, remote).await?;
    }
    Command::Check { config } => {
      ui::banner("check");
      let (cfg, paths) = load_site(config)?;
      run_check(&cfg, &paths)?;
    }
    Command::Serve { config, port } => {
      ui::banner("serve");
      let (cfg, paths) = load_site(config)?;
      run_serve(&cfg, paths, port).await?;
    }
    Command::Pull { config, url } => {
      ui::banner("pull");
      let (cfg, paths) = load_site(config)?;
      let url = remote_url(&cfg, url)?;
      let pulled = pull::pull_content(&url, &paths.data_dir).await?;
      ui::ok(&format!("{} pulled", ui::plural(pulled, "document", "documents")));
    }
  }
  Ok(())
}
