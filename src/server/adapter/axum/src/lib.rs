/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;
mod source;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use reborn_engine::PageOptions;
use tower_http::services::ServeDir;

pub use source::DirSource;

/// Re-export the engine for convenience.
pub use reborn_engine;

/// Where the preview server finds its files.
#[derive(Debug, Clone)]
pub struct SiteOptions {
  /// Root of the HTML templates and static assets.
  pub templates_dir: PathBuf,
  /// Content documents, served under `/data` and injected into pages.
  pub data_dir: PathBuf,
  pub page: PageOptions,
}

/// Serves the site the way a visitor sees it once the loaders have run:
/// every HTML page comes back with its content already in place.
#[derive(Debug, Clone)]
pub struct SiteServer {
  options: SiteOptions,
}

impl SiteServer {
  pub fn new(options: SiteOptions) -> Self {
    Self { options }
  }

  pub fn into_router(self) -> Router {
    let SiteOptions { templates_dir, data_dir, page } = self.options;
    let state = Arc::new(handler::SiteState {
      templates: ServeDir::new(&templates_dir),
      templates_dir,
      source: DirSource::new(&data_dir),
      options: page,
    });
    Router::new()
      .nest_service("/data", ServeDir::new(data_dir))
      .fallback(handler::handle)
      .with_state(state)
  }

  pub async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = self.into_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(url = %format!("http://localhost:{}", local_addr.port()), "preview server running");
    axum::serve(listener, router).await?;
    Ok(())
  }
}

#[cfg(test)]
mod tests;
