/* src/site/engine/rust/src/page.rs */

use futures_util::future::join;
use reborn_injector::{Dom, WriteStats};
use serde::Deserialize;

use crate::content::company::FooterMatching;
use crate::error::{FetchError, LoadError};
use crate::loader::{LoadOutcome, apply_content};
use crate::route::{ContentKey, Route};
use crate::source::ContentSource;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PageOptions {
  #[serde(default)]
  pub footer: FooterMatching,
}

/// Outcome of every loader that ran for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReport {
  pub path: String,
  pub company: LoadOutcome,
  /// `None` when the path matches no route.
  pub route: Option<(Route, LoadOutcome)>,
}

impl PageReport {
  pub fn is_ok(&self) -> bool {
    self.failures().is_empty()
  }

  pub fn failures(&self) -> Vec<(ContentKey, &LoadError)> {
    self.outcomes().filter_map(|(key, outcome)| outcome.as_ref().err().map(|e| (key, e))).collect()
  }

  /// Writes summed over the loaders that succeeded.
  pub fn stats(&self) -> WriteStats {
    let mut total = WriteStats::default();
    for (_, outcome) in self.outcomes() {
      if let Ok(stats) = outcome {
        total.merge(*stats);
      }
    }
    total
  }

  fn outcomes(&self) -> impl Iterator<Item = (ContentKey, &LoadOutcome)> {
    std::iter::once((ContentKey::Company, &self.company))
      .chain(self.route.iter().map(|(route, outcome)| (route.content_key(), outcome)))
  }

  /// Log every outcome. Failures are errors; successes are debug-level.
  pub fn emit(&self) {
    for (key, outcome) in self.outcomes() {
      match outcome {
        Ok(stats) => tracing::debug!(
          path = %self.path,
          %key,
          applied = stats.applied,
          skipped = stats.skipped,
          "content applied"
        ),
        Err(e) => tracing::error!(
          path = %self.path,
          %key,
          kind = e.kind(),
          error = %e,
          "content load failed"
        ),
      }
    }
  }
}

/// Content bodies fetched for one page, before any write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBodies {
  pub path: String,
  pub company: Result<String, FetchError>,
  /// `None` when the path matches no route.
  pub route: Option<(Route, Result<String, FetchError>)>,
}

/// Fetch the company document and the document for `path`'s route, if any,
/// concurrently. Touches no document, so hosts can fetch before parsing.
pub async fn fetch_page<S: ContentSource>(source: &S, path: &str) -> PageBodies {
  let route = Route::from_path(path);
  let route_fetch = async {
    match route {
      Some(route) => Some(source.fetch(route.content_key()).await),
      None => None,
    }
  };
  let (company, route_body) = join(source.fetch(ContentKey::Company), route_fetch).await;
  PageBodies { path: path.to_string(), company, route: route.zip(route_body) }
}

/// Apply fetched bodies, company first. One failing never stops the other.
pub fn apply_page<D: Dom>(bodies: PageBodies, dom: &mut D, options: &PageOptions) -> PageReport {
  let company = bodies
    .company
    .map_err(LoadError::from)
    .and_then(|body| apply_content(ContentKey::Company, &body, dom, options));

  let route = bodies.route.map(|(route, body)| {
    let outcome = body
      .map_err(LoadError::from)
      .and_then(|body| apply_content(route.content_key(), &body, dom, options));
    (route, outcome)
  });

  PageReport { path: bodies.path, company, route }
}

/// Run the company loader and the loader for `path`'s route, if any.
pub async fn load_page<S, D>(source: &S, path: &str, dom: &mut D, options: &PageOptions) -> PageReport
where
  S: ContentSource,
  D: Dom,
{
  let bodies = fetch_page(source, path).await;
  apply_page(bodies, dom, options)
}
