/* src/site/engine/rust/src/route.rs */

use serde::{Deserialize, Serialize};

/// A page that has its own content document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
  Home,
  Services,
  About,
  Process,
  Contact,
}

/// How a rule recognises a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathMatch {
  /// `/`, `/index.html`, or any path ending in `/`.
  Index,
  /// The path contains this marker anywhere.
  Contains(&'static str),
}

impl PathMatch {
  pub fn matches(self, path: &str) -> bool {
    match self {
      PathMatch::Index => path == "/" || path == "/index.html" || path.ends_with('/'),
      PathMatch::Contains(marker) => path.contains(marker),
    }
  }
}

/// Dispatch table. Rules are tried in order and the first match wins, so a
/// path such as `/tjanster/kontakt.html` resolves to `Services`.
pub const ROUTE_RULES: &[(PathMatch, Route)] = &[
  (PathMatch::Index, Route::Home),
  (PathMatch::Contains("tjanster"), Route::Services),
  (PathMatch::Contains("om-oss"), Route::About),
  (PathMatch::Contains("process"), Route::Process),
  (PathMatch::Contains("kontakt"), Route::Contact),
];

impl Route {
  pub const ALL: [Route; 5] =
    [Route::Home, Route::Services, Route::About, Route::Process, Route::Contact];

  /// Route for a location pathname, or `None` for pages without a content
  /// document (e.g. `presentation.html`).
  pub fn from_path(path: &str) -> Option<Route> {
    ROUTE_RULES.iter().find(|(rule, _)| rule.matches(path)).map(|(_, route)| *route)
  }

  pub fn content_key(self) -> ContentKey {
    match self {
      Route::Home => ContentKey::Home,
      Route::Services => ContentKey::Services,
      Route::About => ContentKey::About,
      Route::Process => ContentKey::Process,
      Route::Contact => ContentKey::Contact,
    }
  }
}

/// Identity of one JSON content document under `/data/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKey {
  Home,
  Services,
  About,
  Process,
  Contact,
  Company,
}

impl ContentKey {
  pub const ALL: [ContentKey; 6] = [
    ContentKey::Home,
    ContentKey::Services,
    ContentKey::About,
    ContentKey::Process,
    ContentKey::Contact,
    ContentKey::Company,
  ];

  pub fn name(self) -> &'static str {
    match self {
      ContentKey::Home => "home",
      ContentKey::Services => "services",
      ContentKey::About => "about",
      ContentKey::Process => "process",
      ContentKey::Contact => "contact",
      ContentKey::Company => "company",
    }
  }

  /// File name inside the data directory, e.g. `home.json`.
  pub fn file_name(self) -> String {
    format!("{}.json", self.name())
  }

  /// Site-absolute URL path, e.g. `/data/home.json`.
  pub fn data_path(self) -> String {
    format!("/data/{}", self.file_name())
  }
}

impl std::fmt::Display for ContentKey {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.name())
  }
}
