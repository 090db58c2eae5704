/* src/site/engine/rust/src/loader.rs */

use reborn_injector::{Dom, Injector, WriteStats};
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::content::about::AboutContent;
use crate::content::company::CompanyInfo;
use crate::content::contact::ContactContent;
use crate::content::home::HomeContent;
use crate::content::process::ProcessContent;
use crate::content::services::ServicesContent;
use crate::error::LoadError;
use crate::page::PageOptions;
use crate::route::ContentKey;
use crate::source::ContentSource;

/// What one loader did to the page.
pub type LoadOutcome = Result<WriteStats, LoadError>;

/// Deserialize a content document, separating malformed JSON from JSON of
/// the wrong shape.
pub fn parse<T: DeserializeOwned>(body: &str) -> Result<T, LoadError> {
  serde_json::from_str(body).map_err(|e| match e.classify() {
    Category::Data => LoadError::Shape(e.to_string()),
    Category::Syntax | Category::Eof | Category::Io => LoadError::Parse(e.to_string()),
  })
}

/// Parse `body` as the document for `key` and write it into `dom`.
/// The whole document is parsed before the first write, so an error leaves
/// the page untouched.
pub fn apply_content<D: Dom>(
  key: ContentKey,
  body: &str,
  dom: &mut D,
  options: &PageOptions,
) -> LoadOutcome {
  let mut inj = Injector::new(dom);
  match key {
    ContentKey::Home => parse::<HomeContent>(body)?.apply(&mut inj),
    ContentKey::Services => parse::<ServicesContent>(body)?.apply(&mut inj),
    ContentKey::About => parse::<AboutContent>(body)?.apply(&mut inj),
    ContentKey::Process => parse::<ProcessContent>(body)?.apply(&mut inj),
    ContentKey::Contact => parse::<ContactContent>(body)?.apply(&mut inj),
    ContentKey::Company => parse::<CompanyInfo>(body)?.apply(&mut inj, options.footer),
  }
  Ok(inj.stats())
}

/// Fetch the document for `key` once and apply it.
pub async fn load_route_content<S, D>(
  source: &S,
  key: ContentKey,
  dom: &mut D,
  options: &PageOptions,
) -> LoadOutcome
where
  S: ContentSource,
  D: Dom,
{
  let body = source.fetch(key).await?;
  apply_content(key, &body, dom, options)
}
