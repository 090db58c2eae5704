/* src/cli/core/src/remote.rs */

use reborn_engine::{ContentKey, ContentSource, FetchError};

/// Content documents fetched from a deployed site's `/data/` directory.
#[derive(Debug, Clone)]
pub struct HttpSource {
  client: reqwest::Client,
  base_url: String,
}

impl HttpSource {
  pub fn new(base_url: &str) -> Self {
    Self { client: reqwest::Client::new(), base_url: base_url.trim_end_matches('/').to_string() }
  }

  pub fn url_for(&self, key: ContentKey) -> String {
    format!("{}{}", self.base_url, key.data_path())
  }
}

impl ContentSource for HttpSource {
  async fn fetch(&self, key: ContentKey) -> Result<String, FetchError> {
    let url = self.url_for(key);
    tracing::debug!(%url, "fetching content");
    let resp =
      self.client.get(&url).send().await.map_err(|e| FetchError::Network(e.to_string()))?;
    let status = resp.status();
    if !status.is_success() {
      return Err(FetchError::Status(status.as_u16()));
    }
    resp.text().await.map_err(|e| FetchError::Network(e.to_string()))
  }
}

#[cfg(test)]
mod tests {
  use httpmock::prelude::*;

  use super::*;

  #[tokio::test]
  async fn fetches_data_path() {
    let server = MockServer::start_async().await;
    let mock = server
      .mock_async(|when, then| {
        when.method(GET).path("/data/company.json");
        then.status(200).header("Content-Type", "application/json").body(r#"{"email":"a@b.se"}"#);
      })
      .await;

    let source = HttpSource::new(&server.url("/"));
    let body = source.fetch(ContentKey::Company).await.unwrap();
    assert_eq!(body, r#"{"email":"a@b.se"}"#);
    mock.assert_async().await;
  }

  #[tokio::test]
  async fn non_success_is_status_error() {
    let server = MockServer::start_async().await;
    server
      .mock_async(|when, then| {
        when.method(GET).path("/data/about.json");
        then.status(500);
      })
      .await;

    let source = HttpSource::new(&server.base_url());
    assert_eq!(source.fetch(ContentKey::About).await, Err(FetchError::Status(500)));
  }

  #[test]
  fn trailing_slash_is_trimmed() {
    let source = HttpSource::new("https://example.se/");
    assert_eq!(source.url_for(ContentKey::Home), "https://example.se/data/home.json");
  }
}
