/* src/server/adapter/axum/src/source.rs */

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use reborn_engine::{ContentKey, ContentSource, FetchError};

/// Content documents read from a data directory, one `<key>.json` per key.
#[derive(Debug, Clone)]
pub struct DirSource {
  dir: PathBuf,
}

impl DirSource {
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }

  pub fn dir(&self) -> &Path {
    &self.dir
  }

  pub fn path_for(&self, key: ContentKey) -> PathBuf {
    self.dir.join(key.file_name())
  }
}

impl ContentSource for DirSource {
  async fn fetch(&self, key: ContentKey) -> Result<String, FetchError> {
    let path = self.path_for(key);
    tokio::fs::read_to_string(&path).await.map_err(|e| match e.kind() {
      ErrorKind::NotFound => FetchError::Status(404),
      _ => FetchError::Io(format!("{}: {e}", path.display())),
    })
  }
}
