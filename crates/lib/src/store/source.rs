//! Sample acquisition.
//!
//! Fetching samples is someone else's job; the store only cares about the bytes that come
//! back. `SampleSource` is that seam, and `store_sample` files the result under a
//! caller-chosen name.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use super::SampleStore;

#[derive(Debug, Error)]
pub enum SourceError {
  #[error("sample not found: {0}")]
  NotFound(String),

  #[error("invalid sample identifier: {0}")]
  InvalidIdentifier(String),

  #[error("this source does not support decryption keys")]
  KeyUnsupported,

  #[error("failed to read sample {identifier}: {source}")]
  Io {
    identifier: String,
    #[source]
    source: io::Error,
  },
}

/// Something that can produce the bytes of a sample given its identifier.
pub trait SampleSource {
  /// Fetch the sample named by `identifier`, optionally unlocking it with `key`.
  fn fetch(&self, identifier: &str, key: Option<&str>) -> Result<Vec<u8>, SourceError>;
}

/// Fetch `identifier` from `source` and store it under `name` (or the identifier itself).
///
/// Returns the name the sample was stored under.
pub fn store_sample(
  store: &SampleStore,
  source: &dyn SampleSource,
  identifier: &str,
  name: Option<&str>,
  key: Option<&str>,
) -> Result<String, SourceError> {
  let data = source.fetch(identifier, key)?;
  let name = name.unwrap_or(identifier).to_string();
  info!(identifier = %identifier, name = %name, size = data.len(), "stored sample");
  store.put(name.clone(), data);
  Ok(name)
}

/// Serves samples from a local directory, one file per identifier.
#[derive(Debug, Clone)]
pub struct DirectorySource {
  dir: PathBuf,
}

impl DirectorySource {
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }
}

impl SampleSource for DirectorySource {
  fn fetch(&self, identifier: &str, key: Option<&str>) -> Result<Vec<u8>, SourceError> {
    if key.is_some() {
      return Err(SourceError::KeyUnsupported);
    }

    // Identifiers name a single file directly inside the directory
    let is_plain_name = !identifier.is_empty()
      && identifier != "."
      && identifier != ".."
      && !identifier.contains(['/', '\\']);
    if !is_plain_name {
      return Err(SourceError::InvalidIdentifier(identifier.to_string()));
    }

    std::fs::read(self.dir.join(identifier)).map_err(|source| {
      if source.kind() == io::ErrorKind::NotFound {
        SourceError::NotFound(identifier.to_string())
      } else {
        SourceError::Io {
          identifier: identifier.to_string(),
          source,
        }
      }
    })
  }
}
