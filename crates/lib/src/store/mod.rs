//! The sample store.
//!
//! A mapping from POSIX-style relative path (`"sub/b.txt"`) to an immutable byte blob.
//! A key being present means "this virtual file exists"; absence means callers fall
//! through to the real filesystem.
//!
//! The store is constructed once by the entry point and shared by reference. Interior
//! mutability lets a `VirtualFs`, an open write session and a `StagedRunner` all hold
//! `&SampleStore` at the same time.

pub mod key;
pub mod source;

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use glob::Pattern;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::util::hash::{ContentHash, hash_bytes};

pub use source::{DirectorySource, SampleSource, SourceError, store_sample};

/// Contents of a store entry. Cloning is cheap; the bytes are shared.
pub type Blob = Arc<[u8]>;

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("invalid pattern '{pattern}': {source}")]
  Pattern {
    pattern: String,
    #[source]
    source: glob::PatternError,
  },
}

/// One row of a store listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleListing {
  pub size: u64,
  pub sha256: ContentHash,
  pub name: String,
}

#[derive(Debug, Default)]
pub struct SampleStore {
  entries: RwLock<HashMap<String, Blob>>,
}

impl SampleStore {
  pub fn new() -> Self {
    Self::default()
  }

  fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Blob>> {
    self.entries.read().unwrap_or_else(PoisonError::into_inner)
  }

  fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Blob>> {
    self.entries.write().unwrap_or_else(PoisonError::into_inner)
  }

  /// Exact lookup. No normalization is applied to `name`.
  pub fn get(&self, name: &str) -> Option<Blob> {
    self.read().get(name).cloned()
  }

  /// Store `data` under `name`, replacing any previous entry.
  pub fn put(&self, name: impl Into<String>, data: impl Into<Blob>) {
    let name = name.into();
    let data = data.into();
    debug!(name = %name, size = data.len(), "store put");
    self.write().insert(name, data);
  }

  pub fn remove(&self, name: &str) -> Option<Blob> {
    self.write().remove(name)
  }

  pub fn clear(&self) {
    self.write().clear();
  }

  pub fn contains(&self, name: &str) -> bool {
    self.read().contains_key(name)
  }

  pub fn len(&self) -> usize {
    self.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.read().is_empty()
  }

  /// Snapshot of every entry, in no particular order.
  pub fn entries(&self) -> Vec<(String, Blob)> {
    self
      .read()
      .iter()
      .map(|(name, data)| (name.clone(), Arc::clone(data)))
      .collect()
  }

  /// List entries matching any of `patterns`, or every entry if `patterns` is empty.
  ///
  /// Patterns use shell glob syntax; `*` also matches across `/`. Rows are sorted by name.
  pub fn list<S: AsRef<str>>(&self, patterns: &[S]) -> Result<Vec<SampleListing>, StoreError> {
    let patterns = compile_patterns(patterns)?;

    let mut listing: Vec<SampleListing> = self
      .read()
      .iter()
      .filter(|(name, _)| patterns.is_empty() || matches_any(&patterns, name))
      .map(|(name, data)| SampleListing {
        size: data.len() as u64,
        sha256: hash_bytes(data),
        name: name.clone(),
      })
      .collect();

    listing.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(listing)
  }

  /// Remove every entry matching any of `patterns` and return the removed names, sorted.
  ///
  /// An empty pattern list removes nothing.
  pub fn remove_matching<S: AsRef<str>>(&self, patterns: &[S]) -> Result<Vec<String>, StoreError> {
    let patterns = compile_patterns(patterns)?;
    if patterns.is_empty() {
      return Ok(Vec::new());
    }

    let mut entries = self.write();
    let mut removed: Vec<String> = entries
      .keys()
      .filter(|name| matches_any(&patterns, name))
      .cloned()
      .collect();

    for name in &removed {
      entries.remove(name);
    }

    removed.sort();
    debug!(count = removed.len(), "removed matching entries");
    Ok(removed)
  }
}

fn compile_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Pattern>, StoreError> {
  patterns
    .iter()
    .map(|p| {
      Pattern::new(p.as_ref()).map_err(|source| StoreError::Pattern {
        pattern: p.as_ref().to_string(),
        source,
      })
    })
    .collect()
}

fn matches_any(patterns: &[Pattern], name: &str) -> bool {
  patterns.iter().any(|p| p.matches(name))
}
