//! Moving store contents to disk and back.
//!
//! `materialize` writes every entry under a directory; `reingest` walks a directory and
//! puts every regular file back. Re-ingestion never gives up on the batch: a file that
//! cannot be read is recorded in the report and the walk carries on.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::{StageError, StagePhase};
use crate::store::SampleStore;
use crate::store::key::{key_to_path, to_store_key};

/// An entry or file left out of a transfer, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
  pub path: String,
  pub reason: String,
}

/// Outcome of writing the store to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MaterializeReport {
  /// Keys written to disk.
  pub written: Vec<String>,
  /// Keys that would have resolved outside the staging directory.
  pub skipped: Vec<SkippedFile>,
}

/// Outcome of reading a directory back into the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
  /// Keys stored, sorted.
  pub ingested: Vec<String>,
  /// Files (or walk entries) that could not be read.
  pub skipped: Vec<SkippedFile>,
}

impl IngestReport {
  pub fn is_complete(&self) -> bool {
    self.skipped.is_empty()
  }
}

/// Write every store entry to `root/<key>`, creating parent directories as needed.
///
/// Keys that are not canonical relative paths are never written; they show up in
/// `MaterializeReport::skipped`. Any I/O failure while writing is fatal.
pub fn materialize(store: &SampleStore, root: &Path) -> Result<MaterializeReport, StageError> {
  let mut report = MaterializeReport::default();

  for (key, data) in store.entries() {
    let Some(path) = staged_path(root, &key) else {
      warn!(key = %key, "not materializing key outside staging root");
      report.skipped.push(SkippedFile {
        path: key,
        reason: "key is not a canonical relative path".to_string(),
      });
      continue;
    };

    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).map_err(|e| StageError::io(StagePhase::Staged, parent, e))?;
    }
    fs::write(&path, &data).map_err(|e| StageError::io(StagePhase::Staged, &path, e))?;

    debug!(key = %key, size = data.len(), "materialized");
    report.written.push(key);
  }

  report.written.sort();
  Ok(report)
}

/// Put every regular file under `root` into the store, keyed by its relative path.
///
/// Symlinks count when they resolve to a regular file inside `root`; the link's own path is
/// the key. Links resolving outside `root` are reported as skipped, dangling links ignored.
pub fn reingest(store: &SampleStore, root: &Path) -> IngestReport {
  reingest_with(store, root, |path| fs::read(path))
}

/// Like [`reingest`], reading each file with `read`.
pub fn reingest_with<F>(store: &SampleStore, root: &Path, mut read: F) -> IngestReport
where
  F: FnMut(&Path) -> io::Result<Vec<u8>>,
{
  let mut report = IngestReport::default();
  let canonical_root = fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());

  for entry in WalkDir::new(root).min_depth(1).follow_links(false) {
    let entry = match entry {
      Ok(entry) => entry,
      Err(e) => {
        let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf());
        skip(&mut report, root, &path, e.to_string());
        continue;
      }
    };

    let path = entry.path();
    if entry.path_is_symlink() {
      match fs::canonicalize(path) {
        Ok(target) if !target.is_file() => continue,
        Ok(target) if !target.starts_with(&canonical_root) => {
          let reason = format!("link target {} is outside the staging directory", target.display());
          skip(&mut report, root, path, reason);
          continue;
        }
        Ok(_) => {}
        Err(_) => continue,
      }
    } else if !entry.file_type().is_file() {
      continue;
    }

    let Ok(relative) = path.strip_prefix(root) else {
      continue;
    };

    match read(path) {
      Ok(data) => {
        let key = to_store_key(relative);
        debug!(key = %key, size = data.len(), "re-ingested");
        store.put(key.clone(), data);
        report.ingested.push(key);
      }
      Err(e) => skip(&mut report, root, path, e.to_string()),
    }
  }

  report.ingested.sort();
  report
}

fn skip(report: &mut IngestReport, root: &Path, path: &Path, reason: String) {
  let shown = path
    .strip_prefix(root)
    .map(to_store_key)
    .unwrap_or_else(|_| path.display().to_string());
  warn!(path = %shown, reason = %reason, "skipping unreadable staged file");
  report.skipped.push(SkippedFile { path: shown, reason });
}

/// Absolute path of `key` under `root`, if the key is safe to materialize.
pub fn staged_path(root: &Path, key: &str) -> Option<PathBuf> {
  key_to_path(key).map(|relative| root.join(relative))
}
