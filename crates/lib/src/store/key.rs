//! Conversions between store keys and filesystem paths.
//!
//! Keys are always forward-slash separated relative paths, whatever the host separator is.

use std::path::{Component, Path, PathBuf};

/// Turn a path relative to some root into a store key.
///
/// Only normal components are kept, joined with `/`. On hosts that use `\` as a separator
/// `sub\b.txt` becomes `sub/b.txt`.
pub fn to_store_key(relative: &Path) -> String {
  relative
    .components()
    .filter_map(|component| match component {
      Component::Normal(part) => Some(part.to_string_lossy()),
      _ => None,
    })
    .collect::<Vec<_>>()
    .join("/")
}

/// The relative path a key materializes to.
///
/// `None` if the key could land outside the directory it is joined onto (absolute,
/// drive-prefixed, `.`/`..` segments, or empty), or if it is not in canonical form
/// (`a/./b`, `c//d`, trailing `/`). A non-canonical key would be read back under a
/// different name than the one it was written from.
pub fn key_to_path(key: &str) -> Option<PathBuf> {
  let path = Path::new(key);
  let mut components = path.components().peekable();
  components.peek()?;

  if !components.all(|c| matches!(c, Component::Normal(_))) {
    return None;
  }

  let path: PathBuf = path.components().collect();
  if to_store_key(&path) != host_separators_to_slash(key) {
    return None;
  }
  Some(path)
}

#[cfg(windows)]
fn host_separators_to_slash(key: &str) -> String {
  key.replace('\\', "/")
}

#[cfg(not(windows))]
fn host_separators_to_slash(key: &str) -> String {
  key.to_string()
}
