use std::io;
use std::path::{Component, Path, PathBuf};

use crate::consts::ROOT_ENV;

/// Returns the root boundary for virtualization.
///
/// `SAMPLEFS_ROOT` takes precedence; otherwise the process working directory is used.
/// The result is always absolute and lexically normalized.
pub fn root_dir() -> io::Result<PathBuf> {
  if let Ok(path) = std::env::var(ROOT_ENV) {
    return absolute_path(Path::new(&path));
  }

  absolute_path(&std::env::current_dir()?)
}

/// Resolve a path against the working directory without touching the filesystem.
///
/// `.` and `..` are collapsed lexically; symlinks are not followed.
pub fn absolute_path(path: &Path) -> io::Result<PathBuf> {
  if path.is_absolute() {
    return Ok(normalize_path(path));
  }
  Ok(normalize_path(&std::env::current_dir()?.join(path)))
}

/// Normalize a path by resolving `.` and `..` components without requiring the path to exist
pub fn normalize_path(path: &Path) -> PathBuf {
  let mut components: Vec<Component<'_>> = Vec::new();

  for component in path.components() {
    match component {
      Component::ParentDir => {
        // `..` never climbs above the root or a drive prefix
        if matches!(components.last(), Some(Component::Normal(_))) {
          components.pop();
        }
      }
      Component::CurDir => {}
      other => components.push(other),
    }
  }

  components.iter().collect()
}
