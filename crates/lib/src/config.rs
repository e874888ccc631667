//! Runtime configuration for the virtual filesystem.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::platform::paths::{absolute_path, root_dir};

/// Configuration captured once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VfsConfig {
  /// Absolute directory whose subtree is eligible for virtualization.
  pub root: PathBuf,
}

impl VfsConfig {
  /// Read the root boundary from `SAMPLEFS_ROOT`, or the working directory if unset.
  pub fn from_env() -> io::Result<Self> {
    let root = root_dir()?;
    debug!(root = %root.display(), "captured root boundary");
    Ok(Self { root })
  }

  /// Use an explicit root boundary. Relative roots are resolved against the working directory.
  pub fn with_root(root: impl AsRef<Path>) -> io::Result<Self> {
    Ok(Self {
      root: absolute_path(root.as_ref())?,
    })
  }
}
