//! Read a file through the virtual filesystem.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use samplefs_lib::{VfsConfig, VirtualFs};

use crate::cmd::load_store;

pub fn cmd_cat(config: &VfsConfig, load: &[PathBuf], path: &Path) -> Result<()> {
  let store = load_store(load)?;
  let vfs = VirtualFs::from_config(&store, config);

  let data = vfs
    .read(path)
    .with_context(|| format!("Failed to read {}", path.display()))?;
  std::io::stdout().write_all(&data).context("Failed to write output")?;

  Ok(())
}
