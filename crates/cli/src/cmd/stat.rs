//! Show file status through the virtual filesystem.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use samplefs_lib::{FileStatus, VfsConfig, VirtualFs};

use crate::cmd::load_store;
use crate::output::{OutputFormat, format_bytes, print_json};

pub fn cmd_stat(config: &VfsConfig, load: &[PathBuf], path: &Path, output: OutputFormat) -> Result<()> {
  let store = load_store(load)?;
  let vfs = VirtualFs::from_config(&store, config);

  let status = vfs
    .stat(path)
    .with_context(|| format!("Failed to stat {}", path.display()))?;

  let kind = if status.is_dir() {
    "directory"
  } else if status.is_file() {
    "file"
  } else {
    "other"
  };
  let source = match status {
    FileStatus::Virtual(_) => "virtual",
    FileStatus::Real(_) => "disk",
  };

  if output.is_json() {
    return print_json(&serde_json::json!({
      "path": path.display().to_string(),
      "kind": kind,
      "size": status.len(),
      "source": source,
    }));
  }

  println!("{} {} {} ({})", path.display(), kind, format_bytes(status.len()), source);
  Ok(())
}
