//! Remove samples matching glob patterns.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::cmd::{export_store, load_store};
use crate::output::{OutputFormat, print_json, print_removed, print_success};

pub fn cmd_rm(load: &[PathBuf], export: Option<&Path>, patterns: &[String], output: OutputFormat) -> Result<()> {
  let store = load_store(load)?;
  let removed = store.remove_matching(patterns)?;

  if let Some(dir) = export {
    export_store(&store, dir)?;
  }

  if output.is_json() {
    let remaining = store.list::<&str>(&[])?;
    return print_json(&serde_json::json!({ "removed": removed, "remaining": remaining }));
  }

  for name in &removed {
    print_removed(name);
  }
  print_success(&format!("Removed {} sample(s), {} remaining", removed.len(), store.len()));

  Ok(())
}
