//! List the samples in a store.

use std::path::PathBuf;

use anyhow::Result;

use crate::cmd::load_store;
use crate::output::{OutputFormat, print_info, print_json, print_listing};

pub fn cmd_ls(load: &[PathBuf], patterns: &[String], output: OutputFormat) -> Result<()> {
  let store = load_store(load)?;
  let listing = store.list(patterns)?;

  if output.is_json() {
    return print_json(&listing);
  }

  if listing.is_empty() {
    print_info("No samples found.");
    return Ok(());
  }

  print_listing(&listing);
  Ok(())
}
