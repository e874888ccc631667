//! Run a program against a staged copy of the store.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use serde::Serialize;

use samplefs_lib::stage::{SkippedFile, StagedRunner};

use crate::cmd::{export_store, load_store};
use crate::output::{OutputFormat, print_json, print_skipped};

#[derive(Debug, Serialize)]
struct RunSummary {
  exit_code: Option<i32>,
  stdout: String,
  stderr: String,
  ingested: Vec<String>,
  skipped: Vec<SkippedFile>,
}

/// Returns the exit code the CLI should exit with.
pub fn cmd_run(
  load: &[PathBuf],
  export: Option<&Path>,
  program: &str,
  args: &[String],
  output: OutputFormat,
) -> Result<i32> {
  let store = load_store(load)?;

  let mut command = Command::new(program);
  command.args(args);

  let result = StagedRunner::new(&store).run(command)?;

  for skipped in &result.materialized.skipped {
    print_skipped("Not staged", skipped);
  }
  for skipped in &result.ingest.skipped {
    print_skipped("Not re-ingested", skipped);
  }

  if let Some(dir) = export {
    export_store(&store, dir)?;
  }

  let exit_code = result.status.code();

  if output.is_json() {
    print_json(&RunSummary {
      exit_code,
      stdout: String::from_utf8_lossy(&result.stdout).into_owned(),
      stderr: String::from_utf8_lossy(&result.stderr).into_owned(),
      ingested: result.ingest.ingested,
      skipped: result.ingest.skipped,
    })?;
  } else {
    std::io::stdout()
      .write_all(&result.stdout)
      .context("Failed to write process output")?;
    std::io::stderr()
      .write_all(&result.stderr)
      .context("Failed to write process error output")?;
  }

  // Killed by a signal: report a generic failure
  Ok(exit_code.unwrap_or(1))
}
