//! Staged execution: run an external process against an on-disk copy of the store.
//!
//! One invocation walks through these phases, never re-entering one:
//!
//! ```text
//! Created -> Staged -> Running -> Completed -> Reingested -> Cleaned
//! ```
//!
//! The staging directory belongs to a single `run`. Everything the process leaves behind
//! as a regular file is folded back into the store before the directory is removed. Runs
//! must not overlap: two concurrent runs would materialize and re-ingest over each other.

pub mod ingest;
pub mod redact;

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::consts::{APP_NAME, STAGING_SUFFIX};
use crate::store::SampleStore;

pub use ingest::{IngestReport, MaterializeReport, SkippedFile, materialize, reingest, reingest_with};
pub use redact::{Redactor, split_records};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagePhase {
  Created,
  Staged,
  Running,
  Completed,
  Reingested,
  Cleaned,
}

impl StagePhase {
  pub const fn as_str(&self) -> &'static str {
    match self {
      StagePhase::Created => "created",
      StagePhase::Staged => "staged",
      StagePhase::Running => "running",
      StagePhase::Completed => "completed",
      StagePhase::Reingested => "reingested",
      StagePhase::Cleaned => "cleaned",
    }
  }
}

impl fmt::Display for StagePhase {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

#[derive(Debug, Error)]
pub enum StageError {
  /// The external process could not be started.
  #[error("failed to launch {program}: {source}")]
  Launch {
    program: String,
    #[source]
    source: io::Error,
  },

  /// Creating or populating the staging directory failed.
  #[error("io error while {phase} at {path}: {source}")]
  Io {
    phase: StagePhase,
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

impl StageError {
  pub(crate) fn io(phase: StagePhase, path: &Path, source: io::Error) -> Self {
    StageError::Io {
      phase,
      path: path.to_path_buf(),
      source,
    }
  }
}

/// Everything a staged run produced.
#[derive(Debug)]
pub struct StagedOutput {
  /// Exit status of the process, uninterpreted.
  pub status: ExitStatus,
  /// Captured standard output with redacted lines removed.
  pub stdout: Vec<u8>,
  /// Captured standard error, untouched.
  pub stderr: Vec<u8>,
  pub materialized: MaterializeReport,
  pub ingest: IngestReport,
}

/// Runs external processes against a temporary on-disk copy of a `SampleStore`.
#[derive(Debug, Clone)]
pub struct StagedRunner<'a> {
  store: &'a SampleStore,
  redactor: Redactor,
}

impl<'a> StagedRunner<'a> {
  /// A runner that redacts output lines mentioning the current account.
  pub fn new(store: &'a SampleStore) -> Self {
    Self {
      store,
      redactor: Redactor::for_current_user(),
    }
  }

  pub fn with_redactor(mut self, redactor: Redactor) -> Self {
    self.redactor = redactor;
    self
  }

  /// Stage the store, run `command` inside it and fold the results back in.
  ///
  /// The working directory of `command` is replaced with the staging directory; its
  /// arguments, environment and stdio configuration are used as given. Unless the caller
  /// configured stdout/stderr otherwise, both are captured. Blocks until the process exits.
  pub fn run(&self, mut command: Command) -> Result<StagedOutput, StageError> {
    let program = command.get_program().to_string_lossy().to_string();

    let staging = tempfile::Builder::new()
      .prefix(APP_NAME)
      .suffix(STAGING_SUFFIX)
      .tempdir()
      .map_err(|e| StageError::io(StagePhase::Created, &std::env::temp_dir(), e))?;
    let root = staging.path().to_path_buf();
    debug!(root = %root.display(), phase = %StagePhase::Created, "staging directory created");

    let materialized = materialize(self.store, &root)?;
    debug!(entries = materialized.written.len(), phase = %StagePhase::Staged, "store materialized");

    info!(program = %program, phase = %StagePhase::Running, "running staged process");
    let output = command
      .current_dir(&root)
      .output()
      .map_err(|source| StageError::Launch {
        program: program.clone(),
        source,
      })?;
    debug!(status = %output.status, phase = %StagePhase::Completed, "staged process exited");

    let ingest = reingest(self.store, &root);
    debug!(
      ingested = ingest.ingested.len(),
      skipped = ingest.skipped.len(),
      phase = %StagePhase::Reingested,
      "staging directory re-ingested"
    );

    if let Err(e) = staging.close() {
      warn!(root = %root.display(), error = %e, "failed to remove staging directory");
    }
    debug!(phase = %StagePhase::Cleaned, "staging finished");

    Ok(StagedOutput {
      status: output.status,
      stdout: self.redactor.filter(&output.stdout),
      stderr: output.stderr,
      materialized,
      ingest,
    })
  }
}
