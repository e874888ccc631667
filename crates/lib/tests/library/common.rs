//! Shared fixtures for library tests.

use std::path::PathBuf;
use std::process::Command;

use samplefs_lib::SampleStore;
use samplefs_lib::stage::{Redactor, StagedRunner};
use tempfile::TempDir;

/// A store plus a scratch directory acting as the root boundary.
pub struct Workspace {
  pub temp: TempDir,
  pub store: SampleStore,
}

impl Workspace {
  pub fn new() -> Self {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("root")).unwrap();
    Self {
      temp,
      store: SampleStore::new(),
    }
  }

  pub fn root(&self) -> PathBuf {
    self.temp.path().join("root")
  }

  /// A runner whose redactor only fires on `needle`.
  pub fn runner(&self, needle: &str) -> StagedRunner<'_> {
    StagedRunner::new(&self.store).with_redactor(Redactor::new(needle))
  }
}

#[cfg(unix)]
pub fn sh(script: &str) -> Command {
  let mut cmd = Command::new("/bin/sh");
  cmd.arg("-c").arg(script);
  cmd
}

#[cfg(windows)]
pub fn sh(script: &str) -> Command {
  let mut cmd = Command::new("cmd.exe");
  cmd.arg("/C").arg(script);
  cmd
}
