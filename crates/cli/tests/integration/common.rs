//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Isolated test environment.
///
/// Each test gets its own temporary directory holding a `samples/` input directory and an
/// `export/` output directory.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("samples")).unwrap();
    Self { temp }
  }

  /// Write a sample relative to the samples directory.
  pub fn write_sample(&self, relative_path: &str, content: &[u8]) {
    let path = self.samples_path().join(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
  }

  pub fn samples_path(&self) -> PathBuf {
    self.temp.path().join("samples")
  }

  pub fn export_path(&self) -> PathBuf {
    self.temp.path().join("export")
  }

  /// Get a pre-configured Command for the samplefs binary.
  ///
  /// Loads the samples directory and pins `SAMPLEFS_ROOT` to the temp directory.
  pub fn samplefs_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("samplefs");
    cmd.env("SAMPLEFS_ROOT", self.temp.path());
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(self.temp.path());
    cmd.arg("--load").arg(self.samples_path());
    cmd
  }
}
