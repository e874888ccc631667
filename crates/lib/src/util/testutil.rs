//! Test utilities for samplefs-lib.
//!
//! Cross-platform builders for the child processes staged execution tests run.

use std::process::Command;

/// A command that runs `script` through the platform shell.
#[cfg(unix)]
pub fn shell_cmd(script: &str) -> Command {
  let mut cmd = Command::new("/bin/sh");
  cmd.arg("-c").arg(script);
  cmd
}

#[cfg(windows)]
pub fn shell_cmd(script: &str) -> Command {
  let mut cmd = Command::new("cmd.exe");
  cmd.arg("/C").arg(script);
  cmd
}

/// A command that exits successfully without touching the working directory.
pub fn noop_cmd() -> Command {
  shell_cmd("exit 0")
}

/// A command that writes `content` (no trailing newline) to `filename` in the working directory.
#[cfg(unix)]
pub fn write_file_cmd(filename: &str, content: &str) -> Command {
  shell_cmd(&format!("printf '%s' '{}' > '{}'", content, filename))
}

#[cfg(windows)]
pub fn write_file_cmd(filename: &str, content: &str) -> Command {
  let mut cmd = Command::new("powershell.exe");
  cmd.args([
    "-NoProfile",
    "-Command",
    &format!("Set-Content -NoNewline -Path '{}' -Value '{}'", filename, content),
  ]);
  cmd
}
