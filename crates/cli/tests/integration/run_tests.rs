use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn run_sees_loaded_samples() {
  if cfg!(windows) {
    return;
  }

  let env = TestEnv::new();
  env.write_sample("sub/b.txt", b"staged content\n");

  env
    .samplefs_cmd()
    .args(["run", "--", "/bin/sh", "-c", "cat sub/b.txt"])
    .assert()
    .success()
    .stdout("staged content\n");
}

#[test]
fn run_exports_new_files() {
  if cfg!(windows) {
    return;
  }

  let env = TestEnv::new();
  env.write_sample("a.txt", b"X");

  env
    .samplefs_cmd()
    .arg("run")
    .arg("--export")
    .arg(env.export_path())
    .args(["--", "/bin/sh", "-c", "printf 'new' > c.txt"])
    .assert()
    .success();

  assert_eq!(std::fs::read(env.export_path().join("a.txt")).unwrap(), b"X");
  assert_eq!(std::fs::read(env.export_path().join("c.txt")).unwrap(), b"new");
}

#[test]
fn run_propagates_exit_code() {
  if cfg!(windows) {
    return;
  }

  let env = TestEnv::new();

  env
    .samplefs_cmd()
    .args(["run", "--", "/bin/sh", "-c", "exit 7"])
    .assert()
    .code(7);
}

#[test]
fn run_json_reports_ingested_files() {
  if cfg!(windows) {
    return;
  }

  let env = TestEnv::new();
  env.write_sample("a.txt", b"X");

  let output = env
    .samplefs_cmd()
    .args(["-o", "json", "run", "--", "/bin/sh", "-c", "echo out; printf 'y' > b.txt"])
    .output()
    .unwrap();
  assert!(output.status.success());

  let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(json["exit_code"], 0);
  assert_eq!(json["stdout"], "out\n");
  assert_eq!(json["ingested"], serde_json::json!(["a.txt", "b.txt"]));
}

#[test]
fn run_missing_program_fails() {
  let env = TestEnv::new();

  env
    .samplefs_cmd()
    .args(["run", "--", "/definitely/not/a/program"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("failed to launch"));
}
