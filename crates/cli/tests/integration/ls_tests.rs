use predicates::prelude::*;

use super::common::TestEnv;

const HELLO_SHA256: &str = "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9";

#[test]
fn ls_shows_size_hash_and_name() {
  let env = TestEnv::new();
  env.write_sample("hello.txt", b"hello world");

  env
    .samplefs_cmd()
    .arg("ls")
    .assert()
    .success()
    .stdout(predicate::str::contains(HELLO_SHA256))
    .stdout(predicate::str::contains("11 B"))
    .stdout(predicate::str::contains("hello.txt"));
}

#[test]
fn ls_filters_by_pattern() {
  let env = TestEnv::new();
  env.write_sample("a.exe", b"MZ");
  env.write_sample("nested/b.txt", b"text");

  env
    .samplefs_cmd()
    .args(["ls", "*.txt"])
    .assert()
    .success()
    .stdout(predicate::str::contains("nested/b.txt"))
    .stdout(predicate::str::contains("a.exe").not());
}

#[test]
fn ls_empty_store() {
  let env = TestEnv::new();

  env
    .samplefs_cmd()
    .arg("ls")
    .assert()
    .success()
    .stdout(predicate::str::contains("No samples found"));
}

#[test]
fn ls_json_output_is_valid() {
  let env = TestEnv::new();
  env.write_sample("hello.txt", b"hello world");

  let output = env.samplefs_cmd().args(["-o", "json", "ls"]).output().unwrap();
  assert!(output.status.success());

  let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(json[0]["name"], "hello.txt");
  assert_eq!(json[0]["size"], 11);
  assert_eq!(json[0]["sha256"], HELLO_SHA256);
}

#[test]
fn ls_missing_load_directory_fails() {
  let env = TestEnv::new();

  env
    .samplefs_cmd()
    .args(["--load", "/nonexistent/samples", "ls"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Sample directory not found"));
}

#[test]
fn ls_invalid_pattern_fails() {
  let env = TestEnv::new();

  env
    .samplefs_cmd()
    .args(["ls", "[oops"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("invalid pattern"));
}
