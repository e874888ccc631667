use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn rm_removes_matching_and_exports_rest() {
  let env = TestEnv::new();
  env.write_sample("keep.txt", b"keep");
  env.write_sample("drop/one.bin", b"1");
  env.write_sample("drop/two.bin", b"2");

  env
    .samplefs_cmd()
    .arg("rm")
    .arg("--export")
    .arg(env.export_path())
    .arg("drop/*")
    .assert()
    .success()
    .stdout(predicate::str::contains("drop/one.bin"))
    .stderr(predicate::str::contains("Removed 2 sample(s), 1 remaining"));

  assert_eq!(std::fs::read(env.export_path().join("keep.txt")).unwrap(), b"keep");
  assert!(!env.export_path().join("drop").exists());
}

#[test]
fn rm_requires_a_pattern() {
  let env = TestEnv::new();

  env.samplefs_cmd().arg("rm").assert().failure();
}
