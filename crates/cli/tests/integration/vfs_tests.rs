use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn cat_reads_store_entry_under_root() {
  let env = TestEnv::new();
  env.write_sample("virtual/only.bin", b"from the store");

  // The file only exists in the loaded store, not at this location on disk
  env
    .samplefs_cmd()
    .arg("cat")
    .arg(env.temp.path().join("virtual").join("only.bin"))
    .assert()
    .success()
    .stdout("from the store");
}

#[test]
fn cat_falls_back_to_disk() {
  let env = TestEnv::new();
  std::fs::write(env.temp.path().join("disk.bin"), b"on disk").unwrap();

  env
    .samplefs_cmd()
    .arg("cat")
    .arg(env.temp.path().join("disk.bin"))
    .assert()
    .success()
    .stdout("on disk");
}

#[test]
fn cat_missing_file_fails() {
  let env = TestEnv::new();

  env
    .samplefs_cmd()
    .args(["cat", "missing.bin"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn stat_reports_virtual_entries() {
  let env = TestEnv::new();
  env.write_sample("virtual/only.bin", &[0u8; 2048]);

  env
    .samplefs_cmd()
    .arg("stat")
    .arg(env.temp.path().join("virtual").join("only.bin"))
    .assert()
    .success()
    .stdout(predicate::str::contains("only.bin file 2.0 KB (virtual)"));
}

#[test]
fn stat_reports_real_directories() {
  let env = TestEnv::new();

  env
    .samplefs_cmd()
    .args(["-o", "json", "stat"])
    .arg(env.samples_path())
    .assert()
    .success()
    .stdout(predicate::str::contains("\"source\": \"disk\""))
    .stdout(predicate::str::contains("\"kind\": \"directory\""));
}
