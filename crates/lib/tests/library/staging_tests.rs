use std::io::Write;

use samplefs_lib::{OpenMode, VirtualFs};

use super::common::{Workspace, sh};

#[test]
fn vfs_writes_are_visible_to_staged_process_and_back() {
  let ws = Workspace::new();
  let vfs = VirtualFs::new(&ws.store, ws.root()).unwrap();

  let mut file = vfs.open(ws.root().join("input.bin"), OpenMode::write_binary()).unwrap();
  file.write_all(b"abc").unwrap();
  file.close();

  #[cfg(unix)]
  let command = sh("cp input.bin copy.bin");
  #[cfg(windows)]
  let command = sh("copy input.bin copy.bin");

  let output = ws.runner("nobody-here").run(command).unwrap();

  assert!(output.status.success());
  assert_eq!(vfs.read(ws.root().join("copy.bin")).unwrap(), b"abc");
  assert_eq!(vfs.stat(ws.root().join("copy.bin")).unwrap().len(), 3);
}

#[test]
fn consecutive_runs_see_each_others_output() {
  let ws = Workspace::new();
  ws.store.put("seed.txt", b"1".to_vec());

  #[cfg(unix)]
  let (first, second) = (sh("cat seed.txt > step1.txt"), sh("cat step1.txt > step2.txt"));
  #[cfg(windows)]
  let (first, second) = (sh("copy seed.txt step1.txt"), sh("copy step1.txt step2.txt"));

  ws.runner("nobody-here").run(first).unwrap();
  ws.runner("nobody-here").run(second).unwrap();

  assert_eq!(ws.store.get("step2.txt").as_deref(), Some(&b"1"[..]));
  assert_eq!(ws.store.len(), 3);
}

#[test]
#[cfg(unix)]
fn removed_staged_files_stay_in_store() {
  // Deleting a staged file does not delete the entry; only new or changed files flow back
  let ws = Workspace::new();
  ws.store.put("keep.txt", b"k".to_vec());

  let output = ws.runner("nobody-here").run(sh("rm keep.txt")).unwrap();

  assert!(output.ingest.ingested.is_empty());
  assert_eq!(ws.store.get("keep.txt").as_deref(), Some(&b"k"[..]));
}

#[test]
#[cfg(unix)]
fn redaction_keeps_unrelated_lines_in_order() {
  let ws = Workspace::new();
  let output = ws
    .runner("analyst")
    .run(sh("printf 'a\\n/home/analyst/x\\nb\\r\\nanalyst\\nc'"))
    .unwrap();

  assert_eq!(output.stdout, b"a\nb\r\nc");
}
