//! File status for real and virtual entries.
//!
//! A virtual entry has no backing file, so its status is fabricated: a regular file of the
//! blob's exact size with one link, a fixed mode, and every id and timestamp zeroed. Code
//! that only asks "is this a regular file of size N" cannot tell it apart from a real one.

use std::fs;

use crate::consts::VIRTUAL_FILE_MODE;

/// Fabricated status record for a store entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticStat {
  pub mode: u32,
  pub ino: u64,
  pub dev: u64,
  pub nlink: u64,
  pub uid: u32,
  pub gid: u32,
  pub size: u64,
  pub atime: i64,
  pub mtime: i64,
  pub ctime: i64,
}

impl SyntheticStat {
  /// Status of a virtual file whose contents are `data`.
  pub fn for_blob(data: &[u8]) -> Self {
    Self {
      mode: VIRTUAL_FILE_MODE,
      ino: 0,
      dev: 0,
      nlink: 1,
      uid: 0,
      gid: 0,
      size: data.len() as u64,
      atime: 0,
      mtime: 0,
      ctime: 0,
    }
  }
}

/// Result of a status query: either the real filesystem's answer, untouched, or a
/// synthesized record for a store entry.
#[derive(Debug, Clone)]
pub enum FileStatus {
  Real(fs::Metadata),
  Virtual(SyntheticStat),
}

impl FileStatus {
  pub fn len(&self) -> u64 {
    match self {
      FileStatus::Real(meta) => meta.len(),
      FileStatus::Virtual(stat) => stat.size,
    }
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  pub fn is_file(&self) -> bool {
    match self {
      FileStatus::Real(meta) => meta.is_file(),
      FileStatus::Virtual(_) => true,
    }
  }

  pub fn is_dir(&self) -> bool {
    match self {
      FileStatus::Real(meta) => meta.is_dir(),
      FileStatus::Virtual(_) => false,
    }
  }

  pub fn is_virtual(&self) -> bool {
    matches!(self, FileStatus::Virtual(_))
  }

  #[cfg(unix)]
  pub fn mode(&self) -> u32 {
    use std::os::unix::fs::MetadataExt;
    match self {
      FileStatus::Real(meta) => meta.mode(),
      FileStatus::Virtual(stat) => stat.mode,
    }
  }

  #[cfg(unix)]
  pub fn nlink(&self) -> u64 {
    use std::os::unix::fs::MetadataExt;
    match self {
      FileStatus::Real(meta) => meta.nlink(),
      FileStatus::Virtual(stat) => stat.nlink,
    }
  }
}
