//! Open and stat calls that redirect into the sample store.
//!
//! A path is virtualized when it is opened in binary mode and its parent directory lies
//! under the root boundary. Everything else, and every open of an existing handle, goes
//! straight to the real filesystem with its errors passed through unchanged.
//!
//! # Example
//!
//! ```
//! use std::io::Write;
//! use samplefs_lib::{OpenMode, SampleStore, VirtualFs};
//!
//! let store = SampleStore::new();
//! let root = std::env::temp_dir().join("samplefs-doc");
//! let vfs = VirtualFs::new(&store, &root).unwrap();
//!
//! let mut file = vfs.open(root.join("x.bin"), OpenMode::write_binary()).unwrap();
//! file.write_all(b"payload").unwrap();
//! file.close();
//!
//! assert_eq!(store.get("x.bin").as_deref(), Some(&b"payload"[..]));
//! assert_eq!(vfs.stat(root.join("x.bin")).unwrap().len(), 7);
//! ```

mod file;
mod mode;

use std::fs::File;
use std::io::{self, Cursor, Read, Write};
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::config::VfsConfig;
use crate::metadata::{FileStatus, SyntheticStat};
use crate::platform::paths::absolute_path;
use crate::store::SampleStore;
use crate::store::key::to_store_key;

pub use file::{PendingWrite, VirtualFile};
pub use mode::{Access, ModeError, ModeKind, OpenMode};

/// What to open: a path, or a handle that is already open.
#[derive(Debug)]
pub enum OpenTarget {
  Path(PathBuf),
  Handle(File),
}

impl From<PathBuf> for OpenTarget {
  fn from(path: PathBuf) -> Self {
    OpenTarget::Path(path)
  }
}

impl From<&Path> for OpenTarget {
  fn from(path: &Path) -> Self {
    OpenTarget::Path(path.to_path_buf())
  }
}

impl From<&str> for OpenTarget {
  fn from(path: &str) -> Self {
    OpenTarget::Path(PathBuf::from(path))
  }
}

impl From<&PathBuf> for OpenTarget {
  fn from(path: &PathBuf) -> Self {
    OpenTarget::Path(path.clone())
  }
}

impl From<File> for OpenTarget {
  fn from(file: File) -> Self {
    OpenTarget::Handle(file)
  }
}

/// Filesystem front end that serves eligible paths from a `SampleStore`.
#[derive(Debug, Clone)]
pub struct VirtualFs<'a> {
  store: &'a SampleStore,
  root: PathBuf,
}

impl<'a> VirtualFs<'a> {
  /// Virtualize the subtree under `root`. Relative roots resolve against the working directory.
  pub fn new(store: &'a SampleStore, root: impl AsRef<Path>) -> io::Result<Self> {
    Ok(Self {
      store,
      root: absolute_path(root.as_ref())?,
    })
  }

  pub fn from_config(store: &'a SampleStore, config: &VfsConfig) -> Self {
    Self {
      store,
      root: config.root.clone(),
    }
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  /// The store key `path` maps to, or `None` if its parent directory is outside the root.
  pub fn store_key(&self, path: impl AsRef<Path>) -> io::Result<Option<String>> {
    let path = absolute_path(path.as_ref())?;

    let Some(parent) = path.parent() else {
      return Ok(None);
    };
    if !parent.starts_with(&self.root) {
      return Ok(None);
    }

    Ok(path.strip_prefix(&self.root).ok().map(to_store_key))
  }

  pub fn open(&self, target: impl Into<OpenTarget>, mode: OpenMode) -> io::Result<VirtualFile<'a>> {
    let path = match target.into() {
      OpenTarget::Handle(file) => return Ok(VirtualFile::Real(file)),
      OpenTarget::Path(path) => path,
    };

    let key = if mode.binary { self.store_key(&path)? } else { None };
    let Some(key) = key else {
      trace!(path = %path.display(), "open delegated");
      return mode.to_open_options().open(&path).map(VirtualFile::Real);
    };

    match mode.access() {
      Access::Read => match self.store.get(&key) {
        Some(data) => {
          trace!(key = %key, "open served from store");
          Ok(VirtualFile::Memory(Cursor::new(data)))
        }
        // Not cached yet; it may still exist on disk
        None => mode.to_open_options().open(&path).map(VirtualFile::Real),
      },
      Access::Write => {
        trace!(key = %key, "open buffered into store");
        Ok(VirtualFile::Buffered(PendingWrite::new(self.store, key)))
      }
    }
  }

  pub fn stat(&self, target: impl Into<OpenTarget>) -> io::Result<FileStatus> {
    let path = match target.into() {
      OpenTarget::Handle(file) => return file.metadata().map(FileStatus::Real),
      OpenTarget::Path(path) => path,
    };

    if let Some(key) = self.store_key(&path)?
      && let Some(data) = self.store.get(&key)
    {
      return Ok(FileStatus::Virtual(SyntheticStat::for_blob(&data)));
    }

    std::fs::metadata(&path).map(FileStatus::Real)
  }

  /// Read a whole file through `open` in binary mode.
  pub fn read(&self, path: impl AsRef<Path>) -> io::Result<Vec<u8>> {
    let mut file = self.open(path.as_ref(), OpenMode::read_binary())?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)?;
    Ok(data)
  }

  /// Write a whole file through `open` in binary mode.
  pub fn write(&self, path: impl AsRef<Path>, data: &[u8]) -> io::Result<()> {
    let mut file = self.open(path.as_ref(), OpenMode::write_binary())?;
    file.write_all(data)?;
    file.close();
    Ok(())
  }
}
