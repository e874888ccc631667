//! Handles returned by `VirtualFs::open`.

use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};

use tracing::debug;

use crate::store::{Blob, SampleStore};

/// An open file: either a real one, a read stream over a store entry, or a write buffer
/// that lands in the store when closed.
#[derive(Debug)]
pub enum VirtualFile<'a> {
  Real(File),
  Memory(Cursor<Blob>),
  Buffered(PendingWrite<'a>),
}

impl VirtualFile<'_> {
  pub fn is_virtual(&self) -> bool {
    !matches!(self, VirtualFile::Real(_))
  }

  /// Close the handle. For write buffers this commits the bytes to the store.
  ///
  /// Dropping the handle has the same effect; this just makes the point explicit.
  pub fn close(self) {
    if let VirtualFile::Buffered(pending) = self {
      pending.close();
    }
  }
}

impl Read for VirtualFile<'_> {
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    match self {
      VirtualFile::Real(file) => file.read(buf),
      VirtualFile::Memory(cursor) => cursor.read(buf),
      VirtualFile::Buffered(pending) => pending.buffer()?.read(buf),
    }
  }
}

impl Write for VirtualFile<'_> {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    match self {
      VirtualFile::Real(file) => file.write(buf),
      VirtualFile::Memory(_) => Err(read_only()),
      VirtualFile::Buffered(pending) => pending.buffer()?.write(buf),
    }
  }

  fn flush(&mut self) -> io::Result<()> {
    match self {
      VirtualFile::Real(file) => file.flush(),
      VirtualFile::Memory(_) => Ok(()),
      VirtualFile::Buffered(_) => Ok(()),
    }
  }
}

impl Seek for VirtualFile<'_> {
  fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
    match self {
      VirtualFile::Real(file) => file.seek(pos),
      VirtualFile::Memory(cursor) => cursor.seek(pos),
      VirtualFile::Buffered(pending) => pending.buffer()?.seek(pos),
    }
  }
}

fn read_only() -> io::Error {
  io::Error::new(io::ErrorKind::Unsupported, "virtual file was opened for reading")
}

/// Write session for a store entry.
///
/// The accumulated bytes are committed under `key` exactly once, on `close` or on drop,
/// however much was written.
#[derive(Debug)]
pub struct PendingWrite<'a> {
  store: &'a SampleStore,
  key: String,
  buffer: Option<Cursor<Vec<u8>>>,
}

impl<'a> PendingWrite<'a> {
  pub(crate) fn new(store: &'a SampleStore, key: String) -> Self {
    Self {
      store,
      key,
      buffer: Some(Cursor::new(Vec::new())),
    }
  }

  pub fn close(mut self) {
    self.commit();
  }

  fn buffer(&mut self) -> io::Result<&mut Cursor<Vec<u8>>> {
    // Only reachable if commit ran without consuming self
    self
      .buffer
      .as_mut()
      .ok_or_else(|| io::Error::other("write buffer already committed"))
  }

  fn commit(&mut self) {
    if let Some(buffer) = self.buffer.take() {
      let data = buffer.into_inner();
      debug!(key = %self.key, size = data.len(), "committing virtual write");
      self.store.put(self.key.clone(), data);
    }
  }
}

impl Drop for PendingWrite<'_> {
  fn drop(&mut self) {
    self.commit();
  }
}
