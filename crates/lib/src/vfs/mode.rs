//! fopen-style open modes.

use std::fs::OpenOptions;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid open mode: {0:?}")]
pub struct ModeError(pub String);

/// The primary action a mode string asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
  /// `r`
  Read,
  /// `w`
  Truncate,
  /// `a`
  Append,
  /// `x`
  Exclusive,
}

/// Whether an open is served from the store (read) or buffered back into it (write).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
  Read,
  Write,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenMode {
  pub kind: ModeKind,
  /// `+`: open for updating (reading and writing)
  pub update: bool,
  /// `b`: binary access. Only binary opens are eligible for virtualization.
  pub binary: bool,
}

impl OpenMode {
  pub const fn read_binary() -> Self {
    Self {
      kind: ModeKind::Read,
      update: false,
      binary: true,
    }
  }

  pub const fn write_binary() -> Self {
    Self {
      kind: ModeKind::Truncate,
      update: false,
      binary: true,
    }
  }

  pub const fn read_text() -> Self {
    Self {
      kind: ModeKind::Read,
      update: false,
      binary: false,
    }
  }

  pub const fn write_text() -> Self {
    Self {
      kind: ModeKind::Truncate,
      update: false,
      binary: false,
    }
  }

  /// Any mode containing `r` reads; everything else writes.
  pub fn access(&self) -> Access {
    match self.kind {
      ModeKind::Read => Access::Read,
      _ => Access::Write,
    }
  }

  /// Options equivalent to this mode for a real-filesystem open.
  pub fn to_open_options(&self) -> OpenOptions {
    let mut options = OpenOptions::new();
    match self.kind {
      ModeKind::Read => {
        options.read(true).write(self.update);
      }
      ModeKind::Truncate => {
        options.write(true).create(true).truncate(true).read(self.update);
      }
      ModeKind::Append => {
        options.append(true).create(true).read(self.update);
      }
      ModeKind::Exclusive => {
        options.write(true).create_new(true).read(self.update);
      }
    }
    options
  }
}

impl FromStr for OpenMode {
  type Err = ModeError;

  fn from_str(mode: &str) -> Result<Self, Self::Err> {
    let invalid = || ModeError(mode.to_string());

    let mut kind = None;
    let mut update = false;
    let mut binary = None;

    for c in mode.chars() {
      match c {
        'r' | 'w' | 'a' | 'x' => {
          if kind.is_some() {
            return Err(invalid());
          }
          kind = Some(match c {
            'r' => ModeKind::Read,
            'w' => ModeKind::Truncate,
            'a' => ModeKind::Append,
            _ => ModeKind::Exclusive,
          });
        }
        '+' if !update => update = true,
        'b' | 't' if binary.is_none() => binary = Some(c == 'b'),
        _ => return Err(invalid()),
      }
    }

    Ok(Self {
      kind: kind.ok_or_else(invalid)?,
      update,
      binary: binary.unwrap_or(false),
    })
  }
}
