//! Directory enumeration.
//!
//! The tree builder only needs the non-hidden entry names of one directory at
//! a time, and needs to tell "not a directory" apart from "empty directory".
//! [`DirectoryWalker`] captures exactly that so tests can swap in an
//! in-memory tree. Names are handed back as raw [`OsString`]s so entries that
//! are not valid UTF-8 can still be re-opened.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::path::is_hidden;

/// Error returned when a path cannot be enumerated as a directory.
#[derive(Debug, Error)]
pub enum WalkError {
  #[error("not a directory: {}", path.display())]
  NotADirectory { path: PathBuf },

  #[error("failed to read directory {}: {source}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

pub trait DirectoryWalker {
  /// Names of the non-hidden entries of `path`, in enumeration order.
  ///
  /// `Ok(vec![])` is an empty directory; `Err` means `path` is not a
  /// directory or could not be read.
  fn entries(&self, path: &Path) -> Result<Vec<OsString>, WalkError>;
}

/// Walker backed by the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsWalker;

impl DirectoryWalker for FsWalker {
  fn entries(&self, path: &Path) -> Result<Vec<OsString>, WalkError> {
    let dir = std::fs::read_dir(path).map_err(|e| match e.kind() {
      ErrorKind::NotADirectory | ErrorKind::NotFound => WalkError::NotADirectory { path: path.to_path_buf() },
      _ => WalkError::Io {
        path: path.to_path_buf(),
        source: e,
      },
    })?;

    let mut names = Vec::new();
    for entry in dir {
      let entry = entry.map_err(|e| WalkError::Io {
        path: path.to_path_buf(),
        source: e,
      })?;
      let name = entry.file_name();
      if !is_hidden(&name.to_string_lossy()) {
        names.push(name);
      }
    }
    Ok(names)
  }
}
