//! Test utilities for min-build-lib.
//!
//! [`MemoryWalker`] stands in for the filesystem so tree-shape tests do not
//! depend on directory enumeration order or on touching disk. It returns
//! names exactly as registered, hidden ones included.

use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;
use std::io;
use std::path::Path;

use crate::walk::{DirectoryWalker, WalkError};

/// In-memory directory listing keyed by full node path.
#[derive(Debug, Default, Clone)]
pub struct MemoryWalker {
  dirs: BTreeMap<String, Vec<String>>,
  unreadable: BTreeSet<String>,
}

impl MemoryWalker {
  /// Build a walker holding `root` and every file in `files` (paths relative
  /// to `root`), creating intermediate directories as needed.
  pub fn from_files(root: &str, files: &[&str]) -> Self {
    let mut walker = Self::default().with_dir(root, &[]);
    for file in files {
      let mut parent = root.to_string();
      for part in file.split('/') {
        walker.add_entry(&parent, part);
        parent = format!("{}/{}", parent, part);
      }
    }
    walker
  }

  /// Add a (possibly empty) directory with the given entry names.
  pub fn with_dir(mut self, path: &str, names: &[&str]) -> Self {
    self.dirs.entry(path.to_string()).or_default();
    for name in names {
      self.add_entry(path, name);
    }
    self
  }

  /// Make `path` fail to enumerate with a permission error.
  pub fn with_unreadable(mut self, path: &str) -> Self {
    self.unreadable.insert(path.to_string());
    self
  }

  fn add_entry(&mut self, dir: &str, name: &str) {
    let entries = self.dirs.entry(dir.to_string()).or_default();
    if !entries.iter().any(|n| n == name) {
      entries.push(name.to_string());
    }
  }
}

impl DirectoryWalker for MemoryWalker {
  fn entries(&self, path: &Path) -> Result<Vec<OsString>, WalkError> {
    let key = path.to_string_lossy();
    if self.unreadable.contains(key.as_ref()) {
      return Err(WalkError::Io {
        path: path.to_path_buf(),
        source: io::Error::from(io::ErrorKind::PermissionDenied),
      });
    }
    self
      .dirs
      .get(key.as_ref())
      .map(|names| names.iter().map(OsString::from).collect())
      .ok_or_else(|| WalkError::NotADirectory { path: path.to_path_buf() })
  }
}
