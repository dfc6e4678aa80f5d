//! Human-readable tree dump with modification times.
//!
//! Each node gets one line: kind tag, indented name, the node's own mtime
//! (buildable and code nodes only), its full path, and for buildable nodes the
//! output's mtime and path. Times are shown modulo [`DUMP_TIME_MODULUS`] so the
//! columns stay narrow. The dump makes no rebuild decision; it only puts the
//! two timestamps next to each other.

use std::io::{self, Write};
use std::path::Path;
use std::time::UNIX_EPOCH;

use crate::consts::{DUMP_COLUMN_WIDTH, DUMP_TIME_MODULUS};
use crate::node::{Node, NodeKind};

/// Modification time split into seconds and nanoseconds since the epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ModTime {
  pub sec: u64,
  pub nsec: u32,
}

pub trait ModTimeSource {
  /// Modification time of `path`, or [`ModTime::default`] if it does not exist.
  fn mod_time(&self, path: &Path) -> ModTime;
}

/// Reads modification times from the filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsModTime;

impl ModTimeSource for FsModTime {
  fn mod_time(&self, path: &Path) -> ModTime {
    std::fs::metadata(path)
      .and_then(|m| m.modified())
      .ok()
      .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
      .map(|d| ModTime {
        sec: d.as_secs(),
        nsec: d.subsec_nanos(),
      })
      .unwrap_or_default()
  }
}

/// Write the dump of `tree` to `out`, one line per node in pre-order.
pub fn write_dump<T: ModTimeSource, W: Write>(tree: &Node, times: &T, out: &mut W) -> io::Result<()> {
  write_node(tree, times, out, 0)
}

/// The dump of `tree` as a string.
pub fn dump<T: ModTimeSource>(tree: &Node, times: &T) -> String {
  let mut buf = Vec::new();
  write_dump(tree, times, &mut buf).expect("writing to a Vec cannot fail");
  String::from_utf8_lossy(&buf).into_owned()
}

fn write_node<T: ModTimeSource, W: Write>(node: &Node, times: &T, out: &mut W, indent: usize) -> io::Result<()> {
  let name = node.name();
  let name_pad = DUMP_COLUMN_WIDTH.saturating_sub(indent + name.len());
  write!(out, ": {:<6} : {:indent$}{}{:name_pad$}", node.kind.tag(), "", name, "")?;

  if shows_source_time(node.kind) {
    write!(out, ": {:<7} ", short_time(times.mod_time(node.location())))?;
  } else {
    write!(out, ":{:9}", "")?;
  }

  let path = node.path();
  let path_pad = DUMP_COLUMN_WIDTH.saturating_sub(path.len());
  write!(out, "{}{:path_pad$}", path, "")?;

  match node.output.as_deref() {
    Some(output) if node.kind.has_output() => {
      write!(out, ": {:<7} {:<41}:", short_time(times.mod_time(Path::new(output))), output)?;
    }
    _ => write!(out, ":{:50}:", "")?,
  }
  writeln!(out)?;

  for child in &node.children {
    write_node(child, times, out, indent + 2)?;
  }
  Ok(())
}

fn shows_source_time(kind: NodeKind) -> bool {
  kind.is_code() || kind.is_target()
}

fn short_time(time: ModTime) -> u64 {
  time.sec % DUMP_TIME_MODULUS
}
