//! The scan command: classify a source tree and optionally report on it.

use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use min_build_lib::config::source_dir;
use min_build_lib::report::{FsModTime, write_dump};
use min_build_lib::summary::TreeSummary;
use min_build_lib::{Node, NodeKind, eval_path};

use crate::output::{OutputFormat, print_info, print_json, print_warning};

#[derive(Serialize)]
struct ScanReport<'a> {
  root: &'a str,
  summary: TreeSummary,
  tree: &'a Node,
}

/// Scan the source tree at `path` (or the configured default).
///
/// Without a format the scan is silent. An unreadable root is reported as a
/// warning and still exits successfully.
pub fn cmd_scan(path: Option<&str>, format: Option<OutputFormat>) -> Result<()> {
  let root = source_dir(path);
  debug!(root = %root, "scanning");

  let tree = eval_path(&root);

  let is_dir = tree.kind.is_directory();
  if !is_dir {
    print_warning(&format!("{} is not a directory; nothing to build", root));
  }

  match format {
    None => {}
    Some(OutputFormat::Text) => {
      let stdout = io::stdout();
      let mut out = stdout.lock();
      write_dump(&tree, &FsModTime, &mut out).context("Failed to write dump")?;
      out.flush().context("Failed to flush stdout")?;
    }
    Some(OutputFormat::Json) => {
      let report = ScanReport {
        root: &root,
        summary: TreeSummary::from_tree(&tree),
        tree: &tree,
      };
      print_json(&report)?;
    }
  }

  if format.is_some() && is_dir {
    let targets = tree.iter().filter(|n| n.kind.is_target()).count();
    let workspace = if tree.kind == NodeKind::Root { " (workspace)" } else { "" };
    print_info(&format!("{} target(s) in {}{}", targets, root, workspace));
  }

  Ok(())
}
