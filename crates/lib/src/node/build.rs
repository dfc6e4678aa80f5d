//! Tree construction.
//!
//! Mirrors the directory structure under a scan root into a [`Node`] tree.
//! Every node starts as [`NodeKind::File`] or [`NodeKind::Folder`];
//! classification happens in a separate pass.

use std::path::PathBuf;

use tracing::{debug, trace};

use super::{Node, NodeKind};
use crate::consts::PATH_DELIM;
use crate::path::is_hidden;
use crate::walk::DirectoryWalker;

/// Build the unclassified tree rooted at `path`.
///
/// A path the walker cannot enumerate becomes a childless `File` node. This
/// never fails: an unreadable subdirectory only affects its own node.
pub fn build_tree<W: DirectoryWalker>(walker: &W, path: &str) -> Node {
  build_node(walker, path.to_string(), PathBuf::from(path))
}

/// Children are re-opened through `location`, never through the display path,
/// which is lossy for names that are not valid UTF-8.
fn build_node<W: DirectoryWalker>(walker: &W, path: String, location: PathBuf) -> Node {
  let names = match walker.entries(&location) {
    Ok(names) => names,
    Err(e) => {
      trace!(path = %path, error = %e, "treating entry as file");
      return Node::at(NodeKind::File, path, location);
    }
  };

  debug!(path = %path, entries = names.len(), "scanned directory");

  let children = names
    .iter()
    .map(|name| (name.to_string_lossy(), name))
    .filter(|(display, _)| !is_hidden(display))
    .map(|(display, name)| {
      build_node(
        walker,
        format!("{}{}{}", path, PATH_DELIM, display),
        location.join(name),
      )
    })
    .collect();

  Node::at(NodeKind::Folder, path, location).with_children(children)
}
