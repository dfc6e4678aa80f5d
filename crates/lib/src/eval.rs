//! The scan pipeline: build, classify, collapse, resolve.

use tracing::info;

use crate::classify::classify;
use crate::node::{Node, build_tree};
use crate::outputs::{collapse_depth, resolve_outputs};
use crate::summary::TreeSummary;
use crate::walk::{DirectoryWalker, FsWalker};

/// Scan `path` with `walker` and return the classified tree with outputs resolved.
///
/// Never fails. A path that cannot be enumerated comes back as a single
/// file node.
pub fn eval_folder<W: DirectoryWalker>(walker: &W, path: &str) -> Node {
  let mut tree = build_tree(walker, path);
  classify(&mut tree);

  let depth = collapse_depth(&tree);
  resolve_outputs(&mut tree, depth);

  let summary = TreeSummary::from_tree(&tree);
  info!(
    path = %path,
    kind = %tree.kind,
    depth,
    nodes = summary.total(),
    targets = summary.targets.len(),
    "classified source tree"
  );

  tree
}

/// [`eval_folder`] over the real filesystem.
pub fn eval_path(path: &str) -> Node {
  eval_folder(&FsWalker, path)
}
