//! Output path resolution for classified trees.
//!
//! [`collapse_depth`] measures how much of every path is wrapper nesting, and
//! [`resolve_outputs`] assigns each buildable node its artifact path:
//!
//! | kind         | output                          |
//! |--------------|---------------------------------|
//! | `Source`     | `obj/<a>__<b>.o`                |
//! | `Library`    | `bin/<a>/lib<b>.a` (`bin/libout.a`) |
//! | `Executable` | `bin/<a>/<b>` (`bin/out`)       |

mod depth;
mod paths;

pub use depth::collapse_depth;
pub use paths::{archive_path, binary_path, object_path};

use crate::node::{Node, NodeKind};

/// The artifact path for a node of `kind` at `path`, if that kind is buildable.
pub fn output_for(kind: NodeKind, path: &str, depth: usize) -> Option<String> {
  match kind {
    NodeKind::Source => Some(object_path(path, depth)),
    NodeKind::Library => Some(archive_path(path, depth)),
    NodeKind::Executable => Some(binary_path(path, depth)),
    _ => None,
  }
}

/// Set `output` on every node of the tree.
///
/// Buildable nodes get their artifact path; every other node is cleared, so
/// resolving twice, or after reclassification, leaves no stale outputs.
pub fn resolve_outputs(tree: &mut Node, depth: usize) {
  tree.output = output_for(tree.kind, tree.path(), depth);
  for child in &mut tree.children {
    resolve_outputs(child, depth);
  }
}
