use crate::node::Node;
use crate::path::segment_count;

/// Number of leading path segments to elide when naming outputs.
///
/// This is the segment count of the scan root's own path plus the length of
/// the chain of single-child directories hanging off it.
pub fn collapse_depth(tree: &Node) -> usize {
  segment_count(tree.path()) + wrapper_chain_len(tree)
}

fn wrapper_chain_len(tree: &Node) -> usize {
  let mut len = 0;
  let mut node = tree;
  while let [only] = node.children.as_slice() {
    len += 1;
    node = only;
  }
  len
}
