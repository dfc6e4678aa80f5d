//! The scanned tree: node types and construction.

pub mod build;
pub mod types;

pub use build::build_tree;
pub use types::{Node, NodeIter, NodeKind};
