//! Read-only roll-up of a classified tree.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::node::{Node, NodeKind};

/// A buildable directory and where its artifact goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
  pub kind: NodeKind,
  pub path: String,
  pub output: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreeSummary {
  /// Node count per kind. Kinds with no nodes are omitted.
  pub counts: BTreeMap<String, usize>,
  /// Libraries and executables in pre-order.
  pub targets: Vec<Target>,
}

impl TreeSummary {
  pub fn from_tree(tree: &Node) -> Self {
    let mut summary = Self::default();
    for node in tree.iter() {
      *summary.counts.entry(node.kind.tag().to_string()).or_default() += 1;
      if node.kind.is_target() {
        summary.targets.push(Target {
          kind: node.kind,
          path: node.path().to_string(),
          output: node.output.clone(),
        });
      }
    }
    summary
  }

  pub fn count(&self, kind: NodeKind) -> usize {
    self.counts.get(kind.tag()).copied().unwrap_or(0)
  }

  pub fn total(&self) -> usize {
    self.counts.values().sum()
  }
}
