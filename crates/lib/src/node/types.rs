use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::path;

/// Classification of a single filesystem entry.
///
/// `File` and `Folder` are the only kinds the tree builder produces. After
/// classification every directory is one of `Root`, `Executable`, `Library`
/// or `Folder`, and every file is one of `Header`, `Source` or `File`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
  File,
  Folder,
  /// A workspace directly holding more than one independent target. Never built itself.
  Root,
  Header,
  Source,
  Library,
  Executable,
}

impl NodeKind {
  /// Whether this kind can only be held by a directory node.
  pub fn is_directory(self) -> bool {
    matches!(
      self,
      NodeKind::Folder | NodeKind::Root | NodeKind::Library | NodeKind::Executable
    )
  }

  /// Whether this kind is an independent build product.
  pub fn is_target(self) -> bool {
    matches!(self, NodeKind::Library | NodeKind::Executable)
  }

  /// Whether nodes of this kind receive an output path.
  pub fn has_output(self) -> bool {
    matches!(self, NodeKind::Source | NodeKind::Library | NodeKind::Executable)
  }

  /// Whether this kind is a code file.
  pub fn is_code(self) -> bool {
    matches!(self, NodeKind::Header | NodeKind::Source)
  }

  /// Short tag printed in the first column of the dump.
  pub fn tag(self) -> &'static str {
    match self {
      NodeKind::File => "file",
      NodeKind::Folder => "folder",
      NodeKind::Root => "root",
      NodeKind::Header => "header",
      NodeKind::Source => "source",
      NodeKind::Library => "lib",
      NodeKind::Executable => "exe",
    }
  }

  /// The unclassified kind for a node of this kind's provenance.
  pub(crate) fn unclassified(self) -> NodeKind {
    if self.is_directory() {
      NodeKind::Folder
    } else {
      NodeKind::File
    }
  }
}

impl std::fmt::Display for NodeKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.tag())
  }
}

/// One entry of the scanned tree.
///
/// The path is fixed at creation and identifies the node. Children are owned
/// exclusively and kept in the order the walker enumerated them.
///
/// `path` is the display form used for naming outputs. `location` is the
/// exact filesystem path, which differs from it only for names that are not
/// valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
  pub kind: NodeKind,
  path: String,
  #[serde(skip)]
  location: PathBuf,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub output: Option<String>,
  pub children: Vec<Node>,
  /// Reserved for an explicit dependency graph. Always empty.
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub dependencies: Vec<String>,
}

impl Node {
  pub fn new(kind: NodeKind, path: impl Into<String>) -> Self {
    let path = path.into();
    let location = PathBuf::from(&path);
    Self::at(kind, path, location)
  }

  /// A node whose filesystem location is given separately from its display path.
  pub(crate) fn at(kind: NodeKind, path: String, location: PathBuf) -> Self {
    Self {
      kind,
      path,
      location,
      output: None,
      children: Vec::new(),
      dependencies: Vec::new(),
    }
  }

  pub fn with_children(mut self, children: Vec<Node>) -> Self {
    self.children = children;
    self
  }

  pub fn path(&self) -> &str {
    &self.path
  }

  /// Where the entry lives on disk.
  pub fn location(&self) -> &Path {
    &self.location
  }

  /// Final path segment.
  pub fn name(&self) -> &str {
    path::file_name(&self.path)
  }

  pub fn child(&self, name: &str) -> Option<&Node> {
    self.children.iter().find(|c| c.name() == name)
  }

  /// Look up a descendant by a `/`-separated path relative to this node.
  pub fn find(&self, relative: &str) -> Option<&Node> {
    relative
      .split('/')
      .filter(|part| !part.is_empty())
      .try_fold(self, |node, part| node.child(part))
  }

  /// Pre-order traversal of this node and all descendants.
  pub fn iter(&self) -> NodeIter<'_> {
    NodeIter { stack: vec![self] }
  }
}

pub struct NodeIter<'a> {
  stack: Vec<&'a Node>,
}

impl<'a> Iterator for NodeIter<'a> {
  type Item = &'a Node;

  fn next(&mut self) -> Option<Self::Item> {
    let node = self.stack.pop()?;
    self.stack.extend(node.children.iter().rev());
    Some(node)
  }
}
