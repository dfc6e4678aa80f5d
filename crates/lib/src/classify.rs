//! Bottom-up classification of a scanned tree.
//!
//! Files are typed from their extension. A directory is typed from the
//! already-classified kinds of its direct children by the first matching rule
//! in [`FOLDER_RULES`]:
//!
//! 1. [`FolderRule::Root`]: more than one independent target below it.
//! 2. [`FolderRule::ExecutableByMain`]: a direct `main.c` child.
//! 3. [`FolderRule::ExecutableByMerge`]: a single executable child is absorbed.
//! 4. [`FolderRule::Library`]: code files or a single library child.
//!
//! A directory matching none of them stays a plain [`NodeKind::Folder`].
//! Absorbing a child target demotes it to `Folder`, so the outermost directory
//! enclosing exactly one build product becomes the build unit.

use tracing::trace;

use crate::consts::{HEADER_EXT, MAIN_FILE, SOURCE_EXT};
use crate::node::{Node, NodeKind};

/// Folder rules in priority order. Evaluation stops at the first match.
pub const FOLDER_RULES: [FolderRule; 4] = [
  FolderRule::Root,
  FolderRule::ExecutableByMain,
  FolderRule::ExecutableByMerge,
  FolderRule::Library,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderRule {
  Root,
  ExecutableByMain,
  ExecutableByMerge,
  Library,
}

impl FolderRule {
  pub fn name(self) -> &'static str {
    match self {
      FolderRule::Root => "root",
      FolderRule::ExecutableByMain => "executable-by-main",
      FolderRule::ExecutableByMerge => "executable-by-merge",
      FolderRule::Library => "library",
    }
  }

  /// Apply the rule to a folder whose children are already classified.
  ///
  /// Returns `false` without touching anything if the precondition does not hold.
  fn apply(self, folder: &mut Node) -> bool {
    match self {
      FolderRule::Root => {
        if target_count(folder) <= 1 {
          return false;
        }
        folder.kind = NodeKind::Root;
      }
      FolderRule::ExecutableByMain => {
        if !has_main(folder) {
          return false;
        }
        folder.kind = NodeKind::Executable;
      }
      FolderRule::ExecutableByMerge => {
        if !has_child(folder, |k| k == NodeKind::Executable) {
          return false;
        }
        demote_children(folder, NodeKind::Executable);
        folder.kind = NodeKind::Executable;
      }
      FolderRule::Library => {
        if !has_child(folder, |k| k == NodeKind::Library || k.is_code()) {
          return false;
        }
        demote_children(folder, NodeKind::Library);
        folder.kind = NodeKind::Library;
      }
    }
    true
  }
}

/// Classify `tree` in place, children before parents.
///
/// Kinds are first reset to `File`/`Folder` from each node's provenance, so
/// the result depends only on the tree's structure and names. Running it on
/// an already classified tree changes nothing.
pub fn classify(tree: &mut Node) {
  tree.kind = tree.kind.unclassified();

  for child in &mut tree.children {
    classify(child);
  }

  if tree.kind == NodeKind::File {
    tree.kind = classify_file(tree.path());
  } else {
    classify_folder(tree);
  }
}

fn classify_file(path: &str) -> NodeKind {
  if path.ends_with(HEADER_EXT) {
    NodeKind::Header
  } else if path.ends_with(SOURCE_EXT) {
    NodeKind::Source
  } else {
    NodeKind::File
  }
}

fn classify_folder(folder: &mut Node) {
  if let Some(rule) = FOLDER_RULES.into_iter().find(|rule| rule.apply(folder)) {
    trace!(path = %folder.path(), rule = rule.name(), kind = %folder.kind, "classified folder");
  }
}

/// One for any library child plus one per executable child.
fn target_count(folder: &Node) -> usize {
  let libraries = usize::from(has_child(folder, |k| k == NodeKind::Library));
  let executables = folder
    .children
    .iter()
    .filter(|c| c.kind == NodeKind::Executable)
    .count();
  libraries + executables
}

fn has_main(folder: &Node) -> bool {
  folder
    .children
    .iter()
    .any(|c| !c.kind.is_directory() && c.name() == MAIN_FILE)
}

fn has_child(folder: &Node, pred: impl Fn(NodeKind) -> bool) -> bool {
  folder.children.iter().any(|c| pred(c.kind))
}

fn demote_children(folder: &mut Node, kind: NodeKind) {
  for child in folder.children.iter_mut().filter(|c| c.kind == kind) {
    child.kind = NodeKind::Folder;
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::node::build_tree;
  use crate::util::testutil::MemoryWalker;

  fn classified(files: &[&str]) -> Node {
    let walker = MemoryWalker::from_files("src", files);
    let mut tree = build_tree(&walker, "src");
    classify(&mut tree);
    tree
  }

  fn kind_of(tree: &Node, relative: &str) -> NodeKind {
    tree
      .find(relative)
      .unwrap_or_else(|| panic!("missing node {}", relative))
      .kind
  }

  fn kinds(tree: &Node) -> Vec<(String, NodeKind)> {
    tree.iter().map(|n| (n.path().to_string(), n.kind)).collect()
  }

  #[test]
  fn files_are_typed_by_extension() {
    let tree = classified(&["a.h", "b.c", "notes.txt", "Makefile"]);

    assert_eq!(kind_of(&tree, "a.h"), NodeKind::Header);
    assert_eq!(kind_of(&tree, "b.c"), NodeKind::Source);
    assert_eq!(kind_of(&tree, "notes.txt"), NodeKind::File);
    assert_eq!(kind_of(&tree, "Makefile"), NodeKind::File);
  }

  #[test]
  fn main_makes_executable() {
    let tree = classified(&["main.c", "util.c"]);

    assert_eq!(tree.kind, NodeKind::Executable);
    assert_eq!(kind_of(&tree, "util.c"), NodeKind::Source);
    assert_eq!(kind_of(&tree, "main.c"), NodeKind::Source);
  }

  #[test]
  fn two_executables_make_root() {
    let tree = classified(&["app/main.c", "tool/main.c"]);

    assert_eq!(tree.kind, NodeKind::Root);
    assert_eq!(kind_of(&tree, "app"), NodeKind::Executable);
    assert_eq!(kind_of(&tree, "tool"), NodeKind::Executable);
  }

  #[test]
  fn library_and_executable_make_root() {
    let tree = classified(&["app/main.c", "mul/mul.c", "mul/mul.h"]);

    assert_eq!(tree.kind, NodeKind::Root);
    assert_eq!(kind_of(&tree, "app"), NodeKind::Executable);
    assert_eq!(kind_of(&tree, "mul"), NodeKind::Library);
  }

  #[test]
  fn libraries_count_once_toward_root() {
    let tree = classified(&["a/a.c", "b/b.c"]);

    // Two libraries are one target: they merge into a single library.
    assert_eq!(tree.kind, NodeKind::Library);
    assert_eq!(kind_of(&tree, "a"), NodeKind::Folder);
    assert_eq!(kind_of(&tree, "b"), NodeKind::Folder);
  }

  #[test]
  fn single_executable_child_merges_upward() {
    let tree = classified(&["app/main.c", "app/util.c", "README"]);

    assert_eq!(tree.kind, NodeKind::Executable);
    assert_eq!(kind_of(&tree, "app"), NodeKind::Folder);
    assert_eq!(kind_of(&tree, "app/main.c"), NodeKind::Source);
    assert_eq!(kind_of(&tree, "app/util.c"), NodeKind::Source);
  }

  #[test]
  fn merge_leaves_grandchildren_alone() {
    let tree = classified(&["outer/app/main.c", "outer/app/lib/x.c", "outer/app/lib/x.h"]);

    assert_eq!(tree.kind, NodeKind::Executable);
    assert_eq!(kind_of(&tree, "outer"), NodeKind::Folder);
    assert_eq!(kind_of(&tree, "outer/app"), NodeKind::Folder);
    assert_eq!(kind_of(&tree, "outer/app/lib"), NodeKind::Library);
  }

  #[test]
  fn main_beats_nested_executable() {
    let tree = classified(&["main.c", "tool/main.c"]);

    // One executable child is not enough for root, so main.c wins and the
    // child keeps its own kind.
    assert_eq!(tree.kind, NodeKind::Executable);
    assert_eq!(kind_of(&tree, "tool"), NodeKind::Executable);
  }

  #[test]
  fn root_beats_main() {
    let tree = classified(&["main.c", "a/main.c", "b/main.c"]);

    assert_eq!(tree.kind, NodeKind::Root);
    assert_eq!(kind_of(&tree, "a"), NodeKind::Executable);
    assert_eq!(kind_of(&tree, "b"), NodeKind::Executable);
  }

  #[test]
  fn code_files_make_library() {
    let tree = classified(&["mul.c", "mul.h"]);
    assert_eq!(tree.kind, NodeKind::Library);
  }

  #[test]
  fn header_only_folder_is_library() {
    let tree = classified(&["include/api.h"]);

    assert_eq!(tree.kind, NodeKind::Library);
    assert_eq!(kind_of(&tree, "include"), NodeKind::Folder);
  }

  #[test]
  fn library_child_is_absorbed() {
    let tree = classified(&["mul/mul.c", "extra.h"]);

    assert_eq!(tree.kind, NodeKind::Library);
    assert_eq!(kind_of(&tree, "mul"), NodeKind::Folder);
  }

  #[test]
  fn folder_without_code_stays_folder() {
    let tree = classified(&["docs/readme.md", "docs/img/logo.png"]);

    assert_eq!(tree.kind, NodeKind::Folder);
    assert_eq!(kind_of(&tree, "docs"), NodeKind::Folder);
    assert_eq!(kind_of(&tree, "docs/img"), NodeKind::Folder);
  }

  #[test]
  fn main_directory_does_not_count_as_main_file() {
    let tree = classified(&["main.c/readme.md"]);
    assert_eq!(tree.kind, NodeKind::Folder);
    assert_eq!(kind_of(&tree, "main.c"), NodeKind::Folder);
  }

  #[test]
  fn main_is_matched_on_final_segment_only() {
    let tree = classified(&["not_main.c"]);
    assert_eq!(tree.kind, NodeKind::Library);
  }

  #[test]
  fn unreadable_root_is_typed_as_file() {
    let mut tree = build_tree(&MemoryWalker::default(), "src/main.c");
    classify(&mut tree);
    assert_eq!(tree.kind, NodeKind::Source);
  }

  #[test]
  fn classify_is_idempotent() {
    let layouts: [&[&str]; 4] = [
      &["app/src/main.c"],
      &["sum_mul/main.c", "mul/mul.c", "mul/mul.h", "unittests/mul.test.c"],
      &["a/main.c", "a/b/main.c", "c/lib/x.c", "docs/readme.md"],
      &["outer/app/main.c", "outer/app/lib/x.c"],
    ];

    for files in layouts {
      let mut tree = classified(files);
      let first = kinds(&tree);
      classify(&mut tree);
      assert_eq!(kinds(&tree), first, "layout {:?}", files);
    }
  }

  #[test]
  fn rules_are_ranked() {
    assert_eq!(
      FOLDER_RULES,
      [
        FolderRule::Root,
        FolderRule::ExecutableByMain,
        FolderRule::ExecutableByMerge,
        FolderRule::Library,
      ]
    );
  }
}
