//! min-build-lib: convention-based build target inference.
//!
//! Walks a source tree and works out, from file names and directory nesting
//! alone, which directories are libraries, which are executables, and where
//! their artifacts go:
//! - `node`: the tree model and its construction from a [`walk::DirectoryWalker`]
//! - `classify`: the bottom-up folder rules
//! - `outputs`: collapse depth and artifact paths
//! - `report`: the timestamp dump
//! - `eval`: the whole pipeline in one call

pub mod classify;
pub mod config;
pub mod consts;
pub mod eval;
pub mod node;
pub mod outputs;
pub mod path;
pub mod report;
pub mod summary;
mod util;
pub mod walk;

pub use eval::{eval_folder, eval_path};
pub use node::{Node, NodeKind};
