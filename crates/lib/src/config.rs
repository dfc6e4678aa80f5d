//! Scan root resolution.

use crate::consts::{DEFAULT_SOURCE_DIR, SOURCE_DIR_ENV};

/// The directory to scan.
///
/// Precedence: the explicit argument, then `MIN_BUILD_SOURCE`, then
/// `./source`. Empty values are ignored.
pub fn source_dir(arg: Option<&str>) -> String {
  if let Some(arg) = arg.filter(|a| !a.is_empty()) {
    return arg.to_string();
  }
  std::env::var(SOURCE_DIR_ENV)
    .ok()
    .filter(|v| !v.is_empty())
    .unwrap_or_else(|| DEFAULT_SOURCE_DIR.to_string())
}
