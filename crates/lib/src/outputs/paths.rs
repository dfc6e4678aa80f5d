//! Artifact path derivation.
//!
//! Each function is a pure function of a node path and the collapse depth.
//! Segments before `depth` are elided and hidden (dot-prefixed) segments are
//! skipped.

use crate::consts::{BIN_DIR, DEFAULT_OUTPUT_NAME, LIB_EXT, LIB_PREFIX, OBJ_DIR, OBJ_EXT, OBJ_SEPARATOR};
use crate::path::{is_hidden, trailing_segments};

fn kept_segments(path: &str, depth: usize) -> Vec<&str> {
  trailing_segments(path, depth).filter(|part| !is_hidden(part)).collect()
}

/// `obj/<seg>__<seg>.o`.
pub fn object_path(path: &str, depth: usize) -> String {
  format!("{}{}{}", OBJ_DIR, kept_segments(path, depth).join(OBJ_SEPARATOR), OBJ_EXT)
}

/// `bin/<seg>/lib<last>.a`, or `bin/libout.a` for a library at the collapse root.
pub fn archive_path(path: &str, depth: usize) -> String {
  let mut out = String::from(BIN_DIR);
  let parts = kept_segments(path, depth);

  match parts.split_last() {
    Some((last, dirs)) => {
      for dir in dirs {
        out.push('/');
        out.push_str(dir);
      }
      out.push('/');
      out.push_str(LIB_PREFIX);
      out.push_str(last);
    }
    None => {
      out.push('/');
      out.push_str(LIB_PREFIX);
      out.push_str(DEFAULT_OUTPUT_NAME);
    }
  }

  out.push_str(LIB_EXT);
  out
}

/// `bin/<seg>/<seg>`, or `bin/out` for an executable at the collapse root.
pub fn binary_path(path: &str, depth: usize) -> String {
  let parts = kept_segments(path, depth);
  if parts.is_empty() {
    format!("{}/{}", BIN_DIR, DEFAULT_OUTPUT_NAME)
  } else {
    format!("{}/{}", BIN_DIR, parts.join("/"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn object_joins_segments_after_depth() {
    assert_eq!(object_path("./source/mul/mul.c", 2), "obj/mul__mul.c.o");
    assert_eq!(object_path("./source/sum_mul/main.c", 2), "obj/sum_mul__main.c.o");
    assert_eq!(object_path("./source/a/b/c.c", 3), "obj/b__c.c.o");
  }

  #[test]
  fn object_with_nothing_left_is_bare_extension() {
    assert_eq!(object_path("./source/main.c", 3), "obj/.o");
  }

  #[test]
  fn object_skips_hidden_segments() {
    assert_eq!(object_path("./source/.gen/x.c", 2), "obj/x.c.o");
  }

  #[test]
  fn archive_prefixes_last_segment() {
    assert_eq!(archive_path("./source/mul", 2), "bin/libmul.a");
    assert_eq!(archive_path("./source/libs/math", 2), "bin/libs/libmath.a");
  }

  #[test]
  fn archive_at_root_is_libout() {
    assert_eq!(archive_path("./source", 2), "bin/libout.a");
    assert_eq!(archive_path("./source/mul", 5), "bin/libout.a");
  }

  #[test]
  fn binary_mirrors_segments() {
    assert_eq!(binary_path("./source/sum_mul", 2), "bin/sum_mul");
    assert_eq!(binary_path("./source/tools/fmt", 2), "bin/tools/fmt");
  }

  #[test]
  fn binary_at_root_is_out() {
    assert_eq!(binary_path("./source", 2), "bin/out");
    assert_eq!(binary_path("./source/app/src", 5), "bin/out");
  }

  #[test]
  fn absolute_roots_work() {
    assert_eq!(binary_path("/home/me/source/app", 4), "bin/app");
    assert_eq!(object_path("/home/me/source/app/x.c", 4), "obj/app__x.c.o");
  }

  #[test]
  fn paths_are_stable() {
    let path = "./source/tools/fmt";
    assert_eq!(binary_path(path, 2), binary_path(path, 2));
    assert_eq!(archive_path(path, 2), archive_path(path, 2));
    assert_eq!(object_path(path, 2), object_path(path, 2));
  }
}
