//! Slash-delimited path segment helpers.
//!
//! Node paths are kept as the plain strings they were built from (scan root
//! joined with entry names by `/`), so segment arithmetic works on the text
//! rather than on `std::path::Path` components. An empty segment acts as the
//! end-of-path sentinel for every loop that walks segments by index.

use crate::consts::PATH_DELIM;

/// Number of `/`-delimited segments in `path`, one more than the number of delimiters.
pub fn segment_count(path: &str) -> usize {
  path.matches(PATH_DELIM).count() + 1
}

/// The segment at `index`.
///
/// A negative index counts from the end (`-1` is the last segment). An index
/// at or beyond the segment count yields the empty string.
pub fn segment(path: &str, index: isize) -> &str {
  let index = if index < 0 {
    let from_end = segment_count(path) as isize + index;
    if from_end < 0 {
      return "";
    }
    from_end as usize
  } else {
    index as usize
  };

  path.split(PATH_DELIM).nth(index).unwrap_or("")
}

/// The final segment of `path`, used as a node's display name.
pub fn file_name(path: &str) -> &str {
  segment(path, -1)
}

/// Segments from index `from` onward, ending at the first empty segment.
pub fn trailing_segments(path: &str, from: usize) -> impl Iterator<Item = &str> {
  path
    .split(PATH_DELIM)
    .skip(from)
    .take_while(|part| !part.is_empty())
}

/// Whether a segment names a hidden entry.
pub fn is_hidden(segment: &str) -> bool {
  segment.starts_with('.')
}
