//! Fixed names and layout constants shared across the engine.

/// Scan root used when no path is given on the command line or in the environment.
pub const DEFAULT_SOURCE_DIR: &str = "./source";

/// Environment variable that overrides [`DEFAULT_SOURCE_DIR`].
pub const SOURCE_DIR_ENV: &str = "MIN_BUILD_SOURCE";

pub const PATH_DELIM: char = '/';

/// Output root for object files.
pub const OBJ_DIR: &str = "obj/";
/// Output root for archives and executables.
pub const BIN_DIR: &str = "bin";

pub const OBJ_SEPARATOR: &str = "__";
pub const OBJ_EXT: &str = ".o";
pub const LIB_PREFIX: &str = "lib";
pub const LIB_EXT: &str = ".a";
/// Artifact name used when a target has no segments left after collapsing.
pub const DEFAULT_OUTPUT_NAME: &str = "out";

pub const HEADER_EXT: &str = ".h";
pub const SOURCE_EXT: &str = ".c";
pub const MAIN_FILE: &str = "main.c";

/// Width the name and path columns of the dump are padded to.
pub const DUMP_COLUMN_WIDTH: usize = 40;
/// Timestamps in the dump are shown modulo this value to keep columns narrow.
pub const DUMP_TIME_MODULUS: u64 = 10_000_000;
