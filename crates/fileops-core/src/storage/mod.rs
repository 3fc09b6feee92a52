//! Chunk file lifecycle.
//!
//! Each output chunk is written to `<name>.part`, preallocated (fallocate on
//! Unix when available, else set_len), synced and atomically renamed to its
//! final name. A reader never sees a truncated file under a final name.

mod builder;
mod writer;

pub use builder::ChunkWriterBuilder;
pub use writer::ChunkWriter;

use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `a.bin.chunk0000` → `a.bin.chunk0000.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}
