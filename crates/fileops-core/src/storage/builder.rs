//! Builder for creating and preallocating chunk temp files.

use std::fs::File;
use std::path::Path;

use super::temp_path;
use super::writer::ChunkWriter;
use crate::error::{IoResultExt, Result};
#[cfg(unix)]
use std::os::unix::io::AsRawFd;

/// Builder for a new chunk file. Call `preallocate` then `build` to get
/// a [`ChunkWriter`]. The temp file is removed if the builder is dropped
/// without building.
pub struct ChunkWriterBuilder {
    writer: ChunkWriter,
}

impl ChunkWriterBuilder {
    /// Create the temp file for `final_path` (e.g. `a.bin.chunk0000.part`).
    /// Overwrites a leftover temp file from an earlier run.
    pub fn create(final_path: &Path) -> Result<Self> {
        let temp_path = temp_path(final_path);
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .at_path(&temp_path)?;
        Ok(ChunkWriterBuilder {
            writer: ChunkWriter::new(file, temp_path, final_path.to_path_buf()),
        })
    }

    /// Preallocate `size` bytes. On Unix tries `posix_fallocate` for real block
    /// allocation; falls back to `set_len` on failure or non-Unix.
    pub fn preallocate(&mut self, size: u64) -> Result<()> {
        if size == 0 {
            return Ok(());
        }
        let temp_path = self.writer.temp_path().to_path_buf();
        let file = self.writer.file_mut().at_path(&temp_path)?;
        #[cfg(unix)]
        {
            let fd = file.as_raw_fd();
            let r = unsafe { libc::posix_fallocate(fd, 0, size as libc::off_t) };
            if r == 0 {
                return Ok(());
            }
            tracing::debug!(errno = r, "posix_fallocate failed, falling back to set_len");
        }
        file.set_len(size).at_path(&temp_path)?;
        Ok(())
    }

    /// Finish building and return a sequential writer.
    pub fn build(self) -> ChunkWriter {
        self.writer
    }
}
