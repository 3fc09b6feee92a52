//! Sequential writer for chunk temp files.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{IoResultExt, Result};

/// Writer for one chunk temp file. Bytes go to `<final>.part` until
/// [`ChunkWriter::finish`] renames it into place. Dropping a writer that was
/// never finished removes its temp file.
pub struct ChunkWriter {
    file: Option<File>,
    temp_path: PathBuf,
    final_path: PathBuf,
    written: u64,
    finished: bool,
}

impl ChunkWriter {
    pub(crate) fn new(file: File, temp_path: PathBuf, final_path: PathBuf) -> Self {
        Self {
            file: Some(file),
            temp_path,
            final_path,
            written: 0,
            finished: false,
        }
    }

    /// Path to the current temp file.
    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    /// Bytes written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub(crate) fn file_mut(&mut self) -> io::Result<&mut File> {
        self.file.as_mut().ok_or_else(closed)
    }

    /// Trim any unused preallocation, sync to disk and atomically rename the
    /// temp file to its final name. Returns the number of bytes written.
    pub fn finish(mut self) -> Result<u64> {
        let Some(file) = self.file.as_mut() else {
            return Err(closed()).at_path(&self.temp_path);
        };
        file.set_len(self.written).at_path(&self.temp_path)?;
        file.sync_all().at_path(&self.temp_path)?;
        // Close before rename; Windows refuses to rename an open file.
        self.file = None;

        std::fs::rename(&self.temp_path, &self.final_path).at_path(&self.final_path)?;
        self.finished = true;
        Ok(self.written)
    }
}

fn closed() -> io::Error {
    io::Error::other("chunk writer already closed")
}

impl Write for ChunkWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.file_mut()?.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file_mut()?.flush()
    }
}

impl Drop for ChunkWriter {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        self.file = None;
        match std::fs::remove_file(&self.temp_path) {
            Ok(()) => tracing::debug!(path = %self.temp_path.display(), "removed unfinished chunk"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.temp_path.display(), error = %e, "could not remove unfinished chunk")
            }
        }
    }
}
