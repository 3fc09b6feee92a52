//! Chunked file reads for ingestion.
//!
//! A file is returned as consecutive byte buffers of at most `chunk_size`
//! bytes, ready to be embedded chunk by chunk. Whole directories are read
//! with the same chunking via [`get_all_file_data`].

mod walk;

pub use walk::{get_all_file_data, ReadOptions};

use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{FileOpsError, IoResultExt, Result};

/// One file's contents split into byte buffers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileData {
    /// Path the data was read from.
    pub path: PathBuf,
    /// Total bytes read.
    pub size: u64,
    /// Consecutive buffers; all but the last are exactly `chunk_size` long.
    pub chunks: Vec<Vec<u8>>,
}

impl FileData {
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Chunks decoded as UTF-8, replacing invalid sequences.
    ///
    /// A multi-byte character straddling a chunk boundary decodes as
    /// replacement characters on both sides.
    pub fn text_chunks(&self) -> Vec<Cow<'_, str>> {
        self.chunks.iter().map(|c| String::from_utf8_lossy(c)).collect()
    }

    /// Concatenation of all chunks.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.chunks.concat()
    }
}

/// Read `path` as a sequence of buffers of at most `chunk_size` bytes.
///
/// An empty file yields no chunks. Fails with `InvalidChunkSize` for a zero
/// chunk size and `NotAFile` when `path` is a directory.
pub fn get_file_data(path: &Path, chunk_size: usize) -> Result<FileData> {
    if chunk_size == 0 {
        return Err(FileOpsError::InvalidChunkSize(0));
    }
    let meta = std::fs::metadata(path).at_path(path)?;
    if !meta.is_file() {
        return Err(FileOpsError::NotAFile(path.to_path_buf()));
    }

    let mut file = File::open(path).at_path(path)?;
    let mut chunks = Vec::with_capacity((meta.len() as usize).div_ceil(chunk_size));
    let mut size = 0u64;
    loop {
        let mut buf = Vec::with_capacity(chunk_size);
        let n = file
            .by_ref()
            .take(chunk_size as u64)
            .read_to_end(&mut buf)
            .at_path(path)?;
        if n == 0 {
            break;
        }
        size += n as u64;
        chunks.push(buf);
    }

    tracing::debug!(path = %path.display(), size, chunks = chunks.len(), "read file");
    Ok(FileData {
        path: path.to_path_buf(),
        size,
        chunks,
    })
}
