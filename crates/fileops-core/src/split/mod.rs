//! Split a file into fixed-size chunk files.
//!
//! Chunks are named `<file_name>.chunkNNNN` (zero-based) inside the output
//! directory; the last chunk holds the remainder. A JSON manifest written next
//! to the chunks records their order and the source digest so
//! [`join_chunks`] can reassemble and verify them.

mod manifest;

pub use manifest::{join_chunks, manifest_path, SplitManifest};

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::chunking::plan_chunks;
use crate::error::{FileOpsError, IoResultExt, Result};
use crate::storage::ChunkWriterBuilder;

const COPY_BUF_SIZE: usize = 64 * 1024;

/// Outcome of [`split_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSummary {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    pub chunk_size: u64,
    pub total_bytes: u64,
    /// SHA-256 of the source, lowercase hex.
    pub sha256: String,
    /// Chunk files in order.
    pub chunks: Vec<PathBuf>,
    pub manifest: PathBuf,
}

/// Name of chunk `index` for a source called `file_name`.
pub fn chunk_file_name(file_name: &str, index: usize) -> String {
    format!("{file_name}.chunk{index:04}")
}

/// Split `file_path` into chunk files of `chunk_size` bytes under `output_dir`.
///
/// `output_dir` is created if missing. An empty source produces no chunk
/// files but still gets a manifest.
pub fn split_file(file_path: &Path, output_dir: &Path, chunk_size: u64) -> Result<SplitSummary> {
    if chunk_size == 0 {
        return Err(FileOpsError::InvalidChunkSize(0));
    }
    let meta = fs::metadata(file_path).at_path(file_path)?;
    if !meta.is_file() {
        return Err(FileOpsError::NotAFile(file_path.to_path_buf()));
    }
    let file_name = file_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            FileOpsError::InvalidArgument(format!("path has no file name: {}", file_path.display()))
        })?;

    fs::create_dir_all(output_dir).at_path(output_dir)?;
    let mut source = File::open(file_path).at_path(file_path)?;
    let plan = plan_chunks(meta.len(), chunk_size);
    let mut hasher = Sha256::new();
    let mut chunks = Vec::with_capacity(plan.len());

    for (index, range) in plan.iter().enumerate() {
        let chunk_path = output_dir.join(chunk_file_name(&file_name, index));
        write_chunk(&mut source, file_path, &chunk_path, range.len(), &mut hasher)?;
        tracing::debug!(chunk = %chunk_path.display(), start = range.start, end = range.end, "wrote chunk");
        chunks.push(chunk_path);
    }

    let sha256 = hex::encode(hasher.finalize());
    let manifest = SplitManifest {
        source_name: file_name.clone(),
        chunk_size,
        total_bytes: meta.len(),
        sha256: sha256.clone(),
        chunks: (0..chunks.len()).map(|i| chunk_file_name(&file_name, i)).collect(),
    };
    let manifest_file = manifest_path(output_dir, &file_name);
    manifest.save(&manifest_file)?;

    tracing::info!(
        source = %file_path.display(),
        chunks = chunks.len(),
        bytes = meta.len(),
        "split file"
    );

    Ok(SplitSummary {
        source: file_path.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
        chunk_size,
        total_bytes: meta.len(),
        sha256,
        chunks,
        manifest: manifest_file,
    })
}

/// Write the next `len` bytes of `source` to `chunk_path` via its temp file.
/// On error nothing is left under either name.
fn write_chunk<R: Read>(
    source: &mut R,
    src_path: &Path,
    chunk_path: &Path,
    len: u64,
    hasher: &mut Sha256,
) -> Result<()> {
    let mut builder = ChunkWriterBuilder::create(chunk_path)?;
    builder.preallocate(len)?;
    let mut writer = builder.build();
    copy_hashed(source, src_path, &mut writer, chunk_path, len, hasher)?;
    writer.finish()?;
    Ok(())
}

/// Copy exactly `len` bytes from `reader` to `writer`, feeding `hasher`.
/// A reader that ends early is reported as an I/O error on `src_path`.
pub(crate) fn copy_hashed<R: Read, W: Write>(
    reader: &mut R,
    src_path: &Path,
    writer: &mut W,
    dst_path: &Path,
    len: u64,
    hasher: &mut Sha256,
) -> Result<()> {
    let mut buf = vec![0u8; COPY_BUF_SIZE.min(len as usize)];
    let mut remaining = len;
    while remaining > 0 {
        let want = buf.len().min(remaining as usize);
        let n = reader.read(&mut buf[..want]).at_path(src_path)?;
        if n == 0 {
            return Err(FileOpsError::Io {
                path: src_path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    format!("{remaining} bytes short"),
                ),
            });
        }
        hasher.update(&buf[..n]);
        writer.write_all(&buf[..n]).at_path(dst_path)?;
        remaining -= n as u64;
    }
    Ok(())
}
