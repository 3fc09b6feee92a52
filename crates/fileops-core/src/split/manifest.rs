//! Split manifest persistence and reassembly.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::copy_hashed;
use crate::error::{FileOpsError, IoResultExt, Result};
use crate::storage::ChunkWriterBuilder;

/// On-disk record of a split: chunk names are relative to the manifest's directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitManifest {
    pub source_name: String,
    pub chunk_size: u64,
    pub total_bytes: u64,
    pub sha256: String,
    pub chunks: Vec<String>,
}

/// Manifest location for a source called `file_name` split into `output_dir`.
pub fn manifest_path(output_dir: &Path, file_name: &str) -> PathBuf {
    output_dir.join(format!("{file_name}.manifest.json"))
}

impl SplitManifest {
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|source| FileOpsError::Manifest {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).at_path(path)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).at_path(path)?;
        serde_json::from_slice(&bytes).map_err(|source| FileOpsError::Manifest {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Reassemble the chunks listed in `manifest_file` into `destination`.
///
/// Chunks are resolved relative to the manifest's directory. The output is
/// written through a `.part` temp file and only renamed into place when the
/// byte count and SHA-256 both match the manifest. Returns bytes written.
pub fn join_chunks(manifest_file: &Path, destination: &Path) -> Result<u64> {
    let manifest = SplitManifest::load(manifest_file)?;
    let dir = manifest_file.parent().unwrap_or_else(|| Path::new("."));

    let mut builder = ChunkWriterBuilder::create(destination)?;
    builder.preallocate(manifest.total_bytes)?;
    let mut writer = builder.build();
    let mut hasher = Sha256::new();

    for name in &manifest.chunks {
        let chunk_path = dir.join(name);
        let len = fs::metadata(&chunk_path).at_path(&chunk_path)?.len();
        let mut chunk = File::open(&chunk_path).at_path(&chunk_path)?;
        copy_hashed(&mut chunk, &chunk_path, &mut writer, destination, len, &mut hasher)?;
    }

    let actual = hex::encode(hasher.finalize());
    if writer.written() != manifest.total_bytes || actual != manifest.sha256 {
        return Err(FileOpsError::ChecksumMismatch {
            path: destination.to_path_buf(),
            expected: manifest.sha256,
            actual,
        });
    }

    let written = writer.finish()?;
    tracing::info!(
        manifest = %manifest_file.display(),
        destination = %destination.display(),
        bytes = written,
        "joined chunks"
    );
    Ok(written)
}
