//! Error taxonomy for file operations.
//!
//! Each variant maps to a stable integer status code so callers that only
//! understand exit codes (shell scripts, FFI shims) can still tell failures apart.

use std::io;
use std::path::{Path, PathBuf};

/// Error returned by the core file operations.
#[derive(Debug, thiserror::Error)]
pub enum FileOpsError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no such file or directory: {}", .0.display())]
    NotFound(PathBuf),

    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("invalid chunk size {0}: must be greater than zero")]
    InvalidChunkSize(u64),

    #[error("checksum mismatch for {}: expected {expected}, got {actual}", .path.display())]
    ChecksumMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("invalid manifest {}: {source}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for file operations.
pub type Result<T> = std::result::Result<T, FileOpsError>;

impl FileOpsError {
    /// Classify an I/O error against the path it occurred on.
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FileOpsError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => FileOpsError::PermissionDenied(path.to_path_buf()),
            _ => FileOpsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Integer status code for this error. Success is 0 and is never returned here.
    pub fn status_code(&self) -> i32 {
        match self {
            FileOpsError::Io { .. } => 1,
            FileOpsError::InvalidArgument(_) => 2,
            FileOpsError::NotFound(_) => 3,
            FileOpsError::PermissionDenied(_) => 4,
            FileOpsError::NotAFile(_) => 5,
            FileOpsError::NotADirectory(_) => 6,
            FileOpsError::InvalidChunkSize(_) => 7,
            FileOpsError::ChecksumMismatch { .. } => 8,
            FileOpsError::Manifest { .. } => 9,
        }
    }
}

/// Extension for attaching a path to `io::Result` values.
pub(crate) trait IoResultExt<T> {
    fn at_path(self, path: &Path) -> Result<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn at_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| FileOpsError::from_io(e, path))
    }
}
