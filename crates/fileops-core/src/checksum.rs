//! SHA-256 digests for split manifests and the `checksum` command.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{IoResultExt, Result};

const BUF_SIZE: usize = 64 * 1024;

/// Compute SHA-256 of a file as lowercase hex, streaming in fixed-size reads.
pub fn sha256_path(path: &Path) -> Result<String> {
    let mut f = File::open(path).at_path(path)?;
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; BUF_SIZE];
    loop {
        let n = f.read(&mut buf).at_path(path)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Compute SHA-256 of an in-memory buffer as lowercase hex.
pub fn sha256_bytes(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}
