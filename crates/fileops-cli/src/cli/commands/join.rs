//! `fileops join` – reassemble a split file.

use anyhow::Result;
use fileops_core::split;
use std::path::Path;

pub fn run_join(manifest: &Path, destination: &Path) -> Result<()> {
    let written = split::join_chunks(manifest, destination)?;
    println!("{} bytes written to {}", written, destination.display());
    Ok(())
}
