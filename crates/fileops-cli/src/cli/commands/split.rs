//! `fileops split` – write a file as chunk files plus a manifest.

use anyhow::Result;
use fileops_core::split;
use std::path::Path;

pub fn run_split(path: &Path, output_dir: &Path, chunk_size: u64) -> Result<()> {
    let summary = split::split_file(path, output_dir, chunk_size)?;
    for chunk in &summary.chunks {
        println!("{}", chunk.display());
    }
    println!(
        "{} bytes in {} chunks, sha256 {}",
        summary.total_bytes,
        summary.chunks.len(),
        summary.sha256
    );
    println!("manifest: {}", summary.manifest.display());
    Ok(())
}
