//! `fileops read` – chunked read of one file.

use anyhow::Result;
use fileops_core::reader;
use std::path::Path;

pub fn run_read(path: &Path, chunk_size: usize) -> Result<()> {
    let data = reader::get_file_data(path, chunk_size)?;
    println!(
        "{}\t{} bytes\t{} chunks of <= {} bytes",
        data.path.display(),
        data.size,
        data.chunk_count(),
        chunk_size
    );
    Ok(())
}
