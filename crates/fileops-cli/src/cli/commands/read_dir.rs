//! `fileops read-dir` – chunked read of every file under a directory.

use anyhow::{Context, Result};
use fileops_core::reader::{self, FileData, ReadOptions};
use serde_json::json;
use std::path::Path;

pub fn run_read_dir(dir: &Path, opts: &ReadOptions, as_json: bool) -> Result<()> {
    let files = reader::get_all_file_data(dir, opts)?;
    if as_json {
        println!("{}", render_json(&files)?);
    } else if files.is_empty() {
        println!("No files read from {}.", dir.display());
    } else {
        println!("{:<8} {:<8} {}", "SIZE", "CHUNKS", "PATH");
        for f in &files {
            println!("{:<8} {:<8} {}", f.size, f.chunk_count(), f.path.display());
        }
        println!("{} files", files.len());
    }
    Ok(())
}

/// JSON array of `{path, size, chunks}` objects.
fn render_json(files: &[FileData]) -> Result<String> {
    let rows: Vec<_> = files
        .iter()
        .map(|f| {
            json!({
                "path": f.path.display().to_string(),
                "size": f.size,
                "chunks": f.chunk_count(),
            })
        })
        .collect();
    serde_json::to_string_pretty(&rows).context("serialize file listing")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn render_json_lists_each_file() {
        let files = vec![FileData {
            path: PathBuf::from("/docs/a.txt"),
            size: 1200,
            chunks: vec![vec![0; 500], vec![0; 500], vec![0; 200]],
        }];
        let out = render_json(&files).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["path"], "/docs/a.txt");
        assert_eq!(parsed[0]["size"], 1200);
        assert_eq!(parsed[0]["chunks"], 3);
    }

    #[test]
    fn render_json_empty() {
        assert_eq!(render_json(&[]).unwrap(), "[]");
    }
}
