//! CLI for the fileops ingestion helpers.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fileops_core::config;
use std::path::PathBuf;

use commands::{
    run_checksum, run_is_media, run_join, run_link, run_read, run_read_dir, run_split,
};

/// Top-level CLI for fileops.
#[derive(Debug, Parser)]
#[command(name = "fileops")]
#[command(about = "fileops: filesystem helpers for RAG ingestion", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Report whether each file name has a media extension (.jpg, .png, .mp4, .avi, .mp3).
    IsMedia {
        /// File names or paths to classify.
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Create soft links for the given paths in one directory.
    Link {
        /// Files or directories to link.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Link directory (created if missing). Defaults to a new directory under the configured link root.
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Read one file as fixed-size chunks and report its layout.
    Read {
        /// File to read.
        path: PathBuf,
        /// Chunk size in bytes (default from config).
        #[arg(long, value_name = "BYTES")]
        chunk_size: Option<usize>,
    },

    /// Read every file under a directory as fixed-size chunks.
    ReadDir {
        /// Directory to read.
        dir: PathBuf,
        /// Chunk size in bytes (default from config).
        #[arg(long, value_name = "BYTES")]
        chunk_size: Option<usize>,
        /// Only read files directly inside DIR.
        #[arg(long)]
        no_recursive: bool,
        /// Also read dot-files and dot-directories.
        #[arg(long)]
        include_hidden: bool,
        /// Print a JSON array instead of one line per file.
        #[arg(long)]
        json: bool,
    },

    /// Split a file into chunk files plus a manifest.
    Split {
        /// File to split.
        path: PathBuf,
        /// Output directory (created if missing).
        output_dir: PathBuf,
        /// Chunk size in bytes (default from config).
        #[arg(long, value_name = "BYTES")]
        chunk_size: Option<u64>,
    },

    /// Reassemble a split file from its manifest and verify its SHA-256.
    Join {
        /// Manifest written by `split`.
        manifest: PathBuf,
        /// Destination file.
        destination: PathBuf,
    },

    /// Compute SHA-256 of a file.
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::IsMedia { names } => run_is_media(&names)?,
            CliCommand::Link { paths, dir } => run_link(&cfg, &paths, dir.as_deref())?,
            CliCommand::Read { path, chunk_size } => {
                run_read(&path, chunk_size.unwrap_or(cfg.chunk_size))?
            }
            CliCommand::ReadDir {
                dir,
                chunk_size,
                no_recursive,
                include_hidden,
                json,
            } => {
                let mut opts = cfg.read_options();
                if let Some(size) = chunk_size {
                    opts.chunk_size = size;
                }
                opts.recursive &= !no_recursive;
                opts.skip_hidden &= !include_hidden;
                run_read_dir(&dir, &opts, json)?;
            }
            CliCommand::Split {
                path,
                output_dir,
                chunk_size,
            } => run_split(&path, &output_dir, chunk_size.unwrap_or(cfg.chunk_size as u64))?,
            CliCommand::Join {
                manifest,
                destination,
            } => run_join(&manifest, &destination)?,
            CliCommand::Checksum { path } => run_checksum(&path)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
