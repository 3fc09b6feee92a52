//! `fileops link` – gather paths as soft links in one directory.

use anyhow::Result;
use fileops_core::config::FileOpsConfig;
use fileops_core::links::{self, LinkDir};
use std::path::{Path, PathBuf};

/// Link `paths` into `dir`, or into a new directory under the configured
/// link root that is kept after exit. Prints the link directory.
pub fn run_link(cfg: &FileOpsConfig, paths: &[PathBuf], dir: Option<&Path>) -> Result<()> {
    let link_dir = match dir {
        Some(d) => links::make_soft_links(paths, d)?,
        None => {
            let temp = LinkDir::temporary(&cfg.link_root(), &cfg.link_prefix)?;
            temp.link(paths)?;
            temp.persist()
        }
    };
    println!("Soft links created: {}", link_dir.display());
    Ok(())
}
