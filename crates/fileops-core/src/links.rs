//! Soft-link result sets.
//!
//! A search over the indexed tree yields a list of matching paths; those are
//! gathered as symbolic links into one directory so a user (or a shell) can
//! browse the result set in place without copying any file.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::{FileOpsError, IoResultExt, Result};

/// Directory that holds soft links. A temporary one is removed on drop
/// unless [`LinkDir::persist`] is called.
#[derive(Debug)]
pub struct LinkDir {
    path: PathBuf,
    temp: Option<TempDir>,
}

impl LinkDir {
    /// Use `path` as the link directory, creating it if needed.
    pub fn at(path: &Path) -> Result<Self> {
        fs::create_dir_all(path).at_path(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            temp: None,
        })
    }

    /// Create a fresh temporary link directory under `root` named `<prefix>XXXXXX`.
    pub fn temporary(root: &Path, prefix: &str) -> Result<Self> {
        fs::create_dir_all(root).at_path(root)?;
        let temp = tempfile::Builder::new()
            .prefix(prefix)
            .tempdir_in(root)
            .at_path(root)?;
        Ok(Self {
            path: temp.path().to_path_buf(),
            temp: Some(temp),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Link every entry of `paths` into this directory; returns the created link paths.
    pub fn link<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<PathBuf>> {
        create_soft_links(paths, &self.path)
    }

    /// Keep the directory on disk after this value is dropped.
    pub fn persist(mut self) -> PathBuf {
        match self.temp.take() {
            Some(t) => t.keep(),
            None => self.path,
        }
    }
}

/// Create a soft link in `link_dir` for each of `paths` and return `link_dir`.
///
/// Links are named after the target's file name; a taken name gets a
/// `_1`, `_2`, ... suffix before the extension. Targets must exist and are
/// linked by absolute path.
pub fn make_soft_links<P: AsRef<Path>>(paths: &[P], link_dir: &Path) -> Result<PathBuf> {
    create_soft_links(paths, link_dir)?;
    Ok(link_dir.to_path_buf())
}

/// Like [`make_soft_links`] but returns each created link.
///
/// Every target is resolved before the first link is made, so a missing
/// target leaves `link_dir` untouched.
pub fn create_soft_links<P: AsRef<Path>>(paths: &[P], link_dir: &Path) -> Result<Vec<PathBuf>> {
    let targets = paths
        .iter()
        .map(|p| resolve_target(p.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    fs::create_dir_all(link_dir).at_path(link_dir)?;

    let mut links = Vec::with_capacity(targets.len());
    for (target, name) in targets {
        let link = unique_link_path(link_dir, &name);
        create_symlink(&target, &link).at_path(&link)?;
        tracing::debug!(target = %target.display(), link = %link.display(), "created soft link");
        links.push(link);
    }

    tracing::info!(dir = %link_dir.display(), links = links.len(), "soft links created");
    Ok(links)
}

/// Canonical target of `p` and the name its link gets.
fn resolve_target(p: &Path) -> Result<(PathBuf, OsString)> {
    let target = fs::canonicalize(p).at_path(p)?;
    let name = p
        .file_name()
        .or_else(|| target.file_name())
        .map(OsStr::to_os_string)
        .ok_or_else(|| {
            FileOpsError::InvalidArgument(format!("cannot name a link for {}", p.display()))
        })?;
    Ok((target, name))
}

/// First free path in `dir` for `name`: `name`, then `stem_1.ext`, `stem_2.ext`, ...
fn unique_link_path(dir: &Path, name: &OsStr) -> PathBuf {
    let candidate = dir.join(name);
    if !occupied(&candidate) {
        return candidate;
    }

    let as_path = Path::new(name);
    let stem = as_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = as_path.extension().map(|e| e.to_string_lossy().into_owned());

    let mut n = 1u32;
    loop {
        let file_name = match &ext {
            Some(ext) => format!("{stem}_{n}.{ext}"),
            None => format!("{stem}_{n}"),
        };
        let candidate = dir.join(file_name);
        if !occupied(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// True if anything (including a dangling link) exists at `path`.
fn occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    if target.is_dir() {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    }
}
