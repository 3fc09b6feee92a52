//! Whole-directory chunked reads.

use std::path::Path;

use walkdir::WalkDir;

use super::{get_file_data, FileData};
use crate::chunking::DEFAULT_CHUNK_SIZE;
use crate::error::{FileOpsError, IoResultExt, Result};
use crate::filter::{self, DEFAULT_IGNORED_PATTERNS};

/// Options for [`get_all_file_data`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOptions {
    /// Buffer length for each file's chunks.
    pub chunk_size: usize,
    /// Descend into subdirectories.
    pub recursive: bool,
    /// Skip (and do not descend into) entries whose name starts with `.`.
    pub skip_hidden: bool,
    /// Skip files whose path below the root contains any of these substrings.
    pub ignored_patterns: Vec<String>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            recursive: true,
            skip_hidden: true,
            ignored_patterns: DEFAULT_IGNORED_PATTERNS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Read every regular file under `dir` as chunked [`FileData`].
///
/// Entries are visited depth-first in file-name order; symlinks are not
/// followed. A file that cannot be read is logged and skipped so one bad file
/// does not abort the whole ingest. The number of files read is the length of
/// the returned vec.
pub fn get_all_file_data(dir: &Path, opts: &ReadOptions) -> Result<Vec<FileData>> {
    if opts.chunk_size == 0 {
        return Err(FileOpsError::InvalidChunkSize(0));
    }
    let meta = std::fs::metadata(dir).at_path(dir)?;
    if !meta.is_dir() {
        return Err(FileOpsError::NotADirectory(dir.to_path_buf()));
    }

    let max_depth = if opts.recursive { usize::MAX } else { 1 };
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !(opts.skip_hidden && filter::is_hidden(e.path())));

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!("skipping unreadable entry under {}: {}", dir.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry.path().strip_prefix(dir).unwrap_or(entry.path());
        if filter::is_ignored(rel, &opts.ignored_patterns) {
            tracing::debug!(path = %entry.path().display(), "ignored by pattern");
            continue;
        }
        match get_file_data(entry.path(), opts.chunk_size) {
            Ok(data) => files.push(data),
            Err(e) => tracing::warn!("skipping {}: {}", entry.path().display(), e),
        }
    }

    tracing::info!(dir = %dir.display(), files = files.len(), "read directory");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn names(files: &[FileData], root: &Path) -> Vec<PathBuf> {
        files
            .iter()
            .map(|f| f.path.strip_prefix(root).unwrap().to_path_buf())
            .collect()
    }

    fn populate(root: &Path) {
        fs::write(root.join("b.txt"), b"bravo").unwrap();
        fs::write(root.join("a.txt"), b"alpha").unwrap();
        fs::write(root.join(".hidden"), b"secret").unwrap();
        fs::write(root.join("index.db"), b"sqlite").unwrap();
        fs::write(root.join("index.db-journal"), b"journal").unwrap();
        fs::create_dir(root.join("sub")).unwrap();
        fs::write(root.join("sub").join("c.txt"), b"charlie").unwrap();
        fs::create_dir(root.join(".git")).unwrap();
        fs::write(root.join(".git").join("HEAD"), b"ref").unwrap();
    }

    #[test]
    fn recursive_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path());

        let files = get_all_file_data(dir.path(), &ReadOptions::default()).unwrap();
        assert_eq!(
            names(&files, dir.path()),
            vec![
                PathBuf::from("a.txt"),
                PathBuf::from("b.txt"),
                PathBuf::from("sub/c.txt"),
            ]
        );
        assert_eq!(files[0].to_bytes(), b"alpha");
    }

    #[test]
    fn non_recursive() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path());
        let opts = ReadOptions {
            recursive: false,
            ..ReadOptions::default()
        };
        let files = get_all_file_data(dir.path(), &opts).unwrap();
        assert_eq!(
            names(&files, dir.path()),
            vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]
        );
    }

    #[test]
    fn include_hidden_and_no_patterns() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path());
        let opts = ReadOptions {
            skip_hidden: false,
            ignored_patterns: Vec::new(),
            ..ReadOptions::default()
        };
        let files = get_all_file_data(dir.path(), &opts).unwrap();
        assert_eq!(files.len(), 7);
    }

    #[test]
    fn empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let files = get_all_file_data(dir.path(), &ReadOptions::default()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn root_errors() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f.txt");
        fs::write(&file, b"x").unwrap();
        assert!(matches!(
            get_all_file_data(&file, &ReadOptions::default()),
            Err(FileOpsError::NotADirectory(_))
        ));
        assert!(matches!(
            get_all_file_data(&dir.path().join("missing"), &ReadOptions::default()),
            Err(FileOpsError::NotFound(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_not_followed() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().unwrap();
        let outside = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("real.txt"), b"real").unwrap();
        fs::write(outside.path().join("far.txt"), b"far").unwrap();
        symlink(dir.path().join("real.txt"), dir.path().join("link.txt")).unwrap();
        symlink(outside.path(), dir.path().join("linked_dir")).unwrap();

        let files = get_all_file_data(dir.path(), &ReadOptions::default()).unwrap();
        assert_eq!(names(&files, dir.path()), vec![PathBuf::from("real.txt")]);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_file_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), b"alpha").unwrap();
        fs::write(dir.path().join("c.txt"), b"charlie").unwrap();
        let locked = dir.path().join("b.txt");
        fs::write(&locked, b"bravo").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users read through mode bits.
        if fs::File::open(&locked).is_ok() {
            return;
        }

        let files = get_all_file_data(dir.path(), &ReadOptions::default()).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();

        assert_eq!(
            names(&files, dir.path()),
            vec![PathBuf::from("a.txt"), PathBuf::from("c.txt")]
        );
        assert_eq!(files[1].to_bytes(), b"charlie");
    }
}
