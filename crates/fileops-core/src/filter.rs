//! Skip rules for ingestion walks.
//!
//! Hidden entries and database side files (`*.db`, `*.db-journal`) are not
//! document content and never get chunked.

use std::path::Path;

/// Substrings that mark a path as ignored by default.
pub const DEFAULT_IGNORED_PATTERNS: &[&str] = &["db-journal", ".db"];

/// Whether the final component of `path` starts with `.`.
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

/// Whether any of `patterns` occurs anywhere in `path`.
pub fn is_ignored<S: AsRef<str>>(path: &Path, patterns: &[S]) -> bool {
    let s = path.to_string_lossy();
    patterns.iter().any(|p| s.contains(p.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_by_name() {
        assert!(is_hidden(Path::new("/a/b/.git")));
        assert!(is_hidden(Path::new(".env")));
        assert!(!is_hidden(Path::new("/a/.cfg/file.txt")));
        assert!(!is_hidden(Path::new("/")));
    }

    #[test]
    fn ignored_patterns() {
        assert!(is_ignored(Path::new("/d/d.db"), DEFAULT_IGNORED_PATTERNS));
        assert!(is_ignored(Path::new("/d/filesystem.db-journal"), DEFAULT_IGNORED_PATTERNS));
        assert!(!is_ignored(Path::new("/d/notes.txt"), DEFAULT_IGNORED_PATTERNS));
        let none: &[&str] = &[];
        assert!(!is_ignored(Path::new("/d/d.db"), none));
    }
}
