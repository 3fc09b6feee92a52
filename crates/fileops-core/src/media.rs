//! Media file detection by extension.

use std::path::Path;

use crate::error::{FileOpsError, Result};

/// Extensions (with leading dot) treated as image, video or audio media.
/// Matching is exact and case-sensitive.
pub const MEDIA_EXTENSIONS: &[&str] = &[".jpg", ".png", ".mp4", ".avi", ".mp3"];

/// Returns the substring from the last `.` to the end, or `None` if there is no `.`.
pub fn extension_of(filename: &str) -> Option<&str> {
    filename.rfind('.').map(|idx| &filename[idx..])
}

/// Whether `filename` ends in one of [`MEDIA_EXTENSIONS`].
///
/// Only the segment after the last `.` counts, so `archive.tar.mp3` is media and
/// `PHOTO.PNG` is not. A name without any `.` is never media.
pub fn is_image_or_video(filename: &str) -> bool {
    match extension_of(filename) {
        Some(ext) => MEDIA_EXTENSIONS.contains(&ext),
        None => false,
    }
}

/// Classify the final component of `path`.
///
/// Fails with [`FileOpsError::InvalidArgument`] when the path has no final
/// component (e.g. `/` or `..`) or that component is not valid UTF-8.
pub fn is_image_or_video_path(path: &Path) -> Result<bool> {
    let name = path.file_name().ok_or_else(|| {
        FileOpsError::InvalidArgument(format!("path has no file name: {}", path.display()))
    })?;
    let name = name.to_str().ok_or_else(|| {
        FileOpsError::InvalidArgument(format!("file name is not UTF-8: {}", path.display()))
    })?;
    Ok(is_image_or_video(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_dot_is_not_media() {
        assert!(!is_image_or_video("readme"));
        assert!(!is_image_or_video(""));
    }

    #[test]
    fn allow_listed_extensions() {
        for name in ["clip.mp4", "photo.png", "a.jpg", "movie.avi", "song.mp3"] {
            assert!(is_image_or_video(name), "{name}");
        }
    }

    #[test]
    fn case_sensitive() {
        assert!(!is_image_or_video("PHOTO.PNG"));
        assert!(!is_image_or_video("photo.JPG"));
    }

    #[test]
    fn uses_last_dot() {
        assert!(is_image_or_video("archive.tar.mp3"));
        assert!(!is_image_or_video("clip.mp4.txt"));
    }

    #[test]
    fn near_variants_rejected() {
        assert!(!is_image_or_video("video.mov"));
        assert!(!is_image_or_video("image.jpeg"));
        assert!(!is_image_or_video("trailing."));
    }

    #[test]
    fn dotfile_with_media_name() {
        assert!(is_image_or_video(".mp3"));
    }

    #[test]
    fn extension_of_returns_dot_segment() {
        assert_eq!(extension_of("a.b.c"), Some(".c"));
        assert_eq!(extension_of("noext"), None);
    }

    #[test]
    fn path_variant() {
        assert!(is_image_or_video_path(Path::new("/media/2024/clip.mp4")).unwrap());
        assert!(!is_image_or_video_path(Path::new("notes/readme")).unwrap());
        assert!(matches!(
            is_image_or_video_path(Path::new("/")),
            Err(FileOpsError::InvalidArgument(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn path_variant_rejects_non_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;
        let p = Path::new(OsStr::from_bytes(b"bad\xff.mp4"));
        assert!(matches!(
            is_image_or_video_path(p),
            Err(FileOpsError::InvalidArgument(_))
        ));
    }
}
