// SPDX-License-Identifier: MPL-2.0
//! Gallery directory scanner.
//!
//! Scans the configured gallery directory once at startup for supported image
//! files and returns them in a stable, sorted order. The resulting list is
//! the page-lifetime image set; it is never rescanned while the app runs.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// File extensions accepted into the gallery.
const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "tiff", "tif"];

/// Checks if a file has a supported image extension.
fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Scans a directory for supported image files, sorted by file name.
///
/// Non-image files and subdirectories are skipped. An empty directory yields
/// an empty list, not an error.
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] if the directory cannot be read.
pub fn scan_gallery_dir(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        }
    }

    images.sort();
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn scan_finds_only_supported_images_in_sorted_order() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("b.png"), b"x").unwrap();
        fs::write(temp_dir.path().join("a.jpg"), b"x").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), b"x").unwrap();
        fs::write(temp_dir.path().join("c.JPEG"), b"x").unwrap();
        fs::create_dir(temp_dir.path().join("nested.png")).unwrap();

        let images = scan_gallery_dir(temp_dir.path()).expect("scan should succeed");
        let names: Vec<_> = images
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["a.jpg", "b.png", "c.JPEG"]);
    }

    #[test]
    fn scan_empty_directory_yields_empty_list() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let images = scan_gallery_dir(temp_dir.path()).expect("scan should succeed");
        assert!(images.is_empty());
    }

    #[test]
    fn scan_missing_directory_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("nope");

        match scan_gallery_dir(&missing) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(is_supported_image(Path::new("photo.PNG")));
        assert!(is_supported_image(Path::new("photo.WebP")));
        assert!(!is_supported_image(Path::new("photo.svg")));
        assert!(!is_supported_image(Path::new("photo")));
    }
}
