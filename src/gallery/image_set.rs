// SPDX-License-Identifier: MPL-2.0
//! The ordered, page-lifetime set of gallery images.
//!
//! Built once from the startup scan and immutable in membership afterwards:
//! entries are never added, removed, or reordered, so an index handed to the
//! lightbox stays valid for the life of the app. Only the decoded thumbnail
//! slot of each entry is filled in as async decodes complete.

use crate::media::ImageData;
use std::path::{Path, PathBuf};

/// One gallery image: its source path, display caption, and decoded
/// thumbnail (if the decode has completed and succeeded).
#[derive(Debug, Clone)]
pub struct ImageEntry {
    pub path: PathBuf,
    pub caption: String,
    pub thumbnail: Option<ImageData>,
    pub decode_failed: bool,
}

impl ImageEntry {
    fn new(path: PathBuf) -> Self {
        let caption = caption_from_path(&path);
        Self {
            path,
            caption,
            thumbnail: None,
            decode_failed: false,
        }
    }
}

/// Derives a human-readable caption from an image file name.
///
/// `planted-display-tank_02.jpg` becomes `Planted display tank 02`.
fn caption_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    // A dotfile with no other dot has no extension to split off, so the
    // stem keeps its leading dot.
    let spaced: String = stem
        .trim_start_matches('.')
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect();

    let trimmed = spaced.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Ordered collection of gallery images with stable indices.
#[derive(Debug, Clone, Default)]
pub struct ImageSet {
    entries: Vec<ImageEntry>,
}

impl ImageSet {
    /// Builds the set from scanned paths, preserving their order.
    #[must_use]
    pub fn from_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            entries: paths.into_iter().map(ImageEntry::new).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageEntry> {
        self.entries.get(index)
    }

    /// Iterates entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = &ImageEntry> {
        self.entries.iter()
    }

    /// Returns the source paths of every entry, in order.
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        self.entries.iter().map(|e| e.path.clone()).collect()
    }

    /// Stores a completed thumbnail decode. Out-of-range indices are ignored.
    pub fn set_thumbnail(&mut self, index: usize, thumbnail: ImageData) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.thumbnail = Some(thumbnail);
            entry.decode_failed = false;
        }
    }

    /// Marks an entry whose thumbnail decode failed. The entry keeps its
    /// place so indices never shift; the view renders a placeholder.
    pub fn mark_decode_failed(&mut self, index: usize) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.decode_failed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captions_derive_from_file_names() {
        assert_eq!(
            caption_from_path(Path::new("/g/planted-display-tank_02.jpg")),
            "Planted display tank 02"
        );
        assert_eq!(caption_from_path(Path::new("/g/koi.png")), "Koi");
        assert_eq!(caption_from_path(Path::new("/g/.hidden")), "Hidden");
    }

    #[test]
    fn from_paths_preserves_order_and_indices() {
        let set = ImageSet::from_paths(vec![
            PathBuf::from("/g/a.jpg"),
            PathBuf::from("/g/b.jpg"),
            PathBuf::from("/g/c.jpg"),
        ]);

        assert_eq!(set.len(), 3);
        assert_eq!(set.get(0).unwrap().path, PathBuf::from("/g/a.jpg"));
        assert_eq!(set.get(2).unwrap().path, PathBuf::from("/g/c.jpg"));
        assert!(set.get(3).is_none());
    }

    #[test]
    fn failed_decode_keeps_entry_in_place() {
        let mut set = ImageSet::from_paths(vec![
            PathBuf::from("/g/a.jpg"),
            PathBuf::from("/g/broken.jpg"),
            PathBuf::from("/g/c.jpg"),
        ]);

        set.mark_decode_failed(1);

        assert_eq!(set.len(), 3);
        let entry = set.get(1).unwrap();
        assert!(entry.decode_failed);
        assert!(entry.thumbnail.is_none());
        assert_eq!(set.get(2).unwrap().path, PathBuf::from("/g/c.jpg"));
    }

    #[test]
    fn set_thumbnail_ignores_out_of_range_index() {
        let mut set = ImageSet::from_paths(vec![PathBuf::from("/g/a.jpg")]);
        let thumb = ImageData::from_rgba(2, 2, vec![0u8; 16]);
        set.set_thumbnail(5, thumb);
        assert!(set.get(0).unwrap().thumbnail.is_none());
    }
}
