// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for the gallery (PNG, JPEG, GIF, WebP, etc.).

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::Path;

/// Longest edge of a decoded grid thumbnail, in pixels.
///
/// Thumbnails are decoded once at startup; the full-resolution originals are
/// only decoded on demand for the lightbox and its prefetch cache.
pub const THUMBNAIL_MAX_EDGE: u32 = 480;

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    /// Approximate in-memory size of the decoded pixels (RGBA).
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Load an image at full resolution from the given path.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Image`] if
/// decoding fails.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let bytes = fs::read(path.as_ref()).map_err(|e| Error::Io(e.to_string()))?;
    let img = image_rs::load_from_memory(&bytes).map_err(|e| Error::Image(e.to_string()))?;

    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}

/// Load an image and downscale it for the thumbnail grid.
///
/// Images already smaller than [`THUMBNAIL_MAX_EDGE`] are kept at their
/// original size.
///
/// # Errors
///
/// Same failure modes as [`load_image`].
pub fn load_thumbnail<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let bytes = fs::read(path.as_ref()).map_err(|e| Error::Io(e.to_string()))?;
    let img = image_rs::load_from_memory(&bytes).map_err(|e| Error::Image(e.to_string()))?;

    let (width, height) = img.dimensions();
    let img = if width > THUMBNAIL_MAX_EDGE || height > THUMBNAIL_MAX_EDGE {
        img.thumbnail(THUMBNAIL_MAX_EDGE, THUMBNAIL_MAX_EDGE)
    } else {
        img
    };

    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}
