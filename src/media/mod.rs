// SPDX-License-Identifier: MPL-2.0
//! Media loading pipeline: directory scanning, image decoding, and the
//! full-resolution prefetch cache used by the lightbox.

pub mod image;
pub mod prefetch;
pub mod scanner;

pub use image::{load_image, load_thumbnail, ImageData, THUMBNAIL_MAX_EDGE};
pub use prefetch::{ImagePrefetchCache, PrefetchConfig, PrefetchStats};
pub use scanner::scan_gallery_dir;
