// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid geometry.
//!
//! Pure layout arithmetic, recomputed on resize: how many columns fit, how
//! wide each cell is, and where each image's top edge sits in the scrolled
//! content. The reveal scheduler reads the same numbers the view renders, so
//! reveal pivots always match what is on screen.

/// Minimum width of a grid cell before the column count drops.
pub const MIN_CELL_WIDTH: f32 = 240.0;

/// Gap between grid cells, both axes.
pub const CELL_GAP: f32 = 16.0;

/// Height of a cell's image area as a fraction of its width.
pub const CELL_ASPECT: f32 = 0.75;

/// Vertical room reserved under each image for its caption line.
pub const CAPTION_HEIGHT: f32 = 28.0;

/// Derived grid geometry for a given content width and image count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub columns: usize,
    pub cell_width: f32,
    pub cell_height: f32,
    len: usize,
}

impl GridLayout {
    /// Computes the layout for `len` images in `content_width` pixels.
    #[must_use]
    pub fn compute(content_width: f32, len: usize) -> Self {
        let width = content_width.max(0.0);
        let columns = (((width + CELL_GAP) / (MIN_CELL_WIDTH + CELL_GAP)).floor() as usize).max(1);

        let gaps = CELL_GAP * (columns - 1) as f32;
        let cell_width = ((width - gaps) / columns as f32).max(1.0);
        let cell_height = cell_width * CELL_ASPECT + CAPTION_HEIGHT;

        Self {
            columns,
            cell_width,
            cell_height,
            len,
        }
    }

    /// Top edge of image `index` within the scrolled content, in pixels.
    #[must_use]
    pub fn item_top(&self, index: usize) -> f32 {
        let row = index / self.columns;
        row as f32 * (self.cell_height + CELL_GAP)
    }

    /// Rendered height of every cell.
    #[must_use]
    pub fn item_height(&self) -> f32 {
        self.cell_height
    }

    /// Total height of the scrolled content.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        if self.len == 0 {
            return 0.0;
        }
        let rows = self.len.div_ceil(self.columns);
        rows as f32 * self.cell_height + (rows - 1) as f32 * CELL_GAP
    }
}
