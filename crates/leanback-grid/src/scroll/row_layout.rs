//! Rendered extents of the grid rows.
//!
//! The grid is a vertical list of absolute rows. Every row is one tile high;
//! the first row of a category also carries the category heading and the gap
//! below it. Rows are separated by `row_spacing` and the whole list is padded
//! by `content_padding` at the top and bottom:
//!
//! ```text
//! +---------------------------+  offset 0
//! |         padding           |
//! | Apps                      |  <- heading + spacing, first row only
//! | [ ] [ ] [ ] [ ] [ ]       |  absolute row 0
//! |         spacing           |
//! | [ ] [ ]                   |  absolute row 1
//! |         spacing           |
//! | Games                     |
//! | [ ] [ ] [ ]               |  absolute row 2
//! |         padding           |
//! +---------------------------+  content height
//! ```

use crate::grid::CoordinateMapper;
use crate::layout::{GridLayout, ViewportGeometry};

/// Per-row heights and positions for one layout and viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    tops: Vec<f32>,
    heights: Vec<f32>,
    row_spacing: f32,
    content_height: f32,
    viewport_height: f32,
}

impl RowLayout {
    /// Compute the row extents of `sizes` laid out with `layout` inside
    /// `viewport`.
    pub fn new(sizes: &[usize], layout: &GridLayout, viewport: ViewportGeometry) -> Self {
        let mapper = CoordinateMapper::new(sizes, layout.columns);
        let tile_height = tile_height(layout, viewport);
        let heading = layout.label_height + layout.row_spacing;

        let mut heights = Vec::with_capacity(mapper.total_absolute_rows());
        for category in 0..mapper.category_count() {
            for row in 0..mapper.rows_in_category(category) {
                heights.push(if row == 0 {
                    tile_height + heading
                } else {
                    tile_height
                });
            }
        }

        let mut tops = Vec::with_capacity(heights.len());
        let mut y = layout.content_padding;
        for height in &heights {
            tops.push(y);
            y += height + layout.row_spacing;
        }
        let content_height = if heights.is_empty() {
            2.0 * layout.content_padding
        } else {
            // The loop added one spacing too many after the last row.
            y - layout.row_spacing + layout.content_padding
        };

        Self {
            tops,
            heights,
            row_spacing: layout.row_spacing,
            content_height,
            viewport_height: viewport.height,
        }
    }

    /// Number of absolute rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.heights.len()
    }

    /// Rendered height of an absolute row, heading included.
    #[inline]
    pub fn row_size(&self, row: usize) -> f32 {
        self.heights[row]
    }

    /// Distance from the content top to the top of an absolute row.
    #[inline]
    pub fn row_top(&self, row: usize) -> f32 {
        self.tops[row]
    }

    /// Gap between two rows.
    #[inline]
    pub fn row_spacing(&self) -> f32 {
        self.row_spacing
    }

    /// Total content height, padding included.
    #[inline]
    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// Height of the scrolling region.
    #[inline]
    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Largest viewport offset that keeps the viewport inside the content.
    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    /// Clamp an offset to `0..=max_offset`.
    pub fn clamp_offset(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_offset())
    }

    /// First row whose bottom edge lies below `offset`.
    ///
    /// Past the content end this is the last row.
    pub fn first_visible_row(&self, offset: f32) -> usize {
        let index = self
            .tops
            .iter()
            .zip(&self.heights)
            .position(|(top, height)| top + height > offset);
        index.unwrap_or(self.row_count().saturating_sub(1))
    }

    /// Row after the first visible one, or the first visible row when it is
    /// the last row.
    pub fn second_visible_row(&self, offset: f32) -> usize {
        let first = self.first_visible_row(offset);
        if first + 1 < self.row_count() {
            first + 1
        } else {
            first
        }
    }
}

/// Height of one tile: the column width times the aspect ratio.
fn tile_height(layout: &GridLayout, viewport: ViewportGeometry) -> f32 {
    let columns = layout.columns as f32;
    let gaps = layout.row_spacing * (columns - 1.0);
    let width = (viewport.width - 2.0 * layout.content_padding - gaps) / columns;
    width.max(0.0) * layout.item_aspect_ratio
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1280 wide, 40 padding, 20 spacing, 5 columns: tiles are 224 x 126.
    fn rows(sizes: &[usize]) -> RowLayout {
        RowLayout::new(sizes, &GridLayout::default(), ViewportGeometry::default())
    }

    #[test]
    fn test_first_row_of_category_carries_heading() {
        let layout = rows(&[7, 3]);
        assert_eq!(layout.row_count(), 3);
        assert_eq!(layout.row_size(0), 162.0);
        assert_eq!(layout.row_size(1), 126.0);
        assert_eq!(layout.row_size(2), 162.0);
    }

    #[test]
    fn test_row_tops_and_content_height() {
        let layout = rows(&[7, 3]);
        assert_eq!(layout.row_top(0), 40.0);
        assert_eq!(layout.row_top(1), 222.0);
        assert_eq!(layout.row_top(2), 368.0);
        assert_eq!(layout.content_height(), 570.0);
        // Shorter than the viewport.
        assert_eq!(layout.max_offset(), 0.0);
    }

    #[test]
    fn test_max_offset_of_tall_content() {
        let layout = rows(&[20, 5]);
        assert_eq!(layout.content_height(), 862.0);
        assert_eq!(layout.max_offset(), 142.0);
        assert_eq!(layout.clamp_offset(500.0), 142.0);
        assert_eq!(layout.clamp_offset(-3.0), 0.0);
    }

    #[test]
    fn test_visible_rows() {
        let layout = rows(&[20, 5]);
        assert_eq!(layout.first_visible_row(0.0), 0);
        assert_eq!(layout.second_visible_row(0.0), 1);
        // Row 0 ends at 202.
        assert_eq!(layout.first_visible_row(201.0), 0);
        assert_eq!(layout.first_visible_row(202.0), 1);
        assert_eq!(layout.first_visible_row(10_000.0), 4);
        assert_eq!(layout.second_visible_row(10_000.0), 4);
    }

    #[test]
    fn test_narrow_viewport_collapses_tiles() {
        let layout = RowLayout::new(
            &[3],
            &GridLayout::default(),
            ViewportGeometry::new(50.0, 720.0),
        );
        assert_eq!(layout.row_size(0), 36.0);
    }
}
