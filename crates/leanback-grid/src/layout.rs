//! Grid layout configuration.
//!
//! A [`GridLayout`] is fixed for the lifetime of one engine. It can be built
//! in code with the `with_*` setters or loaded from TOML:
//!
//! ```toml
//! columns = 5
//! item_aspect_ratio = 0.5625
//! row_spacing = 20.0
//! scroll_duration_ms = 300
//! scroll_easing = "ease_out_cubic"
//! ```
//!
//! Missing keys fall back to the defaults of the TV launcher home screen.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::Easing;
use crate::error::{GridError, Result};

/// Grid geometry and timing parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    /// Number of tiles per row.
    pub columns: usize,
    /// Tile height divided by tile width.
    pub item_aspect_ratio: f32,
    /// Gap between rows and between tiles of a row, in pixels.
    pub row_spacing: f32,
    /// Height of a category heading, in pixels.
    pub label_height: f32,
    /// Padding above the first row and below the last row, in pixels.
    pub content_padding: f32,
    /// Duration of one scroll animation, in milliseconds.
    pub scroll_duration_ms: u64,
    /// Easing curve of the scroll animation.
    pub scroll_easing: Easing,
    /// Minimum gap between two accepted vertical moves, in milliseconds.
    pub throttle_window_ms: u64,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: 5,
            item_aspect_ratio: 0.5625,
            row_spacing: 20.0,
            label_height: 16.0,
            content_padding: 40.0,
            scroll_duration_ms: 300,
            scroll_easing: Easing::EaseOutCubic,
            throttle_window_ms: 300,
        }
    }
}

impl GridLayout {
    /// Create a layout with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of columns.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Set the tile aspect ratio.
    pub fn with_item_aspect_ratio(mut self, ratio: f32) -> Self {
        self.item_aspect_ratio = ratio;
        self
    }

    /// Set the row spacing.
    pub fn with_row_spacing(mut self, spacing: f32) -> Self {
        self.row_spacing = spacing;
        self
    }

    /// Set the category heading height.
    pub fn with_label_height(mut self, height: f32) -> Self {
        self.label_height = height;
        self
    }

    /// Set the content padding.
    pub fn with_content_padding(mut self, padding: f32) -> Self {
        self.content_padding = padding;
        self
    }

    /// Set the scroll animation duration.
    pub fn with_scroll_duration(mut self, duration: Duration) -> Self {
        self.scroll_duration_ms = duration.as_millis() as u64;
        self
    }

    /// Set the scroll easing curve.
    pub fn with_scroll_easing(mut self, easing: Easing) -> Self {
        self.scroll_easing = easing;
        self
    }

    /// Set the vertical input throttle window.
    pub fn with_throttle_window(mut self, window: Duration) -> Self {
        self.throttle_window_ms = window.as_millis() as u64;
        self
    }

    /// Duration of one scroll animation.
    #[inline]
    pub fn scroll_duration(&self) -> Duration {
        Duration::from_millis(self.scroll_duration_ms)
    }

    /// Minimum gap between two accepted vertical moves.
    #[inline]
    pub fn throttle_window(&self) -> Duration {
        Duration::from_millis(self.throttle_window_ms)
    }

    /// Check every parameter is in range.
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 {
            return Err(GridError::invalid_layout("columns", "must be at least 1"));
        }
        if !(self.item_aspect_ratio.is_finite() && self.item_aspect_ratio > 0.0) {
            return Err(GridError::invalid_layout(
                "item_aspect_ratio",
                format!("must be a positive number, got {}", self.item_aspect_ratio),
            ));
        }
        for (field, value) in [
            ("row_spacing", self.row_spacing),
            ("label_height", self.label_height),
            ("content_padding", self.content_padding),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(GridError::invalid_layout(
                    field,
                    format!("must be a non-negative number, got {value}"),
                ));
            }
        }
        Ok(())
    }

    /// Parse and validate a layout from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let layout: GridLayout = toml::from_str(text)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Load and validate a layout from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| GridError::io(path, e))?;
        Self::from_toml_str(&text)
    }

    /// Serialize the layout to TOML text.
    pub fn to_toml_string(&self) -> String {
        // Every field is a plain scalar, so serialization cannot fail.
        toml::to_string_pretty(self).unwrap_or_default()
    }
}

/// Size of the scrolling region, supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportGeometry {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl ViewportGeometry {
    /// Create a viewport geometry.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for ViewportGeometry {
    fn default() -> Self {
        // 720p, the smallest common TV resolution.
        Self::new(1280.0, 720.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_validate() {
        let layout = GridLayout::default();
        assert!(layout.validate().is_ok());
        assert_eq!(layout.columns, 5);
        assert_eq!(layout.throttle_window(), Duration::from_millis(300));
    }

    #[test]
    fn test_zero_columns_rejected() {
        let err = GridLayout::new().with_columns(0).validate().unwrap_err();
        assert!(matches!(err, GridError::InvalidLayout { field: "columns", .. }));
    }

    #[test]
    fn test_negative_spacing_rejected() {
        let err = GridLayout::new()
            .with_row_spacing(-1.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, GridError::InvalidLayout { field: "row_spacing", .. }));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let layout = GridLayout::from_toml_str("columns = 4\nscroll_easing = \"linear\"\n").unwrap();
        assert_eq!(layout.columns, 4);
        assert_eq!(layout.scroll_easing, Easing::Linear);
        assert_eq!(layout.row_spacing, 20.0);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = GridLayout::from_toml_str("columns = \"five\"").unwrap_err();
        assert!(matches!(err, GridError::Config(_)));
    }

    #[test]
    fn test_toml_round_trip_through_file() {
        let layout = GridLayout::new()
            .with_columns(6)
            .with_scroll_duration(Duration::from_millis(180));
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(layout.to_toml_string().as_bytes()).unwrap();

        let loaded = GridLayout::load(file.path()).unwrap();
        assert_eq!(loaded, layout);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GridLayout::load("/nonexistent/leanback-grid.toml").unwrap_err();
        assert!(matches!(err, GridError::Io { .. }));
    }
}
