//! Error types for the grid engine.

use std::path::PathBuf;

/// Result type alias for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors that can occur when building or configuring a grid.
///
/// Index errors inside the coordinate mapper and navigation resolver are not
/// represented here: they can only come from an internal bug and panic.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// A category without items was handed to the engine.
    #[error("Category {index} ('{label}') has no items")]
    EmptyCategory { index: usize, label: String },

    /// The category list itself is empty.
    #[error("A grid needs at least one category")]
    NoCategories,

    /// A layout parameter is out of range.
    #[error("Invalid layout value for '{field}': {message}")]
    InvalidLayout {
        field: &'static str,
        message: String,
    },

    /// Reading a layout file failed.
    #[error("Failed to read layout config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A layout file is not valid TOML for [`GridLayout`](crate::GridLayout).
    #[error("Layout config parse error: {0}")]
    Config(#[from] toml::de::Error),
}

impl GridError {
    /// Create an empty-category error.
    pub fn empty_category(index: usize, label: impl Into<String>) -> Self {
        Self::EmptyCategory {
            index,
            label: label.into(),
        }
    }

    /// Create a layout validation error.
    pub fn invalid_layout(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidLayout {
            field,
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
