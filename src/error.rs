//! Error types for host-facing operations.
//!
//! Filters themselves never fail. Errors only come from the edges of the
//! engine: building an image from host data, swapping its grid, building
//! kernels, and looking filters up by name.

use thiserror::Error;

/// Result type for fallible engine operations.
pub type ImageResult<T> = Result<T, ImageError>;

/// Errors raised by image construction, kernels, registry and config.
#[derive(Debug, Error)]
pub enum ImageError {
    /// Image has zero rows or zero columns.
    #[error("image must have at least one row and one column, got {height}x{width}")]
    EmptyImage { height: usize, width: usize },

    /// Replacement grid does not match the image's fixed dimensions.
    #[error("grid is {found_height}x{found_width}, image is fixed at {height}x{width}")]
    DimensionMismatch {
        height: usize,
        width: usize,
        found_height: usize,
        found_width: usize,
    },

    /// Host array has a channel count other than 3 (RGB) or 4 (RGBA).
    #[error("unsupported channel count {0}: expected 3 (RGB) or 4 (RGBA)")]
    UnsupportedChannels(usize),

    /// Kernel is not an odd-sized square.
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// No filter registered under this display name.
    #[error("unknown filter '{0}'")]
    UnknownFilter(String),

    /// Display name already taken in the registry.
    #[error("filter '{0}' is already registered")]
    DuplicateFilter(String),

    /// Configuration value out of range.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter { name: &'static str, message: String },

    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}
