//! Error types for the render crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while preparing drawing resources.
#[derive(Error, Debug)]
pub enum RenderError {
    /// An image file could not be read or decoded.
    #[error("failed to load image {}: {message}", path.display())]
    ImageLoad { path: PathBuf, message: String },

    /// In-memory image data could not be decoded.
    #[error("failed to decode image: {0}")]
    ImageDecode(String),

    /// Invalid image dimensions (zero width or height).
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
