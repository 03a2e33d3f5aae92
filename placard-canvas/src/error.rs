//! Error types for placard-canvas.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using CanvasError.
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Errors that can occur while painting or encoding a canvas.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// Invalid canvas dimensions (must be positive and within limits).
    #[error("Invalid dimensions: width={width}, height={height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The font file could not be read or contained no usable face.
    #[error("Failed to load font {path}: {reason}")]
    FontLoad { path: PathBuf, reason: String },

    /// Text shaping or glyph rendering error.
    #[error("Text rendering error: {0}")]
    TextError(String),

    /// Opacity mask could not be allocated.
    #[error("Mask error: {0}")]
    MaskError(String),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngError(String),
}

impl From<png::EncodingError> for CanvasError {
    fn from(err: png::EncodingError) -> Self {
        CanvasError::PngError(err.to_string())
    }
}
