//! Error types for edgepad-core
//!
//! Every precondition of the image container and of the edge transforms
//! maps to one variant here. All of them are raised before any output
//! buffer is allocated.

use thiserror::Error;

/// edgepad error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Width or height is zero
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Negative margin
    #[error("invalid margin: {0} (must be >= 0)")]
    InvalidMargin(i64),

    /// Crop margin leaves no pixels
    #[error("margin {margin} too large for {width}x{height} image")]
    MarginTooLarge { margin: u32, width: u32, height: u32 },

    /// Padded size is not representable
    #[error("padding {width}x{height} by {margin} overflows")]
    DimensionOverflow { width: u32, height: u32, margin: u32 },

    /// Raw pixel buffer has the wrong length
    #[error("data length mismatch: expected {expected} pixels, got {actual}")]
    DataLengthMismatch { expected: usize, actual: usize },

    /// Pixel coordinates outside the image
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} image")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Result type alias for edgepad operations
pub type Result<T> = std::result::Result<T, Error>;
