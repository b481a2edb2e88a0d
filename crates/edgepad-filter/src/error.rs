//! Error types for edgepad-filter

use thiserror::Error;

/// Errors that can occur around matrix filtering
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] edgepad_core::Error),

    /// Kernel size of zero
    #[error("invalid kernel size: {0}")]
    InvalidKernelSize(u32),

    /// The filter returned an image of the wrong size
    #[error(
        "filter output mismatch: expected {}x{}, got {}x{}",
        .expected.0, .expected.1, .actual.0, .actual.1
    )]
    FilterOutputMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
