//! Error types for tracematch-recog

use thiserror::Error;

/// Errors that can occur during classification operations
#[derive(Debug, Error)]
pub enum RecogError {
    /// Core library error (rasterization failures)
    #[error("core error: {0}")]
    Core(#[from] tracematch_core::Error),

    /// Vectors of unequal length were compared
    #[error("vector length mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// Two reference entries share a label
    #[error("duplicate label: {0}")]
    DuplicateLabel(String),

    /// Classification attempted with no references loaded
    #[error("empty reference set")]
    EmptyReferenceSet,

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for classification operations
pub type RecogResult<T> = Result<T, RecogError>;
