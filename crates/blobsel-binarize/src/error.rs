//! Error types for blobsel-binarize

use thiserror::Error;

/// Errors that can occur during threshold selection
#[derive(Debug, Error)]
pub enum BinarizeError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] blobsel_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// The iterative method kept moving the threshold
    #[error("threshold did not settle after {iterations} rounds")]
    NotConverged { iterations: u32 },
}

/// Result type for threshold operations
pub type BinarizeResult<T> = Result<T, BinarizeError>;
