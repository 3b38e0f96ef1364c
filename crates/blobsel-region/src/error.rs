//! Error types for blobsel-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error (including label map / image size mismatches)
    #[error("core error: {0}")]
    Core(#[from] blobsel_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Label propagation did not reach a fixed point within the iteration cap
    #[error("label propagation did not converge after {iterations} iterations")]
    NotConverged { iterations: u32 },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
