//! Error type for the blobsel pipeline

use thiserror::Error;

/// Any error raised while running the pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] blobsel_core::Error),

    /// Image I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] blobsel_io::IoError),

    /// Threshold selection failed
    #[error("binarize error: {0}")]
    Binarize(#[from] blobsel_binarize::BinarizeError),

    /// Region extraction failed
    #[error("region error: {0}")]
    Region(#[from] blobsel_region::RegionError),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;
