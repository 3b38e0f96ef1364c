//! blobsel-binarize - Global threshold selection
//!
//! Turns an 8-bit grayscale image into the 0/255 binary image that the
//! region extractor works on. The threshold comes from the image's
//! histogram (Otsu, Kapur, iterative) or from the caller.
//!
//! # Example
//!
//! ```
//! use blobsel_core::Pix;
//! use blobsel_binarize::{ThresholdMethod, binarize};
//!
//! let pix = Pix::from_data(4, 1, vec![10, 12, 200, 210]).unwrap();
//! let (threshold, binary) = binarize(&pix, ThresholdMethod::Otsu).unwrap();
//! assert_eq!(threshold, 12);
//! assert_eq!(binary.data(), &[0, 255, 255, 255]);
//! ```

pub mod error;
pub mod threshold;

pub use error::{BinarizeError, BinarizeResult};
pub use threshold::{
    MAX_ITERATIVE_ROUNDS, ThresholdMethod, binarize, iterative_threshold, kapur_threshold,
    otsu_threshold, select_threshold, threshold_to_binary,
};
