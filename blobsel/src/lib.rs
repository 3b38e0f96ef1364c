//! blobsel - Keep the largest connected regions of an image
//!
//! Labels the connected same-intensity regions of a binary image by
//! repeated minimum-label propagation, renumbers them densely, ranks them
//! by area and paints the largest ones as a new binary mask.
//!
//! # Overview
//!
//! - [`region`] - labeling, renumbering, selection and compositing
//! - [`binarize`] - Otsu, Kapur and iterative threshold selection
//! - [`io`] - raw, PGM and PNG 8-bit image files
//! - [`run_pipeline`] - grayscale in, largest-region mask out
//!
//! # Example
//!
//! ```
//! use blobsel::binarize::ThresholdMethod;
//! use blobsel::{Pix, PipelineOptions, run_pipeline};
//!
//! // A 3-pixel bright bar and one bright dot on a dark field
//! let mut pm = Pix::new(10, 5).unwrap().to_mut();
//! pm.set_all(30);
//! for x in 2..5 {
//!     pm.set_pixel(x, 2, 220).unwrap();
//! }
//! pm.set_pixel(8, 1, 220).unwrap();
//! let pix: Pix = pm.into();
//!
//! let options = PipelineOptions::new().with_threshold(ThresholdMethod::Iterative);
//! let result = run_pipeline(&pix, &options).unwrap();
//! assert_eq!(result.threshold, 125);
//! assert_eq!(result.output.count_nonzero(), 3);
//! ```

pub mod error;
pub mod pipeline;

pub use error::{Error, Result};
pub use pipeline::{PipelineOptions, PipelineOutput, run_pipeline, run_pipeline_file};

// Re-export core types (primary data structures used everywhere)
pub use blobsel_core::{BACKGROUND, FOREGROUND, ImageFormat, LabelMap, Pix, PixMut};

// Re-export stage crates as modules to avoid name conflicts
pub use blobsel_binarize as binarize;
pub use blobsel_io as io;
pub use blobsel_region as region;
