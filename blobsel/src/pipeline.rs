//! Grayscale image to largest-region mask

use crate::error::Result;
use blobsel_binarize::{ThresholdMethod, binarize};
use blobsel_core::{ImageFormat, Pix};
use blobsel_region::{ExtractOptions, extract_largest_components};
use log::debug;
use std::path::Path;

/// Options for [`run_pipeline`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PipelineOptions {
    /// How the binarization threshold is chosen
    pub threshold: ThresholdMethod,
    /// Region extraction options
    pub extract: ExtractOptions,
}

impl PipelineOptions {
    /// Create new options with default values (Otsu, keep 1)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the threshold method
    pub fn with_threshold(mut self, threshold: ThresholdMethod) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the number of regions to keep
    pub fn with_keep(mut self, keep: u32) -> Self {
        self.extract = self.extract.with_keep(keep);
        self
    }
}

/// Everything the pipeline produced
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// The threshold used for binarization
    pub threshold: u8,
    /// The 0/255 image after thresholding
    pub binary: Pix,
    /// The binary image reduced to the kept regions
    pub output: Pix,
}

/// Binarize a grayscale image and keep its largest regions.
pub fn run_pipeline(pix: &Pix, options: &PipelineOptions) -> Result<PipelineOutput> {
    options.extract.validate()?;

    let (threshold, binary) = binarize(pix, options.threshold)?;
    let output = extract_largest_components(&binary, &options.extract)?;
    debug!(
        "run_pipeline: threshold {}, {} of {} foreground pixels kept",
        threshold,
        output.count_nonzero(),
        binary.count_nonzero()
    );

    Ok(PipelineOutput {
        threshold,
        binary,
        output,
    })
}

/// Run the pipeline on an image file and write the mask in `format`.
///
/// The input format is detected from the file header, so raw input is not
/// accepted here; read it with [`blobsel_io::read_raw_file`] and call
/// [`run_pipeline`] instead.
pub fn run_pipeline_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    format: ImageFormat,
    options: &PipelineOptions,
) -> Result<PipelineOutput> {
    let pix = blobsel_io::read_image(input)?;
    let result = run_pipeline(&pix, options)?;
    blobsel_io::write_image(&result.output, output, format)?;
    Ok(result)
}
