//! Keep the largest regions of a binary image

use crate::conncomp::label_components;
use crate::error::{RegionError, RegionResult};
use crate::select::{composite_labels, label_histogram, select_largest_labels};
use blobsel_core::Pix;
use log::warn;

/// Options for [`extract_largest_components`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Number of regions to keep (must be >= 1)
    pub keep: u32,
    /// Cap on propagation cycles; `None` derives one from the image size
    pub max_iterations: Option<u32>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            keep: 1,
            max_iterations: None,
        }
    }
}

impl ExtractOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of regions to keep
    pub fn with_keep(mut self, keep: u32) -> Self {
        self.keep = keep;
        self
    }

    /// Set the propagation cycle cap
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Check the options before running
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidParameters`] if `keep` or
    /// `max_iterations` is 0.
    pub fn validate(&self) -> RegionResult<()> {
        if self.keep == 0 {
            return Err(RegionError::InvalidParameters(
                "keep must be >= 1".to_string(),
            ));
        }
        if self.max_iterations == Some(0) {
            return Err(RegionError::InvalidParameters(
                "max_iterations must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Keep only the `options.keep` largest regions of a binary image
///
/// Regions are groups of same-intensity pixels joined through the
/// propagation passes; nonzero pixels are foreground. The result is a
/// binary image with 255 on the kept regions and 0 elsewhere.
///
/// If the image holds fewer regions than requested, every region is kept
/// and a warning is logged.
///
/// # Examples
///
/// ```
/// use blobsel_core::Pix;
/// use blobsel_region::{ExtractOptions, extract_largest_components};
///
/// let mut pm = Pix::new(8, 5).unwrap().to_mut();
/// for x in 1..5 {
///     pm.set_pixel(x, 1, 255).unwrap();
/// }
/// pm.set_pixel(6, 3, 255).unwrap();
/// let pix: Pix = pm.into();
///
/// let out = extract_largest_components(&pix, &ExtractOptions::default()).unwrap();
/// assert_eq!(out.count_nonzero(), 4);
/// assert_eq!(out.get_pixel(6, 3), Some(0));
/// ```
pub fn extract_largest_components(pix: &Pix, options: &ExtractOptions) -> RegionResult<Pix> {
    options.validate()?;

    let labeling = label_components(pix, options.max_iterations)?;
    let histogram = label_histogram(&labeling.labels, labeling.count);
    let selected = select_largest_labels(&histogram, options.keep);

    if (selected.len() as u32) < options.keep {
        warn!(
            "extract_largest_components: requested {} regions, found {}",
            options.keep,
            selected.len()
        );
    }

    composite_labels(&labeling.labels, &selected)
}
