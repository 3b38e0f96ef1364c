//! Connected component labeling by iterated minimum propagation
//!
//! Labels are resolved without an explicit disjoint-set structure. Every
//! foreground pixel starts with a unique label, then alternating top-down
//! and bottom-up passes copy the smaller label across every pair of
//! same-intensity neighbors until a full cycle changes nothing.
//!
//! The passes only visit interior columns; the top-down pass also skips the
//! last row and the bottom-up pass the first. Pixels in the first and last
//! column are reached as neighbors of interior pixels but are never the
//! center of a merge, so two pixels in the same border column that touch
//! only each other stay in separate regions.

use crate::error::{RegionError, RegionResult};
use blobsel_core::{LabelMap, Pix};
use log::debug;

/// Direction of a label propagation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    /// Rows top to bottom, columns left to right
    TopDown,
    /// Rows bottom to top, columns right to left
    BottomUp,
}

impl ScanDirection {
    /// Neighbor offsets `(dx, dy)` in the order they are merged.
    fn neighbor_offsets(self) -> &'static [(isize, isize); 4] {
        match self {
            // right, down-right, down, down-left
            ScanDirection::TopDown => &[(1, 0), (1, 1), (0, 1), (-1, 1)],
            // left, up-left, up, up-right
            ScanDirection::BottomUp => &[(-1, 0), (-1, -1), (0, -1), (1, -1)],
        }
    }
}

/// Converged and renumbered labels of an image
#[derive(Debug, Clone)]
pub struct ComponentLabeling {
    /// Dense labels `1..=count`, `0` for background
    pub labels: LabelMap,
    /// Number of distinct regions
    pub count: u32,
    /// Propagation cycles run, including the final unchanged one
    pub iterations: u32,
}

/// Assign a unique label to every foreground pixel
///
/// Nonzero pixels receive `1, 2, 3, ...` in row-major order; zero pixels
/// keep label 0.
///
/// # Returns
///
/// The label map and the label count, which is the number of foreground
/// pixels plus one for the reserved background slot.
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] if the image has more pixels
/// than `u32` labels can address.
pub fn init_labels(pix: &Pix) -> RegionResult<(LabelMap, u32)> {
    if u32::try_from(pix.pixel_count()).is_err() {
        return Err(RegionError::InvalidParameters(format!(
            "{}x{} image exceeds the u32 label range",
            pix.width(),
            pix.height()
        )));
    }

    let mut labels = LabelMap::for_pix(pix);
    let mut label_count = 1u32;
    for (label, &val) in labels.data_mut().iter_mut().zip(pix.data()) {
        if val != 0 {
            *label = label_count;
            label_count += 1;
        }
    }

    Ok((labels, label_count))
}

/// Run one label propagation pass in place
///
/// For each labeled pixel in the scan window, a running minimum starts at
/// the pixel's own label. Every neighbor with the same source intensity
/// lowers the running minimum with its label, and both the pixel and that
/// neighbor are set to it. Background pixels (label 0) are skipped.
///
/// Images narrower than 3 pixels or shorter than 2 rows have an empty scan
/// window and are left unchanged.
///
/// # Errors
///
/// Returns an error if `labels` and `pix` differ in size.
pub fn propagate_pass(
    pix: &Pix,
    labels: &mut LabelMap,
    direction: ScanDirection,
) -> RegionResult<()> {
    labels.check_sizes(pix)?;

    let width = pix.width() as usize;
    let height = pix.height() as usize;
    if width < 3 || height < 2 {
        return Ok(());
    }

    let image = pix.data();
    let data = labels.data_mut();
    let offsets = direction.neighbor_offsets();

    match direction {
        ScanDirection::TopDown => {
            for y in 0..height - 1 {
                for x in 1..width - 1 {
                    merge_with_neighbors(image, data, width, x, y, offsets);
                }
            }
        }
        ScanDirection::BottomUp => {
            for y in (1..height).rev() {
                for x in (1..width - 1).rev() {
                    merge_with_neighbors(image, data, width, x, y, offsets);
                }
            }
        }
    }

    Ok(())
}

/// Forward (top-down) propagation pass.
pub fn top_down_pass(pix: &Pix, labels: &mut LabelMap) -> RegionResult<()> {
    propagate_pass(pix, labels, ScanDirection::TopDown)
}

/// Reverse (bottom-up) propagation pass.
pub fn bottom_up_pass(pix: &Pix, labels: &mut LabelMap) -> RegionResult<()> {
    propagate_pass(pix, labels, ScanDirection::BottomUp)
}

#[inline]
fn merge_with_neighbors(
    image: &[u8],
    labels: &mut [u32],
    width: usize,
    x: usize,
    y: usize,
    offsets: &[(isize, isize); 4],
) {
    let idx = y * width + x;
    let mut min_label = labels[idx];
    if min_label == 0 {
        return;
    }

    let value = image[idx];
    for &(dx, dy) in offsets {
        let nidx = y.wrapping_add_signed(dy) * width + x.wrapping_add_signed(dx);
        if image[nidx] == value {
            min_label = min_label.min(labels[nidx]);
            labels[idx] = min_label;
            labels[nidx] = min_label;
        }
    }
}

/// Default safety cap on propagation cycles for an image.
///
/// Each cycle that changes anything hands the region minimum to at least
/// one more pixel, so `pixel_count + 1` cycles always suffice.
pub fn default_iteration_cap(pix: &Pix) -> u32 {
    u32::try_from(pix.pixel_count())
        .unwrap_or(u32::MAX)
        .saturating_add(1)
}

/// Alternate top-down and bottom-up passes until the labels stop changing
///
/// # Arguments
///
/// * `pix` - Source image; only intensity equality is used
/// * `labels` - Labels from [`init_labels`], updated in place
/// * `max_iterations` - Cycle cap; `None` uses [`default_iteration_cap`]
///
/// # Returns
///
/// The number of top-down + bottom-up cycles run, including the final one
/// that left every label unchanged.
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] for a zero cap and
/// [`RegionError::NotConverged`] if the cap is reached first.
pub fn converge_labels(
    pix: &Pix,
    labels: &mut LabelMap,
    max_iterations: Option<u32>,
) -> RegionResult<u32> {
    labels.check_sizes(pix)?;

    let cap = max_iterations.unwrap_or_else(|| default_iteration_cap(pix));
    if cap == 0 {
        return Err(RegionError::InvalidParameters(
            "max_iterations must be >= 1".to_string(),
        ));
    }

    let mut previous = labels.data().to_vec();
    let mut iterations = 0u32;
    loop {
        if iterations == cap {
            return Err(RegionError::NotConverged { iterations });
        }
        iterations += 1;

        top_down_pass(pix, labels)?;
        bottom_up_pass(pix, labels)?;

        if labels.data() == previous.as_slice() {
            break;
        }
        previous.copy_from_slice(labels.data());
    }

    debug!(
        "converge_labels: {}x{} fixed point after {} iterations",
        pix.width(),
        pix.height(),
        iterations
    );
    Ok(iterations)
}

/// Label the regions of an image with dense labels `1..=count`
///
/// Runs [`init_labels`], [`converge_labels`] and
/// [`renumber_labels`](crate::label::renumber_labels).
pub fn label_components(pix: &Pix, max_iterations: Option<u32>) -> RegionResult<ComponentLabeling> {
    let (mut labels, label_count) = init_labels(pix)?;
    let iterations = converge_labels(pix, &mut labels, max_iterations)?;
    let count = crate::label::renumber_labels(&mut labels, label_count);

    Ok(ComponentLabeling {
        labels,
        count,
        iterations,
    })
}
