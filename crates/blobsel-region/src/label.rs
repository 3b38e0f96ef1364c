//! Label renumbering
//!
//! After convergence every region carries the smallest initial label of its
//! pixels, so label values are sparse. Renumbering compacts them into the
//! dense range `1..=count` while keeping their relative order.

use blobsel_core::LabelMap;
use log::debug;

/// Compact the labels of a converged map into `1..=count`
///
/// All nonzero labels are gathered and sorted; each distinct value, in
/// ascending order, is mapped to the next integer starting at 1. Equal
/// values collapse to the same new label and background stays 0.
///
/// Numbering starts at 1, not 0: label 0 stays reserved for background so
/// the smallest region is never merged into it.
///
/// # Arguments
///
/// * `labels` - Converged label map, rewritten in place
/// * `label_count` - Upper bound on label values, as returned by
///   [`init_labels`](crate::conncomp::init_labels); the lookup table grows
///   past it if the map holds larger labels
///
/// # Returns
///
/// The number of distinct regions.
pub fn renumber_labels(labels: &mut LabelMap, label_count: u32) -> u32 {
    let mut sorted: Vec<u32> = labels.data().iter().copied().filter(|&l| l != 0).collect();
    if sorted.is_empty() {
        return 0;
    }
    sorted.sort_unstable();

    let largest = sorted[sorted.len() - 1] as usize;
    let mut mapping = vec![0u32; (label_count as usize).max(largest + 1)];

    let mut renumbered = 0u32;
    let mut previous = 0u32;
    for &label in &sorted {
        if label != previous {
            renumbered += 1;
            mapping[label as usize] = renumbered;
            previous = label;
        }
    }

    for label in labels.data_mut() {
        if *label != 0 {
            *label = mapping[*label as usize];
        }
    }

    debug!(
        "renumber_labels: {} labeled pixels in {} regions",
        sorted.len(),
        renumbered
    );
    renumbered
}
