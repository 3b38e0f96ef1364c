//! Area-ranked region selection
//!
//! Counts the pixels of every label, picks the largest regions with a
//! greedy "next largest after the previous pick" scan, and paints the
//! picked regions into a binary image.

use crate::error::RegionResult;
use blobsel_core::{BACKGROUND, FOREGROUND, LabelMap, Pix};

/// Count the pixels of every label
///
/// # Arguments
///
/// * `labels` - Label map, usually renumbered to `1..=label_count`
/// * `label_count` - Number of distinct labels
///
/// # Returns
///
/// A histogram indexed by label value. Slot 0 (background) is always 0.
pub fn label_histogram(labels: &LabelMap, label_count: u32) -> Vec<u32> {
    let len = (label_count as usize).max(labels.max_label() as usize) + 1;
    let mut histogram = vec![0u32; len];
    for &label in labels.data() {
        if label != 0 {
            histogram[label as usize] += 1;
        }
    }
    histogram
}

/// Pick up to `keep` labels with the largest areas
///
/// The first pick is the label with the largest count. Each later pick is
/// the largest count among labels whose count does not exceed the previous
/// pick's count and whose ID differs from the previous pick. Ties go to
/// the lowest label ID.
///
/// Only the immediately preceding pick is excluded, so when three or more
/// regions share a size a label can be picked again two rounds later.
/// Selection stops early once no label with a positive count qualifies.
pub fn select_largest_labels(histogram: &[u32], keep: u32) -> Vec<u32> {
    let mut selected = Vec::with_capacity(keep as usize);
    let mut previous: Option<(u32, u32)> = None;

    for _ in 0..keep {
        let mut best: Option<(u32, u32)> = None;
        for (label, &count) in histogram.iter().enumerate() {
            let label = label as u32;
            if let Some((prev_label, prev_count)) = previous
                && (count > prev_count || label == prev_label)
            {
                continue;
            }
            if count > best.map_or(0, |(_, c)| c) {
                best = Some((label, count));
            }
        }

        match best {
            Some(pick) => {
                selected.push(pick.0);
                previous = Some(pick);
            }
            None => break,
        }
    }

    selected
}

/// Paint the selected labels as foreground
///
/// Returns an image sized like `labels` with [`FOREGROUND`] where the label
/// is one of `selected` and [`BACKGROUND`] everywhere else, including all
/// background (label 0) pixels.
pub fn composite_labels(labels: &LabelMap, selected: &[u32]) -> RegionResult<Pix> {
    let data = labels
        .data()
        .iter()
        .map(|&label| {
            if label != 0 && selected.contains(&label) {
                FOREGROUND
            } else {
                BACKGROUND
            }
        })
        .collect();

    Ok(Pix::from_data(labels.width(), labels.height(), data)?)
}

/// List `(label, area)` for every label present, in label order
pub fn component_areas(labels: &LabelMap) -> Vec<(u32, u32)> {
    label_histogram(labels, labels.max_label())
        .into_iter()
        .enumerate()
        .filter(|&(_, count)| count > 0)
        .map(|(label, count)| (label as u32, count))
        .collect()
}
