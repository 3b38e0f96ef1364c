//! Global threshold selection and binarization
//!
//! Provides three ways of picking a single threshold from the gray-level
//! histogram of an 8-bit image:
//! - Otsu's method (largest between-class variance)
//! - Kapur's method (largest summed class entropy)
//! - Iterative selection (midpoint of the two class means, repeated)
//!
//! For every method the classes are `[0..=t]` and `(t..=255]`, and a
//! threshold whose upper or lower class is empty is never chosen. When no
//! threshold qualifies (a uniform image) the result is 0.

use crate::{BinarizeError, BinarizeResult};
use blobsel_core::{BACKGROUND, FOREGROUND, Pix};
use log::debug;

/// Upper bound on rounds of [`iterative_threshold`]
pub const MAX_ITERATIVE_ROUNDS: u32 = 256;

/// Threshold selection method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThresholdMethod {
    /// Otsu's between-class variance
    #[default]
    Otsu,
    /// Kapur's maximum entropy
    Kapur,
    /// Iterative class-mean midpoint
    Iterative,
    /// A caller-supplied threshold
    Fixed(u8),
}

/// Convert a grayscale image to binary using a fixed threshold
///
/// Pixels below `threshold` become background (0), all others become
/// foreground (255). A threshold of 0 therefore turns every pixel on.
pub fn threshold_to_binary(pix: &Pix, threshold: u8) -> Pix {
    let mut out = pix.create_template().to_mut();
    for (dst, &src) in out.data_mut().iter_mut().zip(pix.data()) {
        *dst = if src < threshold { BACKGROUND } else { FOREGROUND };
    }
    out.into()
}

/// Pick a threshold for `pix` with the given method
pub fn select_threshold(pix: &Pix, method: ThresholdMethod) -> BinarizeResult<u8> {
    match method {
        ThresholdMethod::Otsu => otsu_threshold(pix),
        ThresholdMethod::Kapur => kapur_threshold(pix),
        ThresholdMethod::Iterative => iterative_threshold(pix),
        ThresholdMethod::Fixed(t) => Ok(t),
    }
}

/// Pick a threshold and binarize with it
///
/// # Returns
///
/// The chosen threshold and the 0/255 image.
pub fn binarize(pix: &Pix, method: ThresholdMethod) -> BinarizeResult<(u8, Pix)> {
    let threshold = select_threshold(pix, method)?;
    debug!("binarize: {:?} threshold {}", method, threshold);
    Ok((threshold, threshold_to_binary(pix, threshold)))
}

/// Compute Otsu's threshold for a grayscale image
///
/// Returns the threshold with the largest between-class variance
/// `w0 * w1 * (m0 - m1)^2`, where `w` are class weights and `m` class
/// means. Ties keep the lowest threshold.
pub fn otsu_threshold(pix: &Pix) -> BinarizeResult<u8> {
    let histogram = pix.gray_histogram(1)?;
    let total_count = pix.pixel_count() as u64;
    let total = total_count as f64;
    let total_sum: u64 = weighted_sum(&histogram, 0..=255);

    let mut threshold = 0u8;
    let mut max_variance = f64::MIN_POSITIVE;
    let mut lower_count = 0u64;
    let mut lower_sum = 0u64;

    for t in 0..=255u8 {
        let count = histogram[t as usize] as u64;
        lower_count += count;
        lower_sum += count * t as u64;
        let upper_count = total_count - lower_count;
        if lower_count == 0 || upper_count == 0 {
            continue;
        }

        let lower_mean = lower_sum as f64 / lower_count as f64;
        let upper_mean = (total_sum - lower_sum) as f64 / upper_count as f64;
        let diff = lower_mean - upper_mean;
        let variance = (lower_count as f64 / total) * (upper_count as f64 / total) * diff * diff;

        if variance > max_variance {
            threshold = t;
            max_variance = variance;
        }
    }

    debug!("otsu_threshold: {} (variance {:.3})", threshold, max_variance);
    Ok(threshold)
}

/// Compute Kapur's maximum-entropy threshold for a grayscale image
///
/// Each class histogram is normalized by its own pixel count and its
/// Shannon entropy (base 2) is taken. The threshold with the largest sum
/// of the two entropies wins, lowest threshold on ties.
pub fn kapur_threshold(pix: &Pix) -> BinarizeResult<u8> {
    let histogram = pix.gray_histogram(1)?;
    let total_count = pix.pixel_count() as u64;

    let mut threshold = 0u8;
    let mut max_entropy = f64::MIN_POSITIVE;
    let mut lower_count = 0u64;

    for t in 0..=255u8 {
        lower_count += histogram[t as usize] as u64;
        let upper_count = total_count - lower_count;
        if lower_count == 0 || upper_count == 0 {
            continue;
        }

        let split = t as usize + 1;
        let entropy = class_entropy(&histogram[..split], lower_count)
            + class_entropy(&histogram[split..], upper_count);

        if entropy > max_entropy {
            threshold = t;
            max_entropy = entropy;
        }
    }

    debug!("kapur_threshold: {} (entropy {:.4})", threshold, max_entropy);
    Ok(threshold)
}

/// Compute the iterative (isodata) threshold for a grayscale image
///
/// The first guess treats the four corner pixels as background and the
/// remaining pixels, averaged over the `(W-2)(H-2)` interior area, as the
/// object. After that the threshold moves to the rounded midpoint of the
/// two class means until it stops changing. If a class becomes empty the
/// current threshold is kept.
///
/// # Errors
///
/// Returns [`BinarizeError::InvalidParameters`] if the image is narrower
/// or shorter than 3 pixels, and [`BinarizeError::NotConverged`] if the
/// threshold still moves after [`MAX_ITERATIVE_ROUNDS`] rounds.
pub fn iterative_threshold(pix: &Pix) -> BinarizeResult<u8> {
    let (w, h) = (pix.width(), pix.height());
    if w < 3 || h < 3 {
        return Err(BinarizeError::InvalidParameters(format!(
            "iterative threshold needs at least 3x3 pixels, got {}x{}",
            w, h
        )));
    }

    let corners: u64 = [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)]
        .iter()
        .map(|&(x, y)| pix.get_pixel_unchecked(x, y) as u64)
        .sum();
    let total: u64 = pix.data().iter().map(|&v| v as u64).sum();

    let background_mean = corners as f64 / 4.0;
    let object_mean = (total - corners) as f64 / ((w - 2) as f64 * (h - 2) as f64);
    let mut threshold = round_half_up((object_mean + background_mean) / 2.0);

    let histogram = pix.gray_histogram(1)?;
    for round in 1..=MAX_ITERATIVE_ROUNDS {
        let Some(next) = class_mean_midpoint(&histogram, threshold) else {
            debug!("iterative_threshold: {} (one class empty, round {})", threshold, round);
            return Ok(threshold);
        };
        if next == threshold {
            debug!("iterative_threshold: {} after {} rounds", threshold, round);
            return Ok(threshold);
        }
        threshold = next;
    }

    Err(BinarizeError::NotConverged {
        iterations: MAX_ITERATIVE_ROUNDS,
    })
}

/// Rounded midpoint of the means of `[0..=t]` and `(t..=255]`
fn class_mean_midpoint(histogram: &[u32], t: u8) -> Option<u8> {
    let split = t as usize;
    let lower_count: u64 = histogram[..=split].iter().map(|&c| c as u64).sum();
    let upper_count: u64 = histogram[split + 1..].iter().map(|&c| c as u64).sum();
    if lower_count == 0 || upper_count == 0 {
        return None;
    }

    let lower_mean = weighted_sum(histogram, 0..=split) as f64 / lower_count as f64;
    let upper_mean = weighted_sum(histogram, split + 1..=255) as f64 / upper_count as f64;
    Some(round_half_up((lower_mean + upper_mean) / 2.0))
}

fn class_entropy(bins: &[u32], count: u64) -> f64 {
    let count = count as f64;
    bins.iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / count;
            -p * p.log2()
        })
        .sum()
}

fn weighted_sum(histogram: &[u32], range: std::ops::RangeInclusive<usize>) -> u64 {
    range
        .filter(|&v| v < histogram.len())
        .map(|v| v as u64 * histogram[v] as u64)
        .sum()
}

/// Add one half and truncate, saturating at 255
fn round_half_up(value: f64) -> u8 {
    (value + 0.5) as u8
}
