//! Threshold selection regression test
//!
//! Runs every selection method on synthetic bimodal images and checks
//! the resulting split.
//!
//! # Covered
//! - Otsu and iterative thresholds land between two flat gray levels
//! - Binarization output is strictly 0/255 and counts the bright pixels
//! - Kapur finds nothing to split when both classes are single-valued
//! - With noise around the two levels all three methods split in the gap

use blobsel_binarize::{ThresholdMethod, binarize, select_threshold};
use blobsel_core::{ImageFormat, Pix};
use blobsel_test::{RegParams, SimpleRng, make_gray_image};

const DARK: u8 = 40;
const BRIGHT: u8 = 200;

/// Dark frame with a bright 20x10 block in the middle
fn bimodal_image() -> Pix {
    make_gray_image(40, 30, |x, y| {
        if (10..30).contains(&x) && (10..20).contains(&y) {
            BRIGHT
        } else {
            DARK
        }
    })
}

#[test]
fn threshold_reg() {
    let mut rp = RegParams::new("threshold");

    let pix = bimodal_image();
    let bright_count = 20.0 * 10.0;

    // Test 1-6: Otsu and iterative split the two levels exactly
    for method in [ThresholdMethod::Otsu, ThresholdMethod::Iterative] {
        eprintln!("=== {:?} on clean bimodal image ===", method);
        let (t, binary) = binarize(&pix, method).expect("binarize");
        eprintln!("  threshold = {}", t);
        rp.compare_values(1.0, (t >= DARK && t < BRIGHT) as u8 as f64, 0.0);
        rp.compare_values(1.0, binary.is_binary() as u8 as f64, 0.0);
        // Methods that pick t == DARK keep the dark pixels too
        let expected = if t > DARK {
            bright_count
        } else {
            pix.pixel_count() as f64
        };
        rp.compare_values(expected, binary.count_nonzero() as f64, 0.0);
        rp.write_pix(&binary, ImageFormat::Png).expect("write binary");
    }

    // Test 7: every split of two flat levels has zero entropy
    let t = select_threshold(&pix, ThresholdMethod::Kapur).expect("kapur");
    rp.compare_values(0.0, t as f64, 0.0);

    // Test 8-10: noisy levels keep the split inside the gap
    eprintln!("=== noisy bimodal image ===");
    let mut rng = SimpleRng::new(7);
    let noisy = make_gray_image(40, 30, |x, y| {
        let noise = ((rng.next() >> 33) % 21) as u8;
        if (10..30).contains(&x) && (10..20).contains(&y) {
            BRIGHT - 10 + noise
        } else {
            DARK - 10 + noise
        }
    });
    for method in [
        ThresholdMethod::Otsu,
        ThresholdMethod::Kapur,
        ThresholdMethod::Iterative,
    ] {
        let t = select_threshold(&noisy, method).expect("select threshold");
        eprintln!("  {:?}: threshold = {}", method, t);
        rp.compare_values(1.0, (t >= DARK && t < BRIGHT - 10) as u8 as f64, 0.0);
    }

    // Test 11: iterative lands on the midpoint of the clean levels
    let t = select_threshold(&pix, ThresholdMethod::Iterative).expect("iterative");
    rp.compare_values(f64::from(DARK + BRIGHT) / 2.0, t as f64, 0.0);

    assert!(rp.cleanup(), "threshold regression test failed");
}
