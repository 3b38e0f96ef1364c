//! Synthetic test images
//!
//! Every regression test builds its inputs here instead of loading files,
//! so the suites run without external data. The builders panic on zero
//! dimensions and out-of-range coordinates.

use blobsel_core::{FOREGROUND, Pix};

/// Create a binary image with the given pixels set to foreground (255)
///
/// # Panics
///
/// Panics if a coordinate is outside the image.
pub fn make_binary_image(w: u32, h: u32, pixels: &[(u32, u32)]) -> Pix {
    let mut pm = Pix::new(w, h).unwrap().to_mut();
    for &(x, y) in pixels {
        pm.set_pixel(x, y, FOREGROUND).unwrap();
    }
    pm.into()
}

/// Create a binary image from foreground rectangles `(x0, y0, x1, y1)`,
/// each covering `[x0, x1) × [y0, y1)`
pub fn make_binary_rects(w: u32, h: u32, rects: &[(u32, u32, u32, u32)]) -> Pix {
    let mut pm = Pix::new(w, h).unwrap().to_mut();
    for &(x0, y0, x1, y1) in rects {
        for y in y0..y1 {
            for x in x0..x1 {
                pm.set_pixel(x, y, FOREGROUND).unwrap();
            }
        }
    }
    pm.into()
}

/// Create a grayscale image where pixel (x, y) is `f(x, y)`
pub fn make_gray_image(w: u32, h: u32, mut f: impl FnMut(u32, u32) -> u8) -> Pix {
    let mut pm = Pix::new(w, h).unwrap().to_mut();
    for y in 0..h {
        for x in 0..w {
            pm.set_pixel_unchecked(x, y, f(x, y));
        }
    }
    pm.into()
}

/// Create a reproducible random binary image
///
/// Each pixel is foreground with probability `density`.
pub fn random_binary_image(w: u32, h: u32, density: f64, seed: u32) -> Pix {
    let mut rng = SimpleRng::new(seed);
    make_gray_image(w, h, |_, _| {
        if rng.next_f64() < density {
            FOREGROUND
        } else {
            0
        }
    })
}

/// Simple linear congruential generator for reproducible randomness
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Seeded generator
    pub fn new(seed: u32) -> Self {
        Self { state: seed as u64 }
    }

    /// Next raw 64-bit value
    pub fn next(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    /// Next value in `[0, 1]`
    pub fn next_f64(&mut self) -> f64 {
        (self.next() as f64) / (u64::MAX as f64)
    }
}
