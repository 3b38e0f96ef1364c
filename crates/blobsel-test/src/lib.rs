//! blobsel-test - Regression test framework for blobsel
//!
//! This crate provides the regression harness used by the `tests/*_reg.rs`
//! files of every crate, plus builders for synthetic test images.
//!
//! - **Compare** (default): run the checks and report failures
//! - **Display**: also write intermediate images for visual inspection
//!
//! # Usage
//!
//! ```ignore
//! use blobsel_test::RegParams;
//!
//! let mut rp = RegParams::new("conncomp");
//! rp.compare_values(2.0, count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;
pub mod synth;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};
pub use synth::{
    SimpleRng, make_binary_image, make_binary_rects, make_gray_image, random_binary_image,
};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // blobsel-test is at crates/blobsel-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
