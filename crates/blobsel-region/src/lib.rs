//! blobsel-region - Connected regions and largest-region extraction
//!
//! This crate provides:
//!
//! - **Label initialization** - A unique label per foreground pixel
//! - **Propagation passes** - Top-down and bottom-up minimum-label merges
//! - **Convergence** - Repeating the passes until no label changes
//! - **Renumbering** - Compacting labels into `1..=count`
//! - **Selection** - Ranking regions by area and painting the largest
//!
//! # Examples
//!
//! ## Keeping the two largest regions
//!
//! ```
//! use blobsel_core::Pix;
//! use blobsel_region::{ExtractOptions, extract_largest_components};
//!
//! let mut pm = Pix::new(12, 6).unwrap().to_mut();
//! for (x, y) in [(1, 1), (2, 1), (3, 1), (6, 2), (7, 2), (9, 4)] {
//!     pm.set_pixel(x, y, 255).unwrap();
//! }
//! let pix: Pix = pm.into();
//!
//! let options = ExtractOptions::new().with_keep(2);
//! let out = extract_largest_components(&pix, &options).unwrap();
//! assert_eq!(out.count_nonzero(), 5);
//! ```
//!
//! ## Inspecting labels
//!
//! ```
//! use blobsel_core::Pix;
//! use blobsel_region::{component_areas, label_components};
//!
//! let mut pm = Pix::new(8, 5).unwrap().to_mut();
//! for (x, y) in [(1, 1), (2, 2), (5, 3)] {
//!     pm.set_pixel(x, y, 255).unwrap();
//! }
//! let pix: Pix = pm.into();
//! let labeling = label_components(&pix, None).unwrap();
//! assert_eq!(labeling.count, 2);
//! assert_eq!(component_areas(&labeling.labels), vec![(1, 2), (2, 1)]);
//! ```

pub mod conncomp;
pub mod error;
pub mod extract;
pub mod label;
pub mod select;

// Re-export core types
pub use blobsel_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export conncomp types and functions
pub use conncomp::{
    ComponentLabeling, ScanDirection, bottom_up_pass, converge_labels, default_iteration_cap,
    init_labels, label_components, propagate_pass, top_down_pass,
};

// Re-export labeling and selection functions
pub use extract::{ExtractOptions, extract_largest_components};
pub use label::renumber_labels;
pub use select::{component_areas, composite_labels, label_histogram, select_largest_labels};
