//! blobsel-core - Basic data structures for blob selection
//!
//! This crate provides the containers shared by every stage of the
//! blobsel pipeline:
//!
//! - [`Pix`] / [`PixMut`] - 8-bit grayscale image (immutable / mutable)
//! - [`LabelMap`] - Per-pixel `u32` component labels, `0` is background
//! - [`ImageFormat`] - File formats understood by `blobsel-io`
//!
//! # Examples
//!
//! ```
//! use blobsel_core::{LabelMap, Pix};
//!
//! let pix = Pix::new(303, 243).unwrap();
//! let labels = LabelMap::for_pix(&pix);
//! assert_eq!(labels.width(), 303);
//! assert!(labels.sizes_match(&pix));
//! ```

pub mod error;
pub mod label_map;
pub mod pix;

pub use error::{Error, Result};
pub use label_map::LabelMap;
pub use pix::{ImageFormat, Pix, PixMut};

/// Sample value used for foreground pixels in binary images.
pub const FOREGROUND: u8 = 255;

/// Sample value used for background pixels in binary images.
pub const BACKGROUND: u8 = 0;
