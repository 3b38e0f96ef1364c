//! Label grid
//!
//! A `LabelMap` stores one `u32` label per pixel with the same row-major
//! layout as [`Pix`]. Label `0` is reserved for background; every other
//! value identifies a candidate region.

use crate::error::{Error, Result};
use crate::pix::Pix;

/// Per-pixel component labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl LabelMap {
    /// Create a label map with every pixel set to background (0).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        })
    }

    /// Create an all-background label map sized like `pix`.
    pub fn for_pix(pix: &Pix) -> Self {
        Self {
            width: pix.width(),
            height: pix.height(),
            data: vec![0; pix.pixel_count()],
        }
    }

    /// Create a label map from an existing row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero dimensions and
    /// [`Error::DataSizeMismatch`] if `data.len() != width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::DataSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Labels in row-major order.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Mutable labels in row-major order.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    /// Label at (x, y), or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[self.index(x, y)])
    }

    /// Set the label at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set(&mut self, x: u32, y: u32, label: u32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: y as usize * self.width as usize + x as usize,
                len: self.data.len(),
            });
        }
        let idx = self.index(x, y);
        self.data[idx] = label;
        Ok(())
    }

    /// Row-major index of (x, y).
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Check whether this map has the same dimensions as `pix`.
    pub fn sizes_match(&self, pix: &Pix) -> bool {
        self.width == pix.width() && self.height == pix.height()
    }

    /// Fail with [`Error::DimensionMismatch`] unless sized like `pix`.
    pub fn check_sizes(&self, pix: &Pix) -> Result<()> {
        if self.sizes_match(pix) {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                expected: (pix.width(), pix.height()),
                actual: (self.width, self.height),
            })
        }
    }

    /// Largest label present (0 for an all-background map).
    pub fn max_label(&self) -> u32 {
        self.data.iter().copied().max().unwrap_or(0)
    }

    /// Number of labeled (nonzero) pixels.
    pub fn count_labeled(&self) -> usize {
        self.data.iter().filter(|&&l| l != 0).count()
    }

    /// Distinct nonzero labels in ascending order.
    pub fn distinct_labels(&self) -> Vec<u32> {
        let mut labels: Vec<u32> = self.data.iter().copied().filter(|&l| l != 0).collect();
        labels.sort_unstable();
        labels.dedup();
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_background() {
        let map = LabelMap::new(4, 3).unwrap();
        assert_eq!(map.data().len(), 12);
        assert_eq!(map.max_label(), 0);
        assert_eq!(map.count_labeled(), 0);
        assert!(map.distinct_labels().is_empty());
        assert!(LabelMap::new(0, 3).is_err());
    }

    #[test]
    fn test_get_set() {
        let mut map = LabelMap::new(4, 3).unwrap();
        map.set(3, 2, 17).unwrap();
        assert_eq!(map.get(3, 2), Some(17));
        assert_eq!(map.data()[11], 17);
        assert_eq!(map.get(4, 0), None);
        assert!(map.set(0, 3, 1).is_err());
    }

    #[test]
    fn test_distinct_labels_sorted() {
        let map = LabelMap::from_data(3, 2, vec![5, 0, 2, 5, 9, 2]).unwrap();
        assert_eq!(map.distinct_labels(), vec![2, 5, 9]);
        assert_eq!(map.count_labeled(), 5);
        assert_eq!(map.max_label(), 9);
    }

    #[test]
    fn test_check_sizes() {
        let pix = Pix::new(4, 3).unwrap();
        assert!(LabelMap::for_pix(&pix).check_sizes(&pix).is_ok());
        let other = LabelMap::new(3, 4).unwrap();
        assert!(matches!(
            other.check_sizes(&pix),
            Err(Error::DimensionMismatch {
                expected: (4, 3),
                actual: (3, 4)
            })
        ));
    }
}
