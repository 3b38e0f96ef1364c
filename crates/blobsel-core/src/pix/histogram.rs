//! Gray-level histogram

use super::Pix;
use crate::error::{Error, Result};

impl Pix {
    /// Compute the 256-bin gray histogram.
    ///
    /// # Arguments
    ///
    /// * `factor` - Subsampling factor; every `factor`-th pixel in both
    ///   directions is counted (1 counts every pixel)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `factor` is 0.
    pub fn gray_histogram(&self, factor: u32) -> Result<Vec<u32>> {
        if factor == 0 {
            return Err(Error::InvalidParameter("factor must be >= 1".to_string()));
        }

        let mut histogram = vec![0u32; 256];
        for y in (0..self.height()).step_by(factor as usize) {
            let row = self.row_data(y);
            for &val in row.iter().step_by(factor as usize) {
                histogram[val as usize] += 1;
            }
        }

        Ok(histogram)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_histogram() {
        let pix = Pix::from_data(4, 2, vec![0, 0, 255, 10, 10, 10, 255, 0]).unwrap();
        let hist = pix.gray_histogram(1).unwrap();
        assert_eq!(hist.len(), 256);
        assert_eq!(hist[0], 3);
        assert_eq!(hist[10], 3);
        assert_eq!(hist[255], 2);
        assert_eq!(hist.iter().sum::<u32>(), 8);
    }

    #[test]
    fn test_gray_histogram_subsampled() {
        let pix = Pix::from_data(4, 2, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let hist = pix.gray_histogram(2).unwrap();
        assert_eq!(hist[1], 1);
        assert_eq!(hist[3], 1);
        assert_eq!(hist.iter().sum::<u32>(), 2);
    }

    #[test]
    fn test_gray_histogram_zero_factor() {
        let pix = Pix::new(2, 2).unwrap();
        assert!(pix.gray_histogram(0).is_err());
    }
}
