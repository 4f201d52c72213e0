//! Square convolution kernels.
//!
//! A kernel is an odd-sized square of integer weights. Its normalization
//! divisor is the weight sum, or 1 when the weights sum to zero so that
//! differencing kernels (edge detection) are not rescaled.

use crate::error::{ImageError, ImageResult};

/// An odd-sized square matrix of integer weights, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kernel {
    size: usize,
    weights: Vec<i32>,
}

impl Kernel {
    /// Build a kernel from a row-major weight list.
    ///
    /// # Arguments
    /// * `size` - Side length; must be odd and non-zero
    /// * `weights` - `size * size` weights, row by row
    pub fn new(size: usize, weights: Vec<i32>) -> ImageResult<Self> {
        if size % 2 == 0 {
            return Err(ImageError::InvalidKernel(format!(
                "side length must be odd, got {size}"
            )));
        }
        if weights.len() != size * size {
            return Err(ImageError::InvalidKernel(format!(
                "expected {} weights for a {size}x{size} kernel, got {}",
                size * size,
                weights.len()
            )));
        }
        Ok(Kernel { size, weights })
    }

    /// Build a kernel from a fixed-size square array.
    ///
    /// Odd side length is checked at compile time.
    pub fn square<const N: usize>(rows: [[i32; N]; N]) -> Self {
        const { assert!(N % 2 == 1, "kernel side length must be odd") };
        Kernel {
            size: N,
            weights: rows.iter().flatten().copied().collect(),
        }
    }

    /// Build a kernel from nested rows of arbitrary length.
    pub fn from_rows(rows: &[Vec<i32>]) -> ImageResult<Self> {
        let size = rows.len();
        if let Some(bad) = rows.iter().find(|r| r.len() != size) {
            return Err(ImageError::InvalidKernel(format!(
                "kernel is not square: {size} rows but a row of length {}",
                bad.len()
            )));
        }
        Kernel::new(size, rows.concat())
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Distance from the center to the kernel edge.
    #[inline]
    pub fn half(&self) -> usize {
        self.size / 2
    }

    /// Weight at (`row`, `col`) inside the kernel.
    #[inline]
    pub fn weight(&self, row: usize, col: usize) -> i32 {
        self.weights[row * self.size + col]
    }

    pub fn sum(&self) -> i32 {
        self.weights.iter().sum()
    }

    /// Divisor applied to every convolution sum.
    pub fn normalization(&self) -> i32 {
        match self.sum() {
            0 => 1,
            s => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHARPEN: [[i32; 3]; 3] = [[-1, -2, -1], [-2, 28, -2], [-1, -2, -1]];
    const EDGES: [[i32; 3]; 3] = [[-1, -1, -1], [-1, 8, -1], [-1, -1, -1]];

    #[test]
    fn test_normalization_uses_sum() {
        assert_eq!(Kernel::square(SHARPEN).normalization(), 16);
        assert_eq!(Kernel::square([[1]]).normalization(), 1);
    }

    #[test]
    fn test_zero_sum_kernel_not_rescaled() {
        assert_eq!(Kernel::square(EDGES).sum(), 0);
        assert_eq!(Kernel::square(EDGES).normalization(), 1);
    }

    #[test]
    fn test_weight_is_row_major() {
        let k = Kernel::square(SHARPEN);
        assert_eq!(k.size(), 3);
        assert_eq!(k.half(), 1);
        assert_eq!(k.weight(1, 1), 28);
        assert_eq!(k.weight(0, 1), -2);
    }

    #[test]
    fn test_even_kernel_rejected() {
        let err = Kernel::new(2, vec![1, 1, 1, 1]).unwrap_err();
        assert!(matches!(err, ImageError::InvalidKernel(_)));
    }

    #[test]
    fn test_non_square_rows_rejected() {
        let rows = vec![vec![1, 1, 1], vec![1, 1], vec![1, 1, 1]];
        assert!(matches!(
            Kernel::from_rows(&rows),
            Err(ImageError::InvalidKernel(_))
        ));
    }

    #[test]
    fn test_from_rows_matches_square() {
        let rows: Vec<Vec<i32>> = SHARPEN.iter().map(|r| r.to_vec()).collect();
        assert_eq!(Kernel::from_rows(&rows).unwrap(), Kernel::square(SHARPEN));
    }
}
