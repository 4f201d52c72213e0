//! Edge filters: Laplacian and Edgy.
//!
//! The Laplacian weights sum to zero, so results are not rescaled and a
//! flat region maps to black. Edgy adds the identity back (sum 1), which
//! keeps the picture and exaggerates its edges.

use super::core::KernelFilter;
use crate::kernel::Kernel;

/// 8-neighbor Laplacian, sum 0.
pub const LAPLACIAN_3X3: [[i32; 3]; 3] = [[-1, -1, -1], [-1, 8, -1], [-1, -1, -1]];

/// Laplacian plus identity, sum 1.
pub const EDGY_3X3: [[i32; 3]; 3] = [[-1, -1, -1], [-1, 9, -1], [-1, -1, -1]];

/// Edge magnitude.
pub fn laplacian() -> KernelFilter {
    KernelFilter::new("laplacian", Kernel::square(LAPLACIAN_3X3))
}

/// Edge-emphasizing sharpen.
pub fn edgy() -> KernelFilter {
    KernelFilter::new("edgy", Kernel::square(EDGY_3X3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::Filter;
    use crate::pixel::Pixel;
    use crate::rng::create_rng;
    use ndarray::Array2;

    #[test]
    fn test_laplacian_flat_is_zero() {
        let grid = Array2::from_elem((5, 5), Pixel::from_rgb(128, 128, 128));
        let out = laplacian().render(grid, &mut create_rng(0));

        // Interior goes black, border keeps the input
        assert_eq!(out[[2, 2]], Pixel::BLACK);
        assert_eq!(out[[0, 0]], Pixel::from_rgb(128, 128, 128));
    }

    #[test]
    fn test_laplacian_detects_vertical_edge() {
        let grid = Array2::from_shape_fn((5, 5), |(_, x)| {
            if x < 2 { Pixel::BLACK } else { Pixel::from_rgb(100, 100, 100) }
        });
        let out = laplacian().render(grid, &mut create_rng(0));

        // Bright side of the step: 8*100 - 5*100 = 300 -> 255
        assert_eq!(out[[2, 2]], Pixel::WHITE);
        // Dark side: -300 -> 0
        assert_eq!(out[[2, 1]], Pixel::BLACK);
        // Inside the bright plateau
        assert_eq!(out[[2, 3]], Pixel::BLACK);
    }

    #[test]
    fn test_edgy_keeps_flat_image() {
        let grid = Array2::from_elem((4, 4), Pixel::from_rgb(10, 20, 30));
        let out = edgy().render(grid.clone(), &mut create_rng(0));
        assert_eq!(out, grid);
    }
}
