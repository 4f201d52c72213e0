//! Noise filters: Pixel Swap, Grain.
//!
//! Both draw from the caller's generator, so a seeded generator gives
//! reproducible output.

use rand::{Rng, RngCore};

use super::Filter;
use crate::image::{Grid, PixelImage};

/// Uniform offset in `[-range, range]`; no draw when `range` is 0.
#[inline]
pub(crate) fn grain_offset(rng: &mut dyn RngCore, range: i32) -> i32 {
    if range <= 0 {
        0
    } else {
        rng.gen_range(-range..=range)
    }
}

// ============================================================================
// Pixel Swap
// ============================================================================

/// Swap every pixel with a random neighbor for a marbled texture.
///
/// The scan is row-major and swaps happen in place while it runs, so a
/// pixel can move several times in one pass. The target of each swap is
/// the current pixel plus a row and column offset drawn uniformly from
/// `[-distance, distance]`, clamped to the grid.
#[derive(Debug, Clone, Copy)]
pub struct PixelSwap {
    distance: usize,
}

impl PixelSwap {
    pub const DEFAULT_DISTANCE: usize = 3;

    pub fn new(distance: usize) -> Self {
        PixelSwap { distance }
    }

    pub fn distance(&self) -> usize {
        self.distance
    }
}

impl Default for PixelSwap {
    fn default() -> Self {
        PixelSwap::new(Self::DEFAULT_DISTANCE)
    }
}

impl Filter for PixelSwap {
    fn name(&self) -> &'static str {
        "pixel_swap"
    }

    fn render(&self, mut grid: Grid, rng: &mut dyn RngCore) -> Grid {
        let (height, width) = grid.dim();
        let d = isize::try_from(self.distance).unwrap_or(isize::MAX);

        for row in 0..height {
            for col in 0..width {
                let dr = rng.gen_range(-d..=d);
                let dc = rng.gen_range(-d..=d);
                let target_row =
                    PixelImage::coordinate((row as isize).saturating_add(dr), height - 1);
                let target_col =
                    PixelImage::coordinate((col as isize).saturating_add(dc), width - 1);

                grid.swap([row, col], [target_row, target_col]);
            }
        }
        grid
    }
}

// ============================================================================
// Grain
// ============================================================================

/// Add independent uniform noise in `[-range, range]` to each channel.
#[derive(Debug, Clone, Copy)]
pub struct Grain {
    range: i32,
}

impl Grain {
    pub const DEFAULT_RANGE: i32 = 10;

    /// Negative ranges are treated as 0.
    pub fn new(range: i32) -> Self {
        Grain {
            range: range.max(0),
        }
    }

    pub fn range(&self) -> i32 {
        self.range
    }
}

impl Default for Grain {
    fn default() -> Self {
        Grain::new(Self::DEFAULT_RANGE)
    }
}

impl Filter for Grain {
    fn name(&self) -> &'static str {
        "grain"
    }

    fn render(&self, mut grid: Grid, rng: &mut dyn RngCore) -> Grid {
        for p in grid.iter_mut() {
            *p = p.map(|c| c + grain_offset(rng, self.range));
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Pixel;
    use crate::rng::create_rng;
    use ndarray::Array2;

    fn numbered(height: usize, width: usize) -> Grid {
        Array2::from_shape_fn((height, width), |(y, x)| {
            Pixel::from_rgb((y * width + x) as u8, 0, 0)
        })
    }

    fn sorted_reds(grid: &Grid) -> Vec<u8> {
        let mut reds: Vec<u8> = grid.iter().map(|p| p.red).collect();
        reds.sort_unstable();
        reds
    }

    // ========================================================================
    // Pixel Swap Tests
    // ========================================================================

    #[test]
    fn test_pixel_swap_preserves_pixels() {
        let grid = numbered(9, 11);
        let out = PixelSwap::default().render(grid.clone(), &mut create_rng(5));
        assert_eq!(out.dim(), grid.dim());
        assert_eq!(sorted_reds(&out), sorted_reds(&grid));
    }

    #[test]
    fn test_pixel_swap_moves_something() {
        let grid = numbered(9, 11);
        let out = PixelSwap::default().render(grid.clone(), &mut create_rng(5));
        assert_ne!(out, grid);
    }

    #[test]
    fn test_pixel_swap_seeded() {
        let grid = numbered(6, 6);
        let a = PixelSwap::default().render(grid.clone(), &mut create_rng(11));
        let b = PixelSwap::default().render(grid, &mut create_rng(11));
        assert_eq!(a, b);
    }

    #[test]
    fn test_pixel_swap_zero_distance_is_noop() {
        let grid = numbered(4, 4);
        let out = PixelSwap::new(0).render(grid.clone(), &mut create_rng(1));
        assert_eq!(out, grid);
    }

    #[test]
    fn test_pixel_swap_single_pixel() {
        let grid = Array2::from_elem((1, 1), Pixel::WHITE);
        let out = PixelSwap::new(50).render(grid.clone(), &mut create_rng(1));
        assert_eq!(out, grid);
    }

    #[test]
    fn test_pixel_swap_huge_distance_clamps_to_grid() {
        let grid = numbered(4, 4);
        let out = PixelSwap::new(usize::MAX).render(grid.clone(), &mut create_rng(3));
        assert_eq!(sorted_reds(&out), sorted_reds(&grid));
    }

    // ========================================================================
    // Grain Tests
    // ========================================================================

    #[test]
    fn test_grain_within_range() {
        let grid = Array2::from_elem((10, 10), Pixel::from_rgb(128, 128, 128));
        let out = Grain::default().render(grid, &mut create_rng(9));
        for p in out.iter() {
            for c in p.channels() {
                assert!((118..=138).contains(&c));
            }
        }
    }

    #[test]
    fn test_grain_clamps_at_bounds() {
        let mut grid = Array2::from_elem((10, 10), Pixel::BLACK);
        grid[[0, 0]] = Pixel::WHITE;
        let out = Grain::new(40).render(grid, &mut create_rng(9));
        assert!(out.iter().skip(1).all(|p| p.red <= 40));
        assert!(out[[0, 0]].red >= 215);
    }

    #[test]
    fn test_grain_zero_is_noop() {
        let grid = numbered(3, 3);
        let out = Grain::new(0).render(grid.clone(), &mut create_rng(9));
        assert_eq!(out, grid);
    }
}
