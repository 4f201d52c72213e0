//! Grayscale conversion filter.
//!
//! Uses the ITU-R BT.601 luminance weights from [`crate::pixel`], truncated
//! to an integer, and writes the same value to all three channels.

use rand::RngCore;

use super::Filter;
use crate::image::Grid;
use crate::pixel::Pixel;

/// Replace every pixel with its luminance.
#[derive(Debug, Clone, Copy, Default)]
pub struct Grayscale;

impl Filter for Grayscale {
    fn name(&self) -> &'static str {
        "grayscale"
    }

    fn render(&self, mut grid: Grid, _rng: &mut dyn RngCore) -> Grid {
        grid.mapv_inplace(|p| {
            let gray = p.luminance();
            Pixel::new(gray, gray, gray)
        });
        grid
    }
}
