//! Geometric filters: mirroring and the ripple distortion.
//!
//! Flips swap pixels in place across the image's center line and are
//! their own inverse. Ripple shifts each row horizontally along a sine wave
//! and builds its output in a fresh grid, since every row must read the
//! unshifted source.

use ndarray::{Array2, Axis};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::Filter;
use crate::image::{Grid, PixelImage};

// ============================================================================
// Flips
// ============================================================================

/// Mirror left-right. The middle column of an odd width stays put.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlipHorizontal;

impl Filter for FlipHorizontal {
    fn name(&self) -> &'static str {
        "flip_horizontal"
    }

    fn render(&self, mut grid: Grid, _rng: &mut dyn RngCore) -> Grid {
        let width = grid.ncols();
        for mut row in grid.axis_iter_mut(Axis(0)) {
            for col in 0..width / 2 {
                row.swap(col, width - 1 - col);
            }
        }
        grid
    }
}

/// Mirror top-bottom. The middle row of an odd height stays put.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlipVertical;

impl Filter for FlipVertical {
    fn name(&self) -> &'static str {
        "flip_vertical"
    }

    fn render(&self, mut grid: Grid, _rng: &mut dyn RngCore) -> Grid {
        let height = grid.nrows();
        for mut column in grid.axis_iter_mut(Axis(1)) {
            for row in 0..height / 2 {
                column.swap(row, height - 1 - row);
            }
        }
        grid
    }
}

// ============================================================================
// Ripple
// ============================================================================

/// How ripple handles source columns past the image edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeMode {
    /// Wrap around to the opposite edge.
    #[default]
    Wrap,
    /// Repeat the edge column.
    Clamp,
}

/// Horizontal sine-wave distortion.
///
/// Row `r` is shifted by `round(amplitude * sin(r / wavelength))` columns:
/// output `(r, c)` takes input `(r, c + offset)`, with the source column
/// wrapped or clamped per [`EdgeMode`].
#[derive(Debug, Clone, Copy)]
pub struct Ripple {
    amplitude: f64,
    wavelength: f64,
    edge_mode: EdgeMode,
}

impl Ripple {
    pub const DEFAULT_AMPLITUDE: f64 = 10.0;
    pub const DEFAULT_WAVELENGTH: f64 = 8.0;

    /// # Arguments
    /// * `amplitude` - Peak shift in columns
    /// * `wavelength` - Rows per radian of the wave; non-positive disables the shift
    /// * `edge_mode` - Wrap or clamp at the image edge
    pub fn new(amplitude: f64, wavelength: f64, edge_mode: EdgeMode) -> Self {
        Ripple {
            amplitude,
            wavelength,
            edge_mode,
        }
    }

    pub fn edge_mode(&self) -> EdgeMode {
        self.edge_mode
    }

    /// Column shift for one row.
    pub fn offset(&self, row: usize) -> isize {
        if self.wavelength.is_nan() || self.wavelength <= 0.0 {
            return 0;
        }
        (self.amplitude * (row as f64 / self.wavelength).sin()).round() as isize
    }

    fn source_column(&self, col: usize, offset: isize, width: usize) -> usize {
        let width = width as isize;
        match self.edge_mode {
            EdgeMode::Wrap => {
                let shifted = col as isize + offset.rem_euclid(width);
                shifted.rem_euclid(width) as usize
            }
            EdgeMode::Clamp => {
                let shifted = col as isize + offset.clamp(-width, width);
                PixelImage::coordinate(shifted, width as usize - 1)
            }
        }
    }
}

impl Default for Ripple {
    fn default() -> Self {
        Ripple::new(
            Self::DEFAULT_AMPLITUDE,
            Self::DEFAULT_WAVELENGTH,
            EdgeMode::default(),
        )
    }
}

impl Filter for Ripple {
    fn name(&self) -> &'static str {
        "ripple"
    }

    fn render(&self, grid: Grid, _rng: &mut dyn RngCore) -> Grid {
        let (height, width) = grid.dim();
        if width == 0 {
            return grid;
        }
        let offsets: Vec<isize> = (0..height).map(|r| self.offset(r)).collect();

        Array2::from_shape_fn((height, width), |(r, c)| {
            grid[[r, self.source_column(c, offsets[r], width)]]
        })
    }
}
