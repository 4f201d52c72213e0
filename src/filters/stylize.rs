//! Stylize filters: Thermal, Sepia, Mosaic.
//!
//! These are artistic effect filters. Thermal and sepia are per-pixel
//! remaps; mosaic averages fixed-size blocks in place.

use ndarray::s;
use rand::RngCore;

use super::noise::grain_offset;
use super::Filter;
use crate::image::Grid;
use crate::pixel::Pixel;

// ============================================================================
// Thermal
// ============================================================================

/// Luminance band upper bounds (exclusive) and their colors, coldest first.
const THERMAL_BANDS: [(i32, Pixel); 4] = [
    (50, Pixel::from_rgb(0, 0, 128)),
    (100, Pixel::from_rgb(0, 0, 255)),
    (150, Pixel::from_rgb(255, 255, 0)),
    (200, Pixel::from_rgb(255, 128, 0)),
];

/// Map luminance onto a five-band heat palette.
///
/// | Luminance | Color |
/// |-----------|-------|
/// | < 50 | dark blue (0, 0, 128) |
/// | < 100 | blue (0, 0, 255) |
/// | < 150 | yellow (255, 255, 0) |
/// | < 200 | orange (255, 128, 0) |
/// | otherwise | white |
#[derive(Debug, Clone, Copy, Default)]
pub struct Thermal;

impl Thermal {
    /// Heat color for one luminance value.
    pub fn band(luminance: i32) -> Pixel {
        THERMAL_BANDS
            .iter()
            .find(|(limit, _)| luminance < *limit)
            .map(|(_, color)| *color)
            .unwrap_or(Pixel::WHITE)
    }
}

impl Filter for Thermal {
    fn name(&self) -> &'static str {
        "thermal"
    }

    fn render(&self, mut grid: Grid, _rng: &mut dyn RngCore) -> Grid {
        grid.mapv_inplace(|p| Thermal::band(p.luminance()));
        grid
    }
}

// ============================================================================
// Sepia
// ============================================================================

/// Warm sepia tone, half-blended with the source, with optional grain.
///
/// Per pixel:
/// 1. sepia matrix, each channel truncated
/// 2. 50/50 integer blend with the source channel
/// 3. uniform grain in `[-grain, grain]`, drawn independently per channel
/// 4. one clamp to 0-255
///
/// No clamping happens between steps, so bright sepia values still pull
/// the grain result up before the final clamp.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sepia {
    grain: i32,
}

impl Sepia {
    /// Deterministic sepia tone.
    pub fn new() -> Self {
        Sepia { grain: 0 }
    }

    /// Sepia tone with film grain of the given range (negative treated as 0).
    pub fn with_grain(grain: i32) -> Self {
        Sepia {
            grain: grain.max(0),
        }
    }

    pub fn grain(&self) -> i32 {
        self.grain
    }

    /// Sepia matrix, truncated, before blending.
    pub fn tone(p: Pixel) -> [i32; 3] {
        let (r, g, b) = (p.red as f64, p.green as f64, p.blue as f64);
        [
            (0.393 * r + 0.769 * g + 0.189 * b) as i32,
            (0.349 * r + 0.686 * g + 0.168 * b) as i32,
            (0.272 * r + 0.534 * g + 0.131 * b) as i32,
        ]
    }
}

impl Filter for Sepia {
    fn name(&self) -> &'static str {
        "sepia"
    }

    fn render(&self, mut grid: Grid, rng: &mut dyn RngCore) -> Grid {
        for p in grid.iter_mut() {
            let tone = Sepia::tone(*p);
            let source = p.channels();
            let mut out = [0i32; 3];
            for c in 0..3 {
                let blended = (tone[c] + source[c] as i32) / 2;
                out[c] = blended + grain_offset(rng, self.grain);
            }
            *p = Pixel::new(out[0], out[1], out[2]);
        }
        grid
    }
}

// ============================================================================
// Mosaic
// ============================================================================

/// Replace each complete `block x block` tile with its average color.
///
/// Tiles start at (0, 0). Rows and columns past the last complete tile are
/// left untouched, so only images whose sides are multiples of the block
/// size are fully covered. Applying twice gives the same result as once.
#[derive(Debug, Clone, Copy)]
pub struct Mosaic {
    block: usize,
}

impl Mosaic {
    pub const DEFAULT_BLOCK_SIZE: usize = 5;

    /// Block sizes below 1 are raised to 1.
    pub fn new(block: usize) -> Self {
        Mosaic {
            block: block.max(1),
        }
    }

    pub fn block_size(&self) -> usize {
        self.block
    }
}

impl Default for Mosaic {
    fn default() -> Self {
        Mosaic::new(Self::DEFAULT_BLOCK_SIZE)
    }
}

impl Filter for Mosaic {
    fn name(&self) -> &'static str {
        "mosaic"
    }

    fn render(&self, mut grid: Grid, _rng: &mut dyn RngCore) -> Grid {
        let b = self.block;
        let (height, width) = grid.dim();
        if b > height || b > width {
            return grid;
        }
        let count = (b * b) as u64;

        for y0 in (0..height / b).map(|i| i * b) {
            for x0 in (0..width / b).map(|i| i * b) {
                let mut tile = grid.slice_mut(s![y0..y0 + b, x0..x0 + b]);

                let (mut r, mut g, mut bl) = (0u64, 0u64, 0u64);
                for p in tile.iter() {
                    r += p.red as u64;
                    g += p.green as u64;
                    bl += p.blue as u64;
                }

                tile.fill(Pixel::from_rgb(
                    (r / count) as u8,
                    (g / count) as u8,
                    (bl / count) as u8,
                ));
            }
        }
        grid
    }
}
