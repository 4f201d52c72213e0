//! Color adjustment filters: Negative, Brighten.
//!
//! These are pixel-wise operations that don't require spatial context;
//! every pixel is rewritten from its own channels only.

use rand::RngCore;

use super::Filter;
use crate::image::Grid;
use crate::pixel::Pixel;

// ============================================================================
// Negative
// ============================================================================

/// Invert every channel: `c -> 255 - c`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Negative;

impl Filter for Negative {
    fn name(&self) -> &'static str {
        "negative"
    }

    fn render(&self, mut grid: Grid, _rng: &mut dyn RngCore) -> Grid {
        grid.mapv_inplace(|p| Pixel::from_rgb(255 - p.red, 255 - p.green, 255 - p.blue));
        grid
    }
}

// ============================================================================
// Brighten
// ============================================================================

/// Add a fixed fraction of full scale to every channel, saturating at 255.
///
/// The amount is `percentage * 255 / 100` truncated, so the default 30%
/// adds 76. Repeated application keeps brightening.
#[derive(Debug, Clone, Copy)]
pub struct Brighten {
    percentage: i32,
}

impl Brighten {
    pub const DEFAULT_PERCENTAGE: i32 = 30;

    /// Negative percentages darken.
    pub fn new(percentage: i32) -> Self {
        Brighten { percentage }
    }

    /// Per-channel offset in 0-255 units.
    pub fn amount(&self) -> i32 {
        (self.percentage as f64 * 255.0 / 100.0) as i32
    }
}

impl Default for Brighten {
    fn default() -> Self {
        Brighten::new(Self::DEFAULT_PERCENTAGE)
    }
}

impl Filter for Brighten {
    fn name(&self) -> &'static str {
        "brighten"
    }

    fn render(&self, mut grid: Grid, _rng: &mut dyn RngCore) -> Grid {
        let amount = self.amount();
        tracing::trace!(amount, "brighten");
        grid.mapv_inplace(|p| p.map(|c| c + amount));
        grid
    }
}
