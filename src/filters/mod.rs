//! Filter modules for the pixel engine.
//!
//! ## Architecture
//!
//! Every filter implements [`Filter`]: it receives the image grid by value
//! and returns the grid to install. Filters hold only their own parameters
//! (kernel, distances, wave shape) and never keep a reference to an image.
//!
//! - **Fresh-grid filters** (convolution, ripple) read the input grid and
//!   build a new one, so no pixel is computed from partially updated data.
//! - **In-place filters** (flips, pixel swap, per-pixel remaps, mosaic)
//!   mutate the grid they were handed and return it.
//!
//! Randomness is passed in explicitly as `&mut dyn RngCore`; deterministic
//! filters ignore it.
//!
//! ## Filter Categories
//!
//! - **Pixel-wise**: negative, brighten ([`color_adjust`]), grayscale
//! - **Stylize**: thermal, sepia, mosaic
//! - **Convolution**: gaussian blur, soft blur ([`blur`]), laplacian, edgy
//!   ([`edge`]), unsharp mask ([`sharpen`])
//! - **Geometry**: flips, ripple
//! - **Noise**: pixel swap, grain
//! - **Composite**: pipelines, pencil sketch, nostalgic

use rand::RngCore;

use crate::image::Grid;

pub mod core;
pub mod grayscale;
pub mod color_adjust;
pub mod stylize;
pub mod blur;
pub mod edge;
pub mod sharpen;
pub mod geometry;
pub mod noise;
pub mod composite;

pub use self::core::KernelFilter;
pub use color_adjust::{Brighten, Negative};
pub use composite::{nostalgic, pencil_sketch, Pipeline};
pub use geometry::{EdgeMode, FlipHorizontal, FlipVertical, Ripple};
pub use grayscale::Grayscale;
pub use noise::{Grain, PixelSwap};
pub use stylize::{Mosaic, Sepia, Thermal};

/// A whole-image operation.
pub trait Filter: Send + Sync {
    /// Short identifier used in log output.
    fn name(&self) -> &'static str;

    /// Produce the filtered grid.
    ///
    /// The returned grid must have the same dimensions as `grid`.
    fn render(&self, grid: Grid, rng: &mut dyn RngCore) -> Grid;
}

impl<F: Filter + ?Sized> Filter for Box<F> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn render(&self, grid: Grid, rng: &mut dyn RngCore) -> Grid {
        (**self).render(grid, rng)
    }
}
