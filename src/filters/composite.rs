//! Composite filters built from ordered pipelines of simpler ones.
//!
//! - **Pencil sketch**: grayscale -> laplacian -> negative. Dark lines on
//!   white paper.
//! - **Nostalgic**: 5x5 soft blur -> sepia with grain. Soft, warm and
//!   slightly noisy.
//!
//! Each stage consumes the full output of the previous one.

use rand::RngCore;

use super::blur::soft_blur;
use super::color_adjust::Negative;
use super::edge::laplacian;
use super::grayscale::Grayscale;
use super::stylize::Sepia;
use super::Filter;
use crate::image::Grid;

/// Grain range used by the nostalgic look.
pub const NOSTALGIC_GRAIN: i32 = 10;

/// Filters applied one after another, in insertion order.
pub struct Pipeline {
    name: &'static str,
    stages: Vec<Box<dyn Filter>>,
}

impl Pipeline {
    pub fn new(name: &'static str) -> Self {
        Pipeline {
            name,
            stages: Vec::new(),
        }
    }

    /// Append a stage (builder style).
    pub fn then(mut self, filter: impl Filter + 'static) -> Self {
        self.stages.push(Box::new(filter));
        self
    }

    /// Append a boxed stage.
    pub fn push(&mut self, filter: Box<dyn Filter>) {
        self.stages.push(filter);
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("name", &self.name)
            .field("stages", &self.stage_names())
            .finish()
    }
}

impl Filter for Pipeline {
    fn name(&self) -> &'static str {
        self.name
    }

    fn render(&self, grid: Grid, rng: &mut dyn RngCore) -> Grid {
        self.stages.iter().fold(grid, |grid, stage| {
            tracing::trace!(pipeline = self.name, stage = stage.name(), "stage");
            stage.render(grid, rng)
        })
    }
}

/// Grayscale, edge-detect, invert.
pub fn pencil_sketch() -> Pipeline {
    Pipeline::new("pencil_sketch")
        .then(Grayscale)
        .then(laplacian())
        .then(Negative)
}

/// Soft blur, then sepia blended half-and-half with grain.
pub fn nostalgic() -> Pipeline {
    nostalgic_with_grain(NOSTALGIC_GRAIN)
}

/// Nostalgic look with a custom grain range.
pub fn nostalgic_with_grain(grain: i32) -> Pipeline {
    Pipeline::new("nostalgic")
        .then(soft_blur())
        .then(Sepia::with_grain(grain))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::core::convolve;
    use crate::filters::blur::SOFT_BLUR_5X5;
    use crate::kernel::Kernel;
    use crate::pixel::Pixel;
    use crate::rng::create_rng;
    use ndarray::Array2;

    #[test]
    fn test_pencil_sketch_stage_order() {
        assert_eq!(
            pencil_sketch().stage_names(),
            vec!["grayscale", "laplacian", "negative"]
        );
    }

    #[test]
    fn test_nostalgic_stage_order() {
        assert_eq!(nostalgic().stage_names(), vec!["soft_blur", "sepia"]);
    }

    #[test]
    fn test_pencil_sketch_flat_image_interior_white() {
        let grid = Array2::from_elem((6, 6), Pixel::from_rgb(40, 180, 90));
        let out = pencil_sketch().render(grid, &mut create_rng(0));
        for y in 1..5 {
            for x in 1..5 {
                assert_eq!(out[[y, x]], Pixel::WHITE);
            }
        }
        // Border is the inverted gray level
        let gray = Pixel::from_rgb(40, 180, 90).luminance() as u8;
        assert_eq!(out[[0, 0]], Pixel::from_rgb(255 - gray, 255 - gray, 255 - gray));
    }

    #[test]
    fn test_pencil_sketch_draws_dark_line_on_edge() {
        let grid = Array2::from_shape_fn((5, 6), |(_, x)| {
            if x < 3 { Pixel::BLACK } else { Pixel::WHITE }
        });
        let out = pencil_sketch().render(grid, &mut create_rng(0));
        // Bright side of the step becomes a black line
        assert_eq!(out[[2, 3]], Pixel::BLACK);
        assert_eq!(out[[2, 1]], Pixel::WHITE);
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let grid = Array2::from_elem((3, 3), Pixel::from_rgb(1, 2, 3));
        let pipeline = Pipeline::new("empty");
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.render(grid.clone(), &mut create_rng(0)), grid);
    }

    #[test]
    fn test_push_appends_boxed_stages() {
        let mut pipeline = Pipeline::new("boxed");
        pipeline.push(Box::new(Grayscale));
        pipeline.push(Box::new(Negative));
        // A boxed filter is itself a filter
        let boxed: Box<dyn Filter> = Box::new(laplacian());
        let pipeline = pipeline.then(boxed);
        assert_eq!(pipeline.len(), 3);
        assert_eq!(pipeline.stage_names(), vec!["grayscale", "negative", "laplacian"]);

        let grid = Array2::from_elem((1, 1), Pixel::from_rgb(0, 0, 0));
        let out = pipeline.render(grid, &mut create_rng(0));
        assert_eq!(out[[0, 0]], Pixel::WHITE);
    }

    #[test]
    fn test_pipeline_order_matters() {
        let grid = Array2::from_elem((1, 1), Pixel::from_rgb(200, 200, 200));
        let a = Pipeline::new("a")
            .then(crate::filters::Brighten::default())
            .then(Negative);
        let b = Pipeline::new("b")
            .then(Negative)
            .then(crate::filters::Brighten::default());
        assert_eq!(a.render(grid.clone(), &mut create_rng(0))[[0, 0]], Pixel::BLACK);
        assert_eq!(
            b.render(grid, &mut create_rng(0))[[0, 0]],
            Pixel::from_rgb(131, 131, 131)
        );
    }

    #[test]
    fn test_nostalgic_without_grain_matches_manual_steps() {
        let grid = Array2::from_shape_fn((7, 7), |(y, x)| {
            Pixel::from_rgb((x * 30) as u8, (y * 30) as u8, 120)
        });
        let out = nostalgic_with_grain(0).render(grid.clone(), &mut create_rng(0));

        let blurred = convolve(grid.view(), &Kernel::square(SOFT_BLUR_5X5));
        let expected = Sepia::new().render(blurred, &mut create_rng(0));
        assert_eq!(out, expected);
    }

    #[test]
    fn test_nostalgic_seeded() {
        let grid = Array2::from_elem((8, 8), Pixel::from_rgb(100, 150, 200));
        let a = nostalgic().render(grid.clone(), &mut create_rng(21));
        let b = nostalgic().render(grid, &mut create_rng(21));
        assert_eq!(a, b);
    }
}
