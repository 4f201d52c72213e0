//! Fixed-size RGB pixel grid.
//!
//! A [`PixelImage`] owns a `height x width` grid of [`Pixel`] values. The
//! dimensions are fixed when the image is created; the only write path is
//! replacing the whole grid. Filters are run through [`PixelImage::apply`],
//! which hands the grid to the filter by value and installs whatever grid
//! comes back, so a filter cannot mutate a copy and forget to publish it.
//!
//! ## Host interop
//!
//! Hosts that hold decoded images as `(height, width, channels)` u8 arrays
//! can use [`PixelImage::from_array`] / [`PixelImage::to_array`]:
//! - **RGB**: (height, width, 3)
//! - **RGBA**: (height, width, 4) - alpha is ignored on the way in
//!
//! Output is always RGB.

use ndarray::{Array2, Array3, ArrayView2, ArrayView3};
use rand::RngCore;

use crate::error::{ImageError, ImageResult};
use crate::filters::{core::convolve, Filter};
use crate::kernel::Kernel;
use crate::pixel::{clamp_channel, Pixel};

/// Row-major pixel grid, indexed `[[row, col]]`.
pub type Grid = Array2<Pixel>;

/// An RGB image with immutable dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelImage {
    data: Grid,
}

impl PixelImage {
    /// Wrap an existing grid.
    ///
    /// Fails if the grid has no rows or no columns.
    pub fn new(data: Grid) -> ImageResult<Self> {
        let (height, width) = data.dim();
        if height == 0 || width == 0 {
            return Err(ImageError::EmptyImage { height, width });
        }
        Ok(PixelImage { data })
    }

    /// Image of the given size filled with one color.
    pub fn filled(height: usize, width: usize, pixel: Pixel) -> ImageResult<Self> {
        PixelImage::new(Array2::from_elem((height, width), pixel))
    }

    /// Build an image from a host array of shape (height, width, 3 or 4).
    pub fn from_array(input: ArrayView3<u8>) -> ImageResult<Self> {
        let (height, width, channels) = input.dim();
        if channels != 3 && channels != 4 {
            return Err(ImageError::UnsupportedChannels(channels));
        }
        let data = Array2::from_shape_fn((height, width), |(y, x)| {
            Pixel::from_rgb(input[[y, x, 0]], input[[y, x, 1]], input[[y, x, 2]])
        });
        PixelImage::new(data)
    }

    /// Export as an RGB array of shape (height, width, 3).
    pub fn to_array(&self) -> Array3<u8> {
        let (height, width) = self.data.dim();
        Array3::from_shape_fn((height, width, 3), |(y, x, c)| {
            self.data[[y, x]].channels()[c]
        })
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    /// Read-only view of the whole grid.
    pub fn data(&self) -> ArrayView2<'_, Pixel> {
        self.data.view()
    }

    /// Owned copy of the whole grid, for callers that want a working copy.
    pub fn snapshot(&self) -> Grid {
        self.data.clone()
    }

    /// Pixel at (`row`, `col`), if inside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Pixel> {
        self.data.get([row, col]).copied()
    }

    /// Replace the whole grid.
    ///
    /// The replacement must have exactly this image's dimensions.
    pub fn set_data(&mut self, grid: Grid) -> ImageResult<()> {
        let (height, width) = self.data.dim();
        let (found_height, found_width) = grid.dim();
        if (height, width) != (found_height, found_width) {
            return Err(ImageError::DimensionMismatch {
                height,
                width,
                found_height,
                found_width,
            });
        }
        self.data = grid;
        Ok(())
    }

    /// Run `filter` over the whole image.
    ///
    /// The grid is moved into the filter and the returned grid installed in
    /// its place. Blocks until the filter has processed every pixel.
    pub fn apply(&mut self, filter: &dyn Filter, rng: &mut dyn RngCore) {
        let (height, width) = self.data.dim();
        let _span = tracing::debug_span!("apply", filter = filter.name(), height, width).entered();

        let grid = std::mem::take(&mut self.data);
        let output = filter.render(grid, rng);
        debug_assert_eq!(output.dim(), (height, width), "filter changed image dimensions");
        self.data = output;

        tracing::trace!("filter applied");
    }

    /// Convolve the image with `kernel`, leaving border pixels unchanged.
    pub fn transform(&mut self, kernel: &Kernel) {
        self.data = convolve(self.data.view(), kernel);
    }

    /// Clamp an index into `[0, max]`.
    #[inline]
    pub fn coordinate(value: isize, max: usize) -> usize {
        value.clamp(0, max as isize) as usize
    }

    /// Clamp an intensity into `[0, 255]`.
    #[inline]
    pub fn color(value: i32) -> u8 {
        clamp_channel(value)
    }
}
