//! Core utilities shared by multiple filters:
//! - Kernel convolution with copy-unchanged borders
//! - [`KernelFilter`], the filter wrapper around a fixed kernel

use ndarray::{s, Array2, ArrayView2, Zip};
use rand::RngCore;

use super::Filter;
use crate::image::Grid;
use crate::kernel::Kernel;
use crate::pixel::Pixel;

/// Convolve a grid with a square kernel.
///
/// Every interior pixel (full kernel neighborhood inside the grid) gets the
/// weighted sum of its neighborhood divided by the kernel's normalization,
/// clamped per channel. Pixels within `kernel.half()` of an edge are copied
/// unchanged. The input is only read; results go into a fresh grid.
///
/// # Arguments
/// * `input` - Source grid
/// * `kernel` - Odd-sized square kernel
///
/// # Returns
/// New grid with the same dimensions as `input`
pub fn convolve(input: ArrayView2<Pixel>, kernel: &Kernel) -> Array2<Pixel> {
    let (height, width) = input.dim();
    let size = kernel.size();
    let half = kernel.half();
    let mut output = input.to_owned();

    if height < size || width < size {
        return output;
    }

    let norm = kernel.normalization();
    let interior = output.slice_mut(s![half..height - half, half..width - half]);

    // Interior index (y, x) is the top-left corner of the neighborhood
    let zip = Zip::indexed(interior);
    #[cfg(feature = "parallel")]
    zip.par_for_each(|(y, x), px| *px = convolve_at(&input, kernel, y, x, norm));
    #[cfg(not(feature = "parallel"))]
    zip.for_each(|(y, x), px| *px = convolve_at(&input, kernel, y, x, norm));

    output
}

#[inline]
fn convolve_at(
    input: &ArrayView2<Pixel>,
    kernel: &Kernel,
    top: usize,
    left: usize,
    norm: i32,
) -> Pixel {
    let size = kernel.size();
    let (mut r, mut g, mut b) = (0i32, 0i32, 0i32);

    for ky in 0..size {
        for kx in 0..size {
            let w = kernel.weight(ky, kx);
            let p = input[[top + ky, left + kx]];
            r += p.red as i32 * w;
            g += p.green as i32 * w;
            b += p.blue as i32 * w;
        }
    }

    Pixel::new(r / norm, g / norm, b / norm)
}

/// Filter that convolves the image with one fixed kernel.
#[derive(Debug, Clone)]
pub struct KernelFilter {
    name: &'static str,
    kernel: Kernel,
}

impl KernelFilter {
    pub fn new(name: &'static str, kernel: Kernel) -> Self {
        KernelFilter { name, kernel }
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }
}

impl Filter for KernelFilter {
    fn name(&self) -> &'static str {
        self.name
    }

    fn render(&self, grid: Grid, _rng: &mut dyn RngCore) -> Grid {
        convolve(grid.view(), &self.kernel)
    }
}
