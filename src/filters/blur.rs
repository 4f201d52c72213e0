//! Blur filters: Gaussian (3x3) and Soft (5x5).
//!
//! Both are plain kernel convolutions through [`KernelFilter`]; borders
//! within half a kernel of the edge are copied unchanged.

use super::core::KernelFilter;
use crate::kernel::Kernel;

/// 3x3 Gaussian weights, sum 16.
pub const GAUSSIAN_3X3: [[i32; 3]; 3] = [[1, 2, 1], [2, 4, 2], [1, 2, 1]];

/// 5x5 center-weighted soft blur, sum 36. Leaves a two pixel border.
pub const SOFT_BLUR_5X5: [[i32; 5]; 5] = [
    [1, 1, 1, 1, 1],
    [1, 2, 2, 2, 1],
    [1, 2, 4, 2, 1],
    [1, 2, 2, 2, 1],
    [1, 1, 1, 1, 1],
];

/// Low-pass 3x3 Gaussian smoothing.
pub fn gaussian_blur() -> KernelFilter {
    KernelFilter::new("gaussian_blur", Kernel::square(GAUSSIAN_3X3))
}

/// Wider 5x5 smoothing used by the nostalgic look.
pub fn soft_blur() -> KernelFilter {
    KernelFilter::new("soft_blur", Kernel::square(SOFT_BLUR_5X5))
}
