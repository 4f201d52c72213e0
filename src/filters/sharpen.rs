//! Sharpen filter: Unsharp Mask.

use super::core::KernelFilter;
use crate::kernel::Kernel;

/// Strong center weight against a blurred ring, sum 16.
pub const UNSHARP_3X3: [[i32; 3]; 3] = [[-1, -2, -1], [-2, 28, -2], [-1, -2, -1]];

/// Unsharp masking in a single 3x3 pass.
pub fn unsharp_mask() -> KernelFilter {
    KernelFilter::new("unsharp_mask", Kernel::square(UNSHARP_3X3))
}
