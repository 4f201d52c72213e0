//! WebAssembly exports.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Canvas
//! `ImageData` is RGBA, so input and output are flat RGBA byte arrays
//! (length = width * height * 4). Alpha is ignored by the filters and
//! written back as fully opaque.

use ndarray::Array3;
use wasm_bindgen::prelude::*;

use crate::image::PixelImage;
use crate::registry::{FilterRegistry, DEFAULT_FILTER_NAMES};
use crate::rng::create_rng;

// ============================================================================
// Filter application
// ============================================================================

/// Apply a named filter to an RGBA u8 image.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `name` - Display name, e.g. "Ripple"
/// * `seed` - Seed for the stochastic filters
///
/// # Returns
/// Flat array of RGBA bytes with alpha set to 255
#[wasm_bindgen]
pub fn apply_filter_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    name: &str,
    seed: u64,
) -> Result<Vec<u8>, JsValue> {
    let input = Array3::from_shape_vec((height, width, 4), data.to_vec())
        .map_err(|e| JsValue::from_str(&format!("invalid dimensions: {e}")))?;

    let mut image =
        PixelImage::from_array(input.view()).map_err(|e| JsValue::from_str(&e.to_string()))?;
    FilterRegistry::with_defaults()
        .apply(name, &mut image, &mut create_rng(seed))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(to_rgba(&image))
}

// ============================================================================
// Filter listing
// ============================================================================

/// Display names of the built-in filters, in menu order.
#[wasm_bindgen]
pub fn filter_names_wasm() -> Vec<String> {
    DEFAULT_FILTER_NAMES.iter().map(|n| n.to_string()).collect()
}

fn to_rgba(image: &PixelImage) -> Vec<u8> {
    let mut out = Array3::from_elem((image.height(), image.width(), 4), 255u8);
    for ((y, x), pixel) in image.data().indexed_iter() {
        for (c, value) in pixel.channels().into_iter().enumerate() {
            out[[y, x, c]] = value;
        }
    }
    out.into_raw_vec_and_offset().0
}
