//! snapfilter
//!
//! In-memory RGB filter engine: kernel convolution, geometric flips, color
//! remapping, stochastic pixel displacement, and composite filters built
//! from simpler ones. Decoding, windowing and UI belong to the host; the
//! host hands the engine a [`PixelImage`] and picks filters to apply.
//!
//! ## Image Model
//! - [`Pixel`]: three `u8` channels; arithmetic results are clamped to 0-255
//! - [`PixelImage`]: fixed `height x width` grid, replaced wholesale by each
//!   filter application
//!
//! ## Filter Architecture
//! Every filter implements [`Filter`]. [`PixelImage::apply`] moves the grid
//! into the filter and installs the grid it returns. Stochastic filters draw
//! from a caller-supplied generator (see [`rng`]), so seeded runs are
//! reproducible.
//!
//! ```
//! use snapfilter::{create_rng, FilterRegistry, Pixel, PixelImage};
//!
//! let mut image = PixelImage::filled(10, 10, Pixel::from_rgb(200, 200, 200)).unwrap();
//! let registry = FilterRegistry::with_defaults();
//! registry.apply("Brighten", &mut image, &mut create_rng(1)).unwrap();
//! assert_eq!(image.get(0, 0), Some(Pixel::WHITE));
//! ```

pub mod config;
pub mod error;
pub mod filters;
pub mod image;
pub mod kernel;
pub mod pixel;
pub mod registry;
pub mod rng;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{EngineConfig, RippleConfig};
pub use error::{ImageError, ImageResult};
pub use filters::Filter;
pub use image::{Grid, PixelImage};
pub use kernel::Kernel;
pub use pixel::Pixel;
pub use registry::{FilterRegistry, DEFAULT_FILTER_NAMES};
pub use rng::{create_rng, entropy_rng, FilterRng};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::config::EngineConfig;
    use crate::error::ImageError;
    use crate::image::PixelImage;
    use crate::registry::{FilterRegistry, DEFAULT_FILTER_NAMES};
    use crate::rng::create_rng;

    fn to_py_err(err: ImageError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    /// Apply a named filter to an (H, W, 3) or (H, W, 4) u8 image.
    ///
    /// Returns a new (H, W, 3) RGB array.
    ///
    /// # Arguments
    /// * `image` - Input image; alpha, if present, is ignored
    /// * `name` - Display name, e.g. "Pencil Sketch"
    /// * `seed` - Seed for stochastic filters; overrides the config seed
    /// * `config` - Optional JSON engine config
    #[pyfunction]
    #[pyo3(signature = (image, name, seed=None, config=None))]
    pub fn apply_filter<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        name: &str,
        seed: Option<u64>,
        config: Option<&str>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let config = match config {
            Some(json) => EngineConfig::from_json(json).map_err(to_py_err)?,
            None => EngineConfig::default(),
        };
        let registry = FilterRegistry::from_config(&config).map_err(to_py_err)?;
        let mut rng = match seed {
            Some(seed) => create_rng(seed),
            None => config.rng(),
        };

        let mut img = PixelImage::from_array(image.as_array()).map_err(to_py_err)?;
        registry.apply(name, &mut img, &mut rng).map_err(to_py_err)?;
        Ok(img.to_array().into_pyarray(py))
    }

    /// Display names of the built-in filters, in menu order.
    #[pyfunction]
    pub fn filter_names() -> Vec<&'static str> {
        DEFAULT_FILTER_NAMES.to_vec()
    }

    #[pymodule]
    pub fn snapfilter(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(apply_filter, m)?)?;
        m.add_function(wrap_pyfunction!(filter_names, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::snapfilter;
