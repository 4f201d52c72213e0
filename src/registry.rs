//! Ordered, name-keyed filter registry.
//!
//! Hosts populate their filter menu from a registry: names come back in
//! registration order and each name maps to one filter instance. Names
//! must be distinct.

use rand::RngCore;

use crate::config::EngineConfig;
use crate::error::{ImageError, ImageResult};
use crate::filters::blur::gaussian_blur;
use crate::filters::composite::{nostalgic_with_grain, pencil_sketch};
use crate::filters::edge::{edgy, laplacian};
use crate::filters::sharpen::unsharp_mask;
use crate::filters::{
    Brighten, Filter, FlipHorizontal, FlipVertical, Mosaic, Negative, PixelSwap, Ripple, Thermal,
};
use crate::image::PixelImage;

/// Display names of the default filter set, in menu order.
pub const DEFAULT_FILTER_NAMES: [&str; 14] = [
    "Flip Horizontal",
    "Flip Vertical",
    "Negative",
    "Gaussian Blur",
    "Laplacian",
    "Unsharp Mask",
    "Edgy",
    "Brighten",
    "Mosaic",
    "Pixel Swap",
    "Nostalgic",
    "Thermal Mask",
    "Pencil Sketch",
    "Ripple",
];

/// Filters keyed by display name, in registration order.
#[derive(Default)]
pub struct FilterRegistry {
    entries: Vec<(String, Box<dyn Filter>)>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        FilterRegistry::default()
    }

    /// The default filter set with default parameters.
    pub fn with_defaults() -> Self {
        FilterRegistry::build(&EngineConfig::default())
    }

    /// The default filter set tuned by `config`.
    pub fn from_config(config: &EngineConfig) -> ImageResult<Self> {
        config.validate()?;
        Ok(FilterRegistry::build(config))
    }

    fn build(config: &EngineConfig) -> Self {
        let ripple = Ripple::new(
            config.ripple.amplitude,
            config.ripple.wavelength,
            config.ripple.edge_mode,
        );
        let filters: [Box<dyn Filter>; 14] = [
            Box::new(FlipHorizontal),
            Box::new(FlipVertical),
            Box::new(Negative),
            Box::new(gaussian_blur()),
            Box::new(laplacian()),
            Box::new(unsharp_mask()),
            Box::new(edgy()),
            Box::new(Brighten::new(config.brighten_percentage)),
            Box::new(Mosaic::new(config.mosaic_block_size)),
            Box::new(PixelSwap::new(config.swap_distance)),
            Box::new(nostalgic_with_grain(config.grain)),
            Box::new(Thermal),
            Box::new(pencil_sketch()),
            Box::new(ripple),
        ];

        let entries = DEFAULT_FILTER_NAMES
            .iter()
            .map(|name| name.to_string())
            .zip(filters)
            .collect();
        FilterRegistry { entries }
    }

    /// Add a filter under a new display name.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        filter: Box<dyn Filter>,
    ) -> ImageResult<()> {
        let name = name.into();
        if self.contains(&name) {
            return Err(ImageError::DuplicateFilter(name));
        }
        tracing::debug!(name = %name, filter = filter.name(), "registered filter");
        self.entries.push((name, filter));
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn get(&self, name: &str) -> Option<&dyn Filter> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, f)| f.as_ref())
    }

    /// Display names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn Filter)> {
        self.entries.iter().map(|(n, f)| (n.as_str(), f.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply the filter registered under `name` to `image`.
    pub fn apply(
        &self,
        name: &str,
        image: &mut PixelImage,
        rng: &mut dyn RngCore,
    ) -> ImageResult<()> {
        let filter = self
            .get(name)
            .ok_or_else(|| ImageError::UnknownFilter(name.to_string()))?;
        image.apply(filter, rng);
        Ok(())
    }
}

impl std::fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
