//! Engine configuration.
//!
//! All tunables of the default filter set, with defaults matching the
//! classic look (30% brighten, 5 px mosaic, swap distance 3, ripple
//! amplitude 10 / wavelength 8 with wrapping, grain 10). Every field is
//! optional in JSON; missing fields take their default.
//!
//! ```json
//! { "mosaic_block_size": 8, "ripple": { "edge_mode": "clamp" }, "seed": 7 }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ImageError, ImageResult};
use crate::filters::composite::NOSTALGIC_GRAIN;
use crate::filters::{Brighten, EdgeMode, Mosaic, PixelSwap, Ripple};
use crate::rng::{create_rng, entropy_rng, FilterRng};

/// Ripple wave shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RippleConfig {
    pub amplitude: f64,
    pub wavelength: f64,
    pub edge_mode: EdgeMode,
}

impl Default for RippleConfig {
    fn default() -> Self {
        RippleConfig {
            amplitude: Ripple::DEFAULT_AMPLITUDE,
            wavelength: Ripple::DEFAULT_WAVELENGTH,
            edge_mode: EdgeMode::Wrap,
        }
    }
}

/// Tunables for the default filter registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Brighten step as a percentage of full scale, -100 to 100.
    pub brighten_percentage: i32,
    /// Mosaic tile side in pixels, at least 1.
    pub mosaic_block_size: usize,
    /// Maximum pixel swap offset per axis.
    pub swap_distance: usize,
    pub ripple: RippleConfig,
    /// Nostalgic grain range, at least 0.
    pub grain: i32,
    /// Seed for the stochastic filters; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            brighten_percentage: Brighten::DEFAULT_PERCENTAGE,
            mosaic_block_size: Mosaic::DEFAULT_BLOCK_SIZE,
            swap_distance: PixelSwap::DEFAULT_DISTANCE,
            ripple: RippleConfig::default(),
            grain: NOSTALGIC_GRAIN,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub const MAX_SWAP_DISTANCE: usize = 1024;
    pub const MAX_MOSAIC_BLOCK_SIZE: usize = 4096;
    pub const MAX_RIPPLE_AMPLITUDE: f64 = 1e6;

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> ImageResult<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value is in range.
    pub fn validate(&self) -> ImageResult<()> {
        if !(-100..=100).contains(&self.brighten_percentage) {
            return Err(ImageError::InvalidParameter {
                name: "brighten_percentage",
                message: format!("{} is outside -100..=100", self.brighten_percentage),
            });
        }
        if !(1..=Self::MAX_MOSAIC_BLOCK_SIZE).contains(&self.mosaic_block_size) {
            return Err(ImageError::InvalidParameter {
                name: "mosaic_block_size",
                message: format!(
                    "{} is outside 1..={}",
                    self.mosaic_block_size,
                    Self::MAX_MOSAIC_BLOCK_SIZE
                ),
            });
        }
        if self.swap_distance > Self::MAX_SWAP_DISTANCE {
            return Err(ImageError::InvalidParameter {
                name: "swap_distance",
                message: format!(
                    "{} exceeds {}",
                    self.swap_distance,
                    Self::MAX_SWAP_DISTANCE
                ),
            });
        }
        if self.ripple.amplitude.is_nan()
            || self.ripple.amplitude.abs() > Self::MAX_RIPPLE_AMPLITUDE
        {
            return Err(ImageError::InvalidParameter {
                name: "ripple.amplitude",
                message: format!(
                    "{} is outside -{max}..={max}",
                    self.ripple.amplitude,
                    max = Self::MAX_RIPPLE_AMPLITUDE
                ),
            });
        }
        if !(self.ripple.wavelength.is_finite() && self.ripple.wavelength > 0.0) {
            return Err(ImageError::InvalidParameter {
                name: "ripple.wavelength",
                message: format!("{} must be finite and positive", self.ripple.wavelength),
            });
        }
        if self.grain < 0 {
            return Err(ImageError::InvalidParameter {
                name: "grain",
                message: format!("{} is negative", self.grain),
            });
        }
        Ok(())
    }

    /// Generator for the stochastic filters.
    pub fn rng(&self) -> FilterRng {
        match self.seed {
            Some(seed) => create_rng(seed),
            None => entropy_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(EngineConfig::from_json("{}").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = EngineConfig::from_json(
            r#"{ "mosaic_block_size": 8, "ripple": { "edge_mode": "clamp" }, "seed": 7 }"#,
        )
        .unwrap();
        assert_eq!(config.mosaic_block_size, 8);
        assert_eq!(config.ripple.edge_mode, EdgeMode::Clamp);
        assert_eq!(config.ripple.amplitude, 10.0);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.swap_distance, 3);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(matches!(
            EngineConfig::from_json(r#"{ "blur_radius": 3 }"#),
            Err(ImageError::Config(_))
        ));
    }

    #[test]
    fn test_zero_block_rejected() {
        let err = EngineConfig::from_json(r#"{ "mosaic_block_size": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ImageError::InvalidParameter { name: "mosaic_block_size", .. }
        ));
    }

    #[test]
    fn test_oversized_values_rejected() {
        let cases = [
            (r#"{ "swap_distance": 18446744073709551615 }"#, "swap_distance"),
            (r#"{ "mosaic_block_size": 8589934592 }"#, "mosaic_block_size"),
            (r#"{ "ripple": { "amplitude": 1e300 } }"#, "ripple.amplitude"),
            (r#"{ "ripple": { "amplitude": -2e6 } }"#, "ripple.amplitude"),
        ];
        for (json, field) in cases {
            match EngineConfig::from_json(json) {
                Err(ImageError::InvalidParameter { name, .. }) => assert_eq!(name, field),
                other => panic!("{json} gave {other:?}"),
            }
        }
    }

    #[test]
    fn test_limits_accepted() {
        let config = EngineConfig {
            swap_distance: EngineConfig::MAX_SWAP_DISTANCE,
            mosaic_block_size: EngineConfig::MAX_MOSAIC_BLOCK_SIZE,
            ripple: RippleConfig {
                amplitude: -EngineConfig::MAX_RIPPLE_AMPLITUDE,
                ..RippleConfig::default()
            },
            ..EngineConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_wavelength_rejected() {
        let config = EngineConfig {
            ripple: RippleConfig {
                wavelength: 0.0,
                ..RippleConfig::default()
            },
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_brighten_range() {
        let config = EngineConfig {
            brighten_percentage: 150,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_seeded_rng_reproducible() {
        use rand::Rng;
        let config = EngineConfig {
            seed: Some(99),
            ..EngineConfig::default()
        };
        assert_eq!(config.rng().gen::<u64>(), config.rng().gen::<u64>());
    }

    #[test]
    fn test_round_trips_through_json() {
        let config = EngineConfig {
            grain: 4,
            seed: Some(1),
            ..EngineConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(EngineConfig::from_json(&json).unwrap(), config);
    }
}
