use serde::{Deserialize, Serialize};
use stellium::{SpreadOptions, theta_for_symbol};

use crate::error::{Error, Result};

/// Sizes and radii of the chart layers.
///
/// Radii are distances from the canvas centre as a fraction of the canvas height, sizes are
/// sprite widths as a fraction of the canvas width. Text is sized in pixels. The house-number
/// ring and the logo are centred layers whose width is their fraction of the canvas width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartGeometry {
    pub planet_radius: f64,
    pub text_radius: f64,
    pub sign_radius: f64,
    pub planet_size: f64,
    pub sign_size: f64,
    pub text_size_px: u32,
    pub house_number_radius: f64,
    pub logo_radius: f64,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            planet_radius: 0.295,
            text_radius: 0.263,
            sign_radius: 0.235,
            planet_size: 0.055,
            sign_size: 0.040,
            text_size_px: 30,
            house_number_radius: 0.45,
            logo_radius: 0.07,
        }
    }
}

impl ChartGeometry {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let geometry: Self = serde_json::from_str(json).map_err(|e| Error::InvalidGeometry {
            message: e.to_string(),
        })?;
        geometry.validate()?;
        Ok(geometry)
    }

    pub fn validate(&self) -> Result<()> {
        let fractions = [
            ("planet_radius", self.planet_radius),
            ("text_radius", self.text_radius),
            ("sign_radius", self.sign_radius),
            ("planet_size", self.planet_size),
            ("sign_size", self.sign_size),
            ("house_number_radius", self.house_number_radius),
            ("logo_radius", self.logo_radius),
        ];
        for (name, value) in fractions {
            if !value.is_finite() || value <= 0.0 || value > 1.0 {
                return Err(Error::InvalidGeometry {
                    message: format!("{name} must be in (0, 1], got {value}"),
                });
            }
        }
        if self.planet_size / 2.0 > 2.0 * self.planet_radius {
            return Err(Error::InvalidGeometry {
                message: "planet_size is too large for planet_radius".to_string(),
            });
        }
        Ok(())
    }

    /// Angle a planet sprite occupies on its ring.
    pub fn theta(&self) -> f64 {
        theta_for_symbol(self.planet_size, self.planet_radius)
    }

    /// Layout options spacing planet sprites by [`Self::theta`].
    pub fn spread_options(&self) -> SpreadOptions {
        SpreadOptions::with_theta(self.theta())
    }
}
