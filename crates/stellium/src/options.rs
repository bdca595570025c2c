use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sign::SIGN_WIDTH;

/// Symbol width as a fraction of the canvas, used for the default `theta`.
pub const DEFAULT_SYMBOL_SIZE: f64 = 0.055;
/// Placement radius as a fraction of the canvas, used for the default `theta`.
pub const DEFAULT_PLACEMENT_RADIUS: f64 = 0.295;
/// Points exactly `theta * (n - 1)` away from a cluster's first member are not absorbed.
pub const DEFAULT_CLUSTER_THRESHOLD: ClusterThreshold = ClusterThreshold::Strict;

/// Angle (degrees) a symbol occupies on the wheel.
///
/// Half the symbol width is treated as a chord of a circle of `placement_radius`; both values
/// are in the same unit (usually fractions of the canvas size).
pub fn theta_for_symbol(symbol_size: f64, placement_radius: f64) -> f64 {
    (2.0 * ((symbol_size / 2.0) / (2.0 * placement_radius)).asin()).to_degrees()
}

/// Comparison used by the clump scans at the `theta * (n - 1)` boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterThreshold {
    /// `distance < limit`
    #[default]
    Strict,
    /// `distance <= limit`
    Inclusive,
}

impl ClusterThreshold {
    pub fn admits(self, distance: f64, limit: f64) -> bool {
        match self {
            ClusterThreshold::Strict => distance < limit,
            ClusterThreshold::Inclusive => distance <= limit,
        }
    }
}

/// What happens to display positions before they are written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Leave values as computed; they may fall slightly outside `[0, 360)`.
    #[default]
    Raw,
    /// Fold every display position into `[0, 360)`.
    Wrap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpreadOptions {
    /// Minimum angular gap (degrees) between two adjacent symbols.
    pub theta: f64,
    pub threshold: ClusterThreshold,
    pub normalization: Normalization,
}

impl Default for SpreadOptions {
    fn default() -> Self {
        Self {
            theta: theta_for_symbol(DEFAULT_SYMBOL_SIZE, DEFAULT_PLACEMENT_RADIUS),
            threshold: DEFAULT_CLUSTER_THRESHOLD,
            normalization: Normalization::Raw,
        }
    }
}

impl SpreadOptions {
    pub fn with_theta(theta: f64) -> Self {
        Self {
            theta,
            ..Default::default()
        }
    }

    /// Parses options from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json).map_err(|e| Error::InvalidOptions {
            message: e.to_string(),
        })?;
        options.validate()?;
        Ok(options)
    }

    /// `theta` must leave room for at least two symbols per sign; the sign splitter and the
    /// spreader's bleed correction both rely on it.
    pub fn validate(&self) -> Result<()> {
        if !self.theta.is_finite() || self.theta <= 0.0 || self.theta >= SIGN_WIDTH {
            return Err(Error::InvalidTheta { theta: self.theta });
        }
        Ok(())
    }
}
