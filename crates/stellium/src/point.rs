//! Points placed on the wheel.
//!
//! A point's identity, sign and original longitude never change. Only the display position is
//! rewritten, once, when a layout run finishes.

use serde::{Deserialize, Serialize};

use crate::sign::Sign;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "PointRecord")]
pub struct Point {
    id: String,
    sign: Sign,
    original_position: f64,
    display_position: f64,
}

impl Point {
    /// A point whose sign is derived from `original_position`.
    pub fn new(id: impl Into<String>, original_position: f64) -> Self {
        Self::with_sign(id, Sign::from_longitude(original_position), original_position)
    }

    /// A point with an explicitly supplied sign.
    pub fn with_sign(id: impl Into<String>, sign: Sign, original_position: f64) -> Self {
        Self {
            id: id.into(),
            sign,
            original_position,
            display_position: original_position,
        }
    }

    /// Starts the layout from a display position other than the original longitude.
    pub fn with_display_position(mut self, display_position: f64) -> Self {
        self.display_position = display_position;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn original_position(&self) -> f64 {
        self.original_position
    }

    pub fn display_position(&self) -> f64 {
        self.display_position
    }

    /// How far layout moved the point away from its true longitude.
    pub fn displacement(&self) -> f64 {
        self.display_position - self.original_position
    }

    pub(crate) fn set_display_position(&mut self, display_position: f64) {
        self.display_position = display_position;
    }
}

/// Wire form of a point. `sign` and `displayPosition` are optional and default to the values
/// derived from `originalPosition`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PointRecord {
    id: String,
    #[serde(default)]
    sign: Option<Sign>,
    original_position: f64,
    #[serde(default)]
    display_position: Option<f64>,
}

impl From<PointRecord> for Point {
    fn from(record: PointRecord) -> Self {
        let sign = record
            .sign
            .unwrap_or_else(|| Sign::from_longitude(record.original_position));
        Self {
            id: record.id,
            sign,
            original_position: record.original_position,
            display_position: record.display_position.unwrap_or(record.original_position),
        }
    }
}
