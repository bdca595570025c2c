//! The twelve 30° sectors of the wheel and the sector arithmetic shared by every stage.
//!
//! Sector arithmetic uses floored division so that display positions pushed below 0° or past
//! 360° by spreading still land in a well-defined neighbouring sector (`-6.75` is in sector
//! `-1`, `364` in sector `12`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Angular width of a single sign.
pub const SIGN_WIDTH: f64 = 30.0;
/// One full turn, in degrees.
pub const FULL_CIRCLE: f64 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// The sign an ecliptic longitude falls in. Longitudes outside `[0, 360)` are folded back
    /// onto the circle first.
    pub fn from_longitude(longitude: f64) -> Self {
        let idx = sector_index(normalize_degrees(longitude)).clamp(0, 11) as usize;
        Self::ALL[idx]
    }

    /// Three-letter abbreviation (`Ari`, `Tau`, ...).
    pub fn abbrev(self) -> &'static str {
        match self {
            Sign::Aries => "Ari",
            Sign::Taurus => "Tau",
            Sign::Gemini => "Gem",
            Sign::Cancer => "Can",
            Sign::Leo => "Leo",
            Sign::Virgo => "Vir",
            Sign::Libra => "Lib",
            Sign::Scorpio => "Sco",
            Sign::Sagittarius => "Sag",
            Sign::Capricorn => "Cap",
            Sign::Aquarius => "Aqu",
            Sign::Pisces => "Pis",
        }
    }

    pub fn from_abbrev(abbrev: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.abbrev().eq_ignore_ascii_case(abbrev))
    }

    /// First degree of the sign on the wheel.
    pub fn start(self) -> f64 {
        f64::from(self.index()) * SIGN_WIDTH
    }
}

impl TryFrom<u8> for Sign {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value).ok_or(Error::SignOutOfRange { value })
    }
}

impl From<Sign> for u8 {
    fn from(sign: Sign) -> Self {
        sign.index()
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// Floored sector number of an arbitrary angle (may be negative or `>= 12`).
pub fn sector_index(degrees: f64) -> i64 {
    degrees.div_euclid(SIGN_WIDTH) as i64
}

/// First degree of the sector containing `degrees`.
pub fn sector_start(degrees: f64) -> f64 {
    degrees - degrees.rem_euclid(SIGN_WIDTH)
}

/// Folds an angle into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let folded = degrees.rem_euclid(FULL_CIRCLE);
    // `rem_euclid` rounds tiny negative inputs up to exactly 360.0.
    if folded >= FULL_CIRCLE { 0.0 } else { folded }
}
