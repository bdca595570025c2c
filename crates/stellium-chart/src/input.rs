//! Birth data as supplied by users: an ISO 8601 local time and a `"LAT,LON"` location.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    /// Parses `"LAT,LON"` (decimal degrees, surrounding whitespace allowed).
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || Error::InvalidLocation {
            input: input.to_string(),
        };
        let (lat, lon) = input.split_once(',').ok_or_else(invalid)?;
        let latitude: f64 = lat.trim().parse().map_err(|_| invalid())?;
        let longitude: f64 = lon.trim().parse().map_err(|_| invalid())?;
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(invalid());
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// Parses a local birth time. Seconds and the time of day are optional
/// (`1994-01-11T07:33:00`, `1994-01-11T07:33`, `1994-01-11`).
pub fn parse_local_time(input: &str) -> Result<NaiveDateTime> {
    let s = input.trim();
    if let Ok(dt) = s.parse::<NaiveDateTime>() {
        return Ok(dt);
    }
    for fmt in ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    if let Some(dt) = s
        .parse::<NaiveDate>()
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(dt);
    }
    Err(Error::InvalidLocalTime {
        input: input.to_string(),
    })
}

/// When and where a chart is cast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthMoment {
    pub local_time: NaiveDateTime,
    pub location: GeoLocation,
}

impl BirthMoment {
    pub fn parse(local_time: &str, location: &str) -> Result<Self> {
        Ok(Self {
            local_time: parse_local_time(local_time)?,
            location: GeoLocation::parse(location)?,
        })
    }
}
