//! The ephemeris collaborator. Computing longitudes is out of scope for this crate; callers plug
//! in an implementation of [`PositionProvider`].

use std::collections::BTreeMap;

use crate::body::Body;
use crate::error::Result;
use crate::input::BirthMoment;

/// Absolute ecliptic longitudes (degrees, `[0, 360)`) keyed by body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyPositions {
    longitudes: BTreeMap<Body, f64>,
}

impl BodyPositions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, body: Body, longitude: f64) -> Option<f64> {
        self.longitudes.insert(body, longitude)
    }

    pub fn get(&self, body: Body) -> Option<f64> {
        self.longitudes.get(&body).copied()
    }

    pub fn len(&self) -> usize {
        self.longitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.longitudes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Body, f64)> + '_ {
        self.longitudes.iter().map(|(b, l)| (*b, *l))
    }
}

impl FromIterator<(Body, f64)> for BodyPositions {
    fn from_iter<I: IntoIterator<Item = (Body, f64)>>(iter: I) -> Self {
        Self {
            longitudes: iter.into_iter().collect(),
        }
    }
}

pub trait PositionProvider {
    /// Longitudes of the bodies plus the ascendant and midheaven for `moment`.
    fn positions(&self, moment: &BirthMoment) -> Result<BodyPositions>;
}

/// A provider that always answers with the same precomputed positions.
#[derive(Debug, Clone, Default)]
pub struct FixedPositions(pub BodyPositions);

impl PositionProvider for FixedPositions {
    fn positions(&self, _moment: &BirthMoment) -> Result<BodyPositions> {
        Ok(self.0.clone())
    }
}
