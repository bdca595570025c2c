//! The thirteen objects drawn on every chart: eleven bodies and two angles.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    NorthNode,
    Chiron,
    /// Ascendant.
    Ascendant,
    /// Midheaven.
    Midheaven,
}

impl Body {
    /// Every object a chart must contain.
    pub const ALL: [Body; 13] = [
        Body::Sun,
        Body::Moon,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
        Body::NorthNode,
        Body::Chiron,
        Body::Ascendant,
        Body::Midheaven,
    ];

    /// Stable identifier, also used as the layout point id.
    pub fn id(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
            Body::NorthNode => "North Node",
            Body::Chiron => "Chiron",
            Body::Ascendant => "Asc",
            Body::Midheaven => "Mc",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|b| b.id().eq_ignore_ascii_case(id))
    }

    /// Ascendant and midheaven come from the house calculation rather than the ephemeris.
    pub fn is_angle(self) -> bool {
        matches!(self, Body::Ascendant | Body::Midheaven)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
