//! Seams for the drawing backend. Compositing images is left to implementations.

use stellium::Sign;

use crate::body::Body;
use crate::placement::{CanvasSize, CenteredLayer, Placement};

/// Everything a backend needs to draw one chart.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub canvas: CanvasSize,
    pub ascendant: Sign,
    /// Degrees to rotate the zodiac wheel image by.
    pub rotation: f64,
    /// House-number ring, drawn over the wheel.
    pub house_numbers: CenteredLayer,
    pub logo: CenteredLayer,
    pub placements: &'a [Placement],
}

pub trait Renderer {
    type Output;
    type Error;

    fn render(&mut self, frame: &Frame<'_>) -> Result<Self::Output, Self::Error>;
}

/// Maps chart objects to sprite assets.
pub trait AssetResolver {
    fn body_asset(&self, body: Body) -> Option<String>;
    fn sign_asset(&self, sign: Sign) -> Option<String>;
}

/// `planets/<Name>.png` and `signs/<Abbrev>.png` under `root`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConventionalAssets {
    pub root: String,
}

impl ConventionalAssets {
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    fn join(&self, dir: &str, name: &str) -> String {
        if self.root.is_empty() {
            format!("{dir}/{name}.png")
        } else {
            format!("{}/{dir}/{name}.png", self.root.trim_end_matches('/'))
        }
    }
}

impl AssetResolver for ConventionalAssets {
    fn body_asset(&self, body: Body) -> Option<String> {
        let name = match body {
            Body::NorthNode => "NorthNode",
            other => other.id(),
        };
        Some(self.join("planets", name))
    }

    fn sign_asset(&self, sign: Sign) -> Option<String> {
        Some(self.join("signs", sign.abbrev()))
    }
}
