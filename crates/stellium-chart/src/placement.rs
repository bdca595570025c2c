//! Wheel-to-canvas math used by renderers.
//!
//! The zodiac wheel is rotated so the ascendant's sign sits on the left, and display positions
//! run counterclockwise from 0° Aries. Angles go through `sin`/`cos`, so display positions
//! outside `[0, 360)` place exactly like their folded equivalents.

use serde::{Deserialize, Serialize};
use stellium::{SIGN_WIDTH, Sign};

use crate::body::Body;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn square(side: u32) -> Self {
        Self::new(side, side)
    }
}

/// Top-left pixel at which an object is pasted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: i64,
    pub y: i64,
}

/// A layer drawn centred on the canvas: the house-number ring or the logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenteredLayer {
    pub size: CanvasSize,
    pub origin: PixelPoint,
}

/// Where one chart object and its companions end up on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub body: Body,
    pub sign: Sign,
    pub display_position: f64,
    /// Whole degrees within the sign, e.g. `"12°"`.
    pub degree_label: String,
    pub planet: PixelPoint,
    pub sign_glyph: PixelPoint,
    pub label: PixelPoint,
}

/// Rotation (degrees) applied to the zodiac wheel image so the ascendant's sign is first.
pub fn wheel_rotation(ascendant: Sign) -> f64 {
    -SIGN_WIDTH * f64::from(ascendant.index())
}

/// Offset that centres `object` on `canvas`.
pub fn center_offset(canvas: CanvasSize, object: CanvasSize) -> (i64, i64) {
    let dx = (i64::from(canvas.width) - i64::from(object.width)).div_euclid(2);
    let dy = (i64::from(canvas.height) - i64::from(object.height)).div_euclid(2);
    (dx, dy)
}

/// Pixel size of a square sprite scaled to `size_fraction` of the canvas width.
pub fn scaled_sprite(canvas: CanvasSize, size_fraction: f64) -> CanvasSize {
    CanvasSize::square((size_fraction * f64::from(canvas.width)) as u32)
}

/// A square layer `size_fraction` of the canvas width wide, centred on the canvas.
pub fn centered_layer(canvas: CanvasSize, size_fraction: f64) -> CenteredLayer {
    let size = scaled_sprite(canvas, size_fraction);
    let (x, y) = center_offset(canvas, size);
    CenteredLayer {
        size,
        origin: PixelPoint { x, y },
    }
}

/// Rotates `point` around `center` by `degrees` (counterclockwise on screen).
pub fn rotate_about(center: (f64, f64), point: (f64, f64), degrees: f64) -> (f64, f64) {
    let (a, b) = center;
    let (s, t) = point;
    let (sin, cos) = degrees.to_radians().sin_cos();
    let u = a + (s - a) * cos + (t - b) * sin;
    let v = b - (s - a) * sin + (t - b) * cos;
    (u, v)
}

/// Point at `radius` from `origin` for a display position, given the ascendant's sign.
pub fn wheel_point(
    origin: (f64, f64),
    radius: f64,
    display_position: f64,
    ascendant: Sign,
) -> (f64, f64) {
    let (a, b) = origin;
    let aries = (-90.0 - SIGN_WIDTH * f64::from(ascendant.index())).to_radians();
    let zero_aries = (a + radius * aries.sin(), b + radius * aries.cos());
    rotate_about(origin, zero_aries, display_position)
}

/// Paste position of an `object`-sized item on the ring at `radius_fraction` of the canvas
/// height.
pub fn place_object(
    canvas: CanvasSize,
    object: CanvasSize,
    radius_fraction: f64,
    display_position: f64,
    ascendant: Sign,
) -> PixelPoint {
    let radius = radius_fraction * f64::from(canvas.height);
    let (a, b) = center_offset(canvas, object);
    let (x, y) = wheel_point((a as f64, b as f64), radius, display_position, ascendant);
    PixelPoint {
        x: x.round() as i64,
        y: y.round() as i64,
    }
}

/// `"12°"` for a longitude of 42.7°.
pub fn degree_label(original_position: f64) -> String {
    format!("{}°", original_position.rem_euclid(SIGN_WIDTH).floor() as u32)
}
