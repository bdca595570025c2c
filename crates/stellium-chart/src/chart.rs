//! A validated natal chart and its laid-out display positions.

use serde::Serialize;
use stellium::{Point, Sign, SpreadOptions, SpreadReport, spread_points};
use tracing::{debug, info};

use crate::body::Body;
use crate::error::{Error, Result};
use crate::geometry::ChartGeometry;
use crate::input::BirthMoment;
use crate::placement::{
    CanvasSize, Placement, centered_layer, degree_label, place_object, scaled_sprite,
    wheel_rotation,
};
use crate::provider::{BodyPositions, PositionProvider};
use crate::render::{Frame, Renderer};

/// Longitudes of all thirteen chart objects.
#[derive(Debug, Clone, PartialEq)]
pub struct NatalChart {
    longitudes: [f64; 13],
}

impl NatalChart {
    /// Fails if any object is missing or has a non-finite longitude. Longitudes are folded into
    /// `[0, 360)`.
    pub fn new(positions: &BodyPositions) -> Result<Self> {
        let missing: Vec<&'static str> = Body::ALL
            .into_iter()
            .filter(|b| positions.get(*b).is_none())
            .map(Body::id)
            .collect();
        if !missing.is_empty() {
            return Err(Error::MissingBodies { missing });
        }

        let mut longitudes = [0.0; 13];
        for (slot, body) in longitudes.iter_mut().zip(Body::ALL) {
            let value = positions.get(body).unwrap_or(f64::NAN);
            if !value.is_finite() {
                return Err(Error::NonFiniteLongitude {
                    body: body.id(),
                    value,
                });
            }
            *slot = stellium::sign::normalize_degrees(value);
        }
        Ok(Self { longitudes })
    }

    pub fn from_provider<P: PositionProvider + ?Sized>(
        provider: &P,
        moment: &BirthMoment,
    ) -> Result<Self> {
        let positions = provider.positions(moment)?;
        Self::new(&positions)
    }

    pub fn longitude(&self, body: Body) -> f64 {
        self.longitudes[body as usize]
    }

    pub fn sign(&self, body: Body) -> Sign {
        Sign::from_longitude(self.longitude(body))
    }

    pub fn ascendant(&self) -> Sign {
        self.sign(Body::Ascendant)
    }

    /// Layout points in [`Body::ALL`] order.
    pub fn points(&self) -> Vec<Point> {
        Body::ALL
            .into_iter()
            .map(|b| Point::new(b.id(), self.longitude(b)))
            .collect()
    }

    /// Spreads the chart's symbols so none overlap on the wheel.
    pub fn layout(&self, options: &SpreadOptions) -> Result<ChartLayout> {
        let mut points = self.points();
        let report = spread_points(&mut points, options)?;
        let bodies = Body::ALL
            .into_iter()
            .zip(&points)
            .map(|(body, p)| LaidOutBody {
                body,
                sign: p.sign(),
                original_position: p.original_position(),
                display_position: p.display_position(),
            })
            .collect();
        info!(
            ascendant = %self.ascendant(),
            clusters = report.clusters.len(),
            adjustments = report.adjustments,
            "chart laid out"
        );
        Ok(ChartLayout {
            ascendant: self.ascendant(),
            bodies,
            report,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaidOutBody {
    pub body: Body,
    pub sign: Sign,
    pub original_position: f64,
    pub display_position: f64,
}

impl LaidOutBody {
    pub fn displacement(&self) -> f64 {
        self.display_position - self.original_position
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    ascendant: Sign,
    bodies: Vec<LaidOutBody>,
    report: SpreadReport,
}

impl ChartLayout {
    pub fn ascendant(&self) -> Sign {
        self.ascendant
    }

    /// Rotation applied to the zodiac wheel.
    pub fn rotation(&self) -> f64 {
        wheel_rotation(self.ascendant)
    }

    pub fn bodies(&self) -> &[LaidOutBody] {
        &self.bodies
    }

    pub fn get(&self, body: Body) -> Option<&LaidOutBody> {
        self.bodies.iter().find(|b| b.body == body)
    }

    pub fn report(&self) -> &SpreadReport {
        &self.report
    }

    /// Canvas positions of every planet sprite, sign glyph and degree label.
    pub fn placements(&self, geometry: &ChartGeometry, canvas: CanvasSize) -> Vec<Placement> {
        let planet = scaled_sprite(canvas, geometry.planet_size);
        let glyph = scaled_sprite(canvas, geometry.sign_size);
        let label = CanvasSize::square(geometry.text_size_px);
        self.bodies
            .iter()
            .map(|b| {
                let at = |object, radius| {
                    place_object(canvas, object, radius, b.display_position, self.ascendant)
                };
                Placement {
                    body: b.body,
                    sign: b.sign,
                    display_position: b.display_position,
                    degree_label: degree_label(b.original_position),
                    planet: at(planet, geometry.planet_radius),
                    sign_glyph: at(glyph, geometry.sign_radius),
                    label: at(label, geometry.text_radius),
                }
            })
            .collect()
    }

    /// Hands the finished layout to a drawing backend.
    pub fn render_with<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        geometry: &ChartGeometry,
        canvas: CanvasSize,
    ) -> std::result::Result<R::Output, R::Error> {
        let placements = self.placements(geometry, canvas);
        debug!(
            width = canvas.width,
            height = canvas.height,
            objects = placements.len(),
            "rendering chart"
        );
        renderer.render(&Frame {
            canvas,
            ascendant: self.ascendant,
            rotation: self.rotation(),
            house_numbers: centered_layer(canvas, geometry.house_number_radius),
            logo: centered_layer(canvas, geometry.logo_radius),
            placements: &placements,
        })
    }
}
