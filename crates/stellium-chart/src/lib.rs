#![forbid(unsafe_code)]

//! Natal chart model on top of [`stellium`].
//!
//! A [`NatalChart`] holds the longitudes of the eleven bodies and two angles drawn on every
//! chart. [`NatalChart::layout`] spreads their symbols apart, and [`ChartLayout::placements`]
//! turns the spread display positions into canvas coordinates for a [`Renderer`].
//!
//! Longitudes come from a [`PositionProvider`]; this crate does no ephemeris work itself.
//!
//! ```
//! use stellium_chart::{Body, BodyPositions, CanvasSize, ChartGeometry, NatalChart};
//!
//! let positions: BodyPositions = Body::ALL
//!     .into_iter()
//!     .enumerate()
//!     .map(|(i, b)| (b, i as f64 * 27.0))
//!     .collect();
//! let chart = NatalChart::new(&positions).unwrap();
//! let geometry = ChartGeometry::default();
//! let layout = chart.layout(&geometry.spread_options()).unwrap();
//! let placements = layout.placements(&geometry, CanvasSize::square(1000));
//! assert_eq!(placements.len(), 13);
//! ```

pub mod body;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod input;
pub mod placement;
pub mod provider;
pub mod render;

pub use body::Body;
pub use chart::{ChartLayout, LaidOutBody, NatalChart};
pub use error::{Error, Result};
pub use geometry::ChartGeometry;
pub use input::{BirthMoment, GeoLocation, parse_local_time};
pub use placement::{CanvasSize, CenteredLayer, PixelPoint, Placement};
pub use provider::{BodyPositions, FixedPositions, PositionProvider};
pub use render::{AssetResolver, ConventionalAssets, Frame, Renderer};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
