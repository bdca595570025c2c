#![forbid(unsafe_code)]

//! Circular clustering and spacing for symbols placed around a zodiac wheel.
//!
//! Given points at angular positions on a 0–360° circle, each tagged with the 30° sign it truly
//! belongs to, `stellium` moves their display positions apart so that no two symbols are closer
//! than `theta` degrees. Clusters never cross a sign boundary and clusters straddling the
//! 0°/360° seam are detected like any other.
//!
//! The layout runs in five stages over a private [`Workspace`]:
//! [`detect`] (two directional scans), [`merge`] (union-find), [`split`] (sign boundaries),
//! [`spread`] (even spacing) and [`adjust`] (overlap sweep). [`spread_points`] runs them all.
//!
//! ```
//! use stellium::{Point, SpreadOptions, spread_points};
//!
//! let mut points = vec![
//!     Point::new("Sun", 10.0),
//!     Point::new("Moon", 11.0),
//!     Point::new("Mars", 200.0),
//! ];
//! spread_points(&mut points, &SpreadOptions::with_theta(5.0)).unwrap();
//! let gap = points[1].display_position() - points[0].display_position();
//! assert!((gap - 5.0).abs() < 1e-9);
//! assert_eq!(points[2].display_position(), 200.0);
//! ```

pub mod adjust;
pub mod cluster;
pub mod detect;
pub mod error;
pub mod merge;
pub mod options;
pub mod pipeline;
pub mod point;
pub mod sign;
pub mod split;
pub mod spread;

pub use cluster::{Cluster, Partition, Workspace};
pub use detect::{Detection, ScanDirection};
pub use error::{Error, Result};
pub use options::{
    ClusterThreshold, DEFAULT_CLUSTER_THRESHOLD, Normalization, SpreadOptions, theta_for_symbol,
};
pub use pipeline::{
    SpreadReport, find_clusters, find_groups, spread_longitudes, spread_points,
};
pub use split::SignSplit;
pub use point::Point;
pub use sign::{FULL_CIRCLE, SIGN_WIDTH, Sign};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
