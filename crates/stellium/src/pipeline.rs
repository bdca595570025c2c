//! End-to-end layout: detect, merge, split, spread, adjust, write back.

use tracing::debug;

use crate::adjust::adjust_with_anchors;
use crate::cluster::{Cluster, Workspace};
use crate::detect::detect;
use crate::error::Result;
use crate::merge::merge;
use crate::options::SpreadOptions;
use crate::point::Point;
use crate::split::{SignSplit, split_at_signs};
use crate::spread::spread;

/// What a layout run did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpreadReport {
    /// Ids of every spread cluster, ordered by position within each cluster.
    pub clusters: Vec<Vec<String>>,
    /// Ids of points cut off alone by the sign split. They are not spread but still kept
    /// `theta` away from their neighbours.
    pub released: Vec<String>,
    /// Number of shifts applied by the overlap sweep.
    pub adjustments: usize,
}

impl SpreadReport {
    /// True when no display position changed.
    pub fn is_noop(&self) -> bool {
        self.clusters.is_empty() && self.adjustments == 0
    }
}

/// Detection, merge and sign split: the clusters that will be spread, in merge order, and the
/// points released by the split.
pub fn find_groups(ws: &Workspace, options: &SpreadOptions) -> SignSplit {
    let detection = detect(ws, options.theta, options.threshold);
    split_at_signs(ws, merge(ws, &detection))
}

/// The clusters of [`find_groups`].
pub fn find_clusters(ws: &Workspace, options: &SpreadOptions) -> Vec<Cluster> {
    find_groups(ws, options).clusters
}

/// Spreads `points` so that no two symbols sit closer than `options.theta`.
///
/// Only display positions change. Inputs are validated before anything is written: on error the
/// points are left untouched.
pub fn spread_points(points: &mut [Point], options: &SpreadOptions) -> Result<SpreadReport> {
    options.validate()?;
    let mut ws = Workspace::from_points(points)?;
    if ws.len() < 2 {
        ws.write_back(points, options.normalization);
        return Ok(SpreadReport::default());
    }

    let SignSplit {
        mut clusters,
        released,
    } = find_groups(&ws, options);
    spread(&mut ws, &mut clusters, options.theta);
    let adjustments = adjust_with_anchors(&mut ws, &mut clusters, &released, options.theta);
    ws.write_back(points, options.normalization);

    let mut released: Vec<String> = released.iter().map(|k| ws.id(*k).to_string()).collect();
    released.sort();
    let report = SpreadReport {
        clusters: clusters
            .iter()
            .map(|c| c.ids(&ws).into_iter().map(str::to_string).collect())
            .collect(),
        released,
        adjustments,
    };
    debug!(
        points = points.len(),
        clusters = report.clusters.len(),
        released = report.released.len(),
        adjustments,
        "layout finished"
    );
    Ok(report)
}

/// Spreads bare longitudes. Signs are derived from the longitudes; the result is in input
/// order.
pub fn spread_longitudes(longitudes: &[f64], options: &SpreadOptions) -> Result<Vec<f64>> {
    let mut points: Vec<Point> = longitudes
        .iter()
        .enumerate()
        .map(|(i, lon)| Point::new(format!("p{i}"), *lon))
        .collect();
    spread_points(&mut points, options)?;
    Ok(points.iter().map(Point::display_position).collect())
}
