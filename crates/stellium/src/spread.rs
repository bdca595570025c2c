//! Even spacing inside each cluster.
//!
//! A cluster of `n` points is laid out as `n` positions `theta` apart around a centre. The
//! centre is the midpoint of the cluster, nudged back inside the sign when the spread would
//! bleed into a neighbouring sign. A cluster too wide for its sign is centred on the sign.

use tracing::debug;

use crate::cluster::{Cluster, Workspace};
use crate::sign::{SIGN_WIDTH, sector_index, sector_start};

pub fn spread(ws: &mut Workspace, clusters: &mut [Cluster], theta: f64) {
    for cluster in clusters.iter_mut() {
        spread_cluster(ws, cluster, theta);
    }
}

/// Assigns new positions to every member of `cluster`, smallest first.
///
/// # Panics
///
/// Panics if the cluster has fewer than two members; merge and split never produce one.
pub fn spread_cluster(ws: &mut Workspace, cluster: &mut Cluster, theta: f64) {
    assert!(
        cluster.len() >= 2,
        "degenerate cluster reached the spreader ({} member)",
        cluster.len()
    );

    cluster.sort_by_position(ws);
    let center = cluster_center(ws, cluster, theta);
    let n = cluster.len();
    let start = center - half_span(n, theta);
    for (i, &key) in cluster.members().iter().enumerate() {
        ws.set_position(key, start + i as f64 * theta);
    }

    debug!(
        size = n,
        center,
        start,
        "spread cluster"
    );
}

/// Centre around which a sorted cluster is spread.
pub fn cluster_center(ws: &Workspace, cluster: &Cluster, theta: f64) -> f64 {
    let members = cluster.members();
    let n = members.len();
    let first = ws.position(members[0]);
    let last = ws.position(members[n - 1]);

    if n as f64 * theta >= SIGN_WIDTH {
        return sector_start(first) + SIGN_WIDTH / 2.0 + theta / 2.0;
    }

    let mut center = (first + last) / 2.0;

    let lower = center - half_span(n, theta);
    if sector_index(lower) != sector_index(first) {
        center += (SIGN_WIDTH - lower.rem_euclid(SIGN_WIDTH)) + theta / 2.0;
    }

    let upper = center + half_span(n, theta);
    if sector_index(upper) != sector_index(last) {
        center -= upper.rem_euclid(SIGN_WIDTH) + theta / 2.0;
    }

    center
}

fn half_span(n: usize, theta: f64) -> f64 {
    (n as f64 / 2.0) * theta
}
