//! Removes overlaps between clusters that were spread independently.
//!
//! Clusters are ordered by mean position and each neighbouring pair `(earlier, later)` is
//! compared through `delta = max(earlier) - min(later)`:
//!
//! - `delta >= 0`: the pair overlaps or touches, `later` moves forward by `delta + theta`;
//! - `-theta <= delta < 0`: the gap is too small, `earlier` moves forward by `theta - delta`;
//! - otherwise nothing moves.
//!
//! The pair across the seam (last, first) compares `max(last) - 360` with `min(first)`. Between
//! two spread clusters it only applies the `delta >= 0` rule; there is no near-miss case across
//! the seam, since clusters on either side of it sit in Pisces and Aries and are already kept
//! apart by the sign split.
//!
//! Points released by the sign split take part as anchors. They sit next to a sign boundary at
//! their true longitude, so a pair involving one is resolved by moving the spread cluster away
//! from it until the gap is `theta`. Two anchors closer than `theta` move apart by half the
//! shortfall each, which keeps both inside their own signs. These rules apply at the seam too.
//!
//! This is a single sweep: a shift can push a cluster into the one after its neighbour. Repeating
//! the sweep does not converge, because the near-miss rule moves `earlier` past `later` and the
//! next pass treats that as a fresh overlap.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::cluster::{Cluster, Workspace};
use crate::sign::FULL_CIRCLE;

/// One unit of the overlap sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group<'a> {
    /// A cluster laid out by the spreader.
    Spread(&'a Cluster),
    /// A point released by the sign split, by workspace key.
    Anchor(usize),
}

impl Group<'_> {
    pub fn min_position(&self, ws: &Workspace) -> f64 {
        match self {
            Group::Spread(c) => c.min_position(ws),
            Group::Anchor(key) => ws.position(*key),
        }
    }

    pub fn max_position(&self, ws: &Workspace) -> f64 {
        match self {
            Group::Spread(c) => c.max_position(ws),
            Group::Anchor(key) => ws.position(*key),
        }
    }

    pub fn mean_position(&self, ws: &Workspace) -> f64 {
        match self {
            Group::Spread(c) => c.mean_position(ws),
            Group::Anchor(key) => ws.position(*key),
        }
    }

    pub fn is_anchor(&self) -> bool {
        matches!(self, Group::Anchor(_))
    }

    fn lead_id<'w>(&self, ws: &'w Workspace) -> Option<&'w str> {
        match self {
            Group::Spread(c) => c.lead_id(ws),
            Group::Anchor(key) => Some(ws.id(*key)),
        }
    }

    fn shift(&self, ws: &mut Workspace, by: f64) {
        trace!(anchor = self.is_anchor(), by, "shifting group");
        match self {
            Group::Spread(c) => {
                for &key in c.members() {
                    ws.shift(key, by);
                }
            }
            Group::Anchor(key) => ws.shift(*key, by),
        }
    }
}

fn cmp_by_mean(ws: &Workspace, a: &Group<'_>, b: &Group<'_>) -> Ordering {
    a.mean_position(ws)
        .total_cmp(&b.mean_position(ws))
        .then_with(|| a.lead_id(ws).cmp(&b.lead_id(ws)))
}

/// Orders clusters by the mean of their current positions, then by their lowest member's id.
pub fn sort_by_mean(ws: &Workspace, clusters: &mut [Cluster]) {
    clusters.sort_by(|a, b| cmp_by_mean(ws, &Group::Spread(a), &Group::Spread(b)));
}

/// Orders the clusters by mean position, sweeps once and returns how many shifts were applied.
pub fn adjust(ws: &mut Workspace, clusters: &mut [Cluster], theta: f64) -> usize {
    adjust_with_anchors(ws, clusters, &[], theta)
}

/// [`adjust`] with the points released by the sign split taking part as anchors.
pub fn adjust_with_anchors(
    ws: &mut Workspace,
    clusters: &mut [Cluster],
    anchors: &[usize],
    theta: f64,
) -> usize {
    if clusters.len() + anchors.len() <= 1 {
        return 0;
    }
    sort_by_mean(ws, clusters);
    let mut groups: Vec<Group<'_>> = clusters
        .iter()
        .map(Group::Spread)
        .chain(anchors.iter().copied().map(Group::Anchor))
        .collect();
    groups.sort_by(|a, b| cmp_by_mean(ws, a, b));

    let shifts = sweep_groups(ws, &groups, theta);
    debug!(
        clusters = clusters.len(),
        anchors = anchors.len(),
        shifts,
        "overlap sweep finished"
    );
    shifts
}

/// Consecutive pairs of clusters in the given order, then the seam pair.
pub fn sweep(ws: &mut Workspace, clusters: &[Cluster], theta: f64) -> usize {
    let groups: Vec<Group<'_>> = clusters.iter().map(Group::Spread).collect();
    sweep_groups(ws, &groups, theta)
}

/// Consecutive pairs of groups in the given order, then the seam pair.
pub fn sweep_groups(ws: &mut Workspace, groups: &[Group<'_>], theta: f64) -> usize {
    if groups.len() < 2 {
        return 0;
    }
    let mut shifts = 0;
    for pair in groups.windows(2) {
        let delta = pair[0].max_position(ws) - pair[1].min_position(ws);
        shifts += resolve(ws, &pair[0], &pair[1], delta, theta, false);
    }

    if let (Some(first), Some(last)) = (groups.first(), groups.last()) {
        let delta = (last.max_position(ws) - FULL_CIRCLE) - first.min_position(ws);
        shifts += resolve(ws, last, first, delta, theta, true);
    }
    shifts
}

fn resolve(
    ws: &mut Workspace,
    earlier: &Group<'_>,
    later: &Group<'_>,
    delta: f64,
    theta: f64,
    seam: bool,
) -> usize {
    match (earlier.is_anchor(), later.is_anchor()) {
        (false, false) => {
            if delta >= 0.0 {
                later.shift(ws, delta + theta);
                1
            } else if !seam && delta >= -theta {
                earlier.shift(ws, theta - delta);
                1
            } else {
                0
            }
        }
        _ if delta <= -theta => 0,
        (true, false) => {
            later.shift(ws, delta + theta);
            1
        }
        (false, true) => {
            earlier.shift(ws, -(delta + theta));
            1
        }
        (true, true) => {
            let half = (delta + theta) / 2.0;
            earlier.shift(ws, -half);
            later.shift(ws, half);
            2
        }
    }
}
