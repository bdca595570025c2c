//! Keeps every cluster inside a single sign.
//!
//! Members are sorted by display position and cut wherever the sign changes. A cluster usually
//! crosses at most one boundary; more are handled the same way. A run left with a single member
//! is released: it is not spread, and the overlap sweep treats it as an anchor that neighbouring
//! clusters move away from.

use tracing::{debug, trace};

use crate::cluster::{Cluster, Workspace};

/// Result of cutting clusters at sign boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignSplit {
    /// Runs of two or more members, each inside one sign.
    pub clusters: Vec<Cluster>,
    /// Keys of single-member runs, in the order they were cut off.
    pub released: Vec<usize>,
}

pub fn split_at_signs(ws: &Workspace, clusters: Vec<Cluster>) -> SignSplit {
    let mut out = SignSplit {
        clusters: Vec::with_capacity(clusters.len()),
        released: Vec::new(),
    };
    for mut cluster in clusters {
        cluster.sort_by_position(ws);
        let runs = cluster.split_off_runs(|a, b| ws.sign(a) == ws.sign(b));
        if runs.len() > 2 {
            debug!(
                transitions = runs.len() - 1,
                "cluster crosses more than one sign boundary"
            );
        }
        for run in runs {
            match run.members() {
                [key] => {
                    trace!(id = ws.id(*key), "released single point after sign split");
                    out.released.push(*key);
                }
                _ => out.clusters.push(run),
            }
        }
    }
    out
}

/// The clusters of [`split_at_signs`], without the released points.
pub fn split_by_sign(ws: &Workspace, clusters: Vec<Cluster>) -> Vec<Cluster> {
    split_at_signs(ws, clusters).clusters
}
