//! Clump detection by two directional scans.
//!
//! A single linear scan is order dependent: with `theta = 5.5`, `[0, 1, 1, 1, 14]` scanned
//! upwards is one clump of five, while scanned downwards `14` is left alone and `[1, 1, 1, 0]`
//! forms a clump. Both scans run and [`crate::merge`] reconciles them.
//!
//! Clumps straddling the 0°/360° seam are found by extending each scan past the seam: the
//! ascending scan sees points in `[0, 60)` a second time at `+360`, the descending scan sees
//! points in `[300, 360)` a second time at `-360`.

use tracing::trace;

use crate::cluster::{Cluster, Partition, Workspace};
use crate::options::ClusterThreshold;
use crate::sign::FULL_CIRCLE;

/// Width of the window re-scanned past the seam.
pub const WRAP_WINDOW: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    Ascending,
    Descending,
}

/// The candidate partitions of both scans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Detection {
    pub ascending: Partition,
    pub descending: Partition,
}

#[derive(Debug, Clone, Copy)]
struct ScanEntry {
    key: usize,
    position: f64,
}

pub fn detect(ws: &Workspace, theta: f64, threshold: ClusterThreshold) -> Detection {
    Detection {
        ascending: scan(ws, ScanDirection::Ascending, theta, threshold),
        descending: scan(ws, ScanDirection::Descending, theta, threshold),
    }
}

/// Runs one directional scan. Singletons are kept; the merger drops them.
pub fn scan(
    ws: &Workspace,
    direction: ScanDirection,
    theta: f64,
    threshold: ClusterThreshold,
) -> Partition {
    let entries = scan_sequence(ws, direction);
    let mut clusters: Partition = Vec::new();
    let mut current: Vec<ScanEntry> = Vec::new();

    for entry in entries {
        let Some(first) = current.first() else {
            current.push(entry);
            continue;
        };
        let n = current.len() + 1;
        let distance = (entry.position - first.position).abs();
        if threshold.admits(distance, theta * (n - 1) as f64) {
            current.push(entry);
        } else {
            clusters.push(Cluster::new(current.iter().map(|e| e.key)));
            current = vec![entry];
        }
    }
    if !current.is_empty() {
        clusters.push(Cluster::new(current.iter().map(|e| e.key)));
    }

    trace!(
        ?direction,
        clusters = clusters.len(),
        multi = clusters.iter().filter(|c| c.len() > 1).count(),
        "clump scan finished"
    );
    clusters
}

fn scan_sequence(ws: &Workspace, direction: ScanDirection) -> Vec<ScanEntry> {
    let mut entries: Vec<ScanEntry> = (0..ws.len())
        .map(|key| ScanEntry {
            key,
            position: ws.position(key),
        })
        .collect();

    let (window, shift) = match direction {
        ScanDirection::Ascending => {
            entries.sort_by(|a, b| ws.cmp_keys(a.key, b.key));
            (0.0..WRAP_WINDOW, FULL_CIRCLE)
        }
        ScanDirection::Descending => {
            entries.sort_by(|a, b| ws.cmp_keys(b.key, a.key));
            (FULL_CIRCLE - WRAP_WINDOW..FULL_CIRCLE, -FULL_CIRCLE)
        }
    };

    let wrapped: Vec<ScanEntry> = entries
        .iter()
        .filter(|e| window.contains(&e.position))
        .map(|e| ScanEntry {
            key: e.key,
            position: e.position + shift,
        })
        .collect();
    entries.extend(wrapped);
    entries
}
