//! Working state of one layout run.
//!
//! Stages never touch the caller's [`Point`]s. They read and write a [`Workspace`], a table of
//! `key -> (id, sign, position)` where the key is the point's index in the input slice, and
//! exchange [`Cluster`]s as lists of keys. The caller's points are updated once, at the end.

use std::cmp::Ordering;

use rustc_hash::FxHashSet;

use crate::error::{Error, Result};
use crate::options::Normalization;
use crate::point::Point;
use crate::sign::{Sign, normalize_degrees};

#[derive(Debug, Clone)]
struct Entry {
    id: String,
    sign: Sign,
    position: f64,
}

#[derive(Debug, Clone, Default)]
pub struct Workspace {
    entries: Vec<Entry>,
}

impl Workspace {
    /// Copies the identity, sign and current display position of every point.
    ///
    /// Fails on duplicate ids or non-finite display positions.
    pub fn from_points(points: &[Point]) -> Result<Self> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut entries = Vec::with_capacity(points.len());
        for p in points {
            if !seen.insert(p.id()) {
                return Err(Error::DuplicateId {
                    id: p.id().to_string(),
                });
            }
            if !p.display_position().is_finite() {
                return Err(Error::NonFinitePosition {
                    id: p.id().to_string(),
                    value: p.display_position(),
                });
            }
            entries.push(Entry {
                id: p.id().to_string(),
                sign: p.sign(),
                position: p.display_position(),
            });
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn id(&self, key: usize) -> &str {
        &self.entries[key].id
    }

    pub fn sign(&self, key: usize) -> Sign {
        self.entries[key].sign
    }

    pub fn position(&self, key: usize) -> f64 {
        self.entries[key].position
    }

    /// Orders two keys by position, then by id, so equal positions never fall back to input
    /// order.
    pub fn cmp_keys(&self, a: usize, b: usize) -> Ordering {
        self.position(a)
            .total_cmp(&self.position(b))
            .then_with(|| self.id(a).cmp(self.id(b)))
    }

    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|e| e.position)
    }

    pub(crate) fn set_position(&mut self, key: usize, position: f64) {
        self.entries[key].position = position;
    }

    pub(crate) fn shift(&mut self, key: usize, by: f64) {
        self.entries[key].position += by;
    }

    /// Writes the computed positions back onto the points the workspace was built from.
    pub fn write_back(&self, points: &mut [Point], normalization: Normalization) {
        debug_assert_eq!(points.len(), self.entries.len());
        for (p, e) in points.iter_mut().zip(&self.entries) {
            let position = match normalization {
                Normalization::Raw => e.position,
                Normalization::Wrap => normalize_degrees(e.position),
            };
            p.set_display_position(position);
        }
    }
}

/// A group of points laid out together, stored as workspace keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cluster {
    members: Vec<usize>,
}

impl Cluster {
    pub fn new(members: impl IntoIterator<Item = usize>) -> Self {
        let mut cluster = Self::default();
        for key in members {
            cluster.push(key);
        }
        cluster
    }

    /// Adds a member. A key that is already present is ignored, which happens when a scan sees
    /// both a point and its wrapped duplicate.
    pub fn push(&mut self, key: usize) {
        if !self.members.contains(&key) {
            self.members.push(key);
        }
    }

    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, key: usize) -> bool {
        self.members.contains(&key)
    }

    /// Sorts by current position; equal positions are ordered by id.
    pub fn sort_by_position(&mut self, ws: &Workspace) {
        self.members.sort_by(|a, b| ws.cmp_keys(*a, *b));
    }

    /// Id of the first member, the lowest once sorted. Orders clusters with equal means.
    pub fn lead_id<'a>(&self, ws: &'a Workspace) -> Option<&'a str> {
        self.members.first().map(|k| ws.id(*k))
    }

    pub fn min_position(&self, ws: &Workspace) -> f64 {
        self.members
            .iter()
            .map(|k| ws.position(*k))
            .fold(f64::INFINITY, f64::min)
    }

    pub fn max_position(&self, ws: &Workspace) -> f64 {
        self.members
            .iter()
            .map(|k| ws.position(*k))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn mean_position(&self, ws: &Workspace) -> f64 {
        if self.members.is_empty() {
            return 0.0;
        }
        self.members.iter().map(|k| ws.position(*k)).sum::<f64>() / self.members.len() as f64
    }

    pub fn ids<'a>(&self, ws: &'a Workspace) -> Vec<&'a str> {
        self.members.iter().map(|k| ws.id(*k)).collect()
    }

    pub(crate) fn split_off_runs(self, mut same_run: impl FnMut(usize, usize) -> bool) -> Vec<Self> {
        let mut runs: Vec<Self> = Vec::new();
        let mut current = Self::default();
        for key in self.members {
            if let Some(&last) = current.members.last() {
                if !same_run(last, key) {
                    runs.push(std::mem::take(&mut current));
                }
            }
            current.members.push(key);
        }
        if !current.is_empty() {
            runs.push(current);
        }
        runs
    }
}

/// Candidate clusters produced by one directional scan.
pub type Partition = Vec<Cluster>;
