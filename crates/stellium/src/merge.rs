//! Reconciles the two scan partitions into disjoint clusters.
//!
//! Any two points that share a clump in either scan belong to the same cluster. Clumps that are
//! identical collapse into one, clumps that intersect become their union.

use indexmap::IndexMap;
use tracing::debug;

use crate::cluster::{Cluster, Workspace};
use crate::detect::Detection;

/// Disjoint-set forest over workspace keys.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    /// Root of `x`, compressing the path on the way up.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Union by rank.
    pub fn union(&mut self, x: usize, y: usize) {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return;
        }
        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Greater => self.parent[root_y] = root_x,
            std::cmp::Ordering::Less => self.parent[root_x] = root_y,
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
    }

    pub fn same_set(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }
}

/// Merges both scans. The result covers exactly the points that were in a non-singleton clump of
/// either scan; every returned cluster has at least two members and is sorted by position.
///
/// Output order is deterministic: clusters appear in the order of their lowest key.
pub fn merge(ws: &Workspace, detection: &Detection) -> Vec<Cluster> {
    let mut sets = UnionFind::new(ws.len());
    let mut clustered = vec![false; ws.len()];

    for clump in detection
        .ascending
        .iter()
        .chain(&detection.descending)
        .filter(|c| c.len() > 1)
    {
        let members = clump.members();
        for &key in members {
            clustered[key] = true;
        }
        for pair in members.windows(2) {
            sets.union(pair[0], pair[1]);
        }
    }

    let mut groups: IndexMap<usize, Cluster> = IndexMap::new();
    for key in (0..ws.len()).filter(|k| clustered[*k]) {
        let root = sets.find(key);
        groups.entry(root).or_default().push(key);
    }

    let clusters: Vec<Cluster> = groups
        .into_values()
        .map(|mut c| {
            c.sort_by_position(ws);
            c
        })
        .collect();

    debug!(
        ascending = detection.ascending.iter().filter(|c| c.len() > 1).count(),
        descending = detection.descending.iter().filter(|c| c.len() > 1).count(),
        merged = clusters.len(),
        "merged clump scans"
    );
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_find_joins_transitively() {
        let mut sets = UnionFind::new(5);
        sets.union(0, 1);
        sets.union(3, 4);
        assert!(!sets.same_set(1, 3));
        sets.union(1, 4);
        assert!(sets.same_set(0, 3));
        assert!(!sets.same_set(2, 0));
    }

    #[test]
    fn union_is_idempotent() {
        let mut sets = UnionFind::new(2);
        sets.union(0, 1);
        sets.union(1, 0);
        sets.union(0, 1);
        assert_eq!(sets.find(0), sets.find(1));
    }
}
