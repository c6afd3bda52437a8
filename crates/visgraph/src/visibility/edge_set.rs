//! Canonical set of visible vertex pairs.
//!
//! Pairs are stored as `(rank_a, rank_b)` with `rank_a < rank_b`, where ranks
//! index the vertex table sorted by the kernel's xy comparator. A key therefore
//! is the canonical `(a, b)` with `a <xy b`, and `BTreeSet` order is the
//! comparator order on pairs.

use std::collections::BTreeSet;

use crate::kernel::Kernel;

#[derive(Clone, Debug, PartialEq)]
pub struct EdgeSet<P> {
    /// Vertex table, increasing (x, y).
    vertices: Vec<P>,
    edges: BTreeSet<(usize, usize)>,
}

impl<P> Default for EdgeSet<P> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edges: BTreeSet::new(),
        }
    }
}

impl<P: Copy> EdgeSet<P> {
    /// Pre: `vertices` sorted by increasing (x, y) without repeats.
    pub fn with_vertices(vertices: Vec<P>) -> Self {
        Self {
            vertices,
            edges: BTreeSet::new(),
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[P] {
        &self.vertices
    }

    pub fn rank_of<K: Kernel<Point = P>>(&self, kernel: &K, p: &P) -> Option<usize> {
        self.vertices
            .binary_search_by(|v| kernel.compare_xy(v, p))
            .ok()
    }

    /// Returns `true` if the pair was not present yet.
    #[inline]
    pub fn insert_ranks(&mut self, a: usize, b: usize) -> bool {
        self.edges.insert(canonical(a, b))
    }

    #[inline]
    pub fn contains_ranks(&self, a: usize, b: usize) -> bool {
        self.edges.contains(&canonical(a, b))
    }

    /// Insert the unordered pair. Returns `false` when the pair was already
    /// present or names a point outside the vertex table.
    pub fn insert_edge<K: Kernel<Point = P>>(&mut self, kernel: &K, edge: (P, P)) -> bool {
        match (self.rank_of(kernel, &edge.0), self.rank_of(kernel, &edge.1)) {
            (Some(a), Some(b)) if a != b => self.insert_ranks(a, b),
            _ => false,
        }
    }

    pub fn is_an_edge<K: Kernel<Point = P>>(&self, kernel: &K, edge: (P, P)) -> bool {
        match (self.rank_of(kernel, &edge.0), self.rank_of(kernel, &edge.1)) {
            (Some(a), Some(b)) => self.contains_ranks(a, b),
            _ => false,
        }
    }

    /// Drop all pairs; the vertex table stays.
    pub fn clear(&mut self) {
        self.edges.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Canonical pairs in comparator order.
    pub fn iter(&self) -> impl Iterator<Item = (P, P)> + '_ {
        self.edges
            .iter()
            .map(move |&(a, b)| (self.vertices[a], self.vertices[b]))
    }

    pub fn rank_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().copied()
    }
}

#[inline]
fn canonical(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::I64Kernel;

    fn square() -> EdgeSet<[i64; 2]> {
        EdgeSet::with_vertices(vec![[0, 0], [0, 4], [4, 0], [4, 4]])
    }

    #[test]
    fn insert_canonicalizes_and_is_idempotent() {
        let k = I64Kernel;
        let mut set = square();
        assert!(set.insert_edge(&k, ([4, 4], [0, 0])));
        assert!(!set.insert_edge(&k, ([0, 0], [4, 4])));
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().next(), Some(([0, 0], [4, 4])));
    }

    #[test]
    fn membership_is_symmetric() {
        let k = I64Kernel;
        let mut set = square();
        set.insert_edge(&k, ([0, 4], [4, 0]));
        assert!(set.is_an_edge(&k, ([0, 4], [4, 0])));
        assert!(set.is_an_edge(&k, ([4, 0], [0, 4])));
        assert!(!set.is_an_edge(&k, ([0, 0], [4, 0])));
        assert!(!set.is_an_edge(&k, ([0, 0], [9, 9])));
    }

    #[test]
    fn unknown_points_and_loops_are_refused() {
        let k = I64Kernel;
        let mut set = square();
        assert!(!set.insert_edge(&k, ([0, 0], [1, 1])));
        assert!(!set.insert_edge(&k, ([0, 0], [0, 0])));
        assert!(set.is_empty());
    }

    #[test]
    fn iteration_follows_pair_order_and_clear_empties() {
        let k = I64Kernel;
        let mut set = square();
        set.insert_edge(&k, ([4, 4], [4, 0]));
        set.insert_edge(&k, ([4, 0], [0, 0]));
        set.insert_edge(&k, ([0, 4], [0, 0]));
        let pairs: Vec<_> = set.iter().collect();
        assert_eq!(
            pairs,
            vec![([0, 0], [0, 4]), ([0, 0], [4, 0]), ([4, 0], [4, 4])]
        );
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.vertices().len(), 4);
    }
}
