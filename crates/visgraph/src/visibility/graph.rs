//! `VisibilityGraph`: owns the kernel and the edge set, runs the sweep.

use crate::kernel::Kernel;

use super::edge_set::EdgeSet;
use super::observer::{EdgeObserver, TracingObserver};
use super::oracle::{self, ValidationError};
use super::sweep::Sweep;
use super::vertex_map::VertexMap;

#[derive(Clone, Debug)]
pub struct VisibilityGraph<K: Kernel> {
    kernel: K,
    edges: EdgeSet<K::Point>,
}

impl<K: Kernel + Default> Default for VisibilityGraph<K> {
    fn default() -> Self {
        Self::new(K::default())
    }
}

impl<K: Kernel> VisibilityGraph<K> {
    pub fn new(kernel: K) -> Self {
        Self {
            kernel,
            edges: EdgeSet::default(),
        }
    }

    /// `new` followed by `build`.
    pub fn from_polygon(kernel: K, polygon: &[K::Point]) -> Self {
        let mut graph = Self::new(kernel);
        graph.build(polygon);
        graph
    }

    #[inline]
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Compute the visibility graph of `polygon`, replacing any previous result.
    ///
    /// Pre: ccw simple polygon without repeated points (see
    /// `polygon::check_simple`). Violations give unspecified edges, not a panic.
    /// Rejections are reported as `trace` events.
    pub fn build(&mut self, polygon: &[K::Point]) {
        self.build_with_observer(polygon, &mut TracingObserver);
    }

    /// `build` with a caller-supplied observer for accepted and rejected pairs.
    pub fn build_with_observer(
        &mut self,
        polygon: &[K::Point],
        observer: &mut dyn EdgeObserver<K::Point>,
    ) {
        tracing::debug!(vertices = polygon.len(), "visibility build start");
        let vertex_map = VertexMap::initialize(&self.kernel, polygon);
        self.edges = EdgeSet::with_vertices(vertex_map.iter().map(|e| e.point).collect());
        Sweep::new(&self.kernel, polygon, vertex_map, &mut self.edges, observer).run();
        tracing::debug!(
            vertices = polygon.len(),
            edges = self.edges.len(),
            "visibility build done"
        );
    }

    /// Drop all edges. The vertex table of the last build is kept, so pairs of
    /// its vertices can still be inserted by hand.
    pub fn clear(&mut self) {
        self.edges.clear();
    }

    /// Canonicalize and insert. `false` if already present or if a point is not
    /// a vertex of the last build.
    pub fn insert_edge(&mut self, edge: (K::Point, K::Point)) -> bool {
        self.edges.insert_edge(&self.kernel, edge)
    }

    pub fn is_an_edge(&self, edge: (K::Point, K::Point)) -> bool {
        self.edges.is_an_edge(&self.kernel, edge)
    }

    /// Canonical pairs `(a, b)`, `a <xy b`, in comparator order.
    pub fn iter(&self) -> impl Iterator<Item = (K::Point, K::Point)> + '_ {
        self.edges.iter()
    }

    #[inline]
    pub fn edges(&self) -> &EdgeSet<K::Point> {
        &self.edges
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Cross-check against the brute-force oracle. O(n³); for tests only.
    pub fn validate(&self, polygon: &[K::Point]) -> Result<(), ValidationError<K::Point>> {
        oracle::validate(&self.kernel, polygon, &self.edges)
    }

    pub fn is_valid(&self, polygon: &[K::Point]) -> bool {
        self.validate(polygon).is_ok()
    }
}
