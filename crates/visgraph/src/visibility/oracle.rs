//! Brute-force visibility: every pair against every boundary edge.
//!
//! O(n³). Independent of the sweep except for the shared kernel, so it serves
//! as the reference in tests and in the CLI's `check` command.

use std::fmt;

use crate::kernel::Kernel;
use crate::polygon::{in_interior_cone, next_index};

use super::edge_set::EdgeSet;

/// First disagreement between a built edge set and the brute-force answer.
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationError<P> {
    /// Visible pair absent from the edge set.
    MissingEdge { a: P, b: P },
    /// Pair in the edge set that is not visible.
    UnexpectedEdge { a: P, b: P },
    /// The edge set was built for a different vertex table.
    VertexMismatch { expected: usize, found: usize },
}

impl<P: fmt::Debug> fmt::Display for ValidationError<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEdge { a, b } => write!(f, "missing visible pair {a:?} - {b:?}"),
            Self::UnexpectedEdge { a, b } => write!(f, "unexpected pair {a:?} - {b:?}"),
            Self::VertexMismatch { expected, found } => {
                write!(f, "edge set covers {found} vertices, polygon has {expected}")
            }
        }
    }
}

impl<P: fmt::Debug> std::error::Error for ValidationError<P> {}

/// Do `polygon[i]` and `polygon[j]` see each other?
///
/// Boundary neighbours always do. Otherwise the open segment must avoid every
/// other vertex, cross no edge properly, and leave `polygon[i]` into the
/// interior.
pub fn brute_force_visible<K: Kernel>(kernel: &K, polygon: &[K::Point], i: usize, j: usize) -> bool {
    let n = polygon.len();
    if i == j {
        return false;
    }
    if next_index(n, i) == j || next_index(n, j) == i {
        return true;
    }
    let (p, q) = (&polygon[i], &polygon[j]);
    let through_vertex = (0..n)
        .filter(|&k| k != i && k != j)
        .any(|k| kernel.are_strictly_ordered_along_line(p, &polygon[k], q));
    if through_vertex {
        return false;
    }
    let seg = kernel.construct_segment(*p, *q);
    let crosses = (0..n).any(|k| {
        let edge = kernel.construct_segment(polygon[k], polygon[next_index(n, k)]);
        kernel.segments_cross_properly(&seg, &edge)
    });
    !crosses && in_interior_cone(kernel, polygon, i, q)
}

/// All visible pairs, as an edge set over the same vertex table as `like`.
pub fn brute_force_edges<K: Kernel>(
    kernel: &K,
    polygon: &[K::Point],
    like: &EdgeSet<K::Point>,
) -> EdgeSet<K::Point> {
    let mut out = EdgeSet::with_vertices(like.vertices().to_vec());
    for i in 0..polygon.len() {
        for j in (i + 1)..polygon.len() {
            if brute_force_visible(kernel, polygon, i, j) {
                out.insert_edge(kernel, (polygon[i], polygon[j]));
            }
        }
    }
    out
}

/// Compare `edges` with the brute-force answer; report the first difference in
/// comparator order.
pub fn validate<K: Kernel>(
    kernel: &K,
    polygon: &[K::Point],
    edges: &EdgeSet<K::Point>,
) -> Result<(), ValidationError<K::Point>> {
    if edges.vertices().len() != polygon.len() {
        return Err(ValidationError::VertexMismatch {
            expected: polygon.len(),
            found: edges.vertices().len(),
        });
    }
    let expected = brute_force_edges(kernel, polygon, edges);
    let vertices = edges.vertices();
    for (a, b) in expected.rank_pairs() {
        if !edges.contains_ranks(a, b) {
            return Err(ValidationError::MissingEdge {
                a: vertices[a],
                b: vertices[b],
            });
        }
    }
    for (a, b) in edges.rank_pairs() {
        if !expected.contains_ranks(a, b) {
            return Err(ValidationError::UnexpectedEdge {
                a: vertices[a],
                b: vertices[b],
            });
        }
    }
    Ok(())
}
