//! Simple polygons as plain vertex slices.
//!
//! Purpose
//! - Optional precondition checks for callers that receive polygons from
//!   outside (files, generators). `VisibilityGraph::build` never validates.
//! - Boundary helpers shared by the sweep and the brute-force oracle.
//!
//! Conventions
//! - A polygon is `&[P]`, vertices in counter-clockwise order, the closing edge
//!   `(v_{n-1}, v_0)` implicit. Edge `i` is `(v_i, v_{i+1 mod n})`.
//!
//! Code cross-refs: `visibility::VisibilityGraph`, `polygon::rand`

pub mod rand;

use std::cmp::Ordering;
use std::fmt;

use crate::kernel::{Kernel, Orientation};

/// Why a vertex sequence is not a ccw simple polygon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolygonError {
    TooFewVertices { found: usize },
    DuplicateVertex { first: usize, second: usize },
    /// Edges `first` and `second` meet outside their shared endpoint.
    SelfIntersecting { first: usize, second: usize },
    NotCounterClockwise,
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewVertices { found } => {
                write!(f, "polygon needs at least 3 vertices, found {found}")
            }
            Self::DuplicateVertex { first, second } => {
                write!(f, "vertices {first} and {second} coincide")
            }
            Self::SelfIntersecting { first, second } => {
                write!(f, "edges {first} and {second} intersect")
            }
            Self::NotCounterClockwise => write!(f, "vertices are not in counter-clockwise order"),
        }
    }
}

impl std::error::Error for PolygonError {}

#[inline]
pub fn next_index(n: usize, i: usize) -> usize {
    (i + 1) % n
}

#[inline]
pub fn prev_index(n: usize, i: usize) -> usize {
    (i + n - 1) % n
}

/// Verify that `polygon` is simple, free of repeated points, and ccw.
///
/// O(n²) edge-pair scan; meant for inputs of moderate size.
pub fn check_simple<K: Kernel>(kernel: &K, polygon: &[K::Point]) -> Result<(), PolygonError> {
    let n = polygon.len();
    if n < 3 {
        return Err(PolygonError::TooFewVertices { found: n });
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| kernel.compare_xy(&polygon[a], &polygon[b]));
    for w in order.windows(2) {
        if kernel.compare_xy(&polygon[w[0]], &polygon[w[1]]) == Ordering::Equal {
            let (first, second) = (w[0].min(w[1]), w[0].max(w[1]));
            return Err(PolygonError::DuplicateVertex { first, second });
        }
    }

    for i in 0..n {
        for j in (i + 1)..n {
            if edges_overlap(kernel, polygon, i, j) {
                return Err(PolygonError::SelfIntersecting {
                    first: i,
                    second: j,
                });
            }
        }
    }

    if !is_counterclockwise(kernel, polygon) {
        return Err(PolygonError::NotCounterClockwise);
    }
    Ok(())
}

/// Do edges `i < j` share more than their common endpoint (if any)?
fn edges_overlap<K: Kernel>(kernel: &K, polygon: &[K::Point], i: usize, j: usize) -> bool {
    let n = polygon.len();
    let (a, b) = (&polygon[i], &polygon[next_index(n, i)]);
    let (c, d) = (&polygon[j], &polygon[next_index(n, j)]);
    let on = |p: &K::Point, q: &K::Point, r: &K::Point| {
        kernel.orientation(p, q, r) == Orientation::Collinear
            && kernel.collinear_are_ordered_along_line(p, r, q)
    };
    if next_index(n, i) == j {
        // b == c: overlap iff the far endpoints fold back onto the other edge
        return on(a, b, d) || on(c, d, a);
    }
    if next_index(n, j) == i {
        // d == a
        return on(a, b, c) || on(c, d, b);
    }
    let s = kernel.construct_segment(*a, *b);
    let t = kernel.construct_segment(*c, *d);
    kernel.segments_intersect(&s, &t)
}

/// Orientation at the xy-smallest vertex, which is always convex.
///
/// Pre: at least 3 vertices, no repeats.
pub fn is_counterclockwise<K: Kernel>(kernel: &K, polygon: &[K::Point]) -> bool {
    let n = polygon.len();
    let Some(lo) = (0..n).min_by(|&a, &b| kernel.compare_xy(&polygon[a], &polygon[b])) else {
        return false;
    };
    kernel.left_turn(
        &polygon[prev_index(n, lo)],
        &polygon[lo],
        &polygon[next_index(n, lo)],
    )
}

/// Does the direction `polygon[i] → q` leave `polygon[i]` into the interior?
///
/// At a convex vertex `q` must lie strictly left of both incident edges; at a
/// reflex vertex strictly left of either one.
pub fn in_interior_cone<K: Kernel>(kernel: &K, polygon: &[K::Point], i: usize, q: &K::Point) -> bool {
    let n = polygon.len();
    let before = &polygon[prev_index(n, i)];
    let at = &polygon[i];
    let after = &polygon[next_index(n, i)];
    if kernel.left_turn(before, at, after) {
        kernel.left_turn(at, after, q) && kernel.left_turn(before, at, q)
    } else {
        kernel.left_turn(at, after, q) || kernel.left_turn(before, at, q)
    }
}
