//! Per-vertex sweep state, ordered by the kernel's xy comparator.
//!
//! Each entry records where the vertex came from in the polygon (`origin`) and
//! its visibility cursor: the boundary edge `(v_i, v_{i+1})`, stored as `i`,
//! that the vertex's sweep ray currently hits first. `None` means the ray
//! escapes without hitting the boundary.

use std::cmp::Ordering;

use crate::kernel::{Kernel, Orientation};
use crate::polygon::{next_index, prev_index};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VertexEntry<P> {
    pub point: P,
    pub origin: usize,
    pub cursor: Option<usize>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VertexMap<P> {
    /// Sorted by increasing (x, y).
    entries: Vec<VertexEntry<P>>,
    /// origin index → position in `entries`
    rank_of: Vec<usize>,
}

impl<P: Copy> VertexMap<P> {
    /// Sort the vertices and seed every cursor with the edge straight below.
    ///
    /// Pre: ccw polygon without repeated points.
    pub fn initialize<K: Kernel<Point = P>>(kernel: &K, polygon: &[P]) -> Self {
        let mut order: Vec<usize> = (0..polygon.len()).collect();
        order.sort_by(|&a, &b| kernel.compare_xy(&polygon[a], &polygon[b]));
        let cursors = edges_below(kernel, polygon, &order);
        let mut rank_of = vec![0; polygon.len()];
        let entries = order
            .iter()
            .enumerate()
            .map(|(rank, &origin)| {
                rank_of[origin] = rank;
                VertexEntry {
                    point: polygon[origin],
                    origin,
                    cursor: cursors[origin],
                }
            })
            .collect();
        Self { entries, rank_of }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of `origin` in xy order.
    #[inline]
    pub fn rank(&self, origin: usize) -> usize {
        self.rank_of[origin]
    }

    #[inline]
    pub fn entry(&self, rank: usize) -> &VertexEntry<P> {
        &self.entries[rank]
    }

    /// Binary search by coordinates.
    pub fn find<K: Kernel<Point = P>>(&self, kernel: &K, p: &P) -> Option<&VertexEntry<P>> {
        self.entries
            .binary_search_by(|e| kernel.compare_xy(&e.point, p))
            .ok()
            .map(|k| &self.entries[k])
    }

    #[inline]
    pub fn cursor(&self, origin: usize) -> Option<usize> {
        self.entries[self.rank_of[origin]].cursor
    }

    #[inline]
    pub fn set_cursor(&mut self, origin: usize, cursor: Option<usize>) {
        let rank = self.rank_of[origin];
        self.entries[rank].cursor = cursor;
    }

    /// Entries in increasing (x, y) order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &VertexEntry<P>> + '_ {
        self.entries.iter()
    }
}

/// Non-vertical boundary edge `index`, endpoints left to right.
#[derive(Clone, Copy, Debug)]
struct Span<P> {
    index: usize,
    lo: P,
    hi: P,
}

impl<P: Copy> Span<P> {
    fn of<K: Kernel<Point = P>>(kernel: &K, polygon: &[P], index: usize) -> Option<Self> {
        let (a, b) = (polygon[index], polygon[next_index(polygon.len(), index)]);
        match kernel.compare_x(&a, &b) {
            Ordering::Equal => None,
            Ordering::Less => Some(Self { index, lo: a, hi: b }),
            Ordering::Greater => Some(Self { index, lo: b, hi: a }),
        }
    }
}

/// For every vertex, the boundary edge hit first by a ray leaving it straight
/// down, rotated infinitesimally counter-clockwise. Indexed by polygon position.
///
/// Vertical edges never qualify, and an edge qualifies only when its x-range
/// `[lo, hi)` contains the vertex: the perturbed ray sits just right of the
/// vertex's x-coordinate. Edges incident to the vertex are skipped.
///
/// One sweep over `order` (the xy order of `polygon`). The active edges are
/// those whose range `[lo, hi)` contains the sweep abscissa, kept sorted bottom
/// to top by `below`; edges of a simple polygon never cross, so that order
/// does not change while both stay active. At each abscissa the edges ending
/// there leave, the edges starting there enter, and each vertex reads off the
/// highest active edge it lies strictly above. Edges starting at the vertex
/// itself pass through it and sort above that one.
fn edges_below<K: Kernel>(
    kernel: &K,
    polygon: &[K::Point],
    order: &[usize],
) -> Vec<Option<usize>> {
    let n = polygon.len();
    let mut cursors = vec![None; n];
    let mut active: Vec<Span<K::Point>> = Vec::new();
    let mut start = 0;
    while start < order.len() {
        let x = polygon[order[start]];
        let len = order[start..]
            .partition_point(|&v| kernel.compare_x(&polygon[v], &x) == Ordering::Equal);
        let group = &order[start..start + len];
        start += len;

        let spans: Vec<Span<K::Point>> = group
            .iter()
            .flat_map(|&v| [v, prev_index(n, v)])
            .filter_map(|k| Span::of(kernel, polygon, k))
            .collect();
        for e in spans.iter().filter(|e| kernel.compare_x(&e.hi, &x) == Ordering::Equal) {
            let at = active.partition_point(|f| below(kernel, (&f.lo, &f.hi), (&e.lo, &e.hi)));
            let found = active[at..]
                .iter()
                .position(|f| f.index == e.index)
                .map(|off| at + off)
                .or_else(|| active.iter().position(|f| f.index == e.index));
            if let Some(at) = found {
                active.remove(at);
            }
        }
        for e in spans.iter().filter(|e| kernel.compare_x(&e.lo, &x) == Ordering::Equal) {
            let at = active.partition_point(|f| below(kernel, (&f.lo, &f.hi), (&e.lo, &e.hi)));
            active.insert(at, *e);
        }
        for &v in group {
            let p = &polygon[v];
            let at = active.partition_point(|f| kernel.left_turn(&f.lo, &f.hi, p));
            cursors[v] = at.checked_sub(1).map(|k| active[k].index);
        }
    }
    cursors
}

/// Pre: both edges are non-vertical, given left to right, do not cross, and
/// both span the sweep abscissa. True iff `e1` lies below `e2` just right of it.
fn below<K: Kernel>(kernel: &K, e1: (&K::Point, &K::Point), e2: (&K::Point, &K::Point)) -> bool {
    let (a1, b1) = e1;
    let (a2, b2) = e2;
    if kernel.compare_x(a1, a2) != Ordering::Greater {
        let mut o = kernel.orientation(a1, b1, a2);
        if o == Orientation::Collinear {
            o = kernel.orientation(a1, b1, b2);
        }
        o == Orientation::LeftTurn
    } else {
        let mut o = kernel.orientation(a2, b2, a1);
        if o == Orientation::Collinear {
            o = kernel.orientation(a2, b2, b1);
        }
        o == Orientation::RightTurn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{I64Kernel, VerticalDirection};
    use crate::polygon::rand::{
        draw_star_polygon, draw_two_opt_polygon, RandomPolygonCfg, ReplayToken, VertexCount,
    };

    /// Reference: scan every edge for one vertex.
    fn edge_below<K: Kernel>(kernel: &K, polygon: &[K::Point], origin: usize) -> Option<usize> {
        let n = polygon.len();
        let p = polygon[origin];
        let ray = kernel.construct_ray(p, VerticalDirection::Down);
        let mut best: Option<Span<K::Point>> = None;
        for k in 0..n {
            if k == origin || next_index(n, k) == origin {
                continue;
            }
            let Some(e) = Span::of(kernel, polygon, k) else {
                continue;
            };
            if kernel.compare_x(&e.hi, &p) != Ordering::Greater {
                continue;
            }
            if !kernel.ray_intersects_segment(&ray, &kernel.construct_segment(e.lo, e.hi)) {
                continue;
            }
            if best.map_or(true, |b| below(kernel, (&b.lo, &b.hi), (&e.lo, &e.hi))) {
                best = Some(e);
            }
        }
        best.map(|e| e.index)
    }

    #[test]
    fn sweep_matches_per_vertex_scan() {
        let mut checked = 0;
        for (grid, max) in [(2, 12), (3, 20), (5, 30), (20, 40), (1000, 40)] {
            let cfg = RandomPolygonCfg {
                vertex_count: VertexCount::Uniform { min: 3, max },
                grid,
                max_attempts: 16,
            };
            for index in 0..40 {
                let tok = ReplayToken { seed: grid as u64, index };
                let draws = [draw_star_polygon(cfg, tok), draw_two_opt_polygon(cfg, tok)];
                for poly in draws.iter().flatten() {
                    let map = VertexMap::initialize(&I64Kernel, poly);
                    for origin in 0..poly.len() {
                        assert_eq!(
                            map.cursor(origin),
                            edge_below(&I64Kernel, poly, origin),
                            "vertex {origin} of {poly:?}"
                        );
                    }
                    checked += 1;
                }
            }
        }
        assert!(checked > 150);
    }

    #[test]
    fn entries_follow_xy_order() {
        let poly = [[0, 0], [4, 0], [4, 4], [0, 4]];
        let map = VertexMap::initialize(&I64Kernel, &poly);
        let origins: Vec<_> = map.iter().map(|e| e.origin).collect();
        assert_eq!(origins, vec![0, 3, 1, 2]);
        assert_eq!(map.rank(2), 3);
        assert_eq!(map.find(&I64Kernel, &[0, 4]).map(|e| e.origin), Some(3));
        assert!(map.find(&I64Kernel, &[1, 1]).is_none());
    }

    #[test]
    fn square_top_corners_see_the_floor() {
        let poly = [[0, 0], [4, 0], [4, 4], [0, 4]];
        let map = VertexMap::initialize(&I64Kernel, &poly);
        // (0,4): the floor edge 0 spans [0, 4) and lies below.
        assert_eq!(map.cursor(3), Some(0));
        // the other corners only have vertical edges or edges above them
        assert_eq!(map.cursor(2), None);
        assert_eq!(map.cursor(0), None);
        assert_eq!(map.cursor(1), None);
    }

    #[test]
    fn picks_the_nearest_of_stacked_edges() {
        let poly = [[0, 0], [6, 0], [6, 4], [3, 2], [0, 4]];
        let map = VertexMap::initialize(&I64Kernel, &poly);
        assert_eq!(map.cursor(3), Some(0));
        // edge (6,4)->(3,2) spans [3, 6) and misses x = 0
        assert_eq!(map.cursor(4), Some(0));
    }

    #[test]
    fn shared_left_endpoint_breaks_tie_by_slope() {
        // (2,6) sits straight above (2,0), where the floor and the notch edge
        // (5,3)->(2,0) both start. The notch edge is higher just right of x = 2.
        let poly = [[2, 0], [8, 0], [8, 6], [2, 6], [5, 3]];
        let map = VertexMap::initialize(&I64Kernel, &poly);
        assert_eq!(map.cursor(3), Some(4));
        assert_eq!(map.cursor(4), Some(0));
        assert_eq!(map.cursor(0), None);
    }

    #[test]
    fn cursor_updates_are_stored_by_origin() {
        let poly = [[0, 0], [4, 0], [4, 4], [0, 4]];
        let mut map = VertexMap::initialize(&I64Kernel, &poly);
        map.set_cursor(2, Some(3));
        assert_eq!(map.cursor(2), Some(3));
        assert_eq!(map.entry(map.rank(2)).cursor, Some(3));
    }
}
