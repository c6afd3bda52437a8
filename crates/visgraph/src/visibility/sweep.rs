//! Rotation-tree sweep (Overmars–Welzl) over the vertices of a simple polygon.
//!
//! Every vertex `p` carries a ray that rotates counter-clockwise from straight
//! down to straight up. The rotation tree hands out the pairs `(p, q)`, `p <xy q`,
//! in the order in which `p`'s ray passes `q`; each pair is handled once. The
//! vertex map stores, per vertex, the boundary edge its ray hits first, so a
//! handled pair needs O(1) predicate calls instead of a scan of the boundary.
//!
//! When `p` sees `q` and the ray slides past `q` without meeting one of `q`'s
//! edges, `p` inherits `q`'s cursor. The rotation tree guarantees that `q` has
//! already swept every direction up to the current one, with one exception:
//! vertices collinear with `p` and `q` beyond `q`. Those are resolved by walking
//! the collinear parent chain (`update_collinear_visibility`).

use crate::kernel::{Kernel, Orientation};
use crate::polygon::{in_interior_cone, next_index, prev_index};
use crate::rotation_tree::{NodeId, RotationTree};

use super::edge_set::EdgeSet;
use super::observer::{EdgeObserver, Rejection};
use super::vertex_map::VertexMap;

pub(crate) struct Sweep<'a, K: Kernel> {
    kernel: &'a K,
    polygon: &'a [K::Point],
    tree: RotationTree<K::Point>,
    /// Node of the xy-largest vertex, where the sweep starts.
    start: Option<NodeId>,
    vertex_map: VertexMap<K::Point>,
    /// Partner of the last pair handled from each vertex.
    last_partner: Vec<Option<usize>>,
    edges: &'a mut EdgeSet<K::Point>,
    observer: &'a mut dyn EdgeObserver<K::Point>,
}

impl<'a, K: Kernel> Sweep<'a, K> {
    /// Pre: `edges` holds the vertex table of `vertex_map`.
    pub(crate) fn new(
        kernel: &'a K,
        polygon: &'a [K::Point],
        vertex_map: VertexMap<K::Point>,
        edges: &'a mut EdgeSet<K::Point>,
        observer: &'a mut dyn EdgeObserver<K::Point>,
    ) -> Self {
        let decreasing: Vec<(usize, K::Point)> = vertex_map
            .iter()
            .rev()
            .map(|e| (e.origin, e.point))
            .collect();
        let (tree, ids) = RotationTree::initial(&decreasing);
        Self {
            kernel,
            polygon,
            tree,
            start: ids.first().copied(),
            vertex_map,
            last_partner: vec![None; polygon.len()],
            edges,
            observer,
        }
    }

    /// Polygon sides first, then every pair the rotation tree produces.
    pub(crate) fn run(mut self) {
        for i in 0..self.polygon.len() {
            let j = self.next(i);
            if i != j {
                let (a, b) = (self.vertex_map.rank(i), self.vertex_map.rank(j));
                self.edges.insert_ranks(a, b);
            }
        }

        let Some(largest) = self.start else {
            return;
        };
        let mut stack: Vec<NodeId> = vec![largest];
        while let Some(p) = stack.pop() {
            let p_right = self.tree.right_sibling(p);
            let Some(q) = self.tree.parent(p) else {
                continue;
            };
            if self.tree.parent_is_p_infinity(p) {
                // p has swept every direction
                if let Some(r) = p_right {
                    stack.push(r);
                }
                continue;
            }
            if !self.tree.parent_is_p_minus_infinity(p) {
                self.handle(p, q);
            }
            let z = self.tree.left_sibling(q);
            self.tree.erase(p);
            match z.filter(|&z| self.left_turn_to_parent(p, z)) {
                None => self.tree.insert_left_of(p, q),
                Some(mut z) => {
                    while let Some(c) = self
                        .tree
                        .rightmost_child(z)
                        .filter(|&c| self.left_turn_to_parent(p, c))
                    {
                        z = c;
                    }
                    self.tree.push_rightmost_child(p, z);
                    if stack.last() == Some(&z) {
                        stack.pop();
                    }
                }
            }
            if self.tree.left_sibling(p).is_none() {
                stack.push(p);
            }
            if let Some(r) = p_right {
                stack.push(r);
            }
        }
    }

    /// Does `p → q → parent(q)` turn left?
    ///
    /// Against `p_infinity` (straight up) this is `p <xy q`; against
    /// `p_minus_infinity` (straight down) it is `q <xy p`. A collinear triple
    /// counts as a left turn iff `q` lies strictly between `p` and its parent,
    /// which keeps `p` from hanging below a vertex it cannot see past `q`.
    fn left_turn_to_parent(&self, p: NodeId, q: NodeId) -> bool {
        let (Some(pp), Some(qp), Some(parent)) =
            (self.tree.point(p), self.tree.point(q), self.tree.parent(q))
        else {
            return false;
        };
        if self.tree.parent_is_p_infinity(q) {
            return self.kernel.less_xy(&pp, &qp);
        }
        if self.tree.parent_is_p_minus_infinity(q) {
            return self.kernel.less_xy(&qp, &pp);
        }
        let Some(rp) = self.tree.point(parent) else {
            return false;
        };
        match self.kernel.orientation(&pp, &qp, &rp) {
            Orientation::Collinear => self.kernel.are_strictly_ordered_along_line(&pp, &qp, &rp),
            o => o == Orientation::LeftTurn,
        }
    }

    #[inline]
    fn next(&self, i: usize) -> usize {
        next_index(self.polygon.len(), i)
    }

    #[inline]
    fn prev(&self, i: usize) -> usize {
        prev_index(self.polygon.len(), i)
    }

    /// `j` follows `i` along the boundary.
    #[inline]
    fn is_next_to(&self, i: usize, j: usize) -> bool {
        self.next(i) == j
    }

    #[inline]
    fn are_adjacent(&self, i: usize, j: usize) -> bool {
        self.is_next_to(i, j) || self.is_next_to(j, i)
    }

    /// Can `looker`'s ray reach `to_see` before its cursor edge?
    fn point_is_visible(&self, to_see: usize, looker: usize) -> bool {
        let Some(s) = self.vertex_map.cursor(looker) else {
            return true;
        };
        let t = self.next(s);
        if to_see == s || to_see == t {
            return true;
        }
        let (a, b) = (&self.polygon[s], &self.polygon[t]);
        let side_q = self.kernel.orientation(a, b, &self.polygon[to_see]);
        let side_p = self.kernel.orientation(a, b, &self.polygon[looker]);
        side_q != Orientation::Collinear && side_q == side_p
    }

    /// Edge at `q` that a ray along `p → q`, rotated slightly counter-clockwise,
    /// meets first: among `q`'s edges turning left of the ray, the one pointing
    /// most backwards.
    fn edge_turning_left(&self, p: &K::Point, q: usize) -> Option<usize> {
        let k = self.kernel;
        let qp = &self.polygon[q];
        let after = &self.polygon[self.next(q)];
        let before = &self.polygon[self.prev(q)];
        let out_left = k.left_turn(p, qp, after);
        let in_left = k.left_turn(p, qp, before);
        match (out_left, in_left) {
            (true, true) => {
                if k.left_turn(qp, before, after) {
                    Some(q)
                } else {
                    Some(self.prev(q))
                }
            }
            (true, false) => Some(q),
            (false, true) => Some(self.prev(q)),
            (false, false) => None,
        }
    }

    /// The segment `p`–`q` is a candidate edge: decide it from `p`'s cursor and
    /// advance the cursor past `q`.
    fn handle(&mut self, p: NodeId, q: NodeId) {
        let (Some((pi, pp)), Some((qi, qp))) = (self.tree.vertex(p), self.tree.vertex(q)) else {
            return;
        };
        if let Some(r) = self.last_partner[pi].replace(qi) {
            if self
                .kernel
                .are_strictly_ordered_along_line(&pp, &self.polygon[r], &qp)
            {
                self.observer
                    .edge_rejected(&pp, &qp, Rejection::CollinearBlocker);
                return;
            }
        }
        if !self.point_is_visible(qi, pi) {
            self.observer.edge_rejected(&pp, &qp, Rejection::Blocked);
            return;
        }
        if self.are_adjacent(pi, qi) {
            self.observer.edge_accepted(&pp, &qp);
        } else if in_interior_cone(self.kernel, self.polygon, pi, &qp) {
            let (a, b) = (self.vertex_map.rank(pi), self.vertex_map.rank(qi));
            self.edges.insert_ranks(a, b);
            self.observer.edge_accepted(&pp, &qp);
        } else {
            self.observer.edge_rejected(&pp, &qp, Rejection::Exterior);
        }
        self.update_visibility(p, q);
    }

    /// Pre: `p` sees `q`. Move `p`'s cursor to what its ray hits just past `q`.
    fn update_visibility(&mut self, p: NodeId, q: NodeId) {
        let (Some((pi, pp)), Some((qi, _))) = (self.tree.vertex(p), self.tree.vertex(q)) else {
            return;
        };
        let cursor = match self.edge_turning_left(&pp, qi) {
            Some(e) => Some(e),
            None => self.update_collinear_visibility(&pp, q),
        };
        self.vertex_map.set_cursor(pi, cursor);
    }

    /// Cursor for a ray from `p` sliding past `q` without touching `q`'s edges.
    ///
    /// Usually that is `q`'s own cursor. When `q`'s tree parent lies on the same
    /// line, `q` has not swept that direction yet, so follow the collinear chain
    /// `q, parent(q), ...` until a vertex is hidden or an edge turns left. A bend
    /// in the chain ends the walk as well.
    fn update_collinear_visibility(&self, p: &K::Point, q: NodeId) -> Option<usize> {
        let mut cur = q;
        loop {
            let (ci, cp) = self.tree.vertex(cur)?;
            let Some((ri, rp)) = self.tree.parent(cur).and_then(|r| self.tree.vertex(r)) else {
                return self.vertex_map.cursor(ci);
            };
            if self.kernel.orientation(p, &cp, &rp) != Orientation::Collinear {
                return self.vertex_map.cursor(ci);
            }
            if !self.point_is_visible(ri, ci) {
                return self.vertex_map.cursor(ci);
            }
            if let Some(e) = self.edge_turning_left(&cp, ri) {
                return Some(e);
            }
            cur = self.tree.parent(cur)?;
        }
    }
}
