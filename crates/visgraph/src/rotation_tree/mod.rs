//! Rotation tree: arena-backed rooted forest driving the visibility sweep.
//!
//! Purpose
//! - Order the vertex pairs `(p, q)` by the angle of `p → q` without sorting
//!   all O(n²) directions up front. At any moment the parent of `p` is the next
//!   vertex that `p`'s sweep ray will pass.
//!
//! Representation
//! - Nodes live in a `Vec` and name each other through `NodeId`. Every relation
//!   (parent, left/right sibling, rightmost child) is an `Option<NodeId>`: the
//!   handle plus its presence. No node owns another, so there are no cycles to
//!   break and ids stay valid for the whole sweep.
//! - Two sentinel nodes stand for points at infinity: `p_infinity` straight up
//!   (the root) and `p_minus_infinity` straight down.
//!
//! Code cross-refs: `visibility::VisibilityGraph::build`

use std::fmt;

/// Stable handle into a `RotationTree`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// What a node stands for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Site<P> {
    /// Polygon vertex `index` located at `point`.
    Vertex { index: usize, point: P },
    PlusInfinity,
    MinusInfinity,
}

#[derive(Clone, Debug)]
pub struct Node<P> {
    pub site: Site<P>,
    parent: Option<NodeId>,
    left_sibling: Option<NodeId>,
    right_sibling: Option<NodeId>,
    rightmost_child: Option<NodeId>,
}

impl<P> Node<P> {
    fn new(site: Site<P>) -> Self {
        Self {
            site,
            parent: None,
            left_sibling: None,
            right_sibling: None,
            rightmost_child: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RotationTree<P> {
    nodes: Vec<Node<P>>,
    p_infinity: NodeId,
    p_minus_infinity: NodeId,
}

impl<P: Copy> RotationTree<P> {
    /// Empty tree holding only the two sentinels (`p_minus_infinity` under `p_infinity`).
    pub fn new() -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            p_infinity: NodeId(0),
            p_minus_infinity: NodeId(0),
        };
        tree.p_infinity = tree.create(Site::PlusInfinity);
        tree.p_minus_infinity = tree.create(Site::MinusInfinity);
        tree.push_rightmost_child(tree.p_minus_infinity, tree.p_infinity);
        tree
    }

    /// Starting tree of the sweep.
    ///
    /// Pre: `vertices` sorted by decreasing (x, y). Every vertex becomes a child of
    /// `p_minus_infinity`, the largest one leftmost. Returns the tree and the node
    /// of each vertex in input order.
    pub fn initial(vertices: &[(usize, P)]) -> (Self, Vec<NodeId>) {
        let mut tree = Self::new();
        let mut ids = Vec::with_capacity(vertices.len());
        for &(index, point) in vertices {
            let id = tree.create(Site::Vertex { index, point });
            tree.push_rightmost_child(id, tree.p_minus_infinity);
            ids.push(id);
        }
        (tree, ids)
    }

    /// Allocate an isolated node.
    pub fn create(&mut self, site: Site<P>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(site));
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn p_infinity(&self) -> NodeId {
        self.p_infinity
    }

    #[inline]
    pub fn p_minus_infinity(&self) -> NodeId {
        self.p_minus_infinity
    }

    #[inline]
    pub fn site(&self, id: NodeId) -> Site<P> {
        self.nodes[id.0].site
    }

    /// Polygon index and coordinates, `None` for sentinels.
    #[inline]
    pub fn vertex(&self, id: NodeId) -> Option<(usize, P)> {
        match self.nodes[id.0].site {
            Site::Vertex { index, point } => Some((index, point)),
            _ => None,
        }
    }

    #[inline]
    pub fn point(&self, id: NodeId) -> Option<P> {
        self.vertex(id).map(|(_, p)| p)
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    #[inline]
    pub fn left_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].left_sibling
    }

    #[inline]
    pub fn right_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].right_sibling
    }

    #[inline]
    pub fn rightmost_child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].rightmost_child
    }

    #[inline]
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.nodes[id.0].rightmost_child.is_none()
    }

    #[inline]
    pub fn parent_is_p_infinity(&self, id: NodeId) -> bool {
        self.parent(id) == Some(self.p_infinity)
    }

    #[inline]
    pub fn parent_is_p_minus_infinity(&self, id: NodeId) -> bool {
        self.parent(id) == Some(self.p_minus_infinity)
    }

    // Single-relation setters. They do not touch the other end of the link.

    #[inline]
    pub fn set_parent(&mut self, id: NodeId, parent: NodeId) {
        self.nodes[id.0].parent = Some(parent);
    }

    #[inline]
    pub fn clear_parent(&mut self, id: NodeId) {
        self.nodes[id.0].parent = None;
    }

    #[inline]
    pub fn set_left_sibling(&mut self, id: NodeId, sibling: NodeId) {
        self.nodes[id.0].left_sibling = Some(sibling);
    }

    #[inline]
    pub fn clear_left_sibling(&mut self, id: NodeId) {
        self.nodes[id.0].left_sibling = None;
    }

    #[inline]
    pub fn set_right_sibling(&mut self, id: NodeId, sibling: NodeId) {
        self.nodes[id.0].right_sibling = Some(sibling);
    }

    #[inline]
    pub fn clear_right_sibling(&mut self, id: NodeId) {
        self.nodes[id.0].right_sibling = None;
    }

    #[inline]
    pub fn set_rightmost_child(&mut self, id: NodeId, child: NodeId) {
        self.nodes[id.0].rightmost_child = Some(child);
    }

    #[inline]
    pub fn clear_rightmost_child(&mut self, id: NodeId) {
        self.nodes[id.0].rightmost_child = None;
    }

    /// Unlink `id` from its parent and siblings, keeping its own children.
    pub fn erase(&mut self, id: NodeId) {
        let left = self.left_sibling(id);
        let right = self.right_sibling(id);
        if let Some(l) = left {
            self.nodes[l.0].right_sibling = right;
        }
        if let Some(r) = right {
            self.nodes[r.0].left_sibling = left;
        }
        if let Some(parent) = self.parent(id) {
            if self.rightmost_child(parent) == Some(id) {
                self.nodes[parent.0].rightmost_child = left;
            }
        }
        let node = &mut self.nodes[id.0];
        node.parent = None;
        node.left_sibling = None;
        node.right_sibling = None;
    }

    /// Attach `child` as the new rightmost child of `parent`.
    ///
    /// Pre: `child` is detached.
    pub fn push_rightmost_child(&mut self, child: NodeId, parent: NodeId) {
        let old = self.rightmost_child(parent);
        {
            let node = &mut self.nodes[child.0];
            node.parent = Some(parent);
            node.left_sibling = old;
            node.right_sibling = None;
        }
        if let Some(o) = old {
            self.set_right_sibling(o, child);
        }
        self.set_rightmost_child(parent, child);
    }

    /// Attach `id` immediately to the left of `sibling`, under the same parent.
    ///
    /// Pre: `id` is detached and `sibling` has a parent.
    pub fn insert_left_of(&mut self, id: NodeId, sibling: NodeId) {
        let left = self.left_sibling(sibling);
        let parent = self.parent(sibling);
        {
            let node = &mut self.nodes[id.0];
            node.parent = parent;
            node.right_sibling = Some(sibling);
            node.left_sibling = left;
        }
        if let Some(l) = left {
            self.set_right_sibling(l, id);
        }
        self.set_left_sibling(sibling, id);
    }

    /// Children of `id` from right to left.
    #[cfg(test)]
    pub(crate) fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.rightmost_child(id), move |&c| self.left_sibling(c))
    }
}

impl<P: Copy> Default for RotationTree<P> {
    fn default() -> Self {
        Self::new()
    }
}

struct SiteLabel<'a, P>(&'a Site<P>);

impl<P: fmt::Debug> fmt::Display for SiteLabel<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Site::Vertex { index, point } => write!(f, "v{index} {point:?}"),
            Site::PlusInfinity => write!(f, "+inf"),
            Site::MinusInfinity => write!(f, "-inf"),
        }
    }
}

/// One line per node: site, then each present relation.
impl<P: Copy + fmt::Debug> fmt::Display for RotationTree<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = |id: NodeId| SiteLabel(&self.nodes[id.0].site);
        for (k, node) in self.nodes.iter().enumerate() {
            write!(f, "{}", SiteLabel(&node.site))?;
            if let Some(p) = node.parent {
                write!(f, "  parent {}", label(p))?;
            }
            if let Some(l) = node.left_sibling {
                write!(f, "  left sibling {}", label(l))?;
            }
            if let Some(r) = node.right_sibling {
                write!(f, "  right sibling {}", label(r))?;
            }
            if let Some(c) = node.rightmost_child {
                write!(f, "  rightmost child {}", label(c))?;
            }
            if k + 1 < self.nodes.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
