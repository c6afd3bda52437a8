//! Vertex visibility graph of a simple polygon.
//!
//! Purpose
//! - Report every unordered vertex pair whose connecting segment stays inside
//!   the polygon. Boundary sides always count.
//!
//! Why this design
//! - The rotation-tree sweep (`sweep.rs`) visits each of the n(n−1)/2 pairs once
//!   and decides it with a constant number of kernel predicates, using a per
//!   vertex cursor (`vertex_map.rs`) instead of testing every boundary edge.
//! - Edges live in a rank-keyed `BTreeSet` (`edge_set.rs`), so canonical order
//!   and iteration order coincide.
//! - Tracing is injected through `EdgeObserver`; the algorithm itself prints
//!   nothing.
//! - `oracle.rs` is an O(n³) brute-force recomputation for tests.
//!
//! References
//! - Overmars, Welzl: "New methods for computing visibility graphs" (SoCG 1988).
//! - Code cross-refs: `rotation_tree::RotationTree`, `polygon::check_simple`.

mod edge_set;
mod graph;
mod observer;
mod oracle;
mod sweep;
mod vertex_map;

pub use edge_set::EdgeSet;
pub use graph::VisibilityGraph;
pub use observer::{EdgeObserver, NoopObserver, Rejection, TracingObserver};
pub use oracle::{brute_force_edges, brute_force_visible, validate, ValidationError};
pub use vertex_map::{VertexEntry, VertexMap};
