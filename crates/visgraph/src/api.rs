//! Curated re-exports (UNSTABLE).
//!
//! Breaking changes are allowed. Prefer these paths in the CLI, benches, and
//! integration tests so module moves stay local.

// Kernels
pub use crate::kernel::{
    F64Kernel, I64Kernel, Kernel, KernelCfg, Orientation, Ray, Segment, VerticalDirection,
};
// Polygons
pub use crate::polygon::rand::{
    draw_star_polygon, draw_two_opt_polygon, to_f64 as polygon_to_f64, RandomPolygonCfg,
    ReplayToken as PolygonReplay, VertexCount,
};
pub use crate::polygon::{check_simple, in_interior_cone, is_counterclockwise, PolygonError};
// Rotation tree
pub use crate::rotation_tree::{NodeId, RotationTree, Site};
// Visibility
pub use crate::visibility::{
    brute_force_edges, brute_force_visible, validate, EdgeObserver, EdgeSet, NoopObserver,
    Rejection, TracingObserver, ValidationError, VertexMap, VisibilityGraph,
};
