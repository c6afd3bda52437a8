//! Vertex visibility graphs of simple polygons.
//!
//! Modules
//! - `kernel`: exact geometric predicates behind a `Kernel` trait.
//! - `rotation_tree`: the arena-backed tree that orders the sweep.
//! - `visibility`: vertex map, edge set, and the `VisibilityGraph` builder.
//! - `polygon`: precondition checks and a random polygon sampler.
//!
//! API Policy
//! - `api` and `prelude` collect the types callers usually need. Everything
//!   else is reachable through the module paths above.

pub mod api;
pub mod kernel;
pub mod polygon;
pub mod rotation_tree;
pub mod visibility;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use kernel::{F64Kernel, I64Kernel, Kernel, KernelCfg};
pub use nalgebra::Vector2 as Vec2;
pub use visibility::VisibilityGraph;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::kernel::{F64Kernel, I64Kernel, Kernel, KernelCfg, Orientation};
    pub use crate::polygon::rand::{
        draw_star_polygon, draw_two_opt_polygon, RandomPolygonCfg, ReplayToken, VertexCount,
    };
    pub use crate::polygon::{check_simple, PolygonError};
    pub use crate::visibility::{EdgeObserver, Rejection, ValidationError, VisibilityGraph};
}
