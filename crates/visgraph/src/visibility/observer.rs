//! Hooks called by the sweep whenever a candidate pair is decided.

use std::fmt;

/// Why a candidate pair did not become an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// A boundary edge separates the two vertices.
    Blocked,
    /// Another vertex lies strictly inside the segment.
    CollinearBlocker,
    /// The segment is unobstructed but runs outside the polygon.
    Exterior,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Blocked => write!(f, "blocked by boundary"),
            Rejection::CollinearBlocker => write!(f, "blocked by collinear vertex"),
            Rejection::Exterior => write!(f, "outside polygon"),
        }
    }
}

pub trait EdgeObserver<P> {
    fn edge_accepted(&mut self, _a: &P, _b: &P) {}

    fn edge_rejected(&mut self, _a: &P, _b: &P, _reason: Rejection) {}
}

/// Ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl<P> EdgeObserver<P> for NoopObserver {}

/// Emits `trace`-level events through `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl<P: fmt::Debug> EdgeObserver<P> for TracingObserver {
    fn edge_accepted(&mut self, a: &P, b: &P) {
        tracing::trace!(a = ?a, b = ?b, "edge_accepted");
    }

    fn edge_rejected(&mut self, a: &P, b: &P, reason: Rejection) {
        tracing::trace!(a = ?a, b = ?b, %reason, "edge_rejected");
    }
}
