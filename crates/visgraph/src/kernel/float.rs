//! Floating-point kernel over `nalgebra::Vector2<f64>`.
//!
//! Predicates are exact for integer-valued coordinates below 2^26 in
//! magnitude. `eps_orient` widens the collinear band for noisy input; leave it
//! at zero when the input is already snapped.

use std::cmp::Ordering;

use nalgebra::Vector2;

use super::{Kernel, Orientation};

/// Kernel tolerances.
#[derive(Clone, Copy, Debug)]
pub struct KernelCfg {
    /// Absolute band on the orientation determinant treated as collinear.
    pub eps_orient: f64,
}

impl Default for KernelCfg {
    fn default() -> Self {
        Self { eps_orient: 0.0 }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct F64Kernel {
    pub cfg: KernelCfg,
}

impl F64Kernel {
    #[inline]
    pub fn new(cfg: KernelCfg) -> Self {
        Self { cfg }
    }
}

#[inline]
fn cross(a: &Vector2<f64>, b: &Vector2<f64>, c: &Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

impl Kernel for F64Kernel {
    type Point = Vector2<f64>;

    #[inline]
    fn compare_x(&self, a: &Vector2<f64>, b: &Vector2<f64>) -> Ordering {
        a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal)
    }

    #[inline]
    fn compare_y(&self, a: &Vector2<f64>, b: &Vector2<f64>) -> Ordering {
        a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal)
    }

    #[inline]
    fn orientation(&self, a: &Vector2<f64>, b: &Vector2<f64>, c: &Vector2<f64>) -> Orientation {
        let det = cross(a, b, c);
        if det > self.cfg.eps_orient {
            Orientation::LeftTurn
        } else if det < -self.cfg.eps_orient {
            Orientation::RightTurn
        } else {
            Orientation::Collinear
        }
    }
}
