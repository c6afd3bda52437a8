//! Random simple polygons on the integer grid (replayable).
//!
//! Purpose
//! - Inputs for property tests, benchmarks, and the CLI's `random` command.
//!   Integer coordinates keep every kernel exact, and small grids produce
//!   plenty of collinear vertex triples.
//!
//! Model
//! - Draw `n` distinct grid points in `[-grid, grid]²`.
//! - Star: sort them by angle around their centroid (ties by distance), and
//!   keep the cycle if it is a ccw simple polygon. Otherwise redraw, up to
//!   `max_attempts` times.
//! - 2-opt: start from the drawn order and reverse the path between two
//!   crossing edges until none cross. Pockets, spirals and combs show up here,
//!   which the star sampler never produces.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `polygon::check_simple`

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

use super::{check_simple, PolygonError};
use crate::kernel::I64Kernel;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RandomPolygonCfg {
    pub vertex_count: VertexCount,
    /// Half-width of the coordinate box.
    pub grid: i64,
    pub max_attempts: usize,
}

impl Default for RandomPolygonCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 3, max: 12 },
            grid: 20,
            max_attempts: 64,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random star-shaped ccw simple polygon.
///
/// Returns `None` when the grid cannot hold the requested vertex count or no
/// attempt produced a simple polygon.
pub fn draw_star_polygon(cfg: RandomPolygonCfg, tok: ReplayToken) -> Option<Vec<[i64; 2]>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let grid = fitting_grid(cfg.grid, n)?;
    for _ in 0..cfg.max_attempts.max(1) {
        let pts = star_order(draw_distinct(&mut rng, n, grid));
        if check_simple(&I64Kernel, &pts).is_ok() {
            return Some(pts);
        }
    }
    None
}

/// Draw a random ccw simple polygon by untangling a random vertex order.
///
/// Each step asks `check_simple` for a crossing pair of edges `i < j` and
/// reverses `v_{i+1} ..= v_j`. Adjacent edges folding back onto each other
/// cannot be fixed that way; the order is reshuffled instead. Gives up after
/// `max_attempts · n²` steps.
pub fn draw_two_opt_polygon(cfg: RandomPolygonCfg, tok: ReplayToken) -> Option<Vec<[i64; 2]>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let grid = fitting_grid(cfg.grid, n)?;
    let mut pts = draw_distinct(&mut rng, n, grid);
    let steps = cfg.max_attempts.max(1).saturating_mul(n.saturating_mul(n));
    for _ in 0..steps {
        match check_simple(&I64Kernel, &pts) {
            Ok(()) => return Some(pts),
            Err(PolygonError::NotCounterClockwise) => pts.reverse(),
            Err(PolygonError::SelfIntersecting { first, second })
                if second > first + 1 && !(first == 0 && second == n - 1) =>
            {
                pts[first + 1..=second].reverse();
            }
            Err(PolygonError::SelfIntersecting { .. }) => pts.shuffle(&mut rng),
            Err(_) => return None,
        }
    }
    None
}

/// `grid` clamped to at least 1, or `None` when `[-grid, grid]²` cannot hold
/// `n` distinct points or leaves the exact kernel's range.
fn fitting_grid(grid: i64, n: usize) -> Option<i64> {
    let grid = grid.max(1);
    if grid >= I64Kernel::COORD_LIMIT {
        return None;
    }
    let side = grid.checked_mul(2)?.checked_add(1)?;
    match side.checked_mul(side) {
        Some(cells) if cells < n as i64 => None,
        _ => Some(grid),
    }
}

fn draw_distinct<R: Rng>(rng: &mut R, n: usize, grid: i64) -> Vec<[i64; 2]> {
    let mut seen = HashSet::with_capacity(n);
    let mut pts = Vec::with_capacity(n);
    while pts.len() < n {
        let p = [rng.gen_range(-grid..=grid), rng.gen_range(-grid..=grid)];
        if seen.insert(p) {
            pts.push(p);
        }
    }
    pts
}

/// Sort by angle around the centroid, nearer points first on ties.
fn star_order(mut pts: Vec<[i64; 2]>) -> Vec<[i64; 2]> {
    let n = pts.len() as f64;
    let cx = pts.iter().map(|p| p[0] as f64).sum::<f64>() / n;
    let cy = pts.iter().map(|p| p[1] as f64).sum::<f64>() / n;
    let key = |p: &[i64; 2]| {
        let (dx, dy) = (p[0] as f64 - cx, p[1] as f64 - cy);
        (dy.atan2(dx), dx * dx + dy * dy)
    };
    pts.sort_by(|a, b| {
        key(a)
            .partial_cmp(&key(b))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    pts
}

/// Same polygon for the floating-point kernel.
pub fn to_f64(polygon: &[[i64; 2]]) -> Vec<Vector2<f64>> {
    polygon
        .iter()
        .map(|p| Vector2::new(p[0] as f64, p[1] as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::is_counterclockwise;

    #[test]
    fn replay_token_is_deterministic() {
        let cfg = RandomPolygonCfg::default();
        let tok = ReplayToken { seed: 7, index: 3 };
        assert_eq!(draw_star_polygon(cfg, tok), draw_star_polygon(cfg, tok));
        let other = ReplayToken { seed: 7, index: 4 };
        assert_ne!(draw_star_polygon(cfg, tok), draw_star_polygon(cfg, other));
    }

    #[test]
    fn draws_are_simple_and_ccw() {
        let cfg = RandomPolygonCfg {
            vertex_count: VertexCount::Fixed(9),
            grid: 6,
            max_attempts: 200,
        };
        let mut found = 0;
        for index in 0..32 {
            if let Some(poly) = draw_star_polygon(cfg, ReplayToken { seed: 1, index }) {
                assert_eq!(poly.len(), 9);
                assert_eq!(check_simple(&I64Kernel, &poly), Ok(()));
                assert!(is_counterclockwise(&I64Kernel, &poly));
                found += 1;
            }
        }
        assert!(found > 0);
    }

    #[test]
    fn overfull_grid_gives_none() {
        let cfg = RandomPolygonCfg {
            vertex_count: VertexCount::Fixed(30),
            grid: 1,
            max_attempts: 4,
        };
        assert_eq!(draw_star_polygon(cfg, ReplayToken { seed: 0, index: 0 }), None);
    }

    #[test]
    fn huge_grids_give_none_instead_of_overflowing() {
        let tok = ReplayToken { seed: 0, index: 0 };
        for grid in [i64::MAX, i64::MAX / 2 + 1, I64Kernel::COORD_LIMIT] {
            let cfg = RandomPolygonCfg {
                grid,
                ..RandomPolygonCfg::default()
            };
            assert_eq!(draw_star_polygon(cfg, tok), None);
            assert_eq!(draw_two_opt_polygon(cfg, tok), None);
        }
        assert_eq!(fitting_grid(0, 9), Some(1));
        assert_eq!(fitting_grid(1, 10), None);
        let widest = I64Kernel::COORD_LIMIT - 1;
        assert_eq!(fitting_grid(widest, 12), Some(widest));
    }

    #[test]
    fn two_opt_draws_are_simple_and_ccw() {
        let cfg = RandomPolygonCfg {
            vertex_count: VertexCount::Uniform { min: 3, max: 24 },
            grid: 5,
            max_attempts: 16,
        };
        let mut found = 0;
        for index in 0..64 {
            let tok = ReplayToken { seed: 2, index };
            if let Some(poly) = draw_two_opt_polygon(cfg, tok) {
                assert_eq!(check_simple(&I64Kernel, &poly), Ok(()));
                assert_eq!(draw_two_opt_polygon(cfg, tok).as_ref(), Some(&poly));
                found += 1;
            }
        }
        assert!(found > 32);
    }

    #[test]
    fn vertex_count_is_clamped_to_a_triangle() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(VertexCount::Fixed(1).sample(&mut rng), 3);
        let n = VertexCount::Uniform { min: 0, max: 2 }.sample(&mut rng);
        assert_eq!(n, 3);
    }
}
