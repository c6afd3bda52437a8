//! Geometric predicate kernel.
//!
//! Purpose
//! - Give the sweep a narrow, exact-predicate interface so it never touches
//!   coordinates directly. Any point representation (float, integer, rational)
//!   can drive the visibility graph by implementing `Kernel`.
//!
//! Contract
//! - Implementors supply `compare_x`, `compare_y` and `orientation`. The other
//!   predicates are derived from those three and only need overriding for speed.
//! - Predicates are assumed total and exact. A kernel that cannot decide (NaN,
//!   overflow) is outside the contract of the sweep.
//!
//! Code cross-refs: `F64Kernel`, `I64Kernel`, `visibility::VisibilityGraph`

mod exact;
mod float;

pub use exact::I64Kernel;
pub use float::{F64Kernel, KernelCfg};

use std::cmp::Ordering;
use std::fmt;

/// Sign of the turn `a → b → c`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    LeftTurn,
    RightTurn,
    Collinear,
}

impl Orientation {
    #[inline]
    pub fn from_sign(det: Ordering) -> Self {
        match det {
            Ordering::Greater => Orientation::LeftTurn,
            Ordering::Less => Orientation::RightTurn,
            Ordering::Equal => Orientation::Collinear,
        }
    }
}

/// Closed segment `source → target`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment<P> {
    pub source: P,
    pub target: P,
}

/// Direction of an axis-parallel vertical ray.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalDirection {
    Up,
    Down,
}

/// Closed vertical ray starting at `source`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray<P> {
    pub source: P,
    pub direction: VerticalDirection,
}

/// Exact predicates over a 2D point type.
pub trait Kernel {
    type Point: Copy + fmt::Debug;

    fn compare_x(&self, a: &Self::Point, b: &Self::Point) -> Ordering;

    fn compare_y(&self, a: &Self::Point, b: &Self::Point) -> Ordering;

    fn orientation(&self, a: &Self::Point, b: &Self::Point, c: &Self::Point) -> Orientation;

    /// Lexicographic comparison, x first then y.
    #[inline]
    fn compare_xy(&self, a: &Self::Point, b: &Self::Point) -> Ordering {
        self.compare_x(a, b).then_with(|| self.compare_y(a, b))
    }

    #[inline]
    fn less_xy(&self, a: &Self::Point, b: &Self::Point) -> bool {
        self.compare_xy(a, b) == Ordering::Less
    }

    #[inline]
    fn left_turn(&self, a: &Self::Point, b: &Self::Point, c: &Self::Point) -> bool {
        self.orientation(a, b, c) == Orientation::LeftTurn
    }

    /// Pre: `p`, `q`, `r` collinear. True iff `q` lies on the closed segment `pr`.
    fn collinear_are_ordered_along_line(
        &self,
        p: &Self::Point,
        q: &Self::Point,
        r: &Self::Point,
    ) -> bool {
        let pq = self.compare_xy(p, q);
        let qr = self.compare_xy(q, r);
        pq == Ordering::Equal || qr == Ordering::Equal || pq == qr
    }

    /// True iff `p`, `q`, `r` are collinear and `q` lies strictly between `p` and `r`.
    fn are_strictly_ordered_along_line(
        &self,
        p: &Self::Point,
        q: &Self::Point,
        r: &Self::Point,
    ) -> bool {
        if self.orientation(p, q, r) != Orientation::Collinear {
            return false;
        }
        let pq = self.compare_xy(p, q);
        pq != Ordering::Equal && pq == self.compare_xy(q, r)
    }

    #[inline]
    fn construct_segment(&self, source: Self::Point, target: Self::Point) -> Segment<Self::Point> {
        Segment { source, target }
    }

    #[inline]
    fn construct_ray(
        &self,
        source: Self::Point,
        direction: VerticalDirection,
    ) -> Ray<Self::Point> {
        Ray { source, direction }
    }

    /// True iff the two segments cross at a single point interior to both.
    fn segments_cross_properly(&self, s: &Segment<Self::Point>, t: &Segment<Self::Point>) -> bool {
        let o1 = self.orientation(&s.source, &s.target, &t.source);
        let o2 = self.orientation(&s.source, &s.target, &t.target);
        let o3 = self.orientation(&t.source, &t.target, &s.source);
        let o4 = self.orientation(&t.source, &t.target, &s.target);
        opposite(o1, o2) && opposite(o3, o4)
    }

    /// True iff the closed segment `s` meets the closed segment `t` anywhere.
    fn segments_intersect(&self, s: &Segment<Self::Point>, t: &Segment<Self::Point>) -> bool {
        if self.segments_cross_properly(s, t) {
            return true;
        }
        let touches = |a: &Self::Point, b: &Self::Point, c: &Self::Point| {
            self.orientation(a, b, c) == Orientation::Collinear
                && self.collinear_are_ordered_along_line(a, c, b)
        };
        touches(&s.source, &s.target, &t.source)
            || touches(&s.source, &s.target, &t.target)
            || touches(&t.source, &t.target, &s.source)
            || touches(&t.source, &t.target, &s.target)
    }

    /// True iff the closed vertical ray meets the closed segment.
    fn ray_intersects_segment(&self, ray: &Ray<Self::Point>, s: &Segment<Self::Point>) -> bool {
        let (lo, hi) = if self.compare_x(&s.source, &s.target) == Ordering::Greater {
            (&s.target, &s.source)
        } else {
            (&s.source, &s.target)
        };
        let src = &ray.source;
        if self.compare_x(lo, src) == Ordering::Greater || self.compare_x(hi, src) == Ordering::Less
        {
            return false;
        }
        let wanted = match ray.direction {
            VerticalDirection::Down => Ordering::Less,
            VerticalDirection::Up => Ordering::Greater,
        };
        if self.compare_x(lo, hi) == Ordering::Equal {
            // vertical segment on the ray's line
            return self.compare_y(lo, src) != wanted.reverse()
                || self.compare_y(hi, src) != wanted.reverse();
        }
        match self.orientation(lo, hi, src) {
            Orientation::Collinear => true,
            Orientation::LeftTurn => ray.direction == VerticalDirection::Down,
            Orientation::RightTurn => ray.direction == VerticalDirection::Up,
        }
    }
}

#[inline]
fn opposite(a: Orientation, b: Orientation) -> bool {
    matches!(
        (a, b),
        (Orientation::LeftTurn, Orientation::RightTurn)
            | (Orientation::RightTurn, Orientation::LeftTurn)
    )
}
