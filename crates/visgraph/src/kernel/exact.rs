//! Exact integer kernel over `[i64; 2]`.
//!
//! Determinants are evaluated in `i128`; coordinates must stay below 2^62 in
//! magnitude so the two products cannot overflow.

use std::cmp::Ordering;

use super::{Kernel, Orientation};

#[derive(Clone, Copy, Debug, Default)]
pub struct I64Kernel;

impl I64Kernel {
    /// Exclusive bound on the magnitude of a coordinate.
    pub const COORD_LIMIT: i64 = 1 << 62;

    #[inline]
    pub fn in_range(p: &[i64; 2]) -> bool {
        p.iter().all(|c| c.unsigned_abs() < Self::COORD_LIMIT as u64)
    }
}

impl Kernel for I64Kernel {
    type Point = [i64; 2];

    #[inline]
    fn compare_x(&self, a: &[i64; 2], b: &[i64; 2]) -> Ordering {
        a[0].cmp(&b[0])
    }

    #[inline]
    fn compare_y(&self, a: &[i64; 2], b: &[i64; 2]) -> Ordering {
        a[1].cmp(&b[1])
    }

    #[inline]
    fn compare_xy(&self, a: &[i64; 2], b: &[i64; 2]) -> Ordering {
        a.cmp(b)
    }

    fn orientation(&self, a: &[i64; 2], b: &[i64; 2], c: &[i64; 2]) -> Orientation {
        let abx = b[0] as i128 - a[0] as i128;
        let aby = b[1] as i128 - a[1] as i128;
        let acx = c[0] as i128 - a[0] as i128;
        let acy = c[1] as i128 - a[1] as i128;
        Orientation::from_sign((abx * acy - aby * acx).cmp(&0))
    }
}
