//! Lattice points, center parity and exact integer helpers.
//!
//! Lattice points are `glam::IVec2`. The center is either the origin or
//! `(0.5, 0.5)`; comparisons against it are done on doubled coordinates so
//! they stay in integer arithmetic.

use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};

/// A point with integer coordinates.
pub type LatticePoint = IVec2;

// =============================================================================
// CENTER PARITY
// =============================================================================

/// Which of the two canonical centers a search or compile runs around.
///
/// ## Example
///
/// ```rust
/// use wedge_circle::CenterParity;
/// use glam::DVec2;
///
/// assert_eq!(CenterParity::Odd.center(), DVec2::new(0.5, 0.5));
/// assert_eq!(CenterParity::Odd.doubled(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CenterParity {
    /// Center at the integer origin `(0, 0)`.
    Even,
    /// Center at the half-integer offset `(0.5, 0.5)`.
    Odd,
}

impl CenterParity {
    /// Maps the persisted `odd_center` flag to a parity.
    #[must_use]
    pub fn from_odd(odd_center: bool) -> Self {
        if odd_center {
            Self::Odd
        } else {
            Self::Even
        }
    }

    /// Returns `true` for the `(0.5, 0.5)` center.
    #[must_use]
    pub fn is_odd(self) -> bool {
        self == Self::Odd
    }

    /// Center position as a real point.
    #[must_use]
    pub fn center(self) -> DVec2 {
        DVec2::from_array(config::constants::center_for(self.is_odd()))
    }

    /// Twice the center coordinate (identical on both axes): 0 or 1.
    #[must_use]
    pub fn doubled(self) -> i32 {
        match self {
            Self::Even => 0,
            Self::Odd => 1,
        }
    }
}

// =============================================================================
// INTEGER HELPERS
// =============================================================================

/// Z component of `(a - o) × (b - o)`, computed exactly.
///
/// Positive for a counter-clockwise turn, zero when collinear.
#[inline]
#[must_use]
pub fn cross(o: IVec2, a: IVec2, b: IVec2) -> i64 {
    let (ax, ay) = (i64::from(a.x - o.x), i64::from(a.y - o.y));
    let (bx, by) = (i64::from(b.x - o.x), i64::from(b.y - o.y));
    ax * by - ay * bx
}

/// Greatest common divisor of the absolute values; `gcd(0, 0) == 0`.
#[must_use]
pub fn gcd(a: i32, b: i32) -> i32 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Returns `true` when `b` lies inside the axis-aligned box spanned by `a` and `c`.
#[inline]
#[must_use]
pub fn is_between(a: IVec2, b: IVec2, c: IVec2) -> bool {
    a.min(c).cmple(b).all() && b.cmple(a.max(c)).all()
}

// =============================================================================
// REAL-VALUED HELPERS
// =============================================================================

/// Euclidean distance from `center` to a lattice point.
#[inline]
#[must_use]
pub fn distance_to_center(point: IVec2, center: DVec2) -> f64 {
    point.as_dvec2().distance(center)
}

/// Angle of `point` around `center`, measured from the positive x-axis
/// and normalized to `[0, 2π)`.
#[must_use]
pub fn angle_around(point: IVec2, center: DVec2) -> f64 {
    let d = point.as_dvec2() - center;
    let angle = d.y.atan2(d.x);
    if angle >= 0.0 {
        angle
    } else {
        angle + std::f64::consts::TAU
    }
}
