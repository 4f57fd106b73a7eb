//! # Convex Hull
//!
//! Andrew's monotone chain for lattice point sets, followed by an explicit
//! pass removing vertices that lie on the segment between their neighbours.
//!
//! ## Algorithm
//!
//! 1. Sort points lexicographically by `(x, y)`
//! 2. Build the lower chain left to right, popping while the turn is not
//!    strictly counter-clockwise (`cross <= 0`)
//! 3. Build the upper chain right to left the same way
//! 4. Concatenate both chains without their shared endpoints
//!
//! All arithmetic is exact (`i64` cross products).

use glam::IVec2;

use crate::core::point::{cross, is_between};

/// Computes the convex hull of `points` in counter-clockwise order.
///
/// Collinear boundary points are dropped. Inputs with fewer than two
/// points are returned unchanged.
#[must_use]
pub fn convex_hull(points: &[IVec2]) -> Vec<IVec2> {
    let mut sorted = points.to_vec();
    sorted.sort_by_key(|p| (p.x, p.y));
    sorted.dedup();
    if sorted.len() <= 1 {
        return sorted;
    }

    let mut lower: Vec<IVec2> = Vec::with_capacity(sorted.len());
    for &p in &sorted {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0 {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<IVec2> = Vec::with_capacity(sorted.len());
    for &p in sorted.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0 {
            upper.pop();
        }
        upper.push(p);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Repeatedly removes vertices collinear with and between their two neighbours.
///
/// Stops at a fixed point or as soon as fewer than three vertices remain.
#[must_use]
pub fn remove_collinear(mut ring: Vec<IVec2>) -> Vec<IVec2> {
    while ring.len() >= 3 {
        let n = ring.len();
        let kept: Vec<IVec2> = (0..n)
            .filter(|&i| {
                let prev = ring[(i + n - 1) % n];
                let next = ring[(i + 1) % n];
                let curr = ring[i];
                !(cross(prev, curr, next) == 0 && is_between(prev, curr, next))
            })
            .map(|i| ring[i])
            .collect();
        if kept.len() == n {
            break;
        }
        ring = kept;
    }
    ring
}
