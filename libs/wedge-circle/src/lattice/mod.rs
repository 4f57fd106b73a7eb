//! # Lattice Polygon Builder
//!
//! Turns a center and radius into the convex lattice polygon spanned by
//! every integer point inside the circle.
//!
//! ## Pipeline
//!
//! ```text
//! (center, radius) → lattice points → convex hull → collinear removal → Polygon
//! ```

pub mod hull;

use glam::IVec2;

use crate::core::point::{distance_to_center, CenterParity};
use crate::core::polygon::Polygon;
use crate::error::{CircleError, CircleResult};
use config::constants::MIN_POLYGON_VERTICES;
pub use hull::{convex_hull, remove_collinear};

/// Enumerates every lattice point within `radius` of the parity's center.
///
/// The scan covers `floor(c - r)..=ceil(c + r)` on both axes.
#[must_use]
pub fn lattice_points(parity: CenterParity, radius: f64) -> Vec<IVec2> {
    let center = parity.center();
    let min_x = (center.x - radius).floor() as i32;
    let max_x = (center.x + radius).ceil() as i32;
    let min_y = (center.y - radius).floor() as i32;
    let max_y = (center.y + radius).ceil() as i32;

    (min_x..=max_x)
        .flat_map(|x| (min_y..=max_y).map(move |y| IVec2::new(x, y)))
        .filter(|&p| distance_to_center(p, center) <= radius)
        .collect()
}

/// Hull of the lattice disc with collinear vertices removed, in hull order.
///
/// Fails with [`CircleError::InsufficientPoints`] when fewer than three
/// points or hull vertices are available.
pub fn lattice_hull(parity: CenterParity, radius: f64) -> CircleResult<Vec<IVec2>> {
    let points = lattice_points(parity, radius);
    let insufficient = |found: usize| CircleError::InsufficientPoints { radius, found };
    if points.len() < MIN_POLYGON_VERTICES {
        return Err(insufficient(points.len()));
    }

    let hull = convex_hull(&points);
    if hull.len() < MIN_POLYGON_VERTICES {
        return Err(insufficient(hull.len()));
    }

    let simplified = remove_collinear(hull);
    if simplified.len() < MIN_POLYGON_VERTICES {
        return Err(insufficient(simplified.len()));
    }
    Ok(simplified)
}

/// Builds the angularly ordered lattice polygon for `radius`.
///
/// ## Example
///
/// ```rust
/// use wedge_circle::{build_lattice_polygon, CenterParity};
///
/// let poly = build_lattice_polygon(CenterParity::Even, 1.0).unwrap();
/// assert_eq!(poly.sides(), 4);
/// ```
pub fn build_lattice_polygon(parity: CenterParity, radius: f64) -> CircleResult<Polygon> {
    let hull = lattice_hull(parity, radius)?;
    Polygon::from_vertices(hull, parity)
}
