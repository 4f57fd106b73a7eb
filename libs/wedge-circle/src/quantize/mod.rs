//! # Edge Quantization
//!
//! Decides whether every edge of a polygon can be built from primitives no
//! longer than the format's span limit `K`.
//!
//! ## Rules (per edge, legs `dx = |Δx|`, `dy = |Δy|`)
//!
//! ```text
//! dx == 0 or dy == 0 or dx == dy      → accept (axis-aligned or 45°)
//! dx <= K and dy <= K                 → accept (one wedge)
//! g = gcd(dx, dy); dx/g, dy/g <= K    → accept (g congruent wedges)
//! otherwise                           → reject the polygon
//! ```

use glam::IVec2;

use crate::core::point::gcd;
use crate::core::polygon::Polygon;
use crate::error::{CircleError, CircleResult};

/// How a single edge is represented in the compiled output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeClass {
    /// Horizontal or vertical edge: handled by fill rectangles.
    AxisAligned,
    /// Diagonal edge buildable as one wedge of legs `(dx, dy)`.
    Single,
    /// Diagonal edge split into `count` wedges of legs `(step_x, step_y)`.
    Subdivided {
        /// Number of congruent sub-wedges (the gcd of the legs).
        count: i32,
        /// Horizontal leg of each sub-wedge.
        step_x: i32,
        /// Vertical leg of each sub-wedge.
        step_y: i32,
    },
}

/// Classifies the edge `a → b` under span limit `limit`.
///
/// Pure 45° edges longer than the limit are subdivided into unit wedges.
pub fn classify_edge(a: IVec2, b: IVec2, limit: i32) -> CircleResult<EdgeClass> {
    let d = (b - a).abs();
    let (dx, dy) = (d.x, d.y);
    if dx == 0 || dy == 0 {
        return Ok(EdgeClass::AxisAligned);
    }
    if dx <= limit && dy <= limit {
        return Ok(EdgeClass::Single);
    }
    let g = gcd(dx, dy);
    let (step_x, step_y) = (dx / g, dy / g);
    if g > 1 && step_x <= limit && step_y <= limit {
        return Ok(EdgeClass::Subdivided {
            count: g,
            step_x,
            step_y,
        });
    }
    Err(CircleError::UnrepresentableEdge { dx, dy, limit })
}

/// Returns `true` when the edge `a → b` is representable under `limit`.
#[must_use]
pub fn edge_is_representable(a: IVec2, b: IVec2, limit: i32) -> bool {
    classify_edge(a, b, limit).is_ok()
}

/// Validates every edge of `polygon`, reporting the first offending edge.
///
/// ## Example
///
/// ```rust
/// use wedge_circle::{build_lattice_polygon, validate_polygon, CenterParity};
///
/// let poly = build_lattice_polygon(CenterParity::Even, 5.0).unwrap();
/// assert!(validate_polygon(&poly, 8).is_ok());
/// ```
pub fn validate_polygon(polygon: &Polygon, limit: i32) -> CircleResult<()> {
    polygon
        .edges()
        .try_for_each(|(a, b)| classify_edge(a, b, limit).map(|_| ()))
}

/// Accept/reject verdict for `polygon` under `limit`.
#[must_use]
pub fn is_representable(polygon: &Polygon, limit: i32) -> bool {
    validate_polygon(polygon, limit).is_ok()
}
