//! # Blueprint Compiler
//!
//! Turns a validated lattice polygon into axis-aligned rectangles and
//! right-triangle wedges that tile its interior without overlap.
//!
//! ## Fill strategy
//!
//! ```text
//!        ____
//!      /|    |\        wedge per diagonal edge
//!     /_|____|_\       band rect per left edge, spanning to its mirror
//!    |  |    |  |
//!    |__|____|__|
//! ```
//!
//! Every left-side edge owns the horizontal band between its endpoints and
//! fills it with one rectangle reaching across to the mirrored edge on the
//! right. Diagonal edges on both sides add a wedge between the hypotenuse
//! and the band rectangle. Lattice disc polygons are mirror-symmetric about
//! the vertical center line, which makes the bands line up; asymmetric input
//! is rejected.
//!
//! Edges whose legs exceed the span limit are subdivided (see
//! [`subdivide_wedge`]), and band rectangles wider than the limit are split
//! into tiles.

mod shapes;
mod subdivide;

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use glam::IVec2;
use tracing::debug;

use crate::core::polygon::Polygon;
use crate::error::{CircleError, CircleResult};
use crate::quantize::{classify_edge, EdgeClass};
pub use shapes::{Orientation, Primitive, Quadrant, Rect, ShapeSet, Wedge};
pub use subdivide::subdivide_wedge;

/// Compiles `polygon` into primitives no larger than `limit` on either axis.
///
/// ## Example
///
/// ```rust
/// use wedge_circle::{build_lattice_polygon, compile, CenterParity};
///
/// let polygon = build_lattice_polygon(CenterParity::Even, 5.0).unwrap();
/// let shapes = compile(&polygon, 8).unwrap();
///
/// assert_eq!(shapes.doubled_area(), polygon.doubled_area());
/// assert!(shapes.max_span() <= 8);
/// ```
///
/// # Errors
///
/// [`CircleError::InternalInvariantViolation`] when the polygon holds an
/// edge that quantization validation should have rejected, or when it is
/// not mirror-symmetric about its center's vertical line.
pub fn compile(polygon: &Polygon, limit: i32) -> CircleResult<ShapeSet> {
    ensure_mirror_symmetric(polygon)?;

    let parity = polygon.parity();
    let doubled_center = parity.doubled();
    let mut bands = Vec::new();
    let mut shapes = ShapeSet::default();

    for (a, b) in polygon.edges() {
        let class = classify_edge(a, b, limit).map_err(|err| {
            CircleError::invariant(format!("edge {a:?} → {b:?} reached the compiler: {err}"))
        })?;

        if class == EdgeClass::AxisAligned {
            // Vertical left edges own their band; everything else is covered.
            if a.x == b.x && 2 * a.x < doubled_center {
                bands.push(band(a.x, a.y, b.y, doubled_center));
            }
            continue;
        }

        let quadrant = Quadrant::of_edge(a, b, parity);
        let wedge = Wedge::on_edge(a, b, quadrant);
        if wedge.c == a || wedge.c == b {
            return Err(CircleError::invariant(format!(
                "edge {a:?} → {b:?} slopes against its {quadrant:?} quadrant"
            )));
        }

        if quadrant.is_left() {
            bands.push(band(wedge.c.x, a.y, b.y, doubled_center));
        }

        match class {
            EdgeClass::Subdivided { .. } => {
                let (pieces, steps) = subdivide_wedge(&wedge, limit)?;
                shapes.wedges.extend(pieces);
                bands.extend(steps);
            }
            _ => shapes.wedges.push(wedge),
        }
    }

    shapes.rects = bands
        .into_iter()
        .filter(|rect| !rect.is_empty())
        .flat_map(|rect| rect.split(limit))
        .collect();

    debug!(
        sides = polygon.sides(),
        rects = shapes.rects.len(),
        wedges = shapes.wedges.len(),
        "Compiled polygon"
    );
    Ok(shapes)
}

/// Rectangle from `x` to its mirror across the center over the band `y0..y1`.
fn band(x: i32, y0: i32, y1: i32, doubled_center: i32) -> Rect {
    Rect {
        x,
        y: y0.min(y1),
        width: doubled_center - 2 * x,
        height: (y1 - y0).abs(),
    }
}

fn ensure_mirror_symmetric(polygon: &Polygon) -> CircleResult<()> {
    let doubled_center = polygon.parity().doubled();
    let vertices: HashSet<IVec2> = polygon.vertices().iter().copied().collect();
    match polygon
        .vertices()
        .iter()
        .find(|v| !vertices.contains(&IVec2::new(doubled_center - v.x, v.y)))
    {
        Some(v) => Err(CircleError::invariant(format!(
            "vertex {v:?} has no mirror across the vertical center line"
        ))),
        None => Ok(()),
    }
}
