//! Splitting of oversized wedges into congruent sub-wedges.
//!
//! A wedge with legs `(dx, dy) = g * (sx, sy)` is cut into `g` wedges with
//! legs `(sx, sy)` whose hypotenuses lie on the parent hypotenuse. The staircase
//! left between them and the right-angle corner is filled with rectangles,
//! one per step, so the pieces tile the parent triangle exactly.

use glam::IVec2;
use tracing::debug;

use super::shapes::{Rect, Wedge};
use crate::core::point::gcd;
use crate::error::{CircleError, CircleResult};

/// Subdivides `wedge` so every piece has legs no longer than `limit`.
///
/// Returns the sub-wedges in the parent `a → b` direction and the
/// non-empty companion rectangles. A wedge already within `limit` comes back
/// unchanged.
///
/// # Errors
///
/// [`CircleError::InternalInvariantViolation`] when the wedge is not a
/// right triangle on its corner, or its legs share no common divisor that
/// brings them within `limit`.
pub fn subdivide_wedge(wedge: &Wedge, limit: i32) -> CircleResult<(Vec<Wedge>, Vec<Rect>)> {
    let (dx, dy) = wedge.legs();
    if dx <= limit && dy <= limit {
        return Ok((vec![*wedge], Vec::new()));
    }

    let g = gcd(dx, dy);
    if g <= 1 || dx / g > limit || dy / g > limit {
        return Err(CircleError::invariant(format!(
            "wedge {:?} → {:?} with legs ({dx}, {dy}) cannot be subdivided under limit {limit}",
            wedge.a, wedge.b
        )));
    }
    let (sx, sy) = (dx / g, dy / g);

    let c = wedge.c;
    // p ends the horizontal leg, q ends the vertical leg
    let (p, q, forward) = if wedge.a.y == c.y && wedge.b.x == c.x {
        (wedge.a, wedge.b, true)
    } else if wedge.b.y == c.y && wedge.a.x == c.x {
        (wedge.b, wedge.a, false)
    } else {
        return Err(CircleError::invariant(format!(
            "corner {c:?} is not the right angle of {:?} → {:?}",
            wedge.a, wedge.b
        )));
    };
    let ux = (p.x - c.x).signum();
    let vy = (q.y - c.y).signum();

    let hypotenuse = |i: i32| c + IVec2::new(ux * (dx - i * sx), vy * i * sy);

    let mut wedges = Vec::with_capacity(g as usize);
    let mut rects = Vec::with_capacity(g as usize - 1);
    for i in 0..g {
        let (h0, h1) = (hypotenuse(i), hypotenuse(i + 1));
        let corner = IVec2::new(h1.x, h0.y);
        let (a, b) = if forward { (h0, h1) } else { (h1, h0) };
        wedges.push(Wedge {
            a,
            b,
            c: corner,
            quadrant: wedge.quadrant,
        });

        let rect = Rect::from_corners(IVec2::new(c.x, h0.y), IVec2::new(corner.x, h1.y));
        if !rect.is_empty() {
            rects.push(rect);
        }
    }

    if !forward {
        wedges.reverse();
        rects.reverse();
    }

    debug!(dx, dy, pieces = g, step_x = sx, step_y = sy, "Subdivided wedge");
    Ok((wedges, rects))
}
