//! Primitive shapes emitted by the blueprint compiler.
//!
//! All coordinates are lattice integers. Areas are reported doubled so that
//! wedge areas stay exact.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::core::point::CenterParity;
use config::constants::{RECT_X_AXIS, RECT_Z_AXIS, WEDGE_X_AXIS, WEDGE_Z_AXIS};

// =============================================================================
// ORIENTATION
// =============================================================================

/// Rotation codes expected by the voxel packager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Orientation {
    /// Orientation x-axis code.
    pub x_axis: i8,
    /// Orientation z-axis code.
    pub z_axis: i8,
}

impl Orientation {
    /// Fixed orientation shared by every axis-aligned rectangle.
    pub const RECT: Self = Self {
        x_axis: RECT_X_AXIS,
        z_axis: RECT_Z_AXIS,
    };
}

// =============================================================================
// QUADRANT
// =============================================================================

/// Position class of a diagonal edge relative to the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    /// `x < cx`, `y >= cy`
    TopLeft,
    /// `x >= cx`, `y >= cy`
    TopRight,
    /// `x >= cx`, `y < cy`
    BottomRight,
    /// `x < cx`, `y < cy`
    BottomLeft,
}

impl Quadrant {
    /// Classifies the edge `a → b` by its midpoint.
    ///
    /// Compares doubled coordinates so the test is exact for both parities.
    #[must_use]
    pub fn of_edge(a: IVec2, b: IVec2, parity: CenterParity) -> Self {
        let doubled_center = parity.doubled();
        let mid = a + b;
        let left = mid.x < doubled_center;
        let top = mid.y >= doubled_center;
        match (left, top) {
            (true, true) => Self::TopLeft,
            (false, true) => Self::TopRight,
            (false, false) => Self::BottomRight,
            (true, false) => Self::BottomLeft,
        }
    }

    /// Whether the quadrant lies left of the vertical center line.
    #[must_use]
    pub fn is_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }

    /// Right-angle corner of the wedge on `a → b`: the axis-aligned corner
    /// of the edge's bounding box that faces the center.
    #[must_use]
    pub fn right_angle_corner(self, a: IVec2, b: IVec2) -> IVec2 {
        let (min, max) = (a.min(b), a.max(b));
        match self {
            Self::TopLeft => IVec2::new(max.x, min.y),
            Self::TopRight => IVec2::new(min.x, min.y),
            Self::BottomRight => IVec2::new(min.x, max.y),
            Self::BottomLeft => IVec2::new(max.x, max.y),
        }
    }

    /// Packager orientation for wedges in this quadrant.
    #[must_use]
    pub fn orientation(self) -> Orientation {
        let index = match self {
            Self::TopLeft => 0,
            Self::TopRight => 1,
            Self::BottomRight => 2,
            Self::BottomLeft => 3,
        };
        Orientation {
            x_axis: WEDGE_X_AXIS,
            z_axis: WEDGE_Z_AXIS[index],
        }
    }
}

// =============================================================================
// RECT
// =============================================================================

/// Axis-aligned fill rectangle; `(x, y)` is its minimum corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Minimum x.
    pub x: i32,
    /// Minimum y.
    pub y: i32,
    /// Horizontal span.
    pub width: i32,
    /// Vertical span.
    pub height: i32,
}

impl Rect {
    /// Rectangle spanning the two opposite corners `p` and `q`.
    #[must_use]
    pub fn from_corners(p: IVec2, q: IVec2) -> Self {
        let min = p.min(q);
        let size = (p - q).abs();
        Self {
            x: min.x,
            y: min.y,
            width: size.x,
            height: size.y,
        }
    }

    /// Twice the area.
    #[must_use]
    pub fn doubled_area(&self) -> i64 {
        2 * i64::from(self.width) * i64::from(self.height)
    }

    /// `true` when the rectangle covers no area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Splits into a grid of rectangles no larger than `limit` on either axis.
    #[must_use]
    pub fn split(&self, limit: i32) -> Vec<Rect> {
        let limit = limit.max(1);
        let mut tiles = Vec::new();
        let mut y = 0;
        while y < self.height {
            let height = limit.min(self.height - y);
            let mut x = 0;
            while x < self.width {
                let width = limit.min(self.width - x);
                tiles.push(Rect {
                    x: self.x + x,
                    y: self.y + y,
                    width,
                    height,
                });
                x += width;
            }
            y += height;
        }
        tiles
    }
}

// =============================================================================
// WEDGE
// =============================================================================

/// Right triangle with axis-parallel legs and hypotenuse `a → b`.
///
/// `c` is the right-angle vertex; it shares one coordinate with `a` and the
/// other with `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wedge {
    /// Hypotenuse start.
    pub a: IVec2,
    /// Hypotenuse end.
    pub b: IVec2,
    /// Right-angle vertex.
    pub c: IVec2,
    /// Quadrant of the originating edge.
    pub quadrant: Quadrant,
}

impl Wedge {
    /// Wedge on the edge `a → b` with its corner chosen by quadrant.
    #[must_use]
    pub fn on_edge(a: IVec2, b: IVec2, quadrant: Quadrant) -> Self {
        Self {
            a,
            b,
            c: quadrant.right_angle_corner(a, b),
            quadrant,
        }
    }

    /// Horizontal and vertical leg lengths.
    #[must_use]
    pub fn legs(&self) -> (i32, i32) {
        let d = (self.b - self.a).abs();
        (d.x, d.y)
    }

    /// Twice the area (`dx * dy`).
    #[must_use]
    pub fn doubled_area(&self) -> i64 {
        let (dx, dy) = self.legs();
        i64::from(dx) * i64::from(dy)
    }

    /// Packager orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.quadrant.orientation()
    }
}

// =============================================================================
// SHAPE SET
// =============================================================================

/// One compiled primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Primitive {
    /// Fill rectangle.
    Rect(Rect),
    /// Diagonal wedge.
    Wedge(Wedge),
}

impl Primitive {
    /// Packager orientation of the primitive.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        match self {
            Self::Rect(_) => Orientation::RECT,
            Self::Wedge(wedge) => wedge.orientation(),
        }
    }

    /// Horizontal and vertical span.
    #[must_use]
    pub fn spans(&self) -> (i32, i32) {
        match self {
            Self::Rect(rect) => (rect.width, rect.height),
            Self::Wedge(wedge) => wedge.legs(),
        }
    }
}

/// Rectangles and wedges that together tile one polygon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeSet {
    /// Fill rectangles in emission order.
    pub rects: Vec<Rect>,
    /// Wedges in edge order.
    pub wedges: Vec<Wedge>,
}

impl ShapeSet {
    /// Ordered primitive list: rectangles first, then wedges.
    pub fn primitives(&self) -> impl Iterator<Item = Primitive> + '_ {
        self.rects
            .iter()
            .copied()
            .map(Primitive::Rect)
            .chain(self.wedges.iter().copied().map(Primitive::Wedge))
    }

    /// Twice the total covered area.
    #[must_use]
    pub fn doubled_area(&self) -> i64 {
        self.rects.iter().map(Rect::doubled_area).sum::<i64>()
            + self.wedges.iter().map(Wedge::doubled_area).sum::<i64>()
    }

    /// Largest span of any primitive on either axis.
    #[must_use]
    pub fn max_span(&self) -> i32 {
        self.primitives()
            .map(|p| {
                let (w, h) = p.spans();
                w.max(h)
            })
            .max()
            .unwrap_or(0)
    }

    /// Number of primitives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rects.len() + self.wedges.len()
    }

    /// `true` when nothing was emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
