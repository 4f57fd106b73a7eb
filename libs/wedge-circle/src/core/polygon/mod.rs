//! Angularly ordered lattice polygon.
//!
//! A `Polygon` is a closed ring of at least three distinct lattice points,
//! stored in ascending angle around its center. Equality and hashing cover
//! the exact vertex sequence plus the center parity, which is the identity
//! used for deduplication and persistence.

use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};

use crate::core::point::{angle_around, CenterParity};
use crate::error::{CircleError, CircleResult};
use config::constants::MIN_POLYGON_VERTICES;

/// A lattice polygon around one of the two canonical centers.
///
/// ## Example
///
/// ```rust
/// use wedge_circle::{CenterParity, Polygon};
/// use glam::IVec2;
///
/// let square = Polygon::from_vertices(
///     vec![IVec2::new(-1, -1), IVec2::new(1, 1), IVec2::new(-1, 1), IVec2::new(1, -1)],
///     CenterParity::Even,
/// )
/// .unwrap();
/// assert_eq!(square.vertices()[0], IVec2::new(1, 1));
/// assert_eq!(square.doubled_area(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPolygon")]
pub struct Polygon {
    vertices: Vec<IVec2>,
    parity: CenterParity,
}

impl Polygon {
    /// Builds a polygon, ordering the vertices by ascending angle around the center.
    ///
    /// Ties keep their input order. Duplicate points are rejected.
    pub fn from_vertices(mut vertices: Vec<IVec2>, parity: CenterParity) -> CircleResult<Self> {
        sort_by_angle(&mut vertices, parity.center());
        Self::from_sorted(vertices, parity)
    }

    /// Builds a polygon from vertices already in angular order.
    ///
    /// Fewer than three vertices, or a repeated vertex, is reported as
    /// [`CircleError::MalformedPersistedPolygon`].
    pub fn from_sorted(vertices: Vec<IVec2>, parity: CenterParity) -> CircleResult<Self> {
        if vertices.len() < MIN_POLYGON_VERTICES {
            return Err(CircleError::malformed(format!(
                "{} vertices, need at least {MIN_POLYGON_VERTICES}",
                vertices.len()
            )));
        }
        for (i, v) in vertices.iter().enumerate() {
            if vertices[i + 1..].contains(v) {
                return Err(CircleError::malformed(format!(
                    "duplicate vertex ({}, {})",
                    v.x, v.y
                )));
            }
        }
        Ok(Self { vertices, parity })
    }

    /// Vertices in ascending angular order.
    #[must_use]
    pub fn vertices(&self) -> &[IVec2] {
        &self.vertices
    }

    /// Center parity the polygon was built around.
    #[must_use]
    pub fn parity(&self) -> CenterParity {
        self.parity
    }

    /// Center position.
    #[must_use]
    pub fn center(&self) -> DVec2 {
        self.parity.center()
    }

    /// Number of vertices (equivalently, of edges).
    #[must_use]
    pub fn sides(&self) -> usize {
        self.vertices.len()
    }

    /// Consecutive vertex pairs, wrapping from the last vertex to the first.
    pub fn edges(&self) -> impl Iterator<Item = (IVec2, IVec2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Twice the enclosed area (shoelace formula), exact.
    #[must_use]
    pub fn doubled_area(&self) -> i64 {
        self.edges()
            .map(|(a, b)| i64::from(a.x) * i64::from(b.y) - i64::from(b.x) * i64::from(a.y))
            .sum::<i64>()
            .abs()
    }

    /// Sum of the Euclidean edge lengths.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.edges()
            .map(|(a, b)| a.as_dvec2().distance(b.as_dvec2()))
            .sum()
    }

    /// Horizontal extent `max(x) - min(x)`.
    #[must_use]
    pub fn diameter(&self) -> i32 {
        let (min, max) = self.bounding_box();
        max.x - min.x
    }

    /// Component-wise minimum and maximum corners.
    #[must_use]
    pub fn bounding_box(&self) -> (IVec2, IVec2) {
        self.vertices.iter().fold(
            (IVec2::splat(i32::MAX), IVec2::splat(i32::MIN)),
            |(min, max), v| (min.min(*v), max.max(*v)),
        )
    }
}

/// Unchecked serialized form; deserialization goes through
/// [`Polygon::from_vertices`].
#[derive(Deserialize)]
struct RawPolygon {
    vertices: Vec<IVec2>,
    parity: CenterParity,
}

impl TryFrom<RawPolygon> for Polygon {
    type Error = CircleError;

    fn try_from(raw: RawPolygon) -> CircleResult<Self> {
        Self::from_vertices(raw.vertices, raw.parity)
    }
}

/// Sorts points by ascending angle around `center`, keeping ties in input order.
pub fn sort_by_angle(points: &mut [IVec2], center: DVec2) {
    points.sort_by(|a, b| angle_around(*a, center).total_cmp(&angle_around(*b, center)));
}
