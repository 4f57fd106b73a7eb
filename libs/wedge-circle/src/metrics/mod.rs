//! # Polygon Metrics
//!
//! Radius and deviation measurements for an accepted polygon, plus the
//! pluggable quality scoring in [`scoring`].

pub mod scoring;

use serde::{Deserialize, Serialize};

use crate::core::point::distance_to_center;
use crate::core::polygon::Polygon;
use crate::error::{CircleError, CircleResult};
pub use scoring::{PolygonScorer, QualityScores, StandardScorer};

/// Shape measurements of one polygon relative to its center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolygonMetrics {
    /// Largest distance from the center to any vertex.
    pub real_radius: f64,
    /// Largest `|distance(v) - real_radius|` over the vertices.
    pub max_deviation: f64,
    /// Horizontal extent `max(x) - min(x)`.
    pub diameter: i32,
}

/// Measures `polygon` against its own center.
///
/// ## Example
///
/// ```rust
/// use wedge_circle::{build_lattice_polygon, compute_metrics, CenterParity};
///
/// let poly = build_lattice_polygon(CenterParity::Even, 5.0).unwrap();
/// let m = compute_metrics(&poly);
/// assert_eq!(m.real_radius, 5.0);
/// assert_eq!(m.diameter, 10);
/// ```
#[must_use]
pub fn compute_metrics(polygon: &Polygon) -> PolygonMetrics {
    let center = polygon.center();
    let distances: Vec<f64> = polygon
        .vertices()
        .iter()
        .map(|&v| distance_to_center(v, center))
        .collect();
    let real_radius = distances.iter().copied().fold(0.0, f64::max);
    let max_deviation = distances
        .iter()
        .map(|d| (d - real_radius).abs())
        .fold(0.0, f64::max);

    PolygonMetrics {
        real_radius,
        max_deviation,
        diameter: polygon.diameter(),
    }
}

/// Rejects metrics whose deviation exceeds `threshold`.
pub fn check_deviation(metrics: &PolygonMetrics, threshold: f64) -> CircleResult<()> {
    if metrics.max_deviation > threshold {
        return Err(CircleError::DeviationExceeded {
            deviation: metrics.max_deviation,
            threshold,
        });
    }
    Ok(())
}
