//! Quality scores for lattice polygons.
//!
//! The persisted record carries three scores whose formulas are left to the
//! host application. [`PolygonScorer`] is the seam; [`StandardScorer`] is
//! the default used by the search engine.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::core::polygon::Polygon;
use crate::quantize::{classify_edge, EdgeClass};

/// Scores attached to a candidate.
///
/// `circularity` and `uniformity` lie in `[0, 1]`, higher meaning rounder
/// and more regular.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityScores {
    /// How closely the polygon approximates a circle.
    pub circularity: f64,
    /// How evenly the edge lengths are distributed.
    pub uniformity: f64,
    /// Largest wedge leg needed to build the polygon.
    pub max_edge_span: i32,
}

/// Computes [`QualityScores`] for a polygon.
pub trait PolygonScorer: Send + Sync {
    /// Scores `polygon`; every returned value must be finite.
    fn score(&self, polygon: &Polygon) -> QualityScores;
}

/// Default scorer.
///
/// - circularity: isoperimetric quotient `4πA / P²`
/// - uniformity: shortest edge over longest edge
/// - max_edge_span: largest wedge leg after subdivision under `limit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardScorer {
    /// Span limit used to decide how diagonal edges are subdivided.
    pub limit: i32,
}

impl Default for StandardScorer {
    fn default() -> Self {
        Self {
            limit: config::constants::QUANTIZATION_LIMIT,
        }
    }
}

impl PolygonScorer for StandardScorer {
    fn score(&self, polygon: &Polygon) -> QualityScores {
        let area = polygon.doubled_area() as f64 / 2.0;
        let perimeter = polygon.perimeter();
        let circularity = if perimeter > 0.0 {
            (4.0 * PI * area / (perimeter * perimeter)).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let lengths: Vec<f64> = polygon
            .edges()
            .map(|(a, b)| a.as_dvec2().distance(b.as_dvec2()))
            .collect();
        let shortest = lengths.iter().copied().fold(f64::INFINITY, f64::min);
        let longest = lengths.iter().copied().fold(0.0, f64::max);
        let uniformity = if longest > 0.0 {
            (shortest / longest).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let max_edge_span = polygon
            .edges()
            .map(|(a, b)| {
                let d = (b - a).abs();
                match classify_edge(a, b, self.limit) {
                    Ok(EdgeClass::AxisAligned) => 0,
                    Ok(EdgeClass::Single) | Err(_) => d.x.max(d.y),
                    Ok(EdgeClass::Subdivided { step_x, step_y, .. }) => step_x.max(step_y),
                }
            })
            .max()
            .unwrap_or(0);

        QualityScores {
            circularity,
            uniformity,
            max_edge_span,
        }
    }
}
