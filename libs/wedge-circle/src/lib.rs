//! Lattice circle approximation and blueprint geometry compilation.
//!
//! This crate searches radii for integer-lattice polygons that approximate a
//! circle and can be built from size-limited primitives, then compiles a
//! chosen polygon into axis-aligned rectangles and right-triangle wedges.
//!
//! ## Pipeline
//!
//! ```text
//! SearchConfig → RadiusSearchEngine::run → SweepReport → save_candidates
//!                                                            ↓
//!                      ShapeSet ← compile ← StoredRecord::polygon
//! ```

pub mod blueprint;
pub mod core;
pub mod error;
pub mod lattice;
pub mod metrics;
pub mod quantize;
pub mod search;
pub mod store;

pub use blueprint::{compile, subdivide_wedge, Orientation, Primitive, Quadrant, Rect, ShapeSet, Wedge};
pub use crate::core::point::{CenterParity, LatticePoint};
pub use crate::core::polygon::Polygon;
pub use error::{CircleError, CircleResult};
pub use lattice::build_lattice_polygon;
pub use metrics::{compute_metrics, PolygonMetrics, PolygonScorer, QualityScores, StandardScorer};
pub use quantize::{classify_edge, is_representable, validate_polygon, EdgeClass};
pub use search::{
    deduplicate, CancellationToken, Candidate, RadiusSearchEngine, RejectionCounts, SweepProgress,
    SweepReport,
};
pub use store::{MemoryStore, RecordFilter, ResultStore, StoredRecord};
