//! # Error Types
//!
//! Error types for lattice search and blueprint compilation.
//!
//! ## Error Policy
//!
//! - Per-sample failures (`InsufficientPoints`, `UnrepresentableEdge`,
//!   `DeviationExceeded`) are recovered by the sweep and only counted
//! - `MalformedPersistedPolygon` skips a stored record, never a whole load
//! - `InternalInvariantViolation` is fatal: the compiler never coerces an
//!   edge that validation should have excluded

use config::search::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while searching for or compiling lattice polygons.
///
/// ## Example
///
/// ```rust
/// use wedge_circle::{build_lattice_polygon, CenterParity, CircleError};
///
/// match build_lattice_polygon(CenterParity::Even, 0.5) {
///     Err(CircleError::InsufficientPoints { found, .. }) => assert_eq!(found, 1),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CircleError {
    /// Fewer than three lattice points or hull vertices.
    #[error("Insufficient points at radius {radius}: found {found}, need 3")]
    InsufficientPoints {
        /// Radius that produced the point set.
        radius: f64,
        /// Number of usable points found.
        found: usize,
    },

    /// An edge cannot be tiled by primitives within the span limit.
    #[error("Unrepresentable edge with legs ({dx}, {dy}) under limit {limit}")]
    UnrepresentableEdge {
        /// Absolute horizontal extent of the edge.
        dx: i32,
        /// Absolute vertical extent of the edge.
        dy: i32,
        /// Span limit in force.
        limit: i32,
    },

    /// The polygon strays too far from its real radius.
    #[error("Deviation {deviation} exceeds threshold {threshold}")]
    DeviationExceeded {
        /// Measured maximum radial deviation.
        deviation: f64,
        /// Configured threshold.
        threshold: f64,
    },

    /// A stored or deserialized vertex list could not be turned into a polygon.
    #[error("Malformed persisted polygon: {0}")]
    MalformedPersistedPolygon(String),

    /// The compiler met geometry that validation should have excluded.
    #[error("Internal invariant violated: {0}")]
    InternalInvariantViolation(String),

    /// Sweep parameters failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// The sweep was cancelled through its token.
    #[error("Sweep cancelled")]
    Cancelled,
}

impl CircleError {
    /// Creates a malformed persisted polygon error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedPersistedPolygon(message.into())
    }

    /// Creates an internal invariant violation.
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InternalInvariantViolation(message.into())
    }

    /// Returns `true` for the errors a sweep recovers from by skipping a sample.
    #[must_use]
    pub fn is_sample_rejection(&self) -> bool {
        matches!(
            self,
            Self::InsufficientPoints { .. }
                | Self::UnrepresentableEdge { .. }
                | Self::DeviationExceeded { .. }
        )
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for wedge-circle operations.
pub type CircleResult<T> = Result<T, CircleError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let err = CircleError::UnrepresentableEdge {
            dx: 9,
            dy: 7,
            limit: 8,
        };
        assert!(err.to_string().contains("(9, 7)"));

        let err = CircleError::invariant("coprime legs");
        assert!(err.to_string().contains("coprime legs"));
    }

    #[test]
    fn test_sample_rejection_classification() {
        assert!(CircleError::InsufficientPoints {
            radius: 0.5,
            found: 1
        }
        .is_sample_rejection());
        assert!(!CircleError::invariant("x").is_sample_rejection());
        assert!(!CircleError::malformed("x").is_sample_rejection());
    }

    #[test]
    fn test_config_error_converts() {
        let err: CircleError = ConfigError::InvalidIncrement(0.0).into();
        assert!(matches!(err, CircleError::InvalidConfig(_)));
    }

    /// Test error types are Send + Sync for use across the worker pool.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CircleError>();
    }
}
