//! # Configuration Constants
//!
//! Centralized constants for the wedge-circle pipeline.
//!
//! ## Categories
//!
//! - **Format**: Limits imposed by the target voxel-construction format
//! - **Centers**: The two canonical center positions
//! - **Search Defaults**: Default sweep parameters
//! - **Input Ranges**: Accepted bounds for user-supplied sweep parameters
//! - **Precision**: Floating-point comparison tolerances

// =============================================================================
// FORMAT CONSTANTS
// =============================================================================

/// Maximum span (in lattice units) of a single primitive in the target format.
///
/// Wedges and fill rectangles may not exceed this length along either axis.
///
/// # Example
///
/// ```rust
/// use config::constants::QUANTIZATION_LIMIT;
///
/// let (dx, dy) = (6, 8);
/// assert!(dx <= QUANTIZATION_LIMIT && dy <= QUANTIZATION_LIMIT);
/// ```
pub const QUANTIZATION_LIMIT: i32 = 8;

/// Orientation x-axis code for every axis-aligned rectangle.
pub const RECT_X_AXIS: i8 = 1;

/// Orientation z-axis code for every axis-aligned rectangle.
pub const RECT_Z_AXIS: i8 = 3;

/// Orientation x-axis code shared by all wedges.
pub const WEDGE_X_AXIS: i8 = 3;

/// Wedge z-axis codes indexed by quadrant: top-left, top-right,
/// bottom-right, bottom-left.
///
/// # Example
///
/// ```rust
/// use config::constants::WEDGE_Z_AXIS;
///
/// // top-right wedges face +2
/// assert_eq!(WEDGE_Z_AXIS[1], 2);
/// ```
pub const WEDGE_Z_AXIS: [i8; 4] = [-1, 2, 1, -2];

// =============================================================================
// CENTER CONSTANTS
// =============================================================================

/// Center used when the sweep is "even": the integer origin.
pub const EVEN_CENTER: [f64; 2] = [0.0, 0.0];

/// Center used when the sweep is "odd": the half-integer offset.
pub const ODD_CENTER: [f64; 2] = [0.5, 0.5];

// =============================================================================
// SEARCH DEFAULTS
// =============================================================================

/// Whether sweeps default to the odd `(0.5, 0.5)` center.
pub const DEFAULT_ODD_CENTER: bool = false;

/// First radius tested by a default sweep.
pub const DEFAULT_INITIAL_RADIUS: f64 = 5.0;

/// Last radius (inclusive) tested by a default sweep.
pub const DEFAULT_MAX_RADIUS: f64 = 40.0;

/// Step between two consecutive tested radii.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_INITIAL_RADIUS, DEFAULT_MAX_RADIUS, DEFAULT_RADIUS_INCREMENT};
///
/// let samples = ((DEFAULT_MAX_RADIUS - DEFAULT_INITIAL_RADIUS) / DEFAULT_RADIUS_INCREMENT) as usize + 1;
/// assert!(samples > 10_000);
/// ```
pub const DEFAULT_RADIUS_INCREMENT: f64 = 0.0025;

/// Largest accepted radial deviation of any vertex from the real radius.
pub const DEFAULT_MAX_DEVIATION: f64 = 0.5;

/// Whether edge quantization is checked during a default sweep.
pub const DEFAULT_ENFORCE_QUANTIZATION: bool = true;

// =============================================================================
// INPUT RANGES
// =============================================================================

/// Smallest accepted initial radius.
pub const MIN_INITIAL_RADIUS: f64 = 1.0;

/// Largest accepted initial radius.
pub const MAX_INITIAL_RADIUS: f64 = 199.0;

/// Smallest accepted maximum radius.
pub const MIN_MAX_RADIUS: f64 = 2.0;

/// Largest accepted maximum radius.
///
/// Bounds the lattice enumeration to roughly 126k points per sample.
pub const MAX_MAX_RADIUS: f64 = 200.0;

/// Largest number of radius samples in one sweep.
///
/// The default sweep (5 to 40 in steps of 0.0025) needs 14,001; the widest
/// accepted range at that step needs under 80,000.
pub const MAX_SWEEP_SAMPLES: usize = 1_000_000;

/// Smallest lattice polygon: a triangle.
pub const MIN_POLYGON_VERTICES: usize = 3;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons of radii and distances.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(5.0, 5.0 + 1e-12));
/// ```
pub const EPSILON: f64 = 1e-9;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Returns the center position for the given parity flag.
///
/// # Example
///
/// ```rust
/// use config::constants::{center_for, ODD_CENTER};
///
/// assert_eq!(center_for(true), ODD_CENTER);
/// ```
#[inline]
pub fn center_for(odd_center: bool) -> [f64; 2] {
    if odd_center {
        ODD_CENTER
    } else {
        EVEN_CENTER
    }
}

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
