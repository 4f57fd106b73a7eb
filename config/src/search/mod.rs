//! Validated parameters for a radius sweep.
//!
//! A [`SearchConfig`] can only be obtained through [`SearchConfig::new`] (or
//! the default), so downstream code never has to re-check ranges.

use std::fmt;

use crate::constants::{
    DEFAULT_ENFORCE_QUANTIZATION, DEFAULT_INITIAL_RADIUS, DEFAULT_MAX_DEVIATION,
    DEFAULT_MAX_RADIUS, DEFAULT_ODD_CENTER, DEFAULT_RADIUS_INCREMENT, EPSILON,
    MAX_INITIAL_RADIUS, MAX_MAX_RADIUS, MAX_SWEEP_SAMPLES, MIN_INITIAL_RADIUS, MIN_MAX_RADIUS,
    QUANTIZATION_LIMIT,
};

/// Immutable description of one radius sweep.
///
/// # Examples
/// ```
/// use config::search::SearchConfig;
/// let cfg = SearchConfig::new(true, 3.0, 10.0, 0.5, 0.4).expect("valid config");
/// assert_eq!(cfg.sample_count(), 15);
/// assert_eq!(cfg.radius_at(2), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Whether the center sits at `(0.5, 0.5)` instead of the origin.
    pub odd_center: bool,
    /// First tested radius.
    pub initial_radius: f64,
    /// Last tested radius (inclusive).
    pub max_radius: f64,
    /// Step between tested radii.
    pub radius_increment: f64,
    /// Largest accepted deviation of a vertex distance from the real radius.
    pub max_deviation: f64,
    /// Whether polygons with unrepresentable edges are discarded.
    pub enforce_quantization: bool,
    /// Maximum primitive span of the target format.
    pub quantization_limit: i32,
}

impl SearchConfig {
    /// Builds a configuration enforcing the accepted input ranges.
    ///
    /// # Examples
    /// ```
    /// use config::search::{ConfigError, SearchConfig};
    /// let err = SearchConfig::new(false, 12.0, 10.0, 0.1, 0.5).unwrap_err();
    /// assert_eq!(err, ConfigError::InitialAboveMax { initial: 12.0, max: 10.0 });
    /// ```
    pub fn new(
        odd_center: bool,
        initial_radius: f64,
        max_radius: f64,
        radius_increment: f64,
        max_deviation: f64,
    ) -> Result<Self, ConfigError> {
        if !(MIN_INITIAL_RADIUS..=MAX_INITIAL_RADIUS).contains(&initial_radius) {
            return Err(ConfigError::InitialRadiusOutOfRange(initial_radius));
        }
        if !(MIN_MAX_RADIUS..=MAX_MAX_RADIUS).contains(&max_radius) {
            return Err(ConfigError::MaxRadiusOutOfRange(max_radius));
        }
        if initial_radius > max_radius {
            return Err(ConfigError::InitialAboveMax {
                initial: initial_radius,
                max: max_radius,
            });
        }
        if !radius_increment.is_finite() || radius_increment <= 0.0 {
            return Err(ConfigError::InvalidIncrement(radius_increment));
        }
        let samples = step_count(initial_radius, max_radius, radius_increment) + 1.0;
        if !samples.is_finite() || samples > MAX_SWEEP_SAMPLES as f64 {
            return Err(ConfigError::TooManySamples(samples));
        }
        if !max_deviation.is_finite() || max_deviation < 0.0 {
            return Err(ConfigError::NegativeDeviation(max_deviation));
        }
        Ok(Self {
            odd_center,
            initial_radius,
            max_radius,
            radius_increment,
            max_deviation,
            enforce_quantization: DEFAULT_ENFORCE_QUANTIZATION,
            quantization_limit: QUANTIZATION_LIMIT,
        })
    }

    /// Returns a copy with edge quantization switched on or off.
    #[must_use]
    pub fn with_enforce_quantization(self, enforce_quantization: bool) -> Self {
        Self {
            enforce_quantization,
            ..self
        }
    }

    /// Returns a copy using a different primitive span limit.
    pub fn with_quantization_limit(self, quantization_limit: i32) -> Result<Self, ConfigError> {
        if quantization_limit < 1 {
            return Err(ConfigError::InvalidQuantizationLimit(quantization_limit));
        }
        Ok(Self {
            quantization_limit,
            ..self
        })
    }

    /// Number of radii in the arithmetic sequence `initial..=max`.
    ///
    /// Never exceeds [`MAX_SWEEP_SAMPLES`], even for a config whose public
    /// fields were edited after validation.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        let last = (MAX_SWEEP_SAMPLES - 1) as f64;
        let steps = step_count(self.initial_radius, self.max_radius, self.radius_increment);
        let steps = if steps.is_finite() {
            steps.clamp(0.0, last)
        } else {
            last
        };
        (steps as usize).checked_add(1).unwrap_or(MAX_SWEEP_SAMPLES)
    }

    /// Radius of the `index`-th sample.
    ///
    /// Computed from the index rather than by accumulation so that the
    /// sequence does not drift over long sweeps.
    #[must_use]
    pub fn radius_at(&self, index: usize) -> f64 {
        self.initial_radius + index as f64 * self.radius_increment
    }
}

/// Whole increments between `initial` and `max`, tolerant of float error.
fn step_count(initial: f64, max: f64, increment: f64) -> f64 {
    ((max - initial) / increment + EPSILON).floor()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            odd_center: DEFAULT_ODD_CENTER,
            initial_radius: DEFAULT_INITIAL_RADIUS,
            max_radius: DEFAULT_MAX_RADIUS,
            radius_increment: DEFAULT_RADIUS_INCREMENT,
            max_deviation: DEFAULT_MAX_DEVIATION,
            enforce_quantization: DEFAULT_ENFORCE_QUANTIZATION,
            quantization_limit: QUANTIZATION_LIMIT,
        }
    }
}

/// Error returned when invalid sweep parameters are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Initial radius outside `[1, 199]`.
    InitialRadiusOutOfRange(f64),
    /// Maximum radius outside `[2, 200]`.
    MaxRadiusOutOfRange(f64),
    /// Initial radius larger than the maximum radius.
    InitialAboveMax {
        /// Requested initial radius.
        initial: f64,
        /// Requested maximum radius.
        max: f64,
    },
    /// Radius increment zero, negative or not finite.
    InvalidIncrement(f64),
    /// Deviation threshold negative or not finite.
    NegativeDeviation(f64),
    /// Primitive span limit below one lattice unit.
    InvalidQuantizationLimit(i32),
    /// Radius range and increment describe more samples than a sweep allows.
    TooManySamples(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InitialRadiusOutOfRange(value) => write!(
                f,
                "initial_radius must be between {MIN_INITIAL_RADIUS} and {MAX_INITIAL_RADIUS}: {value}"
            ),
            ConfigError::MaxRadiusOutOfRange(value) => write!(
                f,
                "max_radius must be between {MIN_MAX_RADIUS} and {MAX_MAX_RADIUS}: {value}"
            ),
            ConfigError::InitialAboveMax { initial, max } => {
                write!(f, "initial_radius {initial} exceeds max_radius {max}")
            }
            ConfigError::InvalidIncrement(value) => {
                write!(f, "radius_increment must be positive: {value}")
            }
            ConfigError::NegativeDeviation(value) => {
                write!(f, "max_deviation cannot be negative: {value}")
            }
            ConfigError::InvalidQuantizationLimit(value) => {
                write!(f, "quantization_limit must be >= 1: {value}")
            }
            ConfigError::TooManySamples(value) => write!(
                f,
                "sweep would need {value} samples, at most {MAX_SWEEP_SAMPLES} allowed"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
