//! # Tests for Config Crate
//!
//! Cross-module checks that the constants and the default search
//! configuration agree with each other.

use crate::constants::*;
use crate::search::SearchConfig;

// =============================================================================
// CONSISTENCY TESTS
// =============================================================================

#[test]
fn test_default_search_config_uses_constants() {
    let cfg = SearchConfig::default();
    assert_eq!(cfg.initial_radius, DEFAULT_INITIAL_RADIUS);
    assert_eq!(cfg.max_radius, DEFAULT_MAX_RADIUS);
    assert_eq!(cfg.radius_increment, DEFAULT_RADIUS_INCREMENT);
    assert_eq!(cfg.max_deviation, DEFAULT_MAX_DEVIATION);
    assert_eq!(cfg.quantization_limit, QUANTIZATION_LIMIT);
    assert!(cfg.enforce_quantization);
}

#[test]
fn test_default_radii_inside_accepted_ranges() {
    assert!((MIN_INITIAL_RADIUS..=MAX_INITIAL_RADIUS).contains(&DEFAULT_INITIAL_RADIUS));
    assert!((MIN_MAX_RADIUS..=MAX_MAX_RADIUS).contains(&DEFAULT_MAX_RADIUS));
    assert!(DEFAULT_INITIAL_RADIUS <= DEFAULT_MAX_RADIUS);
}

#[test]
fn test_default_config_validates() {
    let cfg = SearchConfig::default();
    let rebuilt = SearchConfig::new(
        cfg.odd_center,
        cfg.initial_radius,
        cfg.max_radius,
        cfg.radius_increment,
        cfg.max_deviation,
    );
    assert_eq!(rebuilt, Ok(cfg));
}

#[test]
fn test_widest_default_sweep_fits_sample_cap() {
    let widest = SearchConfig::new(
        DEFAULT_ODD_CENTER,
        MIN_INITIAL_RADIUS,
        MAX_MAX_RADIUS,
        DEFAULT_RADIUS_INCREMENT,
        DEFAULT_MAX_DEVIATION,
    )
    .unwrap();
    assert!(widest.sample_count() < MAX_SWEEP_SAMPLES);
}
