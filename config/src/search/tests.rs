//! Tests for sweep parameter validation.

use super::*;

/// Accepts the bounds of every range.
#[test]
fn new_accepts_range_bounds() {
    assert!(SearchConfig::new(false, 1.0, 2.0, 0.1, 0.0).is_ok());
    assert!(SearchConfig::new(true, 199.0, 200.0, 1.0, 3.0).is_ok());
}

/// Rejects each invalid field with its own error.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        SearchConfig::new(false, 0.5, 10.0, 0.1, 0.5).unwrap_err(),
        ConfigError::InitialRadiusOutOfRange(0.5)
    );
    assert_eq!(
        SearchConfig::new(false, 5.0, 250.0, 0.1, 0.5).unwrap_err(),
        ConfigError::MaxRadiusOutOfRange(250.0)
    );
    assert_eq!(
        SearchConfig::new(false, 5.0, 10.0, 0.0, 0.5).unwrap_err(),
        ConfigError::InvalidIncrement(0.0)
    );
    assert_eq!(
        SearchConfig::new(false, 5.0, 10.0, 0.1, -0.1).unwrap_err(),
        ConfigError::NegativeDeviation(-0.1)
    );
}

#[test]
fn quantization_limit_must_be_positive() {
    let cfg = SearchConfig::default();
    assert_eq!(
        cfg.with_quantization_limit(0).unwrap_err(),
        ConfigError::InvalidQuantizationLimit(0)
    );
    assert_eq!(cfg.with_quantization_limit(4).unwrap().quantization_limit, 4);
}

#[test]
fn enforce_quantization_toggle() {
    let cfg = SearchConfig::default().with_enforce_quantization(false);
    assert!(!cfg.enforce_quantization);
}

#[test]
fn sample_count_is_inclusive() {
    let cfg = SearchConfig::new(false, 5.0, 6.0, 0.25, 0.5).unwrap();
    assert_eq!(cfg.sample_count(), 5);
    assert_eq!(cfg.radius_at(4), 6.0);

    let single = SearchConfig::new(false, 5.0, 5.0, 0.25, 0.5).unwrap();
    assert_eq!(single.sample_count(), 1);
}

#[test]
fn sample_count_tolerates_float_steps() {
    // 0.1 is not exact in binary; the last radius must still be included.
    let cfg = SearchConfig::new(false, 1.0, 2.0, 0.1, 0.5).unwrap();
    assert_eq!(cfg.sample_count(), 11);
}

#[test]
fn error_display_names_field() {
    let err = ConfigError::InvalidIncrement(-1.0);
    assert!(err.to_string().contains("radius_increment"));
}

#[test]
fn new_rejects_oversized_sweeps() {
    let tiny = SearchConfig::new(false, 1.0, 200.0, f64::MIN_POSITIVE, 0.5);
    assert!(matches!(tiny, Err(ConfigError::TooManySamples(n)) if n.is_infinite()));

    let fine = SearchConfig::new(false, 1.0, 200.0, 1e-12, 0.5);
    assert!(matches!(fine, Err(ConfigError::TooManySamples(_))));
}

#[test]
fn new_accepts_sweep_at_sample_cap() {
    let step = 1.0 / (MAX_SWEEP_SAMPLES - 1) as f64;
    let cfg = SearchConfig::new(false, 1.0, 2.0, step, 0.5).unwrap();
    assert!(cfg.sample_count() <= MAX_SWEEP_SAMPLES);
}

#[test]
fn sample_count_is_capped_for_edited_fields() {
    let mut cfg = SearchConfig::default();
    cfg.radius_increment = f64::MIN_POSITIVE;
    assert_eq!(cfg.sample_count(), MAX_SWEEP_SAMPLES);

    cfg.radius_increment = f64::NAN;
    assert_eq!(cfg.sample_count(), MAX_SWEEP_SAMPLES);

    cfg.initial_radius = cfg.max_radius + 1.0;
    cfg.radius_increment = 0.5;
    assert_eq!(cfg.sample_count(), 1);
}
