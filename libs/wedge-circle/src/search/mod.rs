//! # Radius Search Engine
//!
//! Sweeps an arithmetic sequence of radii, turning each into a candidate
//! polygon and keeping the smallest tested radius per unique polygon.
//!
//! ## Per-sample pipeline
//!
//! ```text
//! radius → build_lattice_polygon → validate_polygon (optional)
//!        → compute_metrics → check_deviation → score → Candidate
//! ```
//!
//! Samples are independent and run on the rayon thread pool. Completion
//! order does not matter: results are reduced by sample index before
//! deduplication.

mod progress;

use std::collections::HashSet;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::point::CenterParity;
use crate::core::polygon::Polygon;
use crate::error::{CircleError, CircleResult};
use crate::lattice::build_lattice_polygon;
use crate::metrics::{check_deviation, compute_metrics, PolygonScorer, QualityScores, StandardScorer};
use crate::quantize::validate_polygon;
use config::search::SearchConfig;
pub use progress::{CancellationToken, SweepProgress};

// =============================================================================
// CANDIDATE
// =============================================================================

/// An accepted polygon together with the radius that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Radius sample that generated the polygon.
    pub tested_radius: f64,
    /// The angularly ordered lattice polygon.
    pub polygon: Polygon,
    /// Largest center-to-vertex distance.
    pub real_radius: f64,
    /// Largest deviation of a vertex distance from `real_radius`.
    pub max_deviation: f64,
    /// Horizontal extent of the polygon.
    pub diameter: i32,
    /// Pluggable quality scores.
    pub scores: QualityScores,
}

impl Candidate {
    /// Number of polygon sides.
    #[must_use]
    pub fn sides(&self) -> usize {
        self.polygon.sides()
    }

    /// Center parity of the polygon.
    #[must_use]
    pub fn center_parity(&self) -> CenterParity {
        self.polygon.parity()
    }
}

// =============================================================================
// SWEEP REPORT
// =============================================================================

/// Why samples were discarded during a sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionCounts {
    /// Fewer than three lattice points or hull vertices.
    pub insufficient_points: usize,
    /// At least one edge could not be quantized.
    pub unrepresentable_edge: usize,
    /// Deviation above the configured threshold.
    pub deviation_exceeded: usize,
    /// The sample failed unexpectedly and was skipped.
    pub failed: usize,
}

impl RejectionCounts {
    /// Total rejected samples.
    #[must_use]
    pub fn total(&self) -> usize {
        self.insufficient_points + self.unrepresentable_edge + self.deviation_exceeded + self.failed
    }

    fn record(&mut self, error: &CircleError) {
        match error {
            CircleError::InsufficientPoints { .. } => self.insufficient_points += 1,
            CircleError::UnrepresentableEdge { .. } => self.unrepresentable_edge += 1,
            CircleError::DeviationExceeded { .. } => self.deviation_exceeded += 1,
            _ => self.failed += 1,
        }
    }
}

/// Outcome of [`RadiusSearchEngine::run`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    /// Unique candidates sorted by side count, then tested radius.
    pub candidates: Vec<Candidate>,
    /// Samples in the configured radius sequence.
    pub samples: usize,
    /// Samples actually evaluated (fewer than `samples` when cancelled).
    pub evaluated: usize,
    /// Accepted samples before deduplication.
    pub accepted: usize,
    /// Discarded samples by reason.
    pub rejections: RejectionCounts,
    /// Whether the sweep stopped early through its token.
    pub cancelled: bool,
}

enum SampleOutcome {
    Accepted(Candidate),
    Rejected(CircleError),
    Skipped,
}

// =============================================================================
// ENGINE
// =============================================================================

/// Parallel radius sweep driven by a validated [`SearchConfig`].
///
/// ## Example
///
/// ```rust
/// use config::search::SearchConfig;
/// use wedge_circle::RadiusSearchEngine;
///
/// let config = SearchConfig::new(false, 4.0, 6.0, 0.25, 0.5).unwrap();
/// let report = RadiusSearchEngine::new(config).run();
/// assert_eq!(report.samples, 9);
/// assert!(!report.candidates.is_empty());
/// ```
pub struct RadiusSearchEngine {
    config: SearchConfig,
    scorer: Arc<dyn PolygonScorer>,
    progress: Arc<SweepProgress>,
    cancel: CancellationToken,
}

impl RadiusSearchEngine {
    /// Creates an engine using the [`StandardScorer`] for the config's span limit.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            scorer: Arc::new(StandardScorer {
                limit: config.quantization_limit,
            }),
            progress: Arc::new(SweepProgress::default()),
            cancel: CancellationToken::new(),
        }
    }

    /// Replaces the quality scorer.
    #[must_use]
    pub fn with_scorer(mut self, scorer: impl PolygonScorer + 'static) -> Self {
        self.scorer = Arc::new(scorer);
        self
    }

    /// Replaces the cancellation token, e.g. to share one across engines.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Parameters of this engine.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Handle for observing progress from another thread.
    #[must_use]
    pub fn progress(&self) -> Arc<SweepProgress> {
        Arc::clone(&self.progress)
    }

    /// Token that stops the sweep between samples.
    #[must_use]
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Evaluates a single radius sample.
    pub fn evaluate(&self, radius: f64) -> CircleResult<Candidate> {
        let parity = CenterParity::from_odd(self.config.odd_center);
        let polygon = build_lattice_polygon(parity, radius)?;
        if self.config.enforce_quantization {
            validate_polygon(&polygon, self.config.quantization_limit)?;
        }
        let metrics = compute_metrics(&polygon);
        check_deviation(&metrics, self.config.max_deviation)?;
        let scores = self.scorer.score(&polygon);

        Ok(Candidate {
            tested_radius: radius,
            polygon,
            real_radius: metrics.real_radius,
            max_deviation: metrics.max_deviation,
            diameter: metrics.diameter,
            scores,
        })
    }

    /// Runs the whole sweep on the rayon pool.
    ///
    /// Rejected or failing samples never abort the sweep. A cancelled sweep
    /// still returns the candidates found so far.
    pub fn run(&self) -> SweepReport {
        let samples = self.config.sample_count();
        self.progress.start(samples);
        info!(
            samples,
            odd_center = self.config.odd_center,
            initial_radius = self.config.initial_radius,
            max_radius = self.config.max_radius,
            "starting radius sweep"
        );

        let outcomes: Vec<SampleOutcome> = (0..samples)
            .into_par_iter()
            .map(|index| self.run_sample(index))
            .collect();

        let mut rejections = RejectionCounts::default();
        let mut evaluated = 0;
        let mut accepted = Vec::new();
        for outcome in outcomes {
            match outcome {
                SampleOutcome::Accepted(candidate) => {
                    evaluated += 1;
                    accepted.push(candidate);
                }
                SampleOutcome::Rejected(error) => {
                    evaluated += 1;
                    rejections.record(&error);
                }
                SampleOutcome::Skipped => {}
            }
        }

        let accepted_count = accepted.len();
        let candidates = deduplicate(accepted);
        // Only cancellation skips samples.
        let cancelled = evaluated < samples;
        info!(
            evaluated,
            accepted = accepted_count,
            unique = candidates.len(),
            rejected = rejections.total(),
            cancelled,
            "radius sweep finished"
        );

        SweepReport {
            candidates,
            samples,
            evaluated,
            accepted: accepted_count,
            rejections,
            cancelled,
        }
    }

    fn run_sample(&self, index: usize) -> SampleOutcome {
        if self.cancel.is_cancelled() {
            return SampleOutcome::Skipped;
        }
        let radius = self.config.radius_at(index);
        let result = catch_unwind(AssertUnwindSafe(|| self.evaluate(radius)));
        self.progress.advance();

        match result {
            Ok(Ok(candidate)) => SampleOutcome::Accepted(candidate),
            Ok(Err(error)) => {
                debug!(radius, %error, "sample rejected");
                SampleOutcome::Rejected(error)
            }
            Err(_) => {
                warn!(radius, "sample failed unexpectedly; skipping");
                SampleOutcome::Rejected(CircleError::invariant(format!(
                    "sample at radius {radius} failed"
                )))
            }
        }
    }
}

/// Keeps the smallest tested radius per unique polygon.
///
/// Candidates are first ordered by tested radius (stable, so the first found
/// wins exact ties), reduced by polygon identity, then sorted by side count
/// and tested radius.
#[must_use]
pub fn deduplicate(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| a.tested_radius.total_cmp(&b.tested_radius));

    let mut seen: HashSet<Polygon> = HashSet::with_capacity(candidates.len());
    let mut unique: Vec<Candidate> = candidates
        .into_iter()
        .filter(|c| seen.insert(c.polygon.clone()))
        .collect();

    unique.sort_by(|a, b| {
        a.sides()
            .cmp(&b.sides())
            .then(a.tested_radius.total_cmp(&b.tested_radius))
    });
    unique
}
