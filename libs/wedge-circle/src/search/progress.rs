//! Progress reporting and cooperative cancellation for a running sweep.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Completed-sample counter readable without blocking the workers.
///
/// ## Example
///
/// ```rust
/// use wedge_circle::SweepProgress;
///
/// let progress = SweepProgress::default();
/// assert_eq!(progress.fraction(), 0.0);
/// ```
#[derive(Debug, Default)]
pub struct SweepProgress {
    completed: AtomicUsize,
    total: AtomicUsize,
}

impl SweepProgress {
    /// Samples finished so far (accepted, rejected or failed).
    #[must_use]
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Relaxed)
    }

    /// Samples scheduled for the current sweep.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total.load(Ordering::Relaxed)
    }

    /// Completed share in `[0, 1]`; zero before a sweep starts.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => (self.completed() as f64 / total as f64).min(1.0),
        }
    }

    pub(crate) fn start(&self, total: usize) {
        self.completed.store(0, Ordering::Relaxed);
        self.total.store(total, Ordering::Relaxed);
    }

    pub(crate) fn advance(&self) {
        self.completed.fetch_add(1, Ordering::Relaxed);
    }
}

/// Shared flag checked by the workers before every sample.
///
/// Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    /// Creates a token in the running state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation; samples already running finish normally.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
