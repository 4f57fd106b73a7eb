//! # Result Store
//!
//! Persisted-record model for accepted candidates and an in-memory store.
//!
//! One record is kept per `(vertex list, center parity)`. When the same
//! polygon arrives again, the record with the smaller tested radius wins.
//! SQL or file-backed stores live outside this crate and implement
//! [`ResultStore`].

mod vertex_list;


use std::collections::HashMap;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::point::CenterParity;
use crate::core::polygon::Polygon;
use crate::error::{CircleError, CircleResult};
use crate::search::Candidate;
pub use vertex_list::{format_vertex_list, parse_vertex_list, ParsedVertexList};

// =============================================================================
// RECORD
// =============================================================================

/// One persisted row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    /// Radius sample that produced the polygon.
    pub tested_radius: f64,
    /// Number of polygon sides.
    pub sides: usize,
    /// Largest center-to-vertex distance.
    pub real_radius: f64,
    /// Largest radial deviation.
    pub max_deviation: f64,
    /// Horizontal extent.
    pub diameter: i32,
    /// Vertices in text form.
    pub vertex_list: String,
    /// Center parity flag.
    pub odd_center: bool,
    /// Largest wedge leg, when scored.
    pub max_edge_span: Option<i32>,
    /// Circularity, when scored.
    pub circularity: Option<f64>,
    /// Uniformity, when scored.
    pub uniformity: Option<f64>,
}

impl StoredRecord {
    /// Builds the row for an accepted candidate.
    #[must_use]
    pub fn from_candidate(candidate: &Candidate) -> Self {
        Self {
            tested_radius: candidate.tested_radius,
            sides: candidate.sides(),
            real_radius: candidate.real_radius,
            max_deviation: candidate.max_deviation,
            diameter: candidate.diameter,
            vertex_list: format_vertex_list(candidate.polygon.vertices()),
            odd_center: candidate.center_parity().is_odd(),
            max_edge_span: Some(candidate.scores.max_edge_span),
            circularity: Some(candidate.scores.circularity),
            uniformity: Some(candidate.scores.uniformity),
        }
    }

    /// Center parity of the stored polygon.
    #[must_use]
    pub fn parity(&self) -> CenterParity {
        CenterParity::from_odd(self.odd_center)
    }

    /// Rebuilds the polygon, dropping malformed vertices.
    ///
    /// # Errors
    ///
    /// [`CircleError::MalformedPersistedPolygon`] when fewer than three
    /// valid vertices remain or two of them coincide.
    pub fn polygon(&self) -> CircleResult<Polygon> {
        let parsed = parse_vertex_list(&self.vertex_list);
        if parsed.points.len() < 3 {
            return Err(CircleError::malformed(format!(
                "{} valid vertices in {:?} ({} skipped)",
                parsed.points.len(),
                self.vertex_list,
                parsed.skipped
            )));
        }
        Polygon::from_vertices(parsed.points, self.parity())
    }

    fn key(&self) -> (String, bool) {
        (self.vertex_list.clone(), self.odd_center)
    }
}

// =============================================================================
// FILTER
// =============================================================================

/// Which center parities a query returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParityFilter {
    /// Odd centers only.
    Odd,
    /// Even centers only.
    Even,
    /// No parity restriction.
    #[default]
    Both,
}

impl ParityFilter {
    fn accepts(self, odd_center: bool) -> bool {
        match self {
            Self::Odd => odd_center,
            Self::Even => !odd_center,
            Self::Both => true,
        }
    }
}

/// Conditions a record must meet to be returned by [`ResultStore::query`].
///
/// Unset conditions match everything. A record without scores never meets
/// a score condition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFilter {
    /// Inclusive upper bound on `max_deviation`.
    pub max_deviation: Option<f64>,
    /// Inclusive lower bound on circularity.
    pub min_circularity: Option<f64>,
    /// Inclusive lower bound on uniformity.
    pub min_uniformity: Option<f64>,
    /// Inclusive upper bound on the largest wedge leg.
    pub max_edge_span: Option<i32>,
    /// Accepted tested radii.
    pub radius: Option<RangeInclusive<f64>>,
    /// Accepted diameters.
    pub diameter: Option<RangeInclusive<i32>>,
    /// Accepted parities.
    pub parity: ParityFilter,
}

impl RecordFilter {
    /// Returns `true` when `record` meets every set condition.
    #[must_use]
    pub fn matches(&self, record: &StoredRecord) -> bool {
        fn at_most<T: PartialOrd>(bound: Option<T>, value: Option<T>) -> bool {
            bound.map_or(true, |b| value.is_some_and(|v| v <= b))
        }
        fn at_least<T: PartialOrd>(bound: Option<T>, value: Option<T>) -> bool {
            bound.map_or(true, |b| value.is_some_and(|v| v >= b))
        }

        at_most(self.max_deviation, Some(record.max_deviation))
            && at_least(self.min_circularity, record.circularity)
            && at_least(self.min_uniformity, record.uniformity)
            && at_most(self.max_edge_span, record.max_edge_span)
            && self
                .radius
                .as_ref()
                .map_or(true, |r| r.contains(&record.tested_radius))
            && self
                .diameter
                .as_ref()
                .map_or(true, |r| r.contains(&record.diameter))
            && self.parity.accepts(record.odd_center)
    }
}

// =============================================================================
// STORE
// =============================================================================

/// What [`ResultStore::upsert`] did with a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpsertOutcome {
    /// New polygon.
    Inserted,
    /// Known polygon, replaced by a smaller tested radius.
    Replaced,
    /// Known polygon, existing record kept.
    Kept,
}

/// Durable home for accepted candidates.
pub trait ResultStore {
    /// Inserts `record`, or resolves the conflict on its polygon key in
    /// favor of the smaller tested radius.
    fn upsert(&mut self, record: StoredRecord) -> UpsertOutcome;

    /// All records in insertion order.
    fn records(&self) -> Vec<StoredRecord>;

    /// Records matching `filter`, in insertion order.
    fn query(&self, filter: &RecordFilter) -> Vec<StoredRecord> {
        self.records()
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect()
    }
}

/// In-memory [`ResultStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<StoredRecord>,
    index: HashMap<(String, bool), usize>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ResultStore for MemoryStore {
    fn upsert(&mut self, record: StoredRecord) -> UpsertOutcome {
        let key = record.key();
        match self.index.get(&key) {
            Some(&slot) if record.tested_radius < self.records[slot].tested_radius => {
                self.records[slot] = record;
                UpsertOutcome::Replaced
            }
            Some(_) => UpsertOutcome::Kept,
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(record);
                UpsertOutcome::Inserted
            }
        }
    }

    fn records(&self) -> Vec<StoredRecord> {
        self.records.clone()
    }
}

/// Per-outcome counts from [`save_candidates`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveSummary {
    /// New records.
    pub inserted: usize,
    /// Records replaced by a smaller tested radius.
    pub replaced: usize,
    /// Candidates that lost to an existing record.
    pub kept: usize,
}

/// Upserts every candidate of a sweep.
pub fn save_candidates<S: ResultStore + ?Sized>(store: &mut S, candidates: &[Candidate]) -> SaveSummary {
    let mut summary = SaveSummary::default();
    for candidate in candidates {
        match store.upsert(StoredRecord::from_candidate(candidate)) {
            UpsertOutcome::Inserted => summary.inserted += 1,
            UpsertOutcome::Replaced => summary.replaced += 1,
            UpsertOutcome::Kept => summary.kept += 1,
        }
    }
    info!(
        inserted = summary.inserted,
        replaced = summary.replaced,
        kept = summary.kept,
        "Saved sweep candidates"
    );
    summary
}
