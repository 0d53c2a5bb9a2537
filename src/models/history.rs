//! Bounded price-history ledger
//!
//! Keeps the last N trip searches as a sliding window (oldest evicted first)
//! and derives the period-over-period price deltas shown in the history table,
//! the chart and the CSV export.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of searches retained when no capacity is configured
pub const DEFAULT_CAPACITY: usize = 7;

/// One completed trip search.
///
/// `payload` is stored verbatim and never inspected by the ledger; the
/// application stores the full `TripQuote` there so past results can be
/// redisplayed and exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation<P> {
    pub observed_at: DateTime<Utc>,
    pub reference_price: f64,
    pub payload: P,
}

impl<P> Observation<P> {
    pub fn new(observed_at: DateTime<Utc>, reference_price: f64, payload: P) -> Self {
        Observation {
            observed_at,
            reference_price,
            payload,
        }
    }
}

/// Read-only projection of one observation plus its delta from the prior one.
///
/// `change` is `None` for the first entry (no baseline) and `Some(0.0)` for a
/// price identical to its predecessor. Consumers must render those two states
/// differently.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedPoint {
    pub date: DateTime<Utc>,
    pub price: f64,
    pub change: Option<f64>,
}

/// Ordered, bounded sequence of observations, oldest first.
///
/// Entries are append-only and non-decreasing in `observed_at`; once the
/// configured capacity is reached, each append evicts the single oldest entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory<P> {
    capacity: usize,
    entries: VecDeque<Observation<P>>,
}

impl<P> PriceHistory<P> {
    /// Create an empty ledger holding at most `capacity` observations.
    ///
    /// A requested capacity of 0 is clamped to 1; the ledger always retains
    /// at least the most recent observation.
    pub fn new(capacity: usize) -> Self {
        PriceHistory {
            capacity: capacity.max(1),
            entries: VecDeque::new(),
        }
    }

    /// Append an observation at the tail, evicting from the head while over capacity.
    ///
    /// Cannot fail; a malformed observation (non-finite price) is a caller
    /// contract violation, rejected before it reaches the ledger.
    pub fn append(&mut self, observation: Observation<P>) {
        self.entries.push_back(observation);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Price of the most recent observation, or `None` when empty.
    ///
    /// The orchestrator queries this *before* appending the new observation,
    /// so the value is the baseline for the change narrative.
    pub fn latest_reference_price(&self) -> Option<f64> {
        self.entries.back().map(|obs| obs.reference_price)
    }

    /// Lazy series of one `DerivedPoint` per observation, oldest first.
    ///
    /// Pure read; safe to call any number of times between appends.
    pub fn derive_series(&self) -> impl Iterator<Item = DerivedPoint> + '_ {
        self.entries.iter().scan(None::<f64>, |prev, obs| {
            let change = prev.map(|p| obs.reference_price - p);
            *prev = Some(obs.reference_price);
            Some(DerivedPoint {
                date: obs.observed_at,
                price: obs.reference_price,
                change,
            })
        })
    }

    /// Full observation sequence, oldest first (used by the CSV export)
    pub fn entries(&self) -> impl Iterator<Item = &Observation<P>> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&Observation<P>> {
        self.entries.back()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Re-apply a capacity to a rehydrated ledger, trimming oldest entries.
    ///
    /// A persisted blob written with a larger capacity is cut down the same
    /// way eviction would have.
    pub fn recap(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }
}
