//! The immutable output of a single replication.

use serde::Serialize;

/// Metrics recorded by one boarding run.  Produced once, never mutated;
/// the aggregator reduces a batch of these into summary statistics.
#[derive(Clone, Debug, Serialize)]
pub struct RunResult {
    /// Passengers boarded (0 for a zero-load scenario).
    pub pax_count: usize,
    /// Seconds until the last passenger was seated.
    pub total_secs: f64,
    /// Seconds until 50% of passengers were seated.
    pub t50_secs: f64,
    /// Seconds until 90% of passengers were seated.
    pub t90_secs: f64,
    /// Ticks on which a passenger's queue turn had arrived but the
    /// entrance segment was occupied (blocked `Waiting → Walking`
    /// transitions).
    pub conflicts: u64,
    /// Largest gate queue observed at any single aisle.
    pub max_queue: u32,
    /// Mean of (seated time − queue-entry time) across passengers.
    pub avg_wait_secs: f64,
}

impl RunResult {
    /// The well-defined result of boarding nobody.
    pub fn empty() -> Self {
        Self {
            pax_count:     0,
            total_secs:    0.0,
            t50_secs:      0.0,
            t90_secs:      0.0,
            conflicts:     0,
            max_queue:     0,
            avg_wait_secs: 0.0,
        }
    }
}
