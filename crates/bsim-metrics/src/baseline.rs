//! Baseline comparison and delay economics.

use serde::Serialize;

use crate::aggregate::SummaryMetrics;

/// The strategy's performance against the baseline method, with the delay
/// cost translated into dollars.
#[derive(Clone, Debug, Serialize)]
pub struct BaselineComparison {
    pub baseline_boarding_time_sec: u64,
    /// Negative when the strategy is faster.
    pub delta_vs_baseline_sec: i64,
    pub percent_faster_vs_baseline: f64,
    /// Positive when the strategy is faster.
    pub dollars_saved_per_flight: f64,
    pub dollars_saved_per_year: f64,
}

/// Price `strategy` against `baseline`.
///
/// `percent_faster` is 0 for a zero-time baseline (an empty flight) rather
/// than a division fault.
pub fn compare(
    strategy: &SummaryMetrics,
    baseline: &SummaryMetrics,
    cost_per_minute_delay: f64,
    flights_per_year: u32,
) -> BaselineComparison {
    let strategy_time = strategy.total_boarding_time_sec as i64;
    let baseline_time = baseline.total_boarding_time_sec as i64;
    let delta = strategy_time - baseline_time;

    let percent_faster = if baseline_time == 0 {
        0.0
    } else {
        100.0 * (baseline_time - strategy_time) as f64 / baseline_time as f64
    };

    let per_flight = (delta as f64 / 60.0) * cost_per_minute_delay * -1.0;
    let per_year = per_flight * flights_per_year as f64;

    BaselineComparison {
        baseline_boarding_time_sec: baseline.total_boarding_time_sec,
        delta_vs_baseline_sec: delta,
        percent_faster_vs_baseline: percent_faster,
        dollars_saved_per_flight: per_flight,
        dollars_saved_per_year: per_year,
    }
}
