//! Cross-replication aggregation.

use serde::Serialize;

use bsim_engine::RunResult;

use crate::error::{MetricsError, MetricsResult};

/// Summary statistics over one method's replications, in the units the API
/// response reports (whole seconds for times).
#[derive(Clone, Debug, Serialize)]
pub struct SummaryMetrics {
    pub total_boarding_time_sec: u64,
    pub time_to_50_percent_sec: u64,
    pub time_to_90_percent_sec: u64,
    pub num_aisle_conflicts: u64,
    pub max_aisle_queue_length: u32,
    pub avg_wait_time_per_pax_sec: f64,
}

/// Reduce a batch of replication results into a [`SummaryMetrics`].
///
/// Times and wait are means (wait weighted by each replication's passenger
/// count so every passenger counts once); conflicts are the mean rounded to
/// nearest; queue length is the max.  Fails on an empty batch.
pub fn aggregate(runs: &[RunResult]) -> MetricsResult<SummaryMetrics> {
    if runs.is_empty() {
        return Err(MetricsError::InsufficientRuns);
    }
    let n = runs.len() as f64;

    let mean = |f: fn(&RunResult) -> f64| runs.iter().map(f).sum::<f64>() / n;

    let total_pax: usize = runs.iter().map(|r| r.pax_count).sum();
    let avg_wait = if total_pax == 0 {
        0.0
    } else {
        runs.iter()
            .map(|r| r.avg_wait_secs * r.pax_count as f64)
            .sum::<f64>()
            / total_pax as f64
    };

    Ok(SummaryMetrics {
        total_boarding_time_sec: mean(|r| r.total_secs).round() as u64,
        time_to_50_percent_sec: mean(|r| r.t50_secs).round() as u64,
        time_to_90_percent_sec: mean(|r| r.t90_secs).round() as u64,
        num_aisle_conflicts: mean(|r| r.conflicts as f64).round() as u64,
        max_aisle_queue_length: runs.iter().map(|r| r.max_queue).max().unwrap_or(0),
        avg_wait_time_per_pax_sec: avg_wait,
    })
}
