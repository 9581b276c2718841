//! `bsim-metrics` — reduces replication results into the summary the API
//! contract promises, and prices the strategy against its baseline.
//!
//! # Aggregation policy
//!
//! Fixed, not configurable: boarding times and per-passenger wait are
//! **means** across replications (wait weighted by passenger count), the
//! conflict count is the **mean rounded to nearest**, and the queue length
//! is the **max** across replications — a capacity-style metric where the
//! worst observation is the informative one.

pub mod aggregate;
pub mod baseline;
pub mod error;


pub use aggregate::{SummaryMetrics, aggregate};
pub use baseline::{BaselineComparison, compare};
pub use error::{MetricsError, MetricsResult};
