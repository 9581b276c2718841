use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    /// Aggregation over zero replications.  Unreachable through the public
    /// API while `num_runs >= 1` is enforced at validation.
    #[error("cannot aggregate an empty replication set")]
    InsufficientRuns,
}

pub type MetricsResult<T> = Result<T, MetricsError>;
