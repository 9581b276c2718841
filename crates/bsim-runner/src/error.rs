use bsim_core::BsimError;
use bsim_metrics::MetricsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    /// Invalid configuration or unsupported policy — a client error,
    /// detected before any simulation work.
    #[error(transparent)]
    Config(#[from] BsimError),

    /// The request blew its wall-clock budget, or one replication hit the
    /// simulated-time ceiling.  Surfaced as a service timeout.
    #[error("simulation timed out: {0}")]
    Timeout(String),

    /// Aggregation failure.  Unreachable while `num_runs >= 1` holds.
    #[error(transparent)]
    Metrics(#[from] MetricsError),
}
