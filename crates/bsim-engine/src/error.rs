use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("boarding did not complete within {max_ticks} ticks ({secs:.0} simulated seconds)")]
    TickBudgetExceeded { max_ticks: u64, secs: f64 },
}

pub type EngineResult<T> = Result<T, EngineError>;
