//! The immutable product of one orchestrated request.

use serde::Serialize;
use uuid::Uuid;

use bsim_core::Assumptions;
use bsim_metrics::{BaselineComparison, SummaryMetrics};

/// Aggregated strategy metrics, baseline comparison, and the identifier the
/// retrieval endpoint keys on.  Created once per `/simulate` call and never
/// mutated — the run store hands out clones.
#[derive(Clone, Debug, Serialize)]
pub struct SimulationOutcome {
    pub run_id: Uuid,
    pub strategy: SummaryMetrics,
    pub comparison: BaselineComparison,
    pub assumptions: Assumptions,
}
