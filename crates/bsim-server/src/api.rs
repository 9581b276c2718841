//! Wire types for the simulation API.
//!
//! Field names and optionality mirror the service's published schema: the
//! `aircraft`, `load`, and `bags` sections are required; `behavior` and
//! `controls` may be omitted wholly or partially and fall back to the
//! documented defaults.  Boarding methods arrive as strings and are parsed
//! — and rejected — before any simulation work begins.

use serde::{Deserialize, Serialize};

use bsim_core::{
    AircraftConfig, Assumptions, BagConfig, BehaviorConfig, BoardingConfig, BsimResult,
    ControlsConfig, LoadConfig, Scenario,
};
use bsim_runner::SimulationOutcome;

// ── Request ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct BoardingDto {
    pub method: String,
    pub baseline_method: String,
}

#[derive(Debug, Deserialize)]
pub struct SimulateRequest {
    pub aircraft: AircraftConfig,
    pub load: LoadConfig,
    pub boarding: BoardingDto,
    pub bags: BagConfig,
    #[serde(default)]
    pub behavior: Option<BehaviorConfig>,
    #[serde(default)]
    pub controls: Option<ControlsConfig>,
    /// Optional base seed; omitted seeds draw from entropy per request.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SimulateRequest {
    /// Parse policies, apply defaults, and validate — the request
    /// boundary's fail-fast gate.
    pub fn into_scenario(self) -> BsimResult<Scenario> {
        let boarding = BoardingConfig {
            method:          self.boarding.method.parse()?,
            baseline_method: self.boarding.baseline_method.parse()?,
        };
        let scenario = Scenario {
            aircraft:    self.aircraft,
            load:        self.load,
            boarding,
            bags:        self.bags,
            behavior:    self.behavior.unwrap_or_default(),
            controls:    self.controls.unwrap_or_default(),
            assumptions: Assumptions::default(),
            seed:        self.seed,
        };
        scenario.validate()?;
        Ok(scenario)
    }
}

// ── Response ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulateResponse {
    pub run_id: String,

    pub total_boarding_time_sec: u64,
    pub time_to_50_percent_sec: u64,
    pub time_to_90_percent_sec: u64,

    pub num_aisle_conflicts: u64,
    pub max_aisle_queue_length: u32,
    pub avg_wait_time_per_pax_sec: f64,

    pub baseline_boarding_time_sec: u64,
    pub delta_vs_baseline_sec: i64,
    pub percent_faster_vs_baseline: f64,

    pub dollars_saved_per_flight: f64,
    pub dollars_saved_per_year: f64,

    pub assumptions: Assumptions,
}

impl From<SimulationOutcome> for SimulateResponse {
    fn from(outcome: SimulationOutcome) -> Self {
        let s = outcome.strategy;
        let c = outcome.comparison;
        Self {
            run_id: outcome.run_id.to_string(),
            total_boarding_time_sec: s.total_boarding_time_sec,
            time_to_50_percent_sec: s.time_to_50_percent_sec,
            time_to_90_percent_sec: s.time_to_90_percent_sec,
            num_aisle_conflicts: s.num_aisle_conflicts,
            max_aisle_queue_length: s.max_aisle_queue_length,
            avg_wait_time_per_pax_sec: s.avg_wait_time_per_pax_sec,
            baseline_boarding_time_sec: c.baseline_boarding_time_sec,
            delta_vs_baseline_sec: c.delta_vs_baseline_sec,
            percent_faster_vs_baseline: c.percent_faster_vs_baseline,
            dollars_saved_per_flight: c.dollars_saved_per_flight,
            dollars_saved_per_year: c.dollars_saved_per_year,
            assumptions: outcome.assumptions,
        }
    }
}
