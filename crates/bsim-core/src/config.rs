//! Scenario configuration.
//!
//! The section structs mirror the request schema of the boarding service
//! one-to-one (field names included), so the HTTP layer deserializes its
//! request body straight into them.  Defaults match the service contract:
//! a request may omit `behavior` and `controls` entirely or give a partial
//! object, and every missing field falls back to the documented default.
//!
//! All validation happens in [`Scenario::validate`], before any simulation
//! work begins; the engine and generator are entitled to assume a valid
//! scenario.

use serde::{Deserialize, Serialize};

use crate::{BoardingMethod, BsimError, BsimResult};

// ── Request sections ──────────────────────────────────────────────────────────

/// Aircraft geometry.  `aircraft_type` is a label only; the cabin is fully
/// described by rows, seats per row, and aisle count.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AircraftConfig {
    #[serde(rename = "type")]
    pub aircraft_type: String,
    pub num_rows: u16,
    pub seats_per_row: u8,
    pub num_aisles: u8,
}

/// Fraction of seats occupied for this flight.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoadConfig {
    pub load_factor: f64,
}

/// Strategy and baseline boarding policies, already parsed from their wire
/// strings.  Parsing failures surface as `UnsupportedPolicy` at the request
/// boundary, before a `Scenario` exists.
#[derive(Clone, Debug)]
pub struct BoardingConfig {
    pub method: BoardingMethod,
    pub baseline_method: BoardingMethod,
}

/// Carry-on parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BagConfig {
    pub carry_on_rate: f64,
    pub bin_capacity_per_row: u32,
}

/// Passenger behavior means.  Sampled per passenger from a truncated normal
/// around each mean (see `bsim-pax`).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Mean walking speed in m/s.
    pub walking_speed_mean: f64,
    /// Mean overhead-bin stow time in seconds (carry-on passengers only).
    pub stow_time_carry_on_mean: f64,
    /// Mean time to slide into the seat, in seconds.
    pub seat_slide_time_mean: f64,
    /// Probability that a passenger misses their nominal group call.
    pub late_pax_rate: f64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            walking_speed_mean:      1.3,
            stow_time_carry_on_mean: 12.0,
            seat_slide_time_mean:    3.0,
            late_pax_rate:           0.02,
        }
    }
}

/// Simulation controls.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Fixed step size in simulated seconds.
    pub time_step: f64,
    /// Independent Monte Carlo replications per method.
    pub num_runs: u32,
    /// Dollar cost of one minute of delay, for the economics section.
    pub cost_per_minute_delay: f64,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            time_step:             0.5,
            num_runs:              25,
            cost_per_minute_delay: 75.0,
        }
    }
}

/// Economic assumptions echoed in the response.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    pub flights_per_year: u32,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self { flights_per_year: 1825 }
    }
}

// ── Scenario ──────────────────────────────────────────────────────────────────

/// A fully assembled simulation request: every section present, defaults
/// applied, policies parsed.  The orchestrator's sole input.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub aircraft:    AircraftConfig,
    pub load:        LoadConfig,
    pub boarding:    BoardingConfig,
    pub bags:        BagConfig,
    pub behavior:    BehaviorConfig,
    pub controls:    ControlsConfig,
    pub assumptions: Assumptions,
    /// Base seed for the replication RNG tree.  `None` draws one from
    /// entropy, making replications vary per request.
    pub seed: Option<u64>,
}

impl Scenario {
    /// Total number of physical seats in the configured cabin.
    #[inline]
    pub fn seat_count(&self) -> usize {
        self.aircraft.num_rows as usize * self.aircraft.seats_per_row as usize
    }

    /// Number of passengers this scenario generates per replication
    /// (`load_factor` of the seat count, rounded to nearest).
    #[inline]
    pub fn pax_count(&self) -> usize {
        (self.load.load_factor * self.seat_count() as f64).round() as usize
    }

    /// Fail-fast validation of every numeric bound the contract promises to
    /// reject before simulation.  Policies are already parsed, so this
    /// covers geometry, rates, and controls.
    pub fn validate(&self) -> BsimResult<()> {
        fn invalid(msg: impl Into<String>) -> BsimResult<()> {
            Err(BsimError::InvalidConfiguration(msg.into()))
        }

        let a = &self.aircraft;
        if a.num_rows == 0 {
            return invalid("num_rows must be positive");
        }
        if a.seats_per_row == 0 {
            return invalid("seats_per_row must be positive");
        }
        if !(1..=2).contains(&a.num_aisles) {
            return invalid(format!("num_aisles must be 1 or 2, got {}", a.num_aisles));
        }
        if a.num_aisles == 2 && a.seats_per_row < 3 {
            return invalid("a twin-aisle cabin needs at least 3 seats per row");
        }

        if !(0.0..=1.0).contains(&self.load.load_factor) {
            return invalid(format!(
                "load_factor must be within [0, 1], got {}",
                self.load.load_factor
            ));
        }

        if !(0.0..=1.0).contains(&self.bags.carry_on_rate) {
            return invalid(format!(
                "carry_on_rate must be within [0, 1], got {}",
                self.bags.carry_on_rate
            ));
        }

        let b = &self.behavior;
        if !(b.walking_speed_mean > 0.0) {
            return invalid("walking_speed_mean must be positive");
        }
        if !(b.stow_time_carry_on_mean > 0.0) {
            return invalid("stow_time_carry_on_mean must be positive");
        }
        if !(b.seat_slide_time_mean > 0.0) {
            return invalid("seat_slide_time_mean must be positive");
        }
        if !(0.0..=1.0).contains(&b.late_pax_rate) {
            return invalid(format!(
                "late_pax_rate must be within [0, 1], got {}",
                b.late_pax_rate
            ));
        }

        let c = &self.controls;
        if !(c.time_step > 0.0) || !c.time_step.is_finite() {
            return invalid("time_step must be a positive finite number");
        }
        if c.num_runs == 0 {
            return invalid("num_runs must be at least 1");
        }
        if !(c.cost_per_minute_delay >= 0.0) {
            return invalid("cost_per_minute_delay must be non-negative");
        }

        Ok(())
    }
}
