//! `bsim-core` — foundational types for the bsim boarding simulator.
//!
//! This crate is a dependency of every other `bsim-*` crate.  It intentionally
//! has no `bsim-*` dependencies and minimal external ones (only `rand`,
//! `thiserror`, and `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`ids`]    | `PaxId`, `SeatId`                                       |
//! | [`time`]   | `Tick`, `StepClock`                                     |
//! | [`rng`]    | `PaxRng` (per-passenger), `SimRng` (per-replication)    |
//! | [`policy`] | `BoardingMethod` enum and its string forms              |
//! | [`config`] | Scenario configuration sections and validation          |
//! | [`error`]  | `BsimError`, `BsimResult`                               |

pub mod config;
pub mod error;
pub mod ids;
pub mod policy;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    AircraftConfig, Assumptions, BagConfig, BehaviorConfig, BoardingConfig, ControlsConfig,
    LoadConfig, Scenario,
};
pub use error::{BsimError, BsimResult};
pub use ids::{PaxId, SeatId};
pub use policy::BoardingMethod;
pub use rng::{PaxRng, SimRng};
pub use time::{StepClock, Tick};
