//! `bsim-engine` — the discrete-event boarding simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0.. (until everyone is Seated):
//!   ① Progress — in-aisle passengers, front-to-back:
//!        Stowing  done → start sliding (seat-shuffle time added here)
//!        Sliding  done → Seated; aisle segment freed
//!        Walking  due  → stow/slide at own row, or advance one segment
//!                        if it is free
//!   ② Admissions — per aisle, the lowest-ranked passenger present at the
//!        gate enters segment 0 if it is free; each tick that entry is
//!        blocked by aisle occupancy counts one aisle conflict
//!   ③ Stats — gate queue lengths, observer callbacks
//! ```
//!
//! Front-to-back processing makes a freed segment usable by the passenger
//! immediately behind within the same tick, and — together with the
//! rank-ordered admission scan — makes the whole loop a deterministic
//! function of the generated population.  The engine performs no random
//! draws of its own.

pub mod aisle;
pub mod error;
pub mod observer;
pub mod result;
pub mod sim;
pub mod state;

#[cfg(test)]
mod tests;

pub use aisle::{AisleGrid, BIN_FULL_PENALTY, BinState};
pub use error::{EngineError, EngineResult};
pub use observer::{BoardObserver, NoopObserver};
pub use result::RunResult;
pub use sim::BoardingSim;
pub use state::PaxPhase;
