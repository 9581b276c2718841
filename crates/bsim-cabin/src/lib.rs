//! `bsim-cabin` — static cabin geometry for the bsim boarding simulator.
//!
//! Built once per simulation run from the aircraft section of the request,
//! read-only thereafter.  Everything the engine needs to move a passenger —
//! which aisle serves their seat, how many rows they walk, how many seated
//! neighbours they squeeze past — is precomputed here.

pub mod layout;


pub use layout::{CabinLayout, Seat};
