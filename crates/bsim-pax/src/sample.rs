//! Behavioral-time sampling.
//!
//! # Distribution
//!
//! Every behavioral duration is drawn from a **truncated normal** centered
//! on the configured mean with a fixed coefficient of variation of
//! [`BEHAVIOR_TIME_CV`], truncated to `[0.5 * mean, 2.0 * mean]`.  The
//! truncation keeps samples strictly positive and bounds the tails, so a
//! single pathological draw cannot dominate a replication.
//!
//! The normal deviate comes from a Box–Muller transform over two uniform
//! draws of the passenger's own RNG stream — sampling stays deterministic
//! per (seed, passenger) pair and needs nothing beyond `rand`.

use bsim_core::PaxRng;

/// Coefficient of variation applied to every behavioral mean.
pub const BEHAVIOR_TIME_CV: f64 = 0.25;

/// Truncation bounds as fractions of the mean.
const TRUNC_LO: f64 = 0.5;
const TRUNC_HI: f64 = 2.0;

/// Draw one truncated-normal sample around `mean`.
///
/// A non-positive `mean` short-circuits to 0 — callers pass 0 for phases a
/// passenger skips (e.g. stow time without a carry-on).
pub fn truncated_normal(rng: &mut PaxRng, mean: f64) -> f64 {
    if mean <= 0.0 {
        return 0.0;
    }
    // Box–Muller: u1 in (0, 1] so ln(u1) is finite.
    let u1: f64 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random();
    let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
    (mean * (1.0 + BEHAVIOR_TIME_CV * z)).clamp(TRUNC_LO * mean, TRUNC_HI * mean)
}
