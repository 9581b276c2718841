//! Core error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `BsimError` via `From` impls or wrap it as one variant.  Everything in
//! this enum is detectable before any simulation work starts, so the HTTP
//! layer maps both variants to client errors.

use thiserror::Error;

/// Request-boundary errors shared by all `bsim-*` crates.
#[derive(Debug, Error)]
pub enum BsimError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("unsupported boarding method: {0:?}")]
    UnsupportedPolicy(String),
}

/// Shorthand result type for all `bsim-*` crates.
pub type BsimResult<T> = Result<T, BsimError>;
