//! The closed set of boarding policies.
//!
//! New policies are added as new variants, never as dynamically loaded
//! types: every consumer (ordering, validation, the HTTP boundary) matches
//! exhaustively, so a new variant fails to compile until it is handled
//! everywhere.

use std::fmt;
use std::str::FromStr;

use crate::{BsimError, BsimResult};

/// A boarding policy: the rule that maps a passenger population to a queue
/// order.  Parsed from the request's `method` / `baseline_method` strings
/// before any simulation work begins.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum BoardingMethod {
    /// Rear zones first (10-row zones, rear to front).
    BackToFront,
    /// Front zones first (10-row zones, front to rear).
    FrontToBack,
    /// Window seats first, then middle, then aisle ("window-middle-aisle").
    OutsideIn,
    /// Four equal row blocks, called rear block first.
    ByGroup,
    /// Uniformly shuffled queue.
    Random,
}

impl BoardingMethod {
    /// Every supported variant, in documentation order.
    pub const ALL: [BoardingMethod; 5] = [
        BoardingMethod::BackToFront,
        BoardingMethod::FrontToBack,
        BoardingMethod::OutsideIn,
        BoardingMethod::ByGroup,
        BoardingMethod::Random,
    ];

    /// Canonical wire name (the form [`fmt::Display`] prints).
    pub fn name(self) -> &'static str {
        match self {
            BoardingMethod::BackToFront => "back_to_front",
            BoardingMethod::FrontToBack => "front_to_back",
            BoardingMethod::OutsideIn   => "outside_in",
            BoardingMethod::ByGroup     => "by_group",
            BoardingMethod::Random      => "random",
        }
    }
}

impl FromStr for BoardingMethod {
    type Err = BsimError;

    /// Accepts the canonical names plus the aliases the original service
    /// documented (`window_middle_aisle`, `group`).
    fn from_str(s: &str) -> BsimResult<Self> {
        match s {
            "back_to_front"                    => Ok(BoardingMethod::BackToFront),
            "front_to_back"                    => Ok(BoardingMethod::FrontToBack),
            "outside_in" | "window_middle_aisle" => Ok(BoardingMethod::OutsideIn),
            "by_group" | "group"               => Ok(BoardingMethod::ByGroup),
            "random"                           => Ok(BoardingMethod::Random),
            other => Err(BsimError::UnsupportedPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for BoardingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
