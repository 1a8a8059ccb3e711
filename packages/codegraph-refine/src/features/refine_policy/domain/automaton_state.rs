//! Refinement automaton state token

use serde::{Deserialize, Serialize};
use std::fmt;

/// Current state of the refinement state machine
///
/// Opaque to policies: they may compare or forward it, nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AutomatonState {
    pub id: u32,
}

impl AutomatonState {
    /// Start state of every automaton
    pub const START: AutomatonState = AutomatonState { id: 0 };

    #[inline]
    pub fn new(id: u32) -> Self {
        Self { id }
    }
}

impl Default for AutomatonState {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for AutomatonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.id)
    }
}
