//! State trait and the calculator's input phases.
//!
//! The calculator never stores a phase tag. `Phase` is projected from the
//! operand fields after every operation so that collaborators and logs can
//! talk about where the calculator is in its input cycle.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for named machine states.
///
/// All methods are pure. States are small values describing a position in
/// a state machine.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the transition history
/// - `PartialEq`: transitions are only logged when the state changes
/// - `Debug`: states appear in diagnostics
/// - `Serialize` + `Deserialize`: history can be exported for inspection
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final state, one that ends an input cycle.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Where the calculator is in its input cycle.
///
/// ```text
/// Empty -> FirstOperand -> OperatorPending -> SecondOperand -> ResultReady
///              ^                                   |               |
///              +---------- chained operator -------+               |
///              +---------------- next digit -----------------------+
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing typed yet.
    #[default]
    Empty,
    /// Typing the left operand.
    FirstOperand,
    /// An operator was chosen; the right operand is still empty.
    OperatorPending,
    /// Typing the right operand.
    SecondOperand,
    /// A result is showing; the next digit starts over.
    ResultReady,
}

impl State for Phase {
    fn name(&self) -> &str {
        match self {
            Phase::Empty => "Empty",
            Phase::FirstOperand => "FirstOperand",
            Phase::OperatorPending => "OperatorPending",
            Phase::SecondOperand => "SecondOperand",
            Phase::ResultReady => "ResultReady",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Phase::ResultReady)
    }
}

impl Phase {
    /// Derive the phase from the calculator's observable fields.
    pub fn classify(current: &str, has_operator: bool, pending_reset: bool) -> Self {
        match (pending_reset, has_operator, current.is_empty()) {
            (true, _, _) => Phase::ResultReady,
            (false, true, true) => Phase::OperatorPending,
            (false, true, false) => Phase::SecondOperand,
            (false, false, true) => Phase::Empty,
            (false, false, false) => Phase::FirstOperand,
        }
    }
}
