//! Outcomes of calculator operations and the observable display state.

use crate::core::{Guard, Operator, Phase};
use serde::{Deserialize, Serialize};

/// Result of a single calculator operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepResult {
    /// The operation was applied. `from` and `to` may be equal when the
    /// operation changed an operand without leaving its phase.
    Transitioned { from: Phase, to: Phase },

    /// A guard blocked the operation; nothing changed.
    Unchanged(Guard),
}

impl StepResult {
    /// Check if the operation changed the state.
    pub fn is_applied(&self) -> bool {
        matches!(self, StepResult::Transitioned { .. })
    }

    /// The guard that blocked the operation, if any.
    pub fn guard(&self) -> Option<Guard> {
        match self {
            StepResult::Unchanged(guard) => Some(*guard),
            StepResult::Transitioned { .. } => None,
        }
    }
}

/// The three fields collaborators render from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    pub current_operand: String,
    pub previous_operand: String,
    pub operation: Option<Operator>,
}
