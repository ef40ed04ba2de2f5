//! Named guards for input that leaves the calculator unchanged.
//!
//! Guards are pure predicates over operand text. The calculator checks them
//! before mutating anything and reports the first one that blocks as
//! `StepResult::Unchanged`, so no-op input is an explicit outcome rather than
//! a fallthrough.

use super::operator::Token;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A condition under which an operation is a silent no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Guard {
    /// A `.` was typed into an operand that already has one.
    DuplicateDecimal,
    /// An operator was chosen before any operand was typed.
    MissingOperand,
    /// Delete was pressed with nothing left to remove.
    NothingToDelete,
    /// Compute was asked for with an operand that is not a number.
    UnparsableOperand,
    /// Compute was asked for with no operator pending.
    NoPendingOperator,
}

impl Guard {
    /// Get the guard's name for logging.
    pub fn name(self) -> &'static str {
        match self {
            Guard::DuplicateDecimal => "DuplicateDecimal",
            Guard::MissingOperand => "MissingOperand",
            Guard::NothingToDelete => "NothingToDelete",
            Guard::UnparsableOperand => "UnparsableOperand",
            Guard::NoPendingOperator => "NoPendingOperator",
        }
    }
}

impl fmt::Display for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Guard::DuplicateDecimal => "operand already has a decimal point",
            Guard::MissingOperand => "no operand typed yet",
            Guard::NothingToDelete => "nothing to delete",
            Guard::UnparsableOperand => "operand is not a number",
            Guard::NoPendingOperator => "no operator pending",
        };
        f.write_str(description)
    }
}

/// True when `token` is a second decimal point for `current`.
pub fn duplicate_decimal(current: &str, token: Token) -> bool {
    token.is_point() && current.contains('.')
}

/// True when there is no operand to attach an operator to.
pub fn missing_operand(current: &str) -> bool {
    current.is_empty()
}

/// True when delete has nothing to act on.
///
/// A pending operator with an empty right operand is never blocked: delete
/// then removes the operator itself.
pub fn nothing_to_delete(current: &str, operator_pending: bool) -> bool {
    if operator_pending && current.is_empty() {
        return false;
    }
    current.is_empty() || current == "0"
}
