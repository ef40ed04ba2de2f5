//! Calculator error types.

use thiserror::Error;

/// Errors raised by calculator operations and input conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The pending operation divides by an operand equal to zero.
    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("'{0}' is not a digit or decimal point")]
    InvalidToken(char),

    #[error("'{0}' is not an operator")]
    UnknownOperator(char),
}
