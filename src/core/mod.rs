//! Pure building blocks of the calculator.
//!
//! - Phases via the `State` trait
//! - Operators and input tokens
//! - Named guards for no-op input
//! - Operand parsing, result rendering and display formatting
//! - Bounded phase transition history
//!
//! Nothing in this module holds mutable state; the `machine` module owns
//! the calculator and calls into these functions.

mod guard;
mod history;
mod number;
mod operator;
mod state;

pub use guard::{duplicate_decimal, missing_operand, nothing_to_delete, Guard};
pub use history::{StateHistory, StateTransition, Trigger, DEFAULT_HISTORY_LIMIT};
pub use number::{
    format_number, format_number_with, parse_operand, render_number, DEFAULT_GROUP_SEPARATOR,
};
pub use operator::{Operator, Token};
pub use state::{Phase, State};
