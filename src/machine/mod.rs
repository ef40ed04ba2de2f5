//! The calculator state machine.
//!
//! `Calculator` owns the operand text, the pending operator and the
//! post-compute reset flag. Every operation either applies and reports the
//! phase it moved between, or is blocked by a named guard and leaves the
//! state untouched. Division by zero is the only failure.

mod calculator;
mod error;
mod step;

pub use calculator::Calculator;
pub use error::CalcError;
pub use step::{DisplayState, StepResult};
