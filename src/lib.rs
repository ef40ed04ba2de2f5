//! Tally: a keypad calculator state machine
//!
//! Tally keeps the state of a two-operand calculator: the operand being
//! typed, the operand captured when an operator was chosen, the pending
//! operator and a flag that makes the first digit after a result start a
//! new calculation. Everything around it (button wiring, keyboard mapping,
//! rendering) calls into the state machine and re-reads its state.
//!
//! # Core Concepts
//!
//! - **Calculator**: the state machine, see [`machine::Calculator`]
//! - **Phases**: the derived position in the input cycle, via the `State` trait
//! - **Guards**: named conditions under which input is a silent no-op
//! - **Display**: rendering and error notices, see [`display::CalculatorDisplay`]
//!
//! # Example
//!
//! ```rust
//! use tally::display::CalculatorDisplay;
//!
//! let mut display = CalculatorDisplay::default();
//! for key in ["1", "0", "*", "2", "/", "4", "Enter"] {
//!     display.press_key(key);
//! }
//! assert_eq!(display.text(), "5");
//! ```

pub mod config;
pub mod core;
pub mod display;
pub mod keyboard;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{format_number, Guard, Operator, Phase, State, Token};
pub use config::DisplayConfig;
pub use display::CalculatorDisplay;
pub use keyboard::Action;
pub use machine::{CalcError, Calculator, DisplayState, StepResult};
