//! Display collaborator.
//!
//! Drives a [`Calculator`] from keypad or keyboard actions and keeps the
//! rendered expression text in sync after every action. Division by zero is
//! caught here and turned into a notice for the host to show; the calculator
//! is left exactly as it was so the user can fix the second operand.

use crate::config::DisplayConfig;
use crate::core::format_number_with;
use crate::keyboard::{action_for_key, Action, KeyBinding};
use crate::machine::{CalcError, Calculator, DisplayState, StepResult};

/// Render the expression text for a display state.
///
/// ```
/// use tally::config::DisplayConfig;
/// use tally::core::Operator;
/// use tally::display::render;
/// use tally::machine::DisplayState;
///
/// let state = DisplayState {
///     current_operand: "2".to_string(),
///     previous_operand: "1000".to_string(),
///     operation: Some(Operator::Multiply),
/// };
/// assert_eq!(render(&state, &DisplayConfig::default()), "1,000 × 2");
/// ```
pub fn render(state: &DisplayState, config: &DisplayConfig) -> String {
    let format = |value: &str| format_number_with(value, config.group_separator);

    match state.operation {
        Some(operator) if !state.previous_operand.is_empty() => {
            if state.current_operand.is_empty() {
                format!("{} {}", format(&state.previous_operand), operator)
            } else {
                format!(
                    "{} {} {}",
                    format(&state.previous_operand),
                    operator,
                    format(&state.current_operand)
                )
            }
        }
        _ if !state.current_operand.is_empty() => format(&state.current_operand),
        _ => config.empty_text.clone(),
    }
}

/// A calculator paired with its rendered text.
#[derive(Clone, Debug)]
pub struct CalculatorDisplay {
    calculator: Calculator,
    config: DisplayConfig,
    text: String,
    notice: Option<String>,
}

impl Default for CalculatorDisplay {
    fn default() -> Self {
        Self::new(DisplayConfig::default())
    }
}

impl CalculatorDisplay {
    /// Create a display over a fresh calculator.
    pub fn new(config: DisplayConfig) -> Self {
        let calculator = Calculator::with_history_limit(config.history_limit);
        let text = render(&calculator.display_state(), &config);
        Self {
            calculator,
            config,
            text,
            notice: None,
        }
    }

    /// The current expression text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the underlying calculator.
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Get the display configuration.
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Take the pending user notice, if any.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    /// Perform an action and re-render.
    ///
    /// Returns `None` when the action failed with a division by zero; the
    /// failure is available from [`take_notice`](Self::take_notice).
    pub fn dispatch(&mut self, action: Action) -> Option<StepResult> {
        let result = match action {
            Action::Input(token) => Ok(self.calculator.append_digit_or_point(token)),
            Action::Operation(operator) => self.calculator.choose_operation(operator),
            Action::Equals => self.calculator.compute(),
            Action::Clear => Ok(self.calculator.reset()),
            Action::Delete => Ok(self.calculator.delete()),
        };

        match result {
            Ok(step) => {
                self.refresh();
                Some(step)
            }
            Err(err) => {
                self.raise(action, err);
                None
            }
        }
    }

    /// Map a key name and dispatch its action.
    ///
    /// Returns the binding so the host can honour `prevent_default`, or
    /// `None` for keys the calculator does not use.
    pub fn press_key(&mut self, key: &str) -> Option<KeyBinding> {
        let binding = action_for_key(key)?;
        self.dispatch(binding.action);
        Some(binding)
    }

    fn refresh(&mut self) {
        self.text = render(&self.calculator.display_state(), &self.config);
    }

    fn raise(&mut self, action: Action, err: CalcError) {
        tracing::warn!(action = %action.label(), error = %err, "calculator rejected action");
        let message = match err {
            CalcError::DivisionByZero => self.config.division_by_zero_message.clone(),
            other => other.to_string(),
        };
        self.notice = Some(message);
    }
}
