//! Calculator state machine.

use crate::core::{
    duplicate_decimal, missing_operand, nothing_to_delete, parse_operand, render_number, Guard,
    Operator, Phase, State, StateHistory, StateTransition, Token, Trigger,
};
use crate::machine::error::CalcError;
use crate::machine::step::{DisplayState, StepResult};
use chrono::Utc;

/// Outcome of evaluating the pending operation without applying it.
enum Evaluation {
    Value(f64),
    Blocked(Guard),
}

/// Two-operand keypad calculator.
///
/// Operands are held as the text the user typed. An operator moves the
/// current operand into the previous slot; computing replaces both with the
/// result and arms a reset so the next digit starts a new calculation.
///
/// # Example
///
/// ```rust
/// use tally::core::{Operator, Token};
/// use tally::machine::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.append_digit_or_point(Token::digit(1).unwrap());
/// calc.append_digit_or_point(Token::digit(0).unwrap());
/// calc.choose_operation(Operator::Divide).unwrap();
/// calc.append_digit_or_point(Token::digit(4).unwrap());
/// calc.compute().unwrap();
///
/// assert_eq!(calc.current_operand(), "2.5");
/// ```
#[derive(Clone, Debug)]
pub struct Calculator {
    current: String,
    previous: String,
    operation: Option<Operator>,
    pending_reset: bool,
    history: StateHistory<Phase>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator with every field empty.
    pub fn new() -> Self {
        Self::with_history(StateHistory::new())
    }

    /// Create a calculator that keeps at most `limit` phase transitions.
    pub fn with_history_limit(limit: usize) -> Self {
        Self::with_history(StateHistory::with_limit(limit))
    }

    fn with_history(history: StateHistory<Phase>) -> Self {
        Self {
            current: String::new(),
            previous: String::new(),
            operation: None,
            pending_reset: false,
            history,
        }
    }

    /// Get the operand being typed (pure).
    pub fn current_operand(&self) -> &str {
        &self.current
    }

    /// Get the operand captured when the operator was chosen (pure).
    pub fn previous_operand(&self) -> &str {
        &self.previous
    }

    /// Get the pending operator, if any (pure).
    pub fn operation(&self) -> Option<Operator> {
        self.operation
    }

    /// True between a successful compute and the next input that consumes it.
    pub fn is_pending_reset(&self) -> bool {
        self.pending_reset
    }

    /// Get the current phase, derived from the fields (pure).
    pub fn phase(&self) -> Phase {
        Phase::classify(&self.current, self.operation.is_some(), self.pending_reset)
    }

    /// Get the phase transition history.
    pub fn history(&self) -> &StateHistory<Phase> {
        &self.history
    }

    /// Snapshot of the fields a display renders from.
    pub fn display_state(&self) -> DisplayState {
        DisplayState {
            current_operand: self.current.clone(),
            previous_operand: self.previous.clone(),
            operation: self.operation,
        }
    }

    /// Type a digit or the decimal point.
    ///
    /// After a computed result this starts a new calculation. A `.` on an
    /// empty or `"0"` operand produces `"0."`; a second `.` is ignored.
    pub fn append_digit_or_point(&mut self, token: Token) -> StepResult {
        let from = self.phase();

        if self.pending_reset {
            self.clear();
        }

        if duplicate_decimal(&self.current, token) {
            return self.blocked(Guard::DuplicateDecimal, Trigger::Append);
        }

        if self.current.is_empty() || self.current == "0" {
            self.current = if token.is_point() {
                "0.".to_string()
            } else {
                token.as_char().to_string()
            };
        } else {
            self.current.push(token.as_char());
        }

        self.finish(from, Trigger::Append)
    }

    /// Choose the operator to apply between the current and next operand.
    ///
    /// With an operator already pending and a second operand typed, the
    /// pending operation is computed first and its result becomes the left
    /// operand. A division by zero in that computation is returned and the
    /// state is left as it was.
    pub fn choose_operation(&mut self, operator: Operator) -> Result<StepResult, CalcError> {
        if missing_operand(&self.current) {
            return Ok(self.blocked(Guard::MissingOperand, Trigger::ChooseOperation));
        }

        let from = self.phase();

        if !self.previous.is_empty() && self.operation.is_some() {
            if let Evaluation::Value(value) = self.evaluate()? {
                self.apply_result(value);
            }
        }

        self.operation = Some(operator);
        self.previous = std::mem::take(&mut self.current);
        self.pending_reset = false;

        Ok(self.finish(from, Trigger::ChooseOperation))
    }

    /// Compute the pending operation.
    ///
    /// Unparsable operands or a missing operator leave the state unchanged.
    /// Dividing by zero fails with [`CalcError::DivisionByZero`] and also
    /// leaves the state unchanged.
    pub fn compute(&mut self) -> Result<StepResult, CalcError> {
        let from = self.phase();

        match self.evaluate()? {
            Evaluation::Blocked(guard) => Ok(self.blocked(guard, Trigger::Compute)),
            Evaluation::Value(value) => {
                self.apply_result(value);
                Ok(self.finish(from, Trigger::Compute))
            }
        }
    }

    /// Remove the most recent input.
    ///
    /// With an operator pending and no second operand this removes the
    /// operator and brings the first operand back. Otherwise it drops the
    /// last character of the current operand; a lone `-` left behind is
    /// cleared too.
    pub fn delete(&mut self) -> StepResult {
        if nothing_to_delete(&self.current, self.operation.is_some()) {
            return self.blocked(Guard::NothingToDelete, Trigger::Delete);
        }

        let from = self.phase();

        if self.operation.is_some() && self.current.is_empty() {
            self.operation = None;
            self.current = std::mem::take(&mut self.previous);
        } else {
            self.current.pop();
            if self.current == "-" {
                self.current.clear();
            }
        }

        self.finish(from, Trigger::Delete)
    }

    /// Clear everything. Always applies.
    pub fn reset(&mut self) -> StepResult {
        let from = self.phase();
        self.clear();
        self.finish(from, Trigger::Reset)
    }

    fn clear(&mut self) {
        self.current.clear();
        self.previous.clear();
        self.operation = None;
        self.pending_reset = false;
    }

    fn evaluate(&self) -> Result<Evaluation, CalcError> {
        let (Some(lhs), Some(rhs)) = (parse_operand(&self.previous), parse_operand(&self.current))
        else {
            return Ok(Evaluation::Blocked(Guard::UnparsableOperand));
        };
        let Some(operator) = self.operation else {
            return Ok(Evaluation::Blocked(Guard::NoPendingOperator));
        };
        operator.apply(lhs, rhs).map(Evaluation::Value)
    }

    fn apply_result(&mut self, value: f64) {
        self.current = render_number(value);
        self.previous.clear();
        self.operation = None;
        self.pending_reset = true;
    }

    fn finish(&mut self, from: Phase, trigger: Trigger) -> StepResult {
        let to = self.phase();
        if from != to {
            self.history = self.history.record(StateTransition {
                from,
                to,
                trigger,
                timestamp: Utc::now(),
            });
        }
        tracing::debug!(
            operation = trigger.name(),
            from = from.name(),
            to = to.name(),
            result_ready = to.is_final(),
            current = %self.current,
            previous = %self.previous,
            "calculator step applied"
        );
        StepResult::Transitioned { from, to }
    }

    fn blocked(&self, guard: Guard, trigger: Trigger) -> StepResult {
        tracing::trace!(
            operation = trigger.name(),
            guard = guard.name(),
            phase = self.phase().name(),
            "calculator step blocked"
        );
        StepResult::Unchanged(guard)
    }
}
