//! Keyboard input mapping.
//!
//! Translates key names as a browser reports them (`KeyboardEvent.key`) into
//! calculator actions. The mapping holds no state and does no arithmetic.

use crate::core::{Operator, Token};
use serde::{Deserialize, Serialize};

/// Something a button press or key press asks the calculator to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Type a digit or the decimal point.
    Input(Token),
    /// Choose an operator.
    Operation(Operator),
    /// Compute the pending operation.
    Equals,
    /// Reset everything.
    Clear,
    /// Remove the most recent input.
    Delete,
}

impl Action {
    /// Keypad label for the button that performs this action.
    pub fn label(&self) -> String {
        match self {
            Action::Input(token) => token.to_string(),
            Action::Operation(operator) => operator.to_string(),
            Action::Equals => "=".to_string(),
            Action::Clear => "AC".to_string(),
            Action::Delete => "DEL".to_string(),
        }
    }
}

/// Result of mapping a key: the action, plus whether the host should
/// suppress the browser's own handling of the key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyBinding {
    pub action: Action,
    pub prevent_default: bool,
}

impl KeyBinding {
    fn new(action: Action) -> Self {
        Self {
            action,
            prevent_default: false,
        }
    }

    fn suppressing_default(action: Action) -> Self {
        Self {
            action,
            prevent_default: true,
        }
    }
}

/// Map a key name to a calculator action.
///
/// Digits and `.` type, `+ - * /` choose operators, `Enter` and `=` compute,
/// `Escape` clears and `Backspace` deletes. `/`, `Enter` and `=` ask the host
/// to prevent the browser default (quick-find, form submission).
///
/// ```
/// use tally::core::Operator;
/// use tally::keyboard::{action_for_key, Action};
///
/// let binding = action_for_key("*").unwrap();
/// assert_eq!(binding.action, Action::Operation(Operator::Multiply));
/// assert!(action_for_key("Shift").is_none());
/// ```
pub fn action_for_key(key: &str) -> Option<KeyBinding> {
    match key {
        "Enter" | "=" => Some(KeyBinding::suppressing_default(Action::Equals)),
        "Escape" => Some(KeyBinding::new(Action::Clear)),
        "Backspace" => Some(KeyBinding::new(Action::Delete)),
        _ => {
            let mut chars = key.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return None;
            };
            action_for_char(c)
        }
    }
}

fn action_for_char(c: char) -> Option<KeyBinding> {
    if let Ok(token) = Token::try_from(c) {
        return Some(KeyBinding::new(Action::Input(token)));
    }
    match c {
        '+' | '-' | '*' => Operator::from_key(c).map(|op| KeyBinding::new(Action::Operation(op))),
        '/' => Some(KeyBinding::suppressing_default(Action::Operation(
            Operator::Divide,
        ))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(key: &str) -> Option<Action> {
        action_for_key(key).map(|binding| binding.action)
    }

    #[test]
    fn digits_and_point_type() {
        for d in 0..=9u8 {
            let key = d.to_string();
            assert_eq!(action(&key), Some(Action::Input(Token::digit(d).unwrap())));
        }
        assert_eq!(action("."), Some(Action::Input(Token::POINT)));
    }

    #[test]
    fn operator_keys_translate_to_display_symbols() {
        assert_eq!(action("+"), Some(Action::Operation(Operator::Add)));
        assert_eq!(action("-"), Some(Action::Operation(Operator::Subtract)));
        assert_eq!(action("*"), Some(Action::Operation(Operator::Multiply)));
        assert_eq!(action("/"), Some(Action::Operation(Operator::Divide)));
    }

    #[test]
    fn command_keys() {
        assert_eq!(action("Enter"), Some(Action::Equals));
        assert_eq!(action("="), Some(Action::Equals));
        assert_eq!(action("Escape"), Some(Action::Clear));
        assert_eq!(action("Backspace"), Some(Action::Delete));
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(action("Shift"), None);
        assert_eq!(action("a"), None);
        assert_eq!(action("×"), None);
        assert_eq!(action(""), None);
        assert_eq!(action("12"), None);
        assert_eq!(action("Delete"), None);
    }

    #[test]
    fn browser_defaults_suppressed_for_divide_and_equals() {
        let suppressed = |key: &str| action_for_key(key).map(|b| b.prevent_default);
        assert_eq!(suppressed("/"), Some(true));
        assert_eq!(suppressed("Enter"), Some(true));
        assert_eq!(suppressed("="), Some(true));
        assert_eq!(suppressed("*"), Some(false));
        assert_eq!(suppressed("5"), Some(false));
        assert_eq!(suppressed("Escape"), Some(false));
    }

    #[test]
    fn labels_match_keypad() {
        assert_eq!(Action::Input(Token::POINT).label(), ".");
        assert_eq!(Action::Operation(Operator::Divide).label(), "÷");
        assert_eq!(Action::Equals.label(), "=");
        assert_eq!(Action::Clear.label(), "AC");
        assert_eq!(Action::Delete.label(), "DEL");
    }
}
