//! Operators and keypad input tokens.

use crate::machine::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four binary operators on the keypad.
///
/// Operators are identified by their display symbols; multiplication and
/// division use `×` and `÷` rather than the ASCII `*` and `/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "×")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The display symbol.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
        }
    }

    /// Look up an operator by display symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Look up an operator by keyboard character, accepting `*` and `/`
    /// in addition to the display symbols.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            other => Self::from_symbol(other),
        }
    }

    /// Apply the operator to two parsed operands.
    ///
    /// Fails only when dividing by a right operand that is exactly zero.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Subtract => Ok(lhs - rhs),
            Operator::Multiply => Ok(lhs * rhs),
            Operator::Divide if rhs == 0.0 => Err(CalcError::DivisionByZero),
            Operator::Divide => Ok(lhs / rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Operator {
    type Error = CalcError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_symbol(symbol).ok_or(CalcError::UnknownOperator(symbol))
    }
}

/// A single keypad input: a digit or the decimal point.
///
/// Only `0`-`9` and `.` can be represented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Token(char);

impl Token {
    pub const POINT: Token = Token('.');

    /// Token for a digit value, `None` above 9.
    pub fn digit(value: u8) -> Option<Self> {
        char::from_digit(u32::from(value), 10).map(Token)
    }

    /// Get the typed character.
    pub fn as_char(self) -> char {
        self.0
    }

    /// Check if this is the decimal point.
    pub fn is_point(self) -> bool {
        self.0 == '.'
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<char> for Token {
    type Error = CalcError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '.' | '0'..='9' => Ok(Token(c)),
            other => Err(CalcError::InvalidToken(other)),
        }
    }
}

impl From<Token> for char {
    fn from(token: Token) -> char {
        token.0
    }
}
