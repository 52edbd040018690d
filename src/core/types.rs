//! src/core/types.rs
//!
//! Keypad token model
//!
//! This module defines the typed input alphabet for the calculator:
//! - `Operator`: the four arithmetic operator keys
//! - `Token`: one atomic keypad input (digit, decimal point, operator,
//!   equals, clear, clear-entry)
//!
//! The presentation layer deals in raw key strings as delivered by button
//! or keyboard events; `Token::parse` is the single place where those
//! strings are given meaning.

use std::fmt;

/// Arithmetic operator keys
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl Operator {
    /// Maps an operator key symbol to its operator.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Maps a raw operator token, as delivered by a button press, to its
    /// operator. Only single-symbol tokens are recognised.
    pub fn from_token(token: &str) -> Option<Self> {
        let mut symbols = token.chars();
        match (symbols.next(), symbols.next()) {
            (Some(symbol), None) => Self::from_symbol(symbol),
            _ => None,
        }
    }

    /// The key symbol for this operator.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One atomic keypad input
///
/// The full alphabet is `0`-`9`, `.`, `+ - * /`, `=`, `C` (full clear) and
/// `CE` (clear entry). Every interaction with the calculator is a sequence
/// of these.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Token {
    /// A single digit key, `0`-`9`
    Digit(u8),
    /// The decimal point key
    Point,
    /// An arithmetic operator key
    Op(Operator),
    /// The equals key
    Equals,
    /// Full reset of the session
    Clear,
    /// Discard only the number currently being typed
    ClearEntry,
}

impl Token {
    /// Parses one raw input token.
    ///
    /// Accepts exactly the keypad alphabet; anything else yields `None` and
    /// is ignored by the state machine.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "." => return Some(Token::Point),
            "=" => return Some(Token::Equals),
            "C" => return Some(Token::Clear),
            "CE" => return Some(Token::ClearEntry),
            _ => {}
        }

        if let Some(op) = Operator::from_token(input) {
            return Some(Token::Op(op));
        }

        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(digit), None) if digit.is_ascii_digit() => {
                Some(Token::Digit(digit as u8 - b'0'))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Digit(digit) => write!(f, "{}", digit),
            Token::Point => write!(f, "."),
            Token::Op(op) => write!(f, "{}", op),
            Token::Equals => write!(f, "="),
            Token::Clear => write!(f, "C"),
            Token::ClearEntry => write!(f, "CE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_from_symbol() {
        assert_eq!(Operator::from_symbol('+'), Some(Operator::Add));
        assert_eq!(Operator::from_symbol('/'), Some(Operator::Divide));
        assert_eq!(Operator::from_symbol('%'), None);
    }

    #[test]
    fn test_operator_from_token_rejects_multichar() {
        assert_eq!(Operator::from_token("+"), Some(Operator::Add));
        assert_eq!(Operator::from_token("++"), None);
        assert_eq!(Operator::from_token(""), None);
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(format!("{}", Operator::Add), "+");
        assert_eq!(format!("{}", Operator::Multiply), "*");
    }

    #[test]
    fn test_token_parse_digits() {
        assert_eq!(Token::parse("0"), Some(Token::Digit(0)));
        assert_eq!(Token::parse("9"), Some(Token::Digit(9)));
        assert_eq!(Token::parse("10"), None); // One digit per key press
    }

    #[test]
    fn test_token_parse_controls() {
        assert_eq!(Token::parse("="), Some(Token::Equals));
        assert_eq!(Token::parse("C"), Some(Token::Clear));
        assert_eq!(Token::parse("CE"), Some(Token::ClearEntry));
        assert_eq!(Token::parse("."), Some(Token::Point));
    }

    #[test]
    fn test_token_parse_unknown() {
        assert_eq!(Token::parse("x"), None);
        assert_eq!(Token::parse(""), None);
        assert_eq!(Token::parse("CEE"), None);
    }

    #[test]
    fn test_token_display_round_trip() {
        for key in ["7", ".", "+", "-", "*", "/", "=", "C", "CE"] {
            let token = Token::parse(key).unwrap();
            assert_eq!(format!("{}", token), key);
        }
    }
}
