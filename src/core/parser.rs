// Copyright 2025 deskcalc contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/parser.rs
//!
//! Key-sequence parser
//!
//! The state machine consumes one token per key press; line-oriented
//! front-ends receive whole sequences like `12.5*3=`. This module turns
//! such a line into the token stream the machine expects.
//!
//! # Architecture
//! Single-token parsing uses nom combinators; `parse_sequence` drives
//! `parse_token` across the line, skipping whitespace between tokens and
//! reporting the first unrecognised character with its column.
//!
//! Token letters are matched case-insensitively (`ce` and `CE` both clear
//! the entry), and `CE` is tried before `C` so the longer token wins.

use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, one_of},
    combinator::{map, map_opt},
    IResult, Parser,
};
use thiserror::Error;

use crate::core::types::{Operator, Token};

/// Sequence parse error with column context
#[derive(Debug, Error, PartialEq)]
pub enum SequenceError {
    /// Input contained a character outside the keypad alphabet.
    #[error("Unrecognised input '{fragment}' at column {column}")]
    UnrecognisedInput { fragment: char, column: usize },
}

/// Parses one token from the head of the input.
pub fn parse_token(input: &str) -> IResult<&str, Token> {
    alt((
        map(tag_no_case("CE"), |_| Token::ClearEntry), // Before "C": longer match
        map(tag_no_case("C"), |_| Token::Clear),
        map(char('='), |_| Token::Equals),
        map(char('.'), |_| Token::Point),
        map_opt(one_of("+-*/"), |symbol| {
            Operator::from_symbol(symbol).map(Token::Op)
        }),
        map_opt(one_of("0123456789"), |digit| {
            digit.to_digit(10).map(|d| Token::Digit(d as u8))
        }),
    ))
    .parse(input)
}

/// Parses a whole key sequence into tokens.
///
/// Whitespace between tokens is ignored, so `"12.5*3="` and `"12.5 * 3 ="`
/// produce the same stream. The first character outside the alphabet stops
/// parsing and is reported with its 1-based column.
///
/// # Example
/// ```
/// use deskcalc::core::parser::parse_sequence;
///
/// let tokens = parse_sequence("12.5*3=")?;
/// assert_eq!(tokens.len(), 7);
/// # Ok::<(), deskcalc::core::parser::SequenceError>(())
/// ```
pub fn parse_sequence(line: &str) -> Result<Vec<Token>, SequenceError> {
    let mut tokens = Vec::new();
    let mut rest = line.trim_start();

    while !rest.is_empty() {
        match parse_token(rest) {
            Ok((remaining, token)) => {
                tokens.push(token);
                rest = remaining.trim_start();
            }
            Err(_) => {
                return Err(SequenceError::UnrecognisedInput {
                    fragment: rest.chars().next().unwrap_or(' '),
                    column: line.len() - rest.len() + 1,
                });
            }
        }
    }

    Ok(tokens)
}
