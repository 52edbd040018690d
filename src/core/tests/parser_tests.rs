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

//! Parser module tests
//!
//! Tests for turning typed key sequences into token streams:
//! - Single-token parsing and longest-match ordering (CE before C)
//! - Case-insensitive clear keys
//! - Whole-sequence parsing with interior whitespace
//! - Error reporting with column positions

use crate::core::{
    parser::*,
    types::{Operator, Token},
};

#[test]
fn test_parse_token_digits() {
    assert_eq!(parse_token("7"), Ok(("", Token::Digit(7))));
    assert_eq!(parse_token("42"), Ok(("2", Token::Digit(4))));
}

#[test]
fn test_parse_token_operators() {
    assert_eq!(parse_token("+"), Ok(("", Token::Op(Operator::Add))));
    assert_eq!(parse_token("-"), Ok(("", Token::Op(Operator::Subtract))));
    assert_eq!(parse_token("*"), Ok(("", Token::Op(Operator::Multiply))));
    assert_eq!(parse_token("/"), Ok(("", Token::Op(Operator::Divide))));
}

#[test]
fn test_parse_token_clear_entry_wins_over_clear() {
    assert_eq!(parse_token("CE"), Ok(("", Token::ClearEntry)));
    assert_eq!(parse_token("C5"), Ok(("5", Token::Clear)));
    assert_eq!(parse_token("CE5"), Ok(("5", Token::ClearEntry)));
}

#[test]
fn test_parse_token_is_case_insensitive() {
    assert_eq!(parse_token("c"), Ok(("", Token::Clear)));
    assert_eq!(parse_token("ce"), Ok(("", Token::ClearEntry)));
    assert_eq!(parse_token("cE"), Ok(("", Token::ClearEntry)));
}

#[test]
fn test_parse_token_rejects_unknown() {
    assert!(parse_token("x").is_err());
    assert!(parse_token("").is_err());
}

#[test]
fn test_parse_sequence_full_line() {
    let tokens = parse_sequence("12.5*3=").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Digit(1),
            Token::Digit(2),
            Token::Point,
            Token::Digit(5),
            Token::Op(Operator::Multiply),
            Token::Digit(3),
            Token::Equals,
        ]
    );
}

#[test]
fn test_parse_sequence_ignores_whitespace() {
    assert_eq!(parse_sequence("5 + 3 ="), parse_sequence("5+3="));
    assert_eq!(parse_sequence("  ").unwrap(), Vec::new());
}

#[test]
fn test_parse_sequence_empty() {
    assert_eq!(parse_sequence("").unwrap(), Vec::new());
}

#[test]
fn test_parse_sequence_reports_column() {
    assert_eq!(
        parse_sequence("5+x"),
        Err(SequenceError::UnrecognisedInput {
            fragment: 'x',
            column: 3,
        })
    );
}

#[test]
fn test_parse_sequence_column_counts_whitespace() {
    assert_eq!(
        parse_sequence("5 ?"),
        Err(SequenceError::UnrecognisedInput {
            fragment: '?',
            column: 3,
        })
    );
}
