//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Input state machine scenarios
//! - Key-sequence parser tests
//! - Arithmetic evaluator boundary tests

#[cfg(test)]
mod parser_tests;
