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

//! Four-function arithmetic with explicit range checking
//!
//! The evaluator is a pure function from two `f64` operands and an operator
//! to a result. Overflow is checked *before* each operation runs, so the
//! evaluator reports `CalcError::Overflow` instead of silently producing an
//! infinity:
//! - addition/subtraction: the sum or difference would leave the finite range
//! - multiplication: `|a| > f64::MAX / |b|` for non-zero operands
//! - division: zero divisor, or a subnormal divisor that would push the
//!   quotient past the representable range
//!
//! The raw entry point `calculate` dispatches on an operator token string.
//! An unrecognised token falls through to the second operand unchanged; that
//! is long-standing observable behaviour and is kept as-is.

use crate::core::error::CalcError;
use crate::core::types::Operator;

/// Evaluates `a <op> b` for a raw operator token.
///
/// `op` is matched against the four operator keys. Any other token returns
/// the second operand unchanged.
///
/// # Example
/// ```
/// use deskcalc::core::{calculate, CalcError};
///
/// assert_eq!(calculate(5.0, 3.0, "+"), Ok(8.0));
/// assert_eq!(calculate(5.0, 0.0, "/"), Err(CalcError::DivisionByZero));
/// assert_eq!(calculate(5.0, 3.0, "#"), Ok(3.0));
/// ```
pub fn calculate(a: f64, b: f64, op: &str) -> Result<f64, CalcError> {
    match Operator::from_token(op) {
        Some(operator) => operator.apply(a, b),
        None => Ok(b),
    }
}

impl Operator {
    /// Applies this operator to two operands.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalcError> {
        match self {
            Operator::Add => add(a, b),
            Operator::Subtract => subtract(a, b),
            Operator::Multiply => multiply(a, b),
            Operator::Divide => divide(a, b),
        }
    }
}

fn add(a: f64, b: f64) -> Result<f64, CalcError> {
    if (a > 0.0 && b > f64::MAX - a) || (a < 0.0 && b < -f64::MAX - a) {
        return Err(CalcError::Overflow);
    }
    Ok(a + b)
}

fn subtract(a: f64, b: f64) -> Result<f64, CalcError> {
    if (b > 0.0 && a < -f64::MAX + b) || (b < 0.0 && a > f64::MAX + b) {
        return Err(CalcError::Overflow);
    }
    Ok(a - b)
}

fn multiply(a: f64, b: f64) -> Result<f64, CalcError> {
    if a != 0.0 && b != 0.0 && a.abs() > f64::MAX / b.abs() {
        return Err(CalcError::Overflow);
    }
    Ok(a * b)
}

/// A zero divisor is reported as such. A subnormal divisor with a non-zero
/// dividend would produce an unrepresentably large quotient and is reported
/// as overflow.
fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    if b.abs() < f64::MIN_POSITIVE && a != 0.0 {
        return Err(CalcError::Overflow);
    }
    Ok(a / b)
}
