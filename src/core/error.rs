use thiserror::Error;

/// Errors raised by the arithmetic evaluator and caught by the input state
/// machine. None of these ever cross the presentation boundary: the state
/// machine converts every one of them into the literal display `"Error"`.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CalcError {
    /// Division with a zero divisor.
    #[error("Division by zero")]
    DivisionByZero,
    /// Result outside the representable or displayable range.
    #[error("Overflow error")]
    Overflow,
    /// Display buffer did not parse as a number. Normal key flow cannot
    /// produce this; it is handled defensively.
    #[error("Cannot parse '{0}' as a number")]
    ParseFailure(String),
}
