//! Keypad input state machine
//!
//! `Calculator` owns the whole interaction state of one session: the display
//! buffer being typed, the pending operator, the stored left-hand operand,
//! and the mode flags. It consumes one token at a time and returns the new
//! display string after every key.
//!
//! # Contract
//! `process` is total: it always returns a display string and never panics.
//! Evaluator failures (overflow, division by zero) surface as the literal
//! display `"Error"` plus an internal error flag; the next key press then
//! performs an implicit full clear before it is handled.

use crate::core::error::CalcError;
use crate::core::types::{Operator, Token};

/// Maximum number of characters the display buffer may hold.
const MAX_BUFFER_LEN: usize = 15;

/// Largest magnitude a result may have and still be rendered.
const MAX_DISPLAY_MAGNITUDE: f64 = 1e15;

/// Display text shown for any evaluator or parse failure.
const ERROR_DISPLAY: &str = "Error";

/// Input state machine for one calculator session.
///
/// A session starts at `"0"` and runs for the lifetime of the instance;
/// there is no terminal state. `C` returns the machine to its initial
/// state, `CE` discards only the number currently being typed.
#[derive(Clone, Debug)]
pub struct Calculator {
    /// The numeral being typed or shown. Holds at most one decimal point
    /// and at most `MAX_BUFFER_LEN` characters.
    buffer: String,
    /// Operator awaiting its second operand.
    pending_op: Option<Operator>,
    /// Left-hand operand, or the running result while chaining.
    first_operand: f64,
    /// The next digit starts a fresh buffer instead of appending.
    start_new_input: bool,
    /// The buffer currently shows a just-computed result.
    has_result: bool,
    /// The buffer shows "Error"; the next key implies a full clear.
    error_state: bool,
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            buffer: String::from("0"),
            pending_op: None,
            first_operand: 0.0,
            start_new_input: true,
            has_result: false,
            error_state: false,
        }
    }

    /// Current display content.
    pub fn display(&self) -> &str {
        &self.buffer
    }

    /// Processes one raw input token and returns the new display string.
    ///
    /// Tokens outside the keypad alphabet leave the display unchanged.
    /// While the error flag is set, any token, recognised or not, first
    /// performs a full clear and is then handled normally.
    pub fn process(&mut self, input: &str) -> String {
        if self.error_state {
            self.clear_all();
        }
        match Token::parse(input) {
            Some(token) => self.dispatch(token),
            None => self.buffer.clone(),
        }
    }

    /// Processes one typed token. Same contract as [`process`](Self::process).
    pub fn press(&mut self, token: Token) -> String {
        if self.error_state {
            self.clear_all();
        }
        self.dispatch(token)
    }

    fn dispatch(&mut self, token: Token) -> String {
        match token {
            Token::Digit(digit) => match char::from_digit(u32::from(digit), 10) {
                Some(key) => self.enter_numeric(key),
                None => self.buffer.clone(),
            },
            Token::Point => self.enter_numeric('.'),
            Token::Op(op) => self.enter_operator(op),
            Token::Equals => self.resolve(),
            Token::Clear => self.clear_all(),
            Token::ClearEntry => self.clear_entry(),
        }
    }

    /// Digit and decimal-point entry.
    fn enter_numeric(&mut self, key: char) -> String {
        // A fresh number starts after an operator or a computed result.
        if self.start_new_input || self.has_result {
            self.buffer.clear();
            self.start_new_input = false;
            self.has_result = false;
        }

        // Only one decimal point per number.
        if key == '.' && self.buffer.contains('.') {
            return self.buffer.clone();
        }

        if key == '.' && self.buffer.is_empty() {
            self.buffer.push_str("0.");
        } else {
            // No leading zeros.
            if self.buffer == "0" && key != '.' {
                self.buffer.clear();
            }
            self.buffer.push(key);
        }

        // Cap the display length.
        if self.buffer.len() > MAX_BUFFER_LEN {
            self.buffer.pop();
        }

        self.buffer.clone()
    }

    /// Operator entry. A pending operation whose second operand has been
    /// typed is resolved first, which gives left-to-right chaining without
    /// precedence.
    fn enter_operator(&mut self, op: Operator) -> String {
        if self.pending_op.is_some() && !self.start_new_input {
            self.resolve();
            if self.error_state {
                return self.buffer.clone();
            }
        }

        match self.parse_buffer() {
            Ok(value) => self.first_operand = value,
            Err(_) => return self.fail(),
        }

        self.pending_op = Some(op);
        self.start_new_input = true;
        self.has_result = false;
        self.buffer.clone()
    }

    /// Resolves the pending operation, as if `=` were pressed.
    ///
    /// Without a pending operator, or before any second operand has been
    /// typed, this is a no-op. On success the result becomes the new
    /// left-hand operand so that chaining can continue from it.
    fn resolve(&mut self) -> String {
        let op = match self.pending_op {
            Some(op) if !self.start_new_input => op,
            _ => return self.buffer.clone(),
        };

        let second_operand = match self.parse_buffer() {
            Ok(value) => value,
            Err(_) => return self.fail(),
        };

        let outcome = op
            .apply(self.first_operand, second_operand)
            .and_then(|result| format_display(result).map(|text| (result, text)));

        match outcome {
            Ok((result, text)) => {
                self.buffer = text;
                self.first_operand = result;
                self.pending_op = None;
                self.start_new_input = true;
                self.has_result = true;
                self.buffer.clone()
            }
            Err(_) => self.fail(),
        }
    }

    /// Full reset (`C`).
    fn clear_all(&mut self) -> String {
        self.buffer = String::from("0");
        self.pending_op = None;
        self.first_operand = 0.0;
        self.start_new_input = true;
        self.has_result = false;
        self.error_state = false;
        self.buffer.clone()
    }

    /// Entry-only reset (`CE`): discards the number being typed but keeps
    /// the pending operator and stored operand. Between an operator and the
    /// next operand there is nothing to discard, so it is a no-op.
    fn clear_entry(&mut self) -> String {
        if !self.start_new_input {
            self.buffer = String::from("0");
        }
        self.buffer.clone()
    }

    fn parse_buffer(&self) -> Result<f64, CalcError> {
        self.buffer
            .parse::<f64>()
            .map_err(|_| CalcError::ParseFailure(self.buffer.clone()))
    }

    /// Drops into the error state: the display shows "Error" until the next
    /// key press triggers the implicit full clear.
    fn fail(&mut self) -> String {
        self.buffer = ERROR_DISPLAY.to_string();
        self.pending_op = None;
        self.start_new_input = true;
        self.error_state = true;
        self.buffer.clone()
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a computed result for the display.
///
/// Results that are not finite, or whose magnitude exceeds `1e15`, do not
/// fit the display and are reported as overflow. Integral results render
/// without a decimal point; fractional results get up to ten fractional
/// digits with trailing zeros removed.
pub fn format_display(value: f64) -> Result<String, CalcError> {
    if !value.is_finite() || value.abs() > MAX_DISPLAY_MAGNITUDE {
        return Err(CalcError::Overflow);
    }

    if value.fract() == 0.0 {
        // Magnitude is at most 1e15 here, so the cast is lossless.
        return Ok(format!("{}", value as i64));
    }

    let rendered = format!("{:.10}", value);
    Ok(rendered.trim_end_matches('0').trim_end_matches('.').to_string())
}
