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

//! Desktop Calculator
//!
//! A four-function desktop calculator: a keypad input state machine over a
//! pure arithmetic evaluator, with a terminal front-end.
//!
//! # Features
//!
//! - **Immediate evaluation:** one pending operator at a time, left-to-right
//!   chaining without precedence
//! - **Safe arithmetic:** overflow and division by zero are detected and
//!   reported, never propagated as infinities
//! - **Forgiving entry:** leading zeros dropped, duplicate decimal points
//!   ignored, display capped at 15 characters
//! - **Error recovery:** any key after an error performs an implicit clear
//!
//! # Architecture
//!
//! - **`core`:** evaluator, input state machine, token model, key-sequence
//!   parser
//! - **`ui`:** terminal presentation layer (interactive session)
//!
//! # Examples
//!
//! ## Driving the calculator one key at a time
//!
//! ```
//! use deskcalc::core::Calculator;
//!
//! let mut calc = Calculator::new();
//! for key in ["5", "+", "3", "="] {
//!     calc.process(key);
//! }
//! assert_eq!(calc.display(), "8");
//! ```
//!
//! ## Evaluating directly
//!
//! ```
//! use deskcalc::core::{calculate, CalcError};
//!
//! assert_eq!(calculate(6.0, 3.0, "/"), Ok(2.0));
//! assert_eq!(calculate(5.0, 0.0, "/"), Err(CalcError::DivisionByZero));
//! ```
//!
//! ## Running a whole key sequence
//!
//! ```
//! use deskcalc::core::{parser::parse_sequence, Calculator};
//!
//! let mut calc = Calculator::new();
//! let mut display = calc.display().to_string();
//! for token in parse_sequence("12.5 * 3 =")? {
//!     display = calc.press(token);
//! }
//! assert_eq!(display, "37.5");
//! # Ok::<(), deskcalc::core::parser::SequenceError>(())
//! ```

pub mod core;
pub mod ui;

// Re-export commonly used items for convenience
pub use core::{calculate, CalcError, Calculator, Operator, Token};
