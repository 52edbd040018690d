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

//! src/core/mod.rs
//!
//! Core calculator logic
//!
//! This module contains the calculator itself, isolated from any I/O:
//! - Typed token alphabet for keypad input
//! - Four-function arithmetic evaluator with range checking
//! - The input state machine turning key presses into display strings
//! - A key-sequence parser for line-oriented front-ends
//!
//! All business logic is isolated from UI concerns so the whole behaviour
//! is unit-testable without a terminal.

pub mod arithmetic;
pub mod calculator;
pub mod error;
pub mod parser;
pub mod types;

pub use arithmetic::calculate;
pub use calculator::{format_display, Calculator};
pub use error::CalcError;
pub use types::{Operator, Token};

#[cfg(test)]
mod tests;
