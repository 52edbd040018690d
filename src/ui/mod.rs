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

//! Terminal user interface
//!
//! # Architecture
//!
//! The calculator core knows nothing about terminals; this module is the
//! presentation layer. It feeds raw key tokens into a `Calculator` and
//! shows whatever display string comes back, verbatim (an empty string is
//! defensively shown as "0").
//!
//! # Module Structure
//!
//! ```text
//! ui/
//! ├── mod.rs   // This file - exports
//! └── repl.rs  // Interactive stdin/stdout session
//! ```

pub mod repl;

pub use repl::Repl;
