//! Interactive terminal session
//!
//! Reads key sequences line by line from stdin, feeds each token to the
//! calculator, and prompts with the resulting display. An empty line acts
//! as the Enter key (`=`); `quit` leaves the session.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::core::parser::parse_sequence;
use crate::core::Calculator;

/// Interactive calculator session over stdin/stdout.
pub struct Repl {
    calculator: Calculator,
}

impl Repl {
    pub fn new() -> Self {
        Self {
            calculator: Calculator::new(),
        }
    }

    /// Runs the session until EOF or a quit command.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        println!(
            "{}",
            "Keys: 0-9 . + - * / = C CE. Empty line presses =, 'quit' leaves.".dimmed()
        );

        let mut line = String::new();
        loop {
            write!(stdout, "{} {} ", self.display().bold().green(), "›".dimmed())?;
            stdout.flush()?;

            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                writeln!(stdout)?;
                break;
            }

            let keys = line.trim();
            if matches!(keys, "quit" | "exit" | "q") {
                break;
            }

            // Bare Enter resolves the pending operation, like the = key.
            if keys.is_empty() {
                self.calculator.process("=");
                continue;
            }

            match parse_sequence(keys) {
                Ok(tokens) => {
                    for token in tokens {
                        self.calculator.press(token);
                    }
                }
                Err(e) => eprintln!("{} {}", "✗".red().bold(), e),
            }
        }

        Ok(())
    }

    /// Display string for the prompt, with the empty-buffer fallback.
    fn display(&self) -> &str {
        let display = self.calculator.display();
        if display.is_empty() {
            "0"
        } else {
            display
        }
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}
