//! CLI entry point for deskcalc
//!
//! Provides the interactive session, one-shot evaluation of a key
//! sequence, and a reference of the accepted keys.

use clap::{Parser, Subcommand};
use colored::Colorize;
use deskcalc::core::parser::parse_sequence;
use deskcalc::core::Calculator;
use deskcalc::ui::Repl;

#[derive(Parser)]
#[command(name = "deskcalc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive calculator session
    Repl,

    /// Evaluate a key sequence and print the final display
    Eval {
        /// Key sequence, e.g. "12.5*3="
        sequence: String,

        /// Print the display after every key press
        #[arg(short, long)]
        trace: bool,
    },

    /// Show the accepted keys and their keyboard aliases
    Keys,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Eval { sequence, trace }) => eval_sequence(&sequence, trace)?,
        Some(Commands::Keys) => print_keys(),
        Some(Commands::Repl) | None => Repl::new().run()?,
    }

    Ok(())
}

/// Runs a whole key sequence through a fresh calculator.
fn eval_sequence(sequence: &str, trace: bool) -> anyhow::Result<()> {
    let tokens = parse_sequence(sequence)?;

    let mut calculator = Calculator::new();
    let mut display = calculator.display().to_string();

    for token in tokens {
        display = calculator.press(token);
        if trace {
            println!("{} {}", format!("{:>2}", token.to_string()).cyan(), display);
        }
    }

    println!("{}", display.bold());
    Ok(())
}

/// Prints the key reference.
fn print_keys() {
    println!("{}", "Keys".bold());
    println!("  {}  digits", "0-9".cyan());
    println!("  {}    decimal point", ".".cyan());
    println!("  {} operators, no precedence, resolved left to right", "+-*/".cyan());
    println!("  {}    resolve the pending operation", "=".cyan());
    println!("  {}    clear everything", "C".cyan());
    println!("  {}   clear the current entry only", "CE".cyan());
    println!();
    println!("{}", "Keyboard aliases".bold());
    println!("  {}      =", "Enter".cyan());
    println!("  {}     C", "Escape".cyan());
    println!("  {}  CE", "Backspace".cyan());
}
