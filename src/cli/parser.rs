//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Parser, Subcommand};

/// adder: arithmetic and greetings, bounded or not.
///
/// Runs each library operation from the command line. Bounded variants
/// are selected by passing a capacity.
#[derive(Parser, Debug)]
#[command(name = "adder")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true, env = "ADDER_FORMAT")]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add two integers.
    Add {
        /// Left operand.
        #[arg(allow_negative_numbers = true)]
        x: i32,

        /// Right operand.
        #[arg(allow_negative_numbers = true)]
        y: i32,

        /// Reject negative operands and overflow.
        #[arg(short, long)]
        bounded: bool,
    },

    /// Add the fields of a pair.
    Pair {
        /// First field.
        #[arg(allow_negative_numbers = true)]
        x: i32,

        /// Second field.
        #[arg(allow_negative_numbers = true)]
        y: i32,
    },

    /// Print the library version.
    Version {
        /// Write into a buffer of this many bytes (terminator included).
        #[arg(short, long, env = "ADDER_CAPACITY")]
        capacity: Option<usize>,
    },

    /// Greet someone.
    Greeting {
        /// Name to greet.
        name: String,

        /// Write into a buffer of this many bytes (terminator included).
        #[arg(short, long, env = "ADDER_CAPACITY")]
        capacity: Option<usize>,

        /// Only report the length the greeting needs.
        #[arg(short, long)]
        measure: bool,
    },
}
