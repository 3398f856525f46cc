//! CLI command implementations.
//!
//! Each command calls one library operation and renders its result.

use crate::cli::output::{OutputFormat, format_measured, format_pair, format_sum, format_text};
use crate::cli::parser::{Cli, Commands};
use crate::core::{BoundedBuffer, Pair};
use crate::error::Result;
use crate::ops::{
    VERSION, Written, add, add_bounded, get_version, get_version_bounded, greeting,
    greeting_bounded, greeting_len, pair_add,
};

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the output format is unknown or a bounded call
/// fails.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::try_parse(&cli.format)?;
    tracing::debug!(command = ?cli.command, ?format, "executing command");

    match &cli.command {
        Commands::Add { x, y, bounded } => cmd_add(*x, *y, *bounded, format),
        Commands::Pair { x, y } => Ok(cmd_pair(Pair::new(*x, *y), format)),
        Commands::Version { capacity } => cmd_version(*capacity, format),
        Commands::Greeting {
            name,
            capacity,
            measure,
        } => cmd_greeting(name, *capacity, *measure, format),
    }
}

// ==================== Command Implementations ====================

fn cmd_add(x: i32, y: i32, bounded: bool, format: OutputFormat) -> Result<String> {
    let sum = if bounded { add_bounded(x, y)? } else { add(x, y) };
    Ok(format_sum(Pair::new(x, y), sum, bounded, format))
}

fn cmd_pair(pair: Pair, format: OutputFormat) -> String {
    format_pair(pair, pair_add(&pair), format)
}

fn cmd_version(capacity: Option<usize>, format: OutputFormat) -> Result<String> {
    let Some(capacity) = capacity else {
        return Ok(format_text(get_version(), None, format));
    };

    let mut storage = backing_storage(capacity, VERSION.len());
    let mut buf = BoundedBuffer::new(&mut storage);
    get_version_bounded(&mut buf)?;
    Ok(format_text(buf.as_str(), Some(capacity), format))
}

fn cmd_greeting(
    name: &str,
    capacity: Option<usize>,
    measure: bool,
    format: OutputFormat,
) -> Result<String> {
    if measure {
        let written = greeting_bounded(name, None)?;
        return Ok(format_measured(written.len(), format));
    }

    let Some(capacity) = capacity else {
        return Ok(format_text(&greeting(name), None, format));
    };

    let mut storage = backing_storage(capacity, greeting_len(name));
    let mut buf = BoundedBuffer::new(&mut storage);
    match greeting_bounded(name, Some(&mut buf))? {
        Written::Stored(_) => Ok(format_text(buf.as_str(), Some(capacity), format)),
        Written::Measured(required) => Ok(format_measured(required, format)),
    }
}

/// Allocates storage for a requested capacity.
///
/// Never more than `text_len + 1` bytes: any larger capacity behaves the
/// same, and the user-supplied value may be arbitrarily large.
fn backing_storage(capacity: usize, text_len: usize) -> Vec<u8> {
    vec![0u8; capacity.min(text_len.saturating_add(1))]
}
