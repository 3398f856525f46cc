//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::core::{Pair, Status};
use crate::error::{CommandError, Error};
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Parses format from string, rejecting unknown names.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidArgument`] for anything other than
    /// `text` or `json`.
    pub fn try_parse(s: &str) -> Result<Self, CommandError> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            other => Err(CommandError::InvalidArgument(format!(
                "unknown output format: {other}"
            ))),
        }
    }
}

/// Formats the result of `add`.
#[must_use]
pub fn format_sum(pair: Pair, sum: i32, bounded: bool, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{sum}\n"),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct SumOutput {
                x: i32,
                y: i32,
                sum: i32,
                bounded: bool,
            }
            format_json(&SumOutput {
                x: pair.x,
                y: pair.y,
                sum,
                bounded,
            })
        }
    }
}

/// Formats the result of `pair`.
#[must_use]
pub fn format_pair(pair: Pair, sum: i32, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("({}, {}) -> {sum}\n", pair.x, pair.y),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct PairOutput {
                pair: Pair,
                sum: i32,
            }
            format_json(&PairOutput { pair, sum })
        }
    }
}

/// Formats a produced string, with the capacity it was written into.
#[must_use]
pub fn format_text(value: &str, capacity: Option<usize>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{value}\n"),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct TextOutput<'a> {
                value: &'a str,
                len: usize,
                #[serde(skip_serializing_if = "Option::is_none")]
                capacity: Option<usize>,
            }
            format_json(&TextOutput {
                value,
                len: value.len(),
                capacity,
            })
        }
    }
}

/// Formats the result of a measuring call.
#[must_use]
pub fn format_measured(required: usize, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            let _ = writeln!(output, "{required} bytes (+1 terminator)");
            output
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct MeasuredOutput {
                required: usize,
                with_terminator: usize,
            }
            format_json(&MeasuredOutput {
                required,
                with_terminator: required + 1,
            })
        }
    }
}

/// Formats an error for display.
#[must_use]
pub fn format_error(err: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => err.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
                status: Status,
                code: i32,
            }
            let status = err.status();
            format_json(&ErrorOutput {
                error: err.to_string(),
                status,
                code: status.code(),
            })
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).map_or_else(|_| "{}".to_string(), |json| json + "\n")
}
