// Rust guideline compliant 2026-02-06

//! Output formatting module for the Instar CLI.
//!
//! This module formats resolved flag values and errors in the supported
//! output formats (JSON, table, plain text).

use instar_core::{ErrorKind, FlagSet, OutputFormat};
use serde_json::{json, Map, Value};
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Output formatter trait.
///
/// Defines the interface for formatting resolution results in different
/// output formats.
pub trait OutputFormatter {
    /// Formats the resolved flags of one command.
    ///
    /// # Arguments
    /// * `command` - Name of the command that produced the flags
    /// * `flags` - The resolved flags
    fn format_flags(&self, command: &str, flags: &FlagSet) -> String;

    /// Formats an error for display.
    fn format_error(&self, error: &anyhow::Error) -> String;
}

/// Returns the stable kind of an error raised by the core library, if any.
pub fn error_kind(error: &anyhow::Error) -> Option<ErrorKind> {
    error
        .downcast_ref::<instar_core::Error>()
        .map(instar_core::Error::kind)
}

/// JSON output formatter.
///
/// Formats results as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_flags(&self, command: &str, flags: &FlagSet) -> String {
        let values: Map<String, Value> = flags
            .iter()
            .map(|(flag, value)| (flag.name().to_string(), Value::from(value)))
            .collect();
        let output = json!({
            "command": command,
            "flags": values,
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize flags" }).to_string())
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        json!({
            "error": format!("{error:#}"),
            "kind": error_kind(error),
        })
        .to_string()
    }
}

/// Table output formatter.
///
/// Formats results as human-readable tables.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_flags(&self, _command: &str, flags: &FlagSet) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Flag", "Value"]);

        for (flag, value) in flags.iter() {
            builder.push_record(vec![format!("--{flag}"), value.to_string()]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        if !self.use_color {
            return format!("Error: {error:#}");
        }

        let mut buffer = Buffer::ansi();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
        let _ = write!(buffer, "Error:");
        let _ = buffer.reset();
        let _ = write!(buffer, " {error:#}");
        String::from_utf8_lossy(buffer.as_slice()).to_string()
    }
}

/// Plain text output formatter.
///
/// Formats results as `name=value` lines without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_flags(&self, _command: &str, flags: &FlagSet) -> String {
        flags
            .iter()
            .map(|(flag, value)| format!("{flag}={value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!("Error: {error:#}")
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
/// * `use_color` - Whether to use colored output (ignored for JSON and plain)
pub fn create_formatter(format: OutputFormat, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter::new(use_color)),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
