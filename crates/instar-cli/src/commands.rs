// Rust guideline compliant 2026-02-06

//! Command implementations for the Instar CLI.
//!
//! Every command follows the same shape: declare its flags in a [`FlagSet`],
//! run one resolver over it, and print the resolved flag values.

pub mod instance;
pub mod instances;
pub mod relation;
pub mod service;

use crate::output::OutputFormatter;
use instar_core::FlagSet;
use tracing::info;

/// Prints the resolved flags of `command` with the given formatter.
pub(crate) fn print_resolution(command: &str, flags: &FlagSet, formatter: &dyn OutputFormatter) {
    info!(command, "resolution complete");
    println!("{}", formatter.format_flags(command, flags));
}
