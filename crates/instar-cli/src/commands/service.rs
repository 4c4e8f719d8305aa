// Rust guideline compliant 2026-02-06

//! Implementation of the `instar service` command.
//!
//! Converts between a service id and a service name.

use crate::args::ServiceArgs;
use crate::output::OutputFormatter;
use anyhow::Result;
use instar_core::{parse_service, Config, FlagSet};

/// Resolves the service flags and returns the completed flag set.
///
/// # Errors
///
/// Returns an error if the service flags are missing while required, or the
/// service id is malformed.
pub fn resolve(service: &ServiceArgs, required: bool, config: &Config) -> Result<FlagSet> {
    let mut flags = FlagSet::new();
    service.apply(&mut flags, config.default_normal);
    parse_service(&mut flags, required)?;
    Ok(flags)
}

/// Resolves and prints the service flags.
///
/// # Errors
///
/// Returns an error if resolution fails.
pub fn execute(
    service: &ServiceArgs,
    required: bool,
    config: &Config,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let flags = resolve(service, required, config)?;
    super::print_resolution("service", &flags, formatter);
    Ok(())
}
