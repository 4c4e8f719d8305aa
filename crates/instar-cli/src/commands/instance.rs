// Rust guideline compliant 2026-02-06

//! Implementation of the `instar instance` command.
//!
//! Resolves the service first, then converts between an instance id and an
//! instance name under that service.

use crate::args::{InstanceArgs, ServiceArgs};
use crate::output::OutputFormatter;
use anyhow::Result;
use instar_core::{parse_instance, Config, FlagSet};

/// Resolves the service and instance flags and returns the completed flag set.
///
/// # Errors
///
/// Returns an error if:
/// - Required service or instance flags are missing
/// - A service or instance id is malformed
/// - An instance name is given without a service
pub fn resolve(
    service: &ServiceArgs,
    instance: &InstanceArgs,
    required: bool,
    config: &Config,
) -> Result<FlagSet> {
    let mut flags = FlagSet::new();
    service.apply(&mut flags, config.default_normal);
    instance.apply(&mut flags);
    parse_instance(&mut flags, required)?;
    Ok(flags)
}

/// Resolves and prints the service and instance flags.
///
/// # Errors
///
/// Returns an error if resolution fails.
pub fn execute(
    service: &ServiceArgs,
    instance: &InstanceArgs,
    required: bool,
    config: &Config,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let flags = resolve(service, instance, required, config)?;
    super::print_resolution("instance", &flags, formatter);
    Ok(())
}
