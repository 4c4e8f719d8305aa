// Rust guideline compliant 2026-02-06

//! Implementation of the `instar instances` command.

use crate::args::{InstanceListArgs, ServiceArgs};
use crate::output::OutputFormatter;
use anyhow::Result;
use instar_core::{parse_instance_list, Config, FlagSet};

/// Resolves the service and instance list flags.
///
/// # Errors
///
/// Returns an error if any list entry or the service fails to resolve.
pub fn resolve(
    service: &ServiceArgs,
    list: &InstanceListArgs,
    required: bool,
    config: &Config,
) -> Result<FlagSet> {
    let mut flags = FlagSet::new();
    service.apply(&mut flags, config.default_normal);
    list.apply(&mut flags);
    parse_instance_list(&mut flags, required)?;
    Ok(flags)
}

/// Resolves and prints the service and instance list flags.
///
/// # Errors
///
/// Returns an error if resolution fails.
pub fn execute(
    service: &ServiceArgs,
    list: &InstanceListArgs,
    required: bool,
    config: &Config,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let flags = resolve(service, list, required, config)?;
    super::print_resolution("instances", &flags, formatter);
    Ok(())
}
