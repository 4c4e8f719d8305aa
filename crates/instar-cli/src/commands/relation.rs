// Rust guideline compliant 2026-02-06

//! Implementation of the `instar relation` command.
//!
//! Resolves a source and a destination instance, each under its own service.

use crate::args::{DestInstanceArgs, DestServiceArgs, InstanceArgs, ServiceArgs};
use crate::output::OutputFormatter;
use anyhow::Result;
use instar_core::{parse_instance_relation, Config, FlagSet};

/// Flags of both ends of a relation.
#[derive(Debug, Clone, Default)]
pub struct RelationArgs {
    /// Source service.
    pub service: ServiceArgs,
    /// Destination service.
    pub dest_service: DestServiceArgs,
    /// Source instance.
    pub instance: InstanceArgs,
    /// Destination instance.
    pub dest_instance: DestInstanceArgs,
}

/// Resolves both services and both instances of a relation.
///
/// # Errors
///
/// Returns the first error raised while resolving the source service, the
/// source instance, the destination service or the destination instance.
pub fn resolve(args: &RelationArgs, required: bool, config: &Config) -> Result<FlagSet> {
    let mut flags = FlagSet::new();
    args.service.apply(&mut flags, config.default_normal);
    args.dest_service.apply(&mut flags, config.default_normal);
    args.instance.apply(&mut flags);
    args.dest_instance.apply(&mut flags);
    parse_instance_relation(&mut flags, required)?;
    Ok(flags)
}

/// Resolves and prints the relation flags.
///
/// # Errors
///
/// Returns an error if resolution fails.
pub fn execute(
    args: &RelationArgs,
    required: bool,
    config: &Config,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let flags = resolve(args, required, config)?;
    super::print_resolution("relation", &flags, formatter);
    Ok(())
}
