// Rust guideline compliant 2026-02-06

//! Resolvers that complete id/name flag pairs in a [`FlagContext`].
//!
//! Each resolver reads the flags it owns, derives the missing half of every
//! pair through [`crate::codec`], and writes both halves back. The `parse_*`
//! functions are the entry points commands call; the lower-level
//! [`service_pair`], [`instance_pair`] and [`instance_list`] take explicit
//! flag groups.

use crate::codec::{resolve_instance, resolve_service};
use crate::flags::{Flag, FlagContext, InstanceFlags, InstanceListFlags, ServiceFlags};
use crate::{Error, Result};
use tracing::debug;

/// Separator of the list wire format.
pub const LIST_SEPARATOR: &str = ",";

/// Resolves the primary service id/name pair.
///
/// # Errors
///
/// Returns an error if the pair is required but absent, or malformed.
pub fn parse_service<C: FlagContext>(ctx: &mut C, required: bool) -> Result<()> {
    service_pair(ctx, required, &ServiceFlags::PRIMARY)
}

/// Resolves the primary and then the destination service pair.
///
/// # Errors
///
/// Returns the first error raised by either pair.
pub fn parse_service_relation<C: FlagContext>(ctx: &mut C, required: bool) -> Result<()> {
    service_pair(ctx, required, &ServiceFlags::PRIMARY)?;
    service_pair(ctx, required, &ServiceFlags::DESTINATION)
}

/// Resolves the service pair and then the primary instance pair.
///
/// # Errors
///
/// Returns the first error raised by either step.
pub fn parse_instance<C: FlagContext>(ctx: &mut C, required: bool) -> Result<()> {
    parse_service(ctx, required)?;
    instance_pair(ctx, required, &InstanceFlags::PRIMARY)
}

/// Resolves the service pair and then the instance id/name lists.
///
/// # Errors
///
/// Returns the first error raised by either step.
pub fn parse_instance_list<C: FlagContext>(ctx: &mut C, required: bool) -> Result<()> {
    parse_service(ctx, required)?;
    instance_list(ctx, required, &InstanceListFlags::PRIMARY)
}

/// Resolves a source and destination instance together.
///
/// Runs, in order: the service pair, the primary instance pair, the
/// destination service pair, the destination instance pair. The first failure
/// is returned as is; flags written by earlier steps keep their resolved
/// values.
///
/// # Errors
///
/// Returns the first error raised by any step.
pub fn parse_instance_relation<C: FlagContext>(ctx: &mut C, required: bool) -> Result<()> {
    parse_instance(ctx, required)?;
    service_pair(ctx, required, &ServiceFlags::DESTINATION)?;
    instance_pair(ctx, required, &InstanceFlags::DESTINATION)
}

/// Completes one service id/name pair and its layer flag.
///
/// Each group carries its own layer flag, so a decoded source id never
/// changes the layer a destination name is encoded with.
///
/// # Errors
///
/// Returns an error if:
/// - Both flags are empty and `required` is set
/// - The service id is malformed
/// - The context rejects a resolved value
pub fn service_pair<C: FlagContext>(
    ctx: &mut C,
    required: bool,
    flags: &ServiceFlags,
) -> Result<()> {
    let id = ctx.get_string(flags.id);
    let name = ctx.get_string(flags.name);
    let normal = ctx.get_bool(flags.normal, true);

    if id.is_empty() && name.is_empty() {
        return require(required, flags.id, flags.name);
    }

    let pair = resolve_service(&name, &id, normal)?;
    debug!(id_flag = %flags.id, id = %pair.id, name = %pair.name, "resolved service");

    ctx.set_string(flags.id, &pair.id)?;
    ctx.set_string(flags.name, &pair.name)?;
    ctx.set_string(flags.normal, if pair.normal { "true" } else { "false" })
}

/// Completes one instance id/name pair.
///
/// Both flags empty is a no-op unless `required` is set. Otherwise the id (or
/// the name, encoded under the service id flag's value) is resolved and both
/// flags are overwritten.
///
/// # Errors
///
/// Returns an error if:
/// - Both flags are empty and `required` is set
/// - The instance id is malformed
/// - Only a name is given and the service id flag is empty
/// - The context rejects a resolved value
pub fn instance_pair<C: FlagContext>(
    ctx: &mut C,
    required: bool,
    flags: &InstanceFlags,
) -> Result<()> {
    let id = ctx.get_string(flags.id);
    let name = ctx.get_string(flags.name);
    let service_id = ctx.get_string(flags.service_id);

    if id.is_empty() && name.is_empty() {
        return require(required, flags.id, flags.name);
    }

    let pair = resolve_instance(&service_id, &name, &id, flags.name.name())?;
    debug!(id_flag = %flags.id, id = %pair.id, name = %pair.name, "resolved instance");

    ctx.set_string(flags.id, &pair.id)?;
    ctx.set_string(flags.name, &pair.name)
}

/// Completes a pair of comma-delimited instance id and name lists.
///
/// Entries are aligned by position. When the id list is non-empty its length
/// sets the number of entries, so trailing names beyond it are dropped;
/// otherwise the name list's length does. Nothing is written unless every
/// entry resolves.
///
/// # Errors
///
/// Returns an error if:
/// - Both lists are empty and `required` is set
/// - Any entry fails to resolve
/// - The context rejects a resolved value
pub fn instance_list<C: FlagContext>(
    ctx: &mut C,
    required: bool,
    flags: &InstanceListFlags,
) -> Result<()> {
    let ids_arg = ctx.get_string(flags.ids);
    let names_arg = ctx.get_string(flags.names);
    let service_id = ctx.get_string(flags.service_id);

    if ids_arg.is_empty() && names_arg.is_empty() {
        return require(required, flags.ids, flags.names);
    }

    let ids: Vec<&str> = ids_arg.split(LIST_SEPARATOR).collect();
    let names: Vec<&str> = names_arg.split(LIST_SEPARATOR).collect();
    let len = if ids_arg.is_empty() {
        names.len()
    } else {
        ids.len()
    };

    let mut resolved_ids = Vec::with_capacity(len);
    let mut resolved_names = Vec::with_capacity(len);
    for i in 0..len {
        let id = ids.get(i).copied().unwrap_or_default();
        let name = names.get(i).copied().unwrap_or_default();
        let pair = resolve_instance(&service_id, name, id, flags.names.name())?;
        resolved_ids.push(pair.id);
        resolved_names.push(pair.name);
    }

    let ids_out = resolved_ids.join(LIST_SEPARATOR);
    let names_out = resolved_names.join(LIST_SEPARATOR);
    debug!(
        ids_flag = %flags.ids,
        count = len,
        ids = %ids_out,
        names = %names_out,
        "resolved instance list"
    );

    ctx.set_string(flags.ids, &ids_out)?;
    ctx.set_string(flags.names, &names_out)
}

fn require(required: bool, id_flag: Flag, name_flag: Flag) -> Result<()> {
    if required {
        return Err(Error::missing_flag(id_flag.name(), name_flag.name()));
    }
    Ok(())
}
