// Rust guideline compliant 2026-02-06

//! Flag groups shared by the resolver subcommands.
//!
//! Each group declares its flags in a [`FlagSet`] and seeds them with the
//! values given on the command line, so resolvers see every flag they may
//! write back.

use clap::Args;
use instar_core::{Flag, FlagSet};

fn seed(flags: &mut FlagSet, flag: Flag, value: Option<&str>) {
    match value {
        Some(value) => flags.insert(flag, value),
        None => flags.declare(flag),
    };
}

/// Service id/name flags.
#[derive(Debug, Clone, Default, Args)]
pub struct ServiceArgs {
    /// Service id (`<base64 name>.<layer>`)
    #[arg(long)]
    pub service_id: Option<String>,

    /// Service name
    #[arg(long)]
    pub service_name: Option<String>,

    /// Whether the service is a normal service [default from config]
    #[arg(long)]
    pub is_normal: Option<bool>,
}

impl ServiceArgs {
    /// Declares the service flags, falling back to `default_normal` for the layer.
    pub fn apply(&self, flags: &mut FlagSet, default_normal: bool) {
        seed(flags, Flag::ServiceId, self.service_id.as_deref());
        seed(flags, Flag::ServiceName, self.service_name.as_deref());
        flags.insert(
            Flag::IsNormal,
            self.is_normal.unwrap_or(default_normal).to_string(),
        );
    }
}

/// Destination service id/name flags.
#[derive(Debug, Clone, Default, Args)]
pub struct DestServiceArgs {
    /// Destination service id
    #[arg(long)]
    pub dest_service_id: Option<String>,

    /// Destination service name
    #[arg(long)]
    pub dest_service_name: Option<String>,

    /// Whether the destination service is a normal service [default from config]
    #[arg(long)]
    pub dest_is_normal: Option<bool>,
}

impl DestServiceArgs {
    /// Declares the destination service flags, falling back to `default_normal`
    /// for the layer.
    pub fn apply(&self, flags: &mut FlagSet, default_normal: bool) {
        seed(flags, Flag::DestServiceId, self.dest_service_id.as_deref());
        seed(
            flags,
            Flag::DestServiceName,
            self.dest_service_name.as_deref(),
        );
        flags.insert(
            Flag::DestIsNormal,
            self.dest_is_normal.unwrap_or(default_normal).to_string(),
        );
    }
}

/// Instance id/name flags.
#[derive(Debug, Clone, Default, Args)]
pub struct InstanceArgs {
    /// Instance id (`<service id>_<base64 name>`)
    #[arg(long)]
    pub instance_id: Option<String>,

    /// Instance name
    #[arg(long)]
    pub instance_name: Option<String>,
}

impl InstanceArgs {
    /// Declares the instance flags.
    pub fn apply(&self, flags: &mut FlagSet) {
        seed(flags, Flag::InstanceId, self.instance_id.as_deref());
        seed(flags, Flag::InstanceName, self.instance_name.as_deref());
    }
}

/// Destination instance id/name flags.
#[derive(Debug, Clone, Default, Args)]
pub struct DestInstanceArgs {
    /// Destination instance id
    #[arg(long)]
    pub dest_instance_id: Option<String>,

    /// Destination instance name
    #[arg(long)]
    pub dest_instance_name: Option<String>,
}

impl DestInstanceArgs {
    /// Declares the destination instance flags.
    pub fn apply(&self, flags: &mut FlagSet) {
        seed(
            flags,
            Flag::DestInstanceId,
            self.dest_instance_id.as_deref(),
        );
        seed(
            flags,
            Flag::DestInstanceName,
            self.dest_instance_name.as_deref(),
        );
    }
}

/// Comma-delimited instance id/name list flags.
#[derive(Debug, Clone, Default, Args)]
pub struct InstanceListArgs {
    /// Comma-separated instance ids
    #[arg(long)]
    pub instance_id_list: Option<String>,

    /// Comma-separated instance names
    #[arg(long)]
    pub instance_name_list: Option<String>,
}

impl InstanceListArgs {
    /// Declares the instance list flags.
    pub fn apply(&self, flags: &mut FlagSet) {
        seed(
            flags,
            Flag::InstanceIdList,
            self.instance_id_list.as_deref(),
        );
        seed(
            flags,
            Flag::InstanceNameList,
            self.instance_name_list.as_deref(),
        );
    }
}
