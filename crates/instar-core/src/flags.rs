// Rust guideline compliant 2026-02-06

//! Flag names and the flag context resolvers read from and write into.
//!
//! Every flag a resolver touches is named through [`Flag`], so the CLI that
//! declares the flags and the resolvers that rewrite them agree on the
//! spelling. [`FlagContext`] is the narrow read/write capability resolvers
//! need; [`FlagSet`] is the in-memory store the CLI builds from parsed
//! arguments.

use crate::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;

/// Name of the instance id list flag, shared with commands that declare it.
pub const INSTANCE_ID_LIST_FLAG: &str = Flag::InstanceIdList.name();

/// A logical flag role and its command-line name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Flag {
    /// `service-id`
    ServiceId,
    /// `service-name`
    ServiceName,
    /// `dest-service-id`
    DestServiceId,
    /// `dest-service-name`
    DestServiceName,
    /// `is-normal`
    IsNormal,
    /// `dest-is-normal`
    DestIsNormal,
    /// `instance-id`
    InstanceId,
    /// `instance-name`
    InstanceName,
    /// `dest-instance-id`
    DestInstanceId,
    /// `dest-instance-name`
    DestInstanceName,
    /// `instance-id-list`
    InstanceIdList,
    /// `instance-name-list`
    InstanceNameList,
}

impl Flag {
    /// All flag roles, in declaration order.
    pub const ALL: [Flag; 12] = [
        Flag::ServiceId,
        Flag::ServiceName,
        Flag::DestServiceId,
        Flag::DestServiceName,
        Flag::IsNormal,
        Flag::DestIsNormal,
        Flag::InstanceId,
        Flag::InstanceName,
        Flag::DestInstanceId,
        Flag::DestInstanceName,
        Flag::InstanceIdList,
        Flag::InstanceNameList,
    ];

    /// Returns the command-line name of the flag, without leading dashes.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Flag::ServiceId => "service-id",
            Flag::ServiceName => "service-name",
            Flag::DestServiceId => "dest-service-id",
            Flag::DestServiceName => "dest-service-name",
            Flag::IsNormal => "is-normal",
            Flag::DestIsNormal => "dest-is-normal",
            Flag::InstanceId => "instance-id",
            Flag::InstanceName => "instance-name",
            Flag::DestInstanceId => "dest-instance-id",
            Flag::DestInstanceName => "dest-instance-name",
            Flag::InstanceIdList => "instance-id-list",
            Flag::InstanceNameList => "instance-name-list",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Flags making up one service id/name pair and its layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceFlags {
    /// Flag holding the service identifier.
    pub id: Flag,
    /// Flag holding the service name.
    pub name: Flag,
    /// Flag holding whether the service is a normal service.
    pub normal: Flag,
}

impl ServiceFlags {
    /// The primary service.
    pub const PRIMARY: Self = Self {
        id: Flag::ServiceId,
        name: Flag::ServiceName,
        normal: Flag::IsNormal,
    };

    /// The destination service of a relation.
    pub const DESTINATION: Self = Self {
        id: Flag::DestServiceId,
        name: Flag::DestServiceName,
        normal: Flag::DestIsNormal,
    };
}

/// Flags making up one instance id/name pair and the service it depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceFlags {
    /// Flag holding the instance identifier.
    pub id: Flag,
    /// Flag holding the instance name.
    pub name: Flag,
    /// Flag holding the owning service identifier.
    pub service_id: Flag,
}

impl InstanceFlags {
    /// The primary instance.
    pub const PRIMARY: Self = Self {
        id: Flag::InstanceId,
        name: Flag::InstanceName,
        service_id: Flag::ServiceId,
    };

    /// The destination instance of a relation.
    pub const DESTINATION: Self = Self {
        id: Flag::DestInstanceId,
        name: Flag::DestInstanceName,
        service_id: Flag::DestServiceId,
    };
}

/// Flags making up a comma-delimited instance id/name list pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceListFlags {
    /// Flag holding the comma-joined instance identifiers.
    pub ids: Flag,
    /// Flag holding the comma-joined instance names.
    pub names: Flag,
    /// Flag holding the owning service identifier.
    pub service_id: Flag,
}

impl InstanceListFlags {
    /// The instance list flags of the primary service.
    pub const PRIMARY: Self = Self {
        ids: Flag::InstanceIdList,
        names: Flag::InstanceNameList,
        service_id: Flag::ServiceId,
    };
}

/// Read/write access to flag values for the duration of one command.
pub trait FlagContext {
    /// Returns the current string value of a flag; unset flags read as empty.
    fn get_string(&self, flag: Flag) -> String;

    /// Overwrites the string value of a flag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] if the context does not accept the value.
    fn set_string(&mut self, flag: Flag, value: &str) -> Result<()>;

    /// Reads a flag as a boolean.
    ///
    /// An empty value yields `default`; `true` and `1` are true and anything
    /// else is false.
    fn get_bool(&self, flag: Flag, default: bool) -> bool {
        match self.get_string(flag).as_str() {
            "" => default,
            "true" | "1" => true,
            _ => false,
        }
    }
}

/// In-memory flag store.
///
/// Only declared flags can be written. Reading an undeclared flag yields an
/// empty string, the same as a declared flag that was never given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSet {
    values: BTreeMap<Flag, String>,
}

impl FlagSet {
    /// Creates a store with no declared flags.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store declaring `flags`, all initially empty.
    #[must_use]
    pub fn with_flags(flags: &[Flag]) -> Self {
        let mut set = Self::new();
        for flag in flags {
            set.declare(*flag);
        }
        set
    }

    /// Declares a flag with an empty value, keeping any existing value.
    pub fn declare(&mut self, flag: Flag) -> &mut Self {
        self.values.entry(flag).or_default();
        self
    }

    /// Declares a flag and sets its initial value.
    pub fn insert(&mut self, flag: Flag, value: impl Into<String>) -> &mut Self {
        self.values.insert(flag, value.into());
        self
    }

    /// Iterates over declared flags and their values in flag-table order.
    pub fn iter(&self) -> impl Iterator<Item = (Flag, &str)> {
        self.values
            .iter()
            .map(|(flag, value)| (*flag, value.as_str()))
    }
}

impl FlagContext for FlagSet {
    fn get_string(&self, flag: Flag) -> String {
        self.values.get(&flag).cloned().unwrap_or_default()
    }

    fn set_string(&mut self, flag: Flag, value: &str) -> Result<()> {
        match self.values.get_mut(&flag) {
            Some(slot) => {
                value.clone_into(slot);
                Ok(())
            }
            None => Err(Error::Write {
                flag: flag.name().to_string(),
                reason: "no such flag".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_names_are_unique() {
        let mut names: Vec<&str> = Flag::ALL.iter().map(|flag| flag.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Flag::ALL.len());
    }

    #[test]
    fn test_service_groups_use_distinct_layer_flags() {
        assert_ne!(
            ServiceFlags::PRIMARY.normal,
            ServiceFlags::DESTINATION.normal
        );
        assert_eq!(ServiceFlags::DESTINATION.normal.name(), "dest-is-normal");
    }

    #[test]
    fn test_instance_id_list_constant() {
        assert_eq!(INSTANCE_ID_LIST_FLAG, "instance-id-list");
    }

    #[test]
    fn test_unset_flag_reads_empty() {
        let set = FlagSet::new();
        assert_eq!(set.get_string(Flag::InstanceId), "");
    }

    #[test]
    fn test_set_undeclared_flag_fails() {
        let mut set = FlagSet::with_flags(&[Flag::InstanceId]);
        let err = set.set_string(Flag::InstanceName, "a").unwrap_err();
        assert!(matches!(err, Error::Write { ref flag, .. } if flag == "instance-name"));
    }

    #[test]
    fn test_set_declared_flag_overwrites() {
        let mut set = FlagSet::new();
        set.insert(Flag::InstanceName, "old");
        set.set_string(Flag::InstanceName, "new").unwrap();
        assert_eq!(set.get_string(Flag::InstanceName), "new");
    }

    #[test]
    fn test_get_bool() {
        let mut set = FlagSet::new();
        assert!(set.get_bool(Flag::IsNormal, true));
        assert!(!set.get_bool(Flag::IsNormal, false));
        set.insert(Flag::IsNormal, "true");
        assert!(set.get_bool(Flag::IsNormal, false));
        set.insert(Flag::IsNormal, "false");
        assert!(!set.get_bool(Flag::IsNormal, true));
    }
}
