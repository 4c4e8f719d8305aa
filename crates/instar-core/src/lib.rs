// Rust guideline compliant 2026-02-06

//! Instar Core Library
//!
//! This crate resolves service and instance identifiers supplied on the
//! command line:
//! - Identifier codec (instance and service id encoding/decoding)
//! - Flag context (flag-name table, read/write capability, in-memory store)
//! - Resolvers (single pair, comma-delimited list, source/destination relation)
//! - Configuration loading
//! - Error types and result handling

pub mod codec;
pub mod config;
pub mod error;
pub mod flags;
pub mod resolve;

pub use codec::{InstancePair, ServicePair};
pub use config::{Config, OutputFormat};
pub use error::{Error, ErrorKind, IdKind, Result};
pub use flags::{
    Flag, FlagContext, FlagSet, InstanceFlags, InstanceListFlags, ServiceFlags,
    INSTANCE_ID_LIST_FLAG,
};
pub use resolve::{
    parse_instance, parse_instance_list, parse_instance_relation, parse_service,
    parse_service_relation,
};
