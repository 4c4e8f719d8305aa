// Rust guideline compliant 2026-02-06

//! Error types for the Instar core library.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Result type alias for Instar operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Which identifier family a malformed identifier belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    /// A `<service>.<layer>` service identifier.
    Service,
    /// A `<service>_<name>` instance identifier.
    Instance,
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdKind::Service => f.write_str("service"),
            IdKind::Instance => f.write_str("instance"),
        }
    }
}

/// Stable error kinds for machine-readable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Neither flag of a required id/name pair was given.
    MissingFlag,
    /// An identifier did not split into its two parts.
    InvalidFormat,
    /// An identifier carried an undecodable name.
    Decode,
    /// A name was given without the service it belongs to.
    MissingDependency,
    /// The flag context refused a resolved value.
    Write,
    /// Configuration could not be loaded or failed validation.
    Config,
}

/// Error types for Instar operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Neither alternative of a required flag pair was supplied.
    #[error("either flags \"--{first}\" or \"--{second}\" must be given")]
    MissingFlag {
        /// The id flag of the pair.
        first: String,
        /// The name flag of the pair.
        second: String,
    },

    /// Identifier does not split into exactly two parts.
    #[error("invalid {kind} id, cannot be split into 2 parts: {id}")]
    InvalidFormat {
        /// Identifier family.
        kind: IdKind,
        /// The offending identifier as supplied.
        id: String,
    },

    /// The encoded name is not valid base64.
    #[error(transparent)]
    Decode(#[from] base64::DecodeError),

    /// The decoded name is not valid UTF-8.
    #[error("decoded name is not valid UTF-8: {0}")]
    NonUtf8Name(#[from] std::string::FromUtf8Error),

    /// A name was given but no service identifier is available.
    #[error("\"--{flag}\" is specified but its related service name or id is not given")]
    MissingDependency {
        /// The name flag that was supplied.
        flag: String,
    },

    /// The flag context rejected a write-back.
    #[error("cannot set flag \"--{flag}\": {reason}")]
    Write {
        /// Flag being written.
        flag: String,
        /// Why the context refused it.
        reason: String,
    },

    /// Invalid configuration.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the stable kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingFlag { .. } => ErrorKind::MissingFlag,
            Error::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            Error::Decode(_) | Error::NonUtf8Name(_) => ErrorKind::Decode,
            Error::MissingDependency { .. } => ErrorKind::MissingDependency,
            Error::Write { .. } => ErrorKind::Write,
            Error::InvalidConfig(_) | Error::Io(_) => ErrorKind::Config,
        }
    }

    pub(crate) fn missing_flag(first: &str, second: &str) -> Self {
        Error::MissingFlag {
            first: first.to_string(),
            second: second.to_string(),
        }
    }
}
