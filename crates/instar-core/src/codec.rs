// Rust guideline compliant 2026-02-06

//! Identifier encoding and decoding.
//!
//! Instance identifiers have the form `<service id>_<base64(instance name)>`
//! and service identifiers the form `<base64(service name)>.<layer>`, where
//! the layer is `1` for normal services and `0` otherwise. Both use the
//! standard padded base64 alphabet.

use crate::error::IdKind;
use crate::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Separator between the service identifier and the encoded instance name.
pub const INSTANCE_ID_SEPARATOR: char = '_';

/// Separator between the encoded service name and its layer.
pub const SERVICE_ID_SEPARATOR: char = '.';

/// A resolved instance identifier and name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstancePair {
    /// Instance identifier.
    pub id: String,
    /// Instance name.
    pub name: String,
}

/// A resolved service identifier, name and layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicePair {
    /// Service identifier.
    pub id: String,
    /// Service name.
    pub name: String,
    /// Whether the service is a normal service.
    pub normal: bool,
}

/// Builds an instance identifier from a service identifier and instance name.
#[must_use]
pub fn encode_instance_id(service_id: &str, name: &str) -> String {
    format!(
        "{service_id}{INSTANCE_ID_SEPARATOR}{}",
        STANDARD.encode(name.as_bytes())
    )
}

/// Extracts the instance name from an instance identifier.
///
/// The service identifier part is not checked against anything. Names are
/// returned as `String`, so a name part that decodes to bytes which are not
/// UTF-8 is rejected rather than passed through as raw bytes.
///
/// # Errors
///
/// Returns an error if:
/// - The identifier does not contain exactly one `_`
/// - The name part is not valid base64
/// - The decoded name is not valid UTF-8
pub fn decode_instance_id(id: &str) -> Result<String> {
    let (_, encoded) = split_pair(id, INSTANCE_ID_SEPARATOR, IdKind::Instance)?;
    decode_name(encoded)
}

/// Fills in whichever of an instance id and name is missing.
///
/// A non-empty `id` wins: its name part is decoded and `name` is ignored.
/// Otherwise a non-empty `name` is encoded under `service_id`. When both are
/// empty, both come back empty.
///
/// # Arguments
///
/// * `service_id` - Identifier of the owning service, may be empty
/// * `name` - Instance name, may be empty
/// * `id` - Instance identifier, may be empty
/// * `name_flag` - Flag the name came from, used in error messages
///
/// # Errors
///
/// Returns an error if `id` is malformed, or if only `name` is given and
/// `service_id` is empty.
pub fn resolve_instance(
    service_id: &str,
    name: &str,
    id: &str,
    name_flag: &str,
) -> Result<InstancePair> {
    if !id.is_empty() {
        return Ok(InstancePair {
            id: id.to_string(),
            name: decode_instance_id(id)?,
        });
    }

    if name.is_empty() {
        return Ok(InstancePair::default());
    }

    if service_id.is_empty() {
        return Err(Error::MissingDependency {
            flag: name_flag.to_string(),
        });
    }

    Ok(InstancePair {
        id: encode_instance_id(service_id, name),
        name: name.to_string(),
    })
}

/// Builds a service identifier from a service name and layer.
#[must_use]
pub fn encode_service_id(name: &str, normal: bool) -> String {
    format!(
        "{}{SERVICE_ID_SEPARATOR}{}",
        STANDARD.encode(name.as_bytes()),
        u8::from(normal)
    )
}

/// Fills in whichever of a service id and name is missing.
///
/// A non-empty `id` wins and also determines `normal`; otherwise `name` is
/// encoded with the given `normal` layer.
///
/// # Errors
///
/// Returns an error if `id` does not contain exactly one `.` or its name part
/// does not decode.
pub fn resolve_service(name: &str, id: &str, normal: bool) -> Result<ServicePair> {
    if !id.is_empty() {
        let (encoded, layer) = split_pair(id, SERVICE_ID_SEPARATOR, IdKind::Service)?;
        return Ok(ServicePair {
            id: id.to_string(),
            name: decode_name(encoded)?,
            normal: layer == "1",
        });
    }

    if name.is_empty() {
        return Ok(ServicePair {
            id: String::new(),
            name: String::new(),
            normal,
        });
    }

    Ok(ServicePair {
        id: encode_service_id(name, normal),
        name: name.to_string(),
        normal,
    })
}

fn split_pair(id: &str, separator: char, kind: IdKind) -> Result<(&str, &str)> {
    let mut parts = id.split(separator);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(first), Some(second), None) => Ok((first, second)),
        _ => Err(Error::InvalidFormat {
            kind,
            id: id.to_string(),
        }),
    }
}

fn decode_name(encoded: &str) -> Result<String> {
    let bytes = STANDARD.decode(encoded)?;
    Ok(String::from_utf8(bytes)?)
}
