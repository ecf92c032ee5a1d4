//! Canonical JSON encoding for reports and hashing.

use mvx_core::{ErrorInfo, MvxError};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encodes a value as canonical JSON bytes: object keys are sorted, so
/// identical payloads always produce identical bytes.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, MvxError> {
    let value = serde_json::to_value(value).map_err(|err| wrap(err, "canonical-encode"))?;
    serde_json::to_vec(&value).map_err(|err| wrap(err, "canonical-bytes"))
}

/// Decodes a JSON payload produced by [`to_canonical_json_bytes`].
pub fn from_json_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, MvxError> {
    serde_json::from_slice(bytes).map_err(|err| wrap(err, "json-decode"))
}

fn wrap(err: serde_json::Error, code: &str) -> MvxError {
    MvxError::Serde(ErrorInfo::new(code, err.to_string()))
}
