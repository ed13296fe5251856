//! JSON encode/decode helpers.
//!
//! Thin pass-throughs over `serde_json`; errors propagate unchanged.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Encodes any serializable value to a JSON string.
pub fn encode<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

/// Decodes a JSON string into a value.
pub fn decode<T: DeserializeOwned>(json: &str) -> serde_json::Result<T> {
    serde_json::from_str(json)
}
