//! CBOR decoding.

use crate::error::{CodecError, CodecResult};
use serde::de::DeserializeOwned;

/// Decode a value from CBOR bytes.
///
/// # Errors
///
/// Returns [`CodecError::DecodingFailed`] if the bytes are not valid
/// CBOR or do not match the requested shape.
pub fn from_cbor<T: DeserializeOwned>(bytes: &[u8]) -> CodecResult<T> {
    ciborium::de::from_reader(bytes).map_err(|err| CodecError::decoding_failed(err.to_string()))
}
