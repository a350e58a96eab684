//! CBOR encoding.

use crate::error::{CodecError, CodecResult};
use serde::Serialize;

/// Encode a value to self-describing CBOR bytes.
///
/// Any `serde`-serializable value is accepted; the wire format stays
/// behind this function.
///
/// # Errors
///
/// Returns [`CodecError::EncodingFailed`] if the value cannot be
/// serialized.
pub fn to_cbor<T: Serialize + ?Sized>(value: &T) -> CodecResult<Vec<u8>> {
    let mut buffer = Vec::new();
    ciborium::ser::into_writer(value, &mut buffer)
        .map_err(|err| CodecError::encoding_failed(err.to_string()))?;
    Ok(buffer)
}
