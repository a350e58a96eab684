//! The encoded-value buffer standing in for arbitrary logical values.

use crate::decoder::from_cbor;
use crate::encoder::to_cbor;
use crate::error::CodecResult;
use bytes::{Bytes, BytesMut};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A byte buffer holding one encoded logical value.
///
/// `Payload` is what the store layer moves in and out of backends: an
/// arbitrary typed value serialized into self-describing CBOR. It can
/// be built empty, from raw already-encoded bytes, or from a typed
/// value that is encoded immediately.
///
/// [`encode`](Payload::encode) **replaces** the buffer contents. A
/// payload therefore always holds exactly one encoded value; repeated
/// encodes never accumulate.
///
/// # Example
///
/// ```rust
/// use edgekv_codec::Payload;
///
/// let payload = Payload::from_value(&"ciao carlo").unwrap();
/// let text: String = payload.decode().unwrap();
/// assert_eq!(text, "ciao carlo");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Payload {
    buffer: BytesMut,
}

impl Payload {
    /// Creates an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already-encoded buffer.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            buffer: BytesMut::from(bytes),
        }
    }

    /// Creates a payload by immediately encoding `value`.
    ///
    /// # Errors
    ///
    /// Returns an encoding error if `value` cannot be serialized.
    pub fn from_value<T: Serialize + ?Sized>(value: &T) -> CodecResult<Self> {
        let mut payload = Self::new();
        payload.encode(value)?;
        Ok(payload)
    }

    /// Encodes `value` into the buffer, replacing its previous
    /// contents, and returns the encoded bytes.
    ///
    /// # Errors
    ///
    /// Returns an encoding error if `value` cannot be serialized; the
    /// buffer keeps its previous contents in that case.
    pub fn encode<T: Serialize + ?Sized>(&mut self, value: &T) -> CodecResult<&[u8]> {
        let encoded = to_cbor(value)?;
        self.buffer.clear();
        self.buffer.extend_from_slice(&encoded);
        Ok(&self.buffer)
    }

    /// Decodes the buffer contents into `T`.
    ///
    /// # Errors
    ///
    /// Returns a decoding error if the buffer is not valid CBOR or is
    /// incompatible with the requested shape.
    pub fn decode<T: DeserializeOwned>(&self) -> CodecResult<T> {
        from_cbor(&self.buffer)
    }

    /// Returns the raw encoded buffer.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    /// Returns the buffer length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if no value has been encoded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consumes the payload and returns the buffer as immutable bytes.
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.buffer.freeze()
    }
}
