//! # EdgeKV Codec
//!
//! CBOR payload encoding/decoding for EdgeKV.
//!
//! Backends store opaque byte sequences; this crate is where typed
//! values become those bytes. [`Payload`] owns one encoded buffer, and
//! [`to_cbor`]/[`from_cbor`] are the encode/decode seam: any
//! `serde`-serializable value goes in, self-describing CBOR comes out.
//!
//! ## Usage
//!
//! ```
//! use edgekv_codec::Payload;
//!
//! let mut payload = Payload::from_value(&("carlo", 42)).unwrap();
//! let (name, weight): (String, i64) = payload.decode().unwrap();
//! assert_eq!(name, "carlo");
//! assert_eq!(weight, 42);
//!
//! // Encode replaces the buffer - a payload holds exactly one value.
//! payload.encode(&"locci").unwrap();
//! let text: String = payload.decode().unwrap();
//! assert_eq!(text, "locci");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod decoder;
mod encoder;
mod error;
mod payload;

pub use decoder::from_cbor;
pub use encoder::to_cbor;
pub use error::{CodecError, CodecResult};
pub use payload::Payload;
