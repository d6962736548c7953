//! nbtread — a strict decoder for named binary tag (NBT) data.
//!
//! NBT is the self-describing, tag-based binary format used for game worlds
//! and save states. This crate turns a byte stream into a validated tree of
//! [`Tag`]s, with the byte order chosen per call (Java Edition data is
//! big-endian, Bedrock Edition data is little-endian).
//!
//! # Architecture
//!
//! - **`source`** — The [`ByteSource`] capability and adapters for
//!   `std::io::Read` and `bytes::Buf`
//! - **`decode`** — Primitive reads, length-prefixed values, payload dispatch
//!   and the recursive tag decoder
//! - **`types`** — Tag ids and the decoded tree
//! - **`error`** — [`NbtError`] with contextual wrapping
//!
//! Compression (e.g. gzip-wrapped files) must be removed before the bytes
//! reach the decoder.
//!
//! ```
//! use nbtread::{ByteOrder, Payload};
//!
//! let data = [0x03, 0x00, 0x01, b'n', 0x00, 0x00, 0x00, 0x2A];
//! let (tag, used) = nbtread::from_slice(&data, ByteOrder::BigEndian)?;
//! assert_eq!(tag.name(), "n");
//! assert_eq!(tag.payload(), &Payload::Int(42));
//! assert_eq!(used, data.len());
//! # Ok::<(), nbtread::NbtError>(())
//! ```

pub mod decode;
pub mod error;
pub mod source;
pub mod types;

pub use decode::{
    decode_tag, from_reader, from_slice, ByteOrder, DecodeOptions, Decoder, DEFAULT_MAX_DEPTH,
};
pub use error::{ErrorKind, NbtError, Result};
pub use source::{BufSource, ByteSource, ReadSource};
pub use types::{List, Payload, Tag, TagId};
