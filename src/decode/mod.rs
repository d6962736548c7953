//! NBT decoding: bytes → [`Tag`].
//!
//! The format carries no schema; every read is steered by a type id read just
//! before it. Decoding is strictly sequential and either yields a complete,
//! validated tree or fails without returning anything partial.

mod framed;
mod payload;
mod primitive;

#[cfg(test)]
pub(crate) mod wire;

use std::io::Read;

use crate::error::{NbtError, Result, ResultExt};
use crate::source::{BufSource, ByteSource, ReadSource};
use crate::types::{Tag, TagId};

/// Maximum nesting of compounds and lists accepted by default.
///
/// Fits a default 2 MiB thread stack in unoptimized builds. Raise it with
/// [`DecodeOptions::max_depth`] only on threads with larger stacks.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Upper bound on capacity reserved from a declared count before any element
/// has actually been read.
const PREALLOC_LIMIT: usize = 4096;

/// Byte order of every multi-byte field in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    BigEndian,
    LittleEndian,
}

impl ByteOrder {
    /// Java Edition worlds and network data.
    pub const JAVA: Self = Self::BigEndian;
    /// Bedrock Edition worlds.
    pub const BEDROCK: Self = Self::LittleEndian;
}

/// Per-decode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    order: ByteOrder,
    max_depth: usize,
}

impl DecodeOptions {
    pub fn new(order: ByteOrder) -> Self {
        Self {
            order,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the maximum number of nested compounds and lists.
    pub fn max_depth(mut self, limit: usize) -> Self {
        self.max_depth = limit;
        self
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    pub fn depth_limit(&self) -> usize {
        self.max_depth
    }
}

impl From<ByteOrder> for DecodeOptions {
    fn from(order: ByteOrder) -> Self {
        Self::new(order)
    }
}

/// Recursive-descent tag decoder over a [`ByteSource`].
///
/// The decoder owns the stream cursor for as long as it lives; a stream must
/// never be shared between two decoders.
pub struct Decoder<S> {
    source: S,
    options: DecodeOptions,
    position: u64,
    depth: usize,
}

impl<S: ByteSource> Decoder<S> {
    pub fn new(source: S, options: impl Into<DecodeOptions>) -> Self {
        Self {
            source,
            options: options.into(),
            position: 0,
            depth: 0,
        }
    }

    /// Bytes consumed from the source so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    /// Decodes one complete tag at the current position.
    ///
    /// An End tag is returned as-is; callers that expected a named tag must
    /// treat it as a structural error themselves.
    pub fn decode_tag(&mut self) -> Result<Tag> {
        let start = self.position;
        match self.read_tag() {
            Ok(tag) => {
                tracing::debug!(
                    id = %tag.id(),
                    name = tag.name(),
                    bytes = self.position - start,
                    "decoded tag"
                );
                Ok(tag)
            }
            Err(e) => {
                tracing::debug!(offset = start, error = %e, "tag decode failed");
                Err(e)
            }
        }
    }

    /// Reads id, name and payload of one tag; recursion enters here for
    /// compound children.
    pub(crate) fn read_tag(&mut self) -> Result<Tag> {
        let offset = self.position;
        let id = self
            .read_tag_id()
            .context_with(|| format!("tag id at offset {offset}"))?;

        // End is a single byte: no name, no payload.
        if id == TagId::End {
            return Ok(Tag::end());
        }

        let name = self
            .read_name()
            .context_with(|| format!("{id} name at offset {offset}"))?;
        let payload = self
            .read_payload(id)
            .context_with(|| format!("{id} {name:?} at offset {offset}"))?;
        Ok(Tag::from_decoded(name, payload))
    }

    fn read_tag_id(&mut self) -> Result<TagId> {
        TagId::try_from(self.read_u8()?)
    }

    /// Enters one level of container nesting.
    fn descend(&mut self) -> Result<()> {
        if self.depth >= self.options.max_depth {
            return Err(NbtError::DepthLimitExceeded(self.options.max_depth));
        }
        self.depth += 1;
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }
}

/// Decodes one tag from `source` using the given byte order.
pub fn decode_tag<S: ByteSource>(source: S, order: ByteOrder) -> Result<Tag> {
    Decoder::new(source, order).decode_tag()
}

/// Decodes one tag from an [`std::io::Read`] stream.
pub fn from_reader<R: Read>(reader: R, order: ByteOrder) -> Result<Tag> {
    decode_tag(ReadSource::new(reader), order)
}

/// Decodes one tag from the start of `data`.
///
/// Returns the tag and the number of bytes it occupied.
pub fn from_slice(data: &[u8], order: ByteOrder) -> Result<(Tag, usize)> {
    let mut decoder = Decoder::new(BufSource::new(data), order);
    let tag = decoder.decode_tag()?;
    let consumed = data.len() - decoder.into_inner().remaining();
    Ok((tag, consumed))
}
