//! Payload dispatch and the recursive container readers.

use super::{Decoder, PREALLOC_LIMIT};
use crate::error::{NbtError, Result, ResultExt};
use crate::source::ByteSource;
use crate::types::{List, Payload, Tag, TagId};

impl<S: ByteSource> Decoder<S> {
    /// Reads the payload for `id`. Lists recurse back in here for each
    /// element; compounds recurse through [`Decoder::read_tag`].
    ///
    /// This frame sits on every level of recursion, so leaf payloads are read
    /// in [`Decoder::read_leaf`] to keep it small.
    pub(crate) fn read_payload(&mut self, id: TagId) -> Result<Payload> {
        match id {
            TagId::List => self.nested(Self::read_list).map(Payload::List),
            TagId::Compound => self.nested(Self::read_compound).map(Payload::Compound),
            _ => self.read_leaf(id),
        }
    }

    /// Non-container payloads.
    fn read_leaf(&mut self, id: TagId) -> Result<Payload> {
        match id {
            TagId::End => Err(NbtError::InvalidTagId(TagId::End.as_u8())
                .context("TAG_End carries no payload")),
            TagId::Byte => Ok(Payload::Byte(self.read_u8()?)),
            TagId::Short => Ok(Payload::Short(self.read_i16()?)),
            TagId::Int => Ok(Payload::Int(self.read_i32()?)),
            TagId::Long => Ok(Payload::Long(self.read_i64()?)),
            TagId::Float => Ok(Payload::Float(self.read_f32()?)),
            TagId::Double => Ok(Payload::Double(self.read_f64()?)),
            TagId::ByteArray => Ok(Payload::ByteArray(self.read_byte_array()?)),
            TagId::String => Ok(Payload::String(self.read_string()?)),
            TagId::List | TagId::Compound => self.read_payload(id),
            TagId::IntArray => Ok(Payload::IntArray(self.read_int_array()?)),
            TagId::LongArray => Ok(Payload::LongArray(self.read_long_array()?)),
        }
    }

    /// Runs a container reader one nesting level deeper.
    fn nested<T>(&mut self, read: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.descend()?;
        let result = read(self);
        self.ascend();
        result
    }

    /// Element type byte, signed 32-bit count, then `count` bare payloads.
    ///
    /// Checks run in wire order: element type range, count sign, then the
    /// End-with-elements case.
    fn read_list(&mut self) -> Result<List> {
        let element = self
            .read_u8()
            .and_then(TagId::try_from)
            .context_with(|| "List element type")?;
        let len = self.read_count("List")?;

        if element == TagId::End && len > 0 {
            return Err(NbtError::InvalidTagId(element.as_u8())
                .context(format!("List of {element} declares {len} elements")));
        }

        trace_list(element, len, self.position);
        let mut items = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        for i in 0..len {
            items.push(
                self.read_payload(element)
                    .context_with(|| format!("List element {i}"))?,
            );
        }
        Ok(List::from_decoded(element, items))
    }

    /// Fully formed tags until End; the End itself is not kept.
    fn read_compound(&mut self) -> Result<Vec<Tag>> {
        let mut children = Vec::new();
        for i in 0usize.. {
            let child = self
                .read_tag()
                .context_with(|| format!("Compound child {i}"))?;
            if child.is_end() {
                break;
            }
            trace_child(&child);
            children.push(child);
        }
        Ok(children)
    }
}

// Logging lives outside the recursive frames; the tracing macros expand to a
// sizeable amount of stack in unoptimized builds.
#[inline(never)]
fn trace_list(element: TagId, len: usize, offset: u64) {
    tracing::trace!(%element, len, offset, "list");
}

#[inline(never)]
fn trace_child(child: &Tag) {
    tracing::trace!(id = %child.id(), name = child.name(), "compound child");
}
