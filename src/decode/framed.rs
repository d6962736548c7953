//! Length-prefixed values: names, strings and primitive arrays.

use super::{Decoder, PREALLOC_LIMIT};
use crate::error::{NbtError, Result, ResultExt};
use crate::source::ByteSource;

impl<S: ByteSource> Decoder<S> {
    /// Tag name: signed 16-bit length, then UTF-8 bytes.
    pub(crate) fn read_name(&mut self) -> Result<String> {
        let len = self.read_i16().context_with(|| "name length")?;
        let len = usize::try_from(len).map_err(|_| NbtError::InvalidLength(i32::from(len)))?;
        self.read_utf8(len).context_with(|| "name")
    }

    /// String payload: unsigned 16-bit length, then UTF-8 bytes.
    pub(crate) fn read_string(&mut self) -> Result<String> {
        let len = self.read_u16().context_with(|| "String length")?;
        self.read_utf8(usize::from(len)).context_with(|| "String payload")
    }

    /// The whole span is read before it is validated.
    fn read_utf8(&mut self, len: usize) -> Result<String> {
        let data = self.read_span(len)?;
        String::from_utf8(data).map_err(|e| NbtError::InvalidEncoding(e.utf8_error()))
    }

    /// Reads and validates a signed 32-bit element count.
    pub(crate) fn read_count(&mut self, what: &str) -> Result<usize> {
        let count = self.read_i32().context_with(|| format!("{what} length"))?;
        usize::try_from(count)
            .map_err(|_| NbtError::NegativeLength(count).context(format!("{what} length")))
    }

    pub(crate) fn read_byte_array(&mut self) -> Result<Vec<u8>> {
        let len = self.read_count("ByteArray")?;
        let mut items = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        for i in 0..len {
            items.push(
                self.read_u8()
                    .context_with(|| format!("ByteArray element {i}"))?,
            );
        }
        Ok(items)
    }

    pub(crate) fn read_int_array(&mut self) -> Result<Vec<i32>> {
        let len = self.read_count("IntArray")?;
        let mut items = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        for i in 0..len {
            items.push(
                self.read_i32()
                    .context_with(|| format!("IntArray element {i}"))?,
            );
        }
        Ok(items)
    }

    pub(crate) fn read_long_array(&mut self) -> Result<Vec<i64>> {
        let len = self.read_count("LongArray")?;
        let mut items = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        for i in 0..len {
            items.push(
                self.read_i64()
                    .context_with(|| format!("LongArray element {i}"))?,
            );
        }
        Ok(items)
    }
}
