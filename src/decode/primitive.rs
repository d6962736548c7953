//! Fixed-width scalar reads in the configured byte order.
//!
//! Every bit pattern is legal here. Floats are rebuilt from their raw bits so
//! NaN payloads, signed zeros and infinities come through unchanged.

use super::{ByteOrder, Decoder};
use crate::error::Result;
use crate::source::ByteSource;

impl<S: ByteSource> Decoder<S> {
    fn fill<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut bytes = [0u8; N];
        self.source.read_exact(&mut bytes)?;
        self.position += N as u64;
        Ok(bytes)
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8> {
        let [b] = self.fill::<1>()?;
        Ok(b)
    }

    pub(crate) fn read_i16(&mut self) -> Result<i16> {
        let bytes = self.fill::<2>()?;
        Ok(match self.options.order {
            ByteOrder::BigEndian => i16::from_be_bytes(bytes),
            ByteOrder::LittleEndian => i16::from_le_bytes(bytes),
        })
    }

    pub(crate) fn read_u16(&mut self) -> Result<u16> {
        let bytes = self.fill::<2>()?;
        Ok(match self.options.order {
            ByteOrder::BigEndian => u16::from_be_bytes(bytes),
            ByteOrder::LittleEndian => u16::from_le_bytes(bytes),
        })
    }

    pub(crate) fn read_i32(&mut self) -> Result<i32> {
        let bytes = self.fill::<4>()?;
        Ok(match self.options.order {
            ByteOrder::BigEndian => i32::from_be_bytes(bytes),
            ByteOrder::LittleEndian => i32::from_le_bytes(bytes),
        })
    }

    pub(crate) fn read_i64(&mut self) -> Result<i64> {
        let bytes = self.fill::<8>()?;
        Ok(match self.options.order {
            ByteOrder::BigEndian => i64::from_be_bytes(bytes),
            ByteOrder::LittleEndian => i64::from_le_bytes(bytes),
        })
    }

    pub(crate) fn read_f32(&mut self) -> Result<f32> {
        let bytes = self.fill::<4>()?;
        let bits = match self.options.order {
            ByteOrder::BigEndian => u32::from_be_bytes(bytes),
            ByteOrder::LittleEndian => u32::from_le_bytes(bytes),
        };
        Ok(f32::from_bits(bits))
    }

    pub(crate) fn read_f64(&mut self) -> Result<f64> {
        let bytes = self.fill::<8>()?;
        let bits = match self.options.order {
            ByteOrder::BigEndian => u64::from_be_bytes(bytes),
            ByteOrder::LittleEndian => u64::from_le_bytes(bytes),
        };
        Ok(f64::from_bits(bits))
    }

    /// Reads `len` raw bytes in one request.
    pub(crate) fn read_span(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut data = vec![0u8; len];
        self.source.read_exact(&mut data)?;
        self.position += len as u64;
        Ok(data)
    }
}
