//! Test helper for assembling wire bytes in either byte order.

use bytes::{BufMut, BytesMut};

use super::ByteOrder;
use crate::types::TagId;

pub(crate) struct Wire {
    buf: BytesMut,
    order: ByteOrder,
}

impl Wire {
    pub(crate) fn new(order: ByteOrder) -> Self {
        Self {
            buf: BytesMut::new(),
            order,
        }
    }

    pub(crate) fn finish(&self) -> Vec<u8> {
        self.buf.to_vec()
    }

    pub(crate) fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.put_slice(bytes);
        self
    }

    pub(crate) fn u8(&mut self, v: u8) -> &mut Self {
        self.buf.put_u8(v);
        self
    }

    pub(crate) fn i16(&mut self, v: i16) -> &mut Self {
        match self.order {
            ByteOrder::BigEndian => self.buf.put_i16(v),
            ByteOrder::LittleEndian => self.buf.put_i16_le(v),
        }
        self
    }

    pub(crate) fn u16(&mut self, v: u16) -> &mut Self {
        match self.order {
            ByteOrder::BigEndian => self.buf.put_u16(v),
            ByteOrder::LittleEndian => self.buf.put_u16_le(v),
        }
        self
    }

    pub(crate) fn i32(&mut self, v: i32) -> &mut Self {
        match self.order {
            ByteOrder::BigEndian => self.buf.put_i32(v),
            ByteOrder::LittleEndian => self.buf.put_i32_le(v),
        }
        self
    }

    pub(crate) fn u32(&mut self, v: u32) -> &mut Self {
        match self.order {
            ByteOrder::BigEndian => self.buf.put_u32(v),
            ByteOrder::LittleEndian => self.buf.put_u32_le(v),
        }
        self
    }

    pub(crate) fn i64(&mut self, v: i64) -> &mut Self {
        match self.order {
            ByteOrder::BigEndian => self.buf.put_i64(v),
            ByteOrder::LittleEndian => self.buf.put_i64_le(v),
        }
        self
    }

    pub(crate) fn u64(&mut self, v: u64) -> &mut Self {
        match self.order {
            ByteOrder::BigEndian => self.buf.put_u64(v),
            ByteOrder::LittleEndian => self.buf.put_u64_le(v),
        }
        self
    }

    pub(crate) fn f32(&mut self, v: f32) -> &mut Self {
        self.u32(v.to_bits())
    }

    pub(crate) fn f64(&mut self, v: f64) -> &mut Self {
        self.u64(v.to_bits())
    }

    /// Name framing: signed 16-bit length, then the bytes.
    pub(crate) fn name(&mut self, name: &str) -> &mut Self {
        self.i16(name.len() as i16).raw(name.as_bytes())
    }

    /// String payload framing: unsigned 16-bit length, then the bytes.
    pub(crate) fn string(&mut self, s: &str) -> &mut Self {
        self.u16(s.len() as u16).raw(s.as_bytes())
    }

    /// Id byte followed by the name.
    pub(crate) fn header(&mut self, id: TagId, name: &str) -> &mut Self {
        self.u8(id.as_u8()).name(name)
    }
}
