//! Byte sources the decoder reads from.
//!
//! The decoder only ever asks for "exactly N bytes". Running out of data is
//! reported as [`NbtError::Incomplete`]; any other failure of the underlying
//! source surfaces as [`NbtError::Io`].

use std::io::{self, Read};

use bytes::Buf;

use crate::error::NbtError;

/// An ordered byte stream supporting "read exactly N bytes or fail".
pub trait ByteSource {
    /// Fills `out` completely, or fails without a partial result.
    fn read_exact(&mut self, out: &mut [u8]) -> Result<(), NbtError>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_exact(&mut self, out: &mut [u8]) -> Result<(), NbtError> {
        (**self).read_exact(out)
    }
}

/// Adapts any [`std::io::Read`] into a [`ByteSource`].
///
/// The decoder issues one small read per field and per array element, so wrap
/// files and sockets in a [`std::io::BufReader`] first.
pub struct ReadSource<R> {
    reader: R,
}

impl<R: Read> ReadSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> ByteSource for ReadSource<R> {
    fn read_exact(&mut self, out: &mut [u8]) -> Result<(), NbtError> {
        let mut filled = 0;
        while filled < out.len() {
            match self.reader.read(&mut out[filled..]) {
                Ok(0) => {
                    return Err(NbtError::Incomplete {
                        needed: out.len() - filled,
                    });
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(NbtError::Io(e)),
            }
        }
        Ok(())
    }
}

/// Adapts an in-memory [`bytes::Buf`] into a [`ByteSource`].
///
/// A short read consumes nothing from the buffer.
pub struct BufSource<B> {
    buf: B,
}

impl<B: Buf> BufSource<B> {
    pub fn new(buf: B) -> Self {
        Self { buf }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    pub fn into_inner(self) -> B {
        self.buf
    }
}

impl<B: Buf> ByteSource for BufSource<B> {
    fn read_exact(&mut self, out: &mut [u8]) -> Result<(), NbtError> {
        let remaining = self.buf.remaining();
        if remaining < out.len() {
            return Err(NbtError::Incomplete {
                needed: out.len() - remaining,
            });
        }
        self.buf.copy_to_slice(out);
        Ok(())
    }
}
