use byteorder::{BigEndian, ByteOrder};

use crate::errors::{DecodeCause, DecodeError};

/// Big-endian reader over a byte slice.
///
/// Every multi-byte item in a class file is stored in big-endian order, so
/// all readers in this crate go through this cursor instead of slicing by
/// hand. Reads are bounds-checked; running off the end of the buffer (or off
/// the end of a bounded [`sub_cursor`](ByteCursor::sub_cursor)) is
/// [`DecodeCause::UnexpectedEof`].
#[derive(Clone, Debug)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
    /// Offset of `buf[0]` in the original input, so errors raised inside a
    /// sub-cursor still point at the right byte of the file.
    base: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(buf: &'a [u8]) -> ByteCursor<'a> {
        ByteCursor { buf, pos: 0, base: 0 }
    }

    /// Position relative to the start of the original input buffer.
    pub fn offset(&self) -> usize {
        self.base + self.pos
    }

    /// Number of bytes still unread.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, count: usize) -> Result<&'a [u8], DecodeError> {
        if self.remaining() < count {
            return Err(DecodeError::new(DecodeCause::UnexpectedEof, self.offset()));
        }
        let bytes = &self.buf[self.pos..self.pos + count];
        self.pos += count;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
        Ok(BigEndian::read_u16(self.take(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        Ok(BigEndian::read_u32(self.take(4)?))
    }

    pub fn read_u64(&mut self) -> Result<u64, DecodeError> {
        Ok(BigEndian::read_u64(self.take(8)?))
    }

    pub fn read_i32(&mut self) -> Result<i32, DecodeError> {
        Ok(BigEndian::read_i32(self.take(4)?))
    }

    pub fn read_f32(&mut self) -> Result<f32, DecodeError> {
        Ok(BigEndian::read_f32(self.take(4)?))
    }

    pub fn read_f64(&mut self) -> Result<f64, DecodeError> {
        Ok(BigEndian::read_f64(self.take(8)?))
    }

    /// Read without advancing.
    pub fn peek_u8(&self) -> Result<u8, DecodeError> {
        if self.remaining() < 1 {
            return Err(DecodeError::new(DecodeCause::UnexpectedEof, self.offset()));
        }
        Ok(self.buf[self.pos])
    }

    /// Borrow exactly `count` bytes out of the underlying buffer.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8], DecodeError> {
        self.take(count)
    }

    /// Split off a child cursor over exactly `count` bytes.
    ///
    /// The parent is advanced past the region immediately, so a reader that
    /// mis-counts inside the child cannot desynchronize the parent stream.
    pub fn sub_cursor(&mut self, count: usize) -> Result<ByteCursor<'a>, DecodeError> {
        let base = self.offset();
        let buf = self.take(count)?;
        Ok(ByteCursor { buf, pos: 0, base })
    }
}
