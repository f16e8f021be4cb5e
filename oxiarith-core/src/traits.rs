//! Stream traits consumed by the arithmetic codec.
//!
//! The codec never touches `std::io` directly. It pulls raw symbols through
//! [`ByteRead`], pushes decoded symbols through [`ByteWrite`], and moves the
//! compressed form one bit at a time through [`BitRead`] and [`BitWrite`].

use crate::error::Result;

/// A source of individual bits.
pub trait BitRead {
    /// Read a single bit.
    ///
    /// Fails with [`ArithError::Eof`](crate::ArithError::Eof) when no further
    /// byte can be pulled from the underlying stream.
    fn read_bit(&mut self) -> Result<bool>;
}

/// A sink for individual bits.
pub trait BitWrite {
    /// Write a single bit.
    fn write_bit(&mut self, bit: bool) -> Result<()>;

    /// Pad the current partial byte with zero bits and emit it.
    ///
    /// Does nothing when the sink is already byte-aligned.
    fn flush_bits(&mut self) -> Result<()>;
}

/// A source of whole bytes.
pub trait ByteRead {
    /// Read the next byte.
    ///
    /// Fails with [`ArithError::Eof`](crate::ArithError::Eof) at the end of
    /// the input.
    fn read_byte(&mut self) -> Result<u8>;
}

/// A sink for whole bytes.
pub trait ByteWrite {
    /// Write one byte.
    fn write_byte(&mut self, byte: u8) -> Result<()>;
}

/// Counts bytes moved through an underlying stream.
pub trait ByteCount {
    /// Number of bytes read from or written to the underlying stream.
    fn byte_count(&self) -> u64;
}

impl<T: BitRead + ?Sized> BitRead for &mut T {
    fn read_bit(&mut self) -> Result<bool> {
        (**self).read_bit()
    }
}

impl<T: BitWrite + ?Sized> BitWrite for &mut T {
    fn write_bit(&mut self, bit: bool) -> Result<()> {
        (**self).write_bit(bit)
    }

    fn flush_bits(&mut self) -> Result<()> {
        (**self).flush_bits()
    }
}

impl<T: ByteRead + ?Sized> ByteRead for &mut T {
    fn read_byte(&mut self) -> Result<u8> {
        (**self).read_byte()
    }
}

impl<T: ByteWrite + ?Sized> ByteWrite for &mut T {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        (**self).write_byte(byte)
    }
}

/// In-memory byte sink, handy for tests and one-shot buffers.
impl ByteWrite for Vec<u8> {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.push(byte);
        Ok(())
    }
}

impl ByteCount for Vec<u8> {
    fn byte_count(&self) -> u64 {
        self.len() as u64
    }
}

impl<T: ByteCount + ?Sized> ByteCount for &mut T {
    fn byte_count(&self) -> u64 {
        (**self).byte_count()
    }
}
