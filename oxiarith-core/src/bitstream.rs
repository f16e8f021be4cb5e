//! Bit-level I/O for the arithmetic codec.
//!
//! This module provides `BitReader` and `BitWriter`, which wrap any `Read` or
//! `Write` implementation and move data one bit (or a handful of bits) at a
//! time.
//!
//! # Bit Ordering
//!
//! Arithmetic coding emits the most significant bit of the code value first,
//! so both types use MSB-first ordering within bytes: the first bit written
//! lands in bit 7 of the first byte.
//!
//! # Byte Accounting
//!
//! Bytes are pulled from the underlying reader one at a time and only when a
//! bit is actually requested, so [`ByteCount::byte_count`] reports exactly the
//! bytes consumed. Wrap unbuffered sources in `std::io::BufReader`.
//!
//! # Example
//!
//! ```
//! use oxiarith_core::bitstream::{BitReader, BitWriter};
//! use std::io::Cursor;
//!
//! let mut output = Vec::new();
//! {
//!     let mut writer = BitWriter::new(&mut output);
//!     writer.write_bits(0b101, 3).unwrap();
//!     writer.write_bits(0b1100, 4).unwrap();
//!     writer.flush().unwrap();
//! }
//! assert_eq!(output, vec![0b1011_1000]);
//!
//! let mut reader = BitReader::new(Cursor::new(&output));
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(4).unwrap(), 0b1100);
//! ```

use crate::error::{ArithError, Result};
use crate::traits::{BitRead, BitWrite, ByteCount, ByteRead, ByteWrite};
use std::io::{ErrorKind, Read, Write};

/// A bit-level reader that wraps any `Read` implementation.
#[derive(Debug)]
pub struct BitReader<R: Read> {
    /// Underlying reader.
    reader: R,
    /// Bit buffer (MSB-first, valid bits in the low end).
    buffer: u64,
    /// Number of valid bits in buffer.
    bits_in_buffer: u8,
    /// Total bits read (for error reporting).
    total_bits_read: u64,
    /// Bytes pulled from the underlying reader.
    bytes_read: u64,
}

impl<R: Read> BitReader<R> {
    /// Create a new `BitReader` wrapping the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
            bytes_read: 0,
        }
    }

    /// Get a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Get a mutable reference to the underlying reader.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Consume this `BitReader` and return the underlying reader.
    ///
    /// Buffered bits that were not consumed yet are discarded.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Get the total number of bits read so far.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }

    /// Pull one byte from the underlying reader.
    fn pull_byte(&mut self) -> Result<u8> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Err(ArithError::eof(self.total_bits_read)),
                Ok(_) => {
                    self.bytes_read += 1;
                    return Ok(byte[0]);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Ensure at least `count` bits are available in the buffer.
    #[inline]
    fn fill_buffer(&mut self, count: u8) -> Result<()> {
        while self.bits_in_buffer < count {
            let byte = self.pull_byte()?;
            self.buffer = (self.buffer << 8) | byte as u64;
            self.bits_in_buffer += 8;
        }
        Ok(())
    }

    /// Read up to 32 bits from the stream.
    ///
    /// The first bit read ends up in the most significant position of the
    /// result.
    #[inline]
    pub fn read_bits(&mut self, count: u8) -> Result<u32> {
        if count > 32 {
            return Err(ArithError::invalid_input(format!(
                "cannot read {count} bits at once"
            )));
        }
        if count == 0 {
            return Ok(0);
        }

        self.fill_buffer(count)?;

        let shift = self.bits_in_buffer - count;
        let mask = (1u64 << count) - 1;
        let result = ((self.buffer >> shift) & mask) as u32;

        self.bits_in_buffer = shift;
        self.buffer &= (1u64 << shift) - 1;
        self.total_bits_read += count as u64;

        Ok(result)
    }

    /// Read a single bit.
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        Ok(self.read_bits(1)? != 0)
    }

    /// Read eight bits.
    ///
    /// When the reader is byte-aligned this is a plain byte read.
    pub fn read_byte(&mut self) -> Result<u8> {
        if self.bits_in_buffer == 0 {
            let byte = self.pull_byte()?;
            self.total_bits_read += 8;
            return Ok(byte);
        }
        Ok(self.read_bits(8)? as u8)
    }
}

impl<R: Read> BitRead for BitReader<R> {
    fn read_bit(&mut self) -> Result<bool> {
        BitReader::read_bit(self)
    }
}

impl<R: Read> ByteRead for BitReader<R> {
    fn read_byte(&mut self) -> Result<u8> {
        BitReader::read_byte(self)
    }
}

impl<R: Read> ByteCount for BitReader<R> {
    fn byte_count(&self) -> u64 {
        self.bytes_read
    }
}

/// A bit-level writer that wraps any `Write` implementation.
///
/// `BitWriter` accumulates bits in an internal buffer and writes complete
/// bytes to the underlying writer. Call `flush()` when done to write any
/// remaining partial byte.
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    /// Underlying writer.
    writer: W,
    /// Bit buffer (MSB-first, valid bits in the low end).
    buffer: u64,
    /// Number of bits in buffer.
    bits_in_buffer: u8,
    /// Total bits written.
    total_bits_written: u64,
    /// Bytes handed to the underlying writer.
    bytes_written: u64,
}

impl<W: Write> BitWriter<W> {
    /// Create a new `BitWriter` wrapping the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_written: 0,
            bytes_written: 0,
        }
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Get a mutable reference to the underlying writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Get the total number of bits written so far.
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Write complete bytes from the buffer to the writer.
    #[inline]
    fn flush_bytes(&mut self) -> Result<()> {
        let mut bytes = [0u8; 8];
        let mut n = 0;
        while self.bits_in_buffer >= 8 {
            self.bits_in_buffer -= 8;
            bytes[n] = (self.buffer >> self.bits_in_buffer) as u8;
            n += 1;
        }
        if n > 0 {
            self.writer.write_all(&bytes[..n])?;
            self.bytes_written += n as u64;
            self.buffer &= (1u64 << self.bits_in_buffer) - 1;
        }
        Ok(())
    }

    /// Write up to 32 bits to the stream, most significant bit first.
    #[inline]
    pub fn write_bits(&mut self, value: u32, count: u8) -> Result<()> {
        if count > 32 {
            return Err(ArithError::invalid_input(format!(
                "cannot write {count} bits at once"
            )));
        }
        if count == 0 {
            return Ok(());
        }

        let mask = (1u64 << count) - 1;
        self.buffer = (self.buffer << count) | (value as u64 & mask);
        self.bits_in_buffer += count;
        self.total_bits_written += count as u64;

        self.flush_bytes()
    }

    /// Write a single bit.
    #[inline(always)]
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.buffer = (self.buffer << 1) | bit as u64;
        self.bits_in_buffer += 1;
        self.total_bits_written += 1;

        if self.bits_in_buffer >= 8 {
            self.flush_bytes()?;
        }

        Ok(())
    }

    /// Write eight bits.
    pub fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.write_bits(byte as u32, 8)
    }

    /// Pad to the next byte boundary with zeros and emit the partial byte.
    pub fn flush_bits(&mut self) -> Result<()> {
        if self.bits_in_buffer % 8 != 0 {
            let padding = 8 - (self.bits_in_buffer % 8);
            self.write_bits(0, padding)?;
        }
        Ok(())
    }

    /// Flush any remaining bits and the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.flush_bits()?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> BitWrite for BitWriter<W> {
    fn write_bit(&mut self, bit: bool) -> Result<()> {
        BitWriter::write_bit(self, bit)
    }

    fn flush_bits(&mut self) -> Result<()> {
        BitWriter::flush_bits(self)
    }
}

impl<W: Write> ByteWrite for BitWriter<W> {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        BitWriter::write_byte(self, byte)
    }
}

impl<W: Write> ByteCount for BitWriter<W> {
    fn byte_count(&self) -> u64 {
        self.bytes_written
    }
}

impl<W: Write> Drop for BitWriter<W> {
    fn drop(&mut self) {
        // Best-effort flush on drop
        let _ = self.flush();
    }
}
