//! Adaptive arithmetic encoder and decoder.
//!
//! The coder keeps an integer interval `[low, high]` inside the
//! `code_bits`-wide code range. Each symbol narrows the interval to the
//! symbol's share of the model's cumulative frequencies, then the interval
//! is renormalized by doubling:
//!
//! - **E1**: `high < half`. Both ends are in the lower half; the next output
//!   bit is 0.
//! - **E2**: `low >= half`. Both ends are in the upper half; the next output
//!   bit is 1.
//! - **E3**: `one_fourth <= low` and `high < three_fourths`. The interval
//!   straddles the midpoint; the next bit is not known yet, so it is counted
//!   as *pending* and emitted, inverted, right after the next E1/E2 bit.
//!
//! After renormalization the interval always spans more than a quarter of
//! the code range, which is larger than any total frequency, so every
//! symbol keeps a non-empty share.
//!
//! # Stream termination
//!
//! Encoding the EOF symbol ends the stream. The encoder emits two more
//! disambiguating bits (plus the pending ones), then pads with zero bits so
//! the decoder's `code_bits`-wide lookahead never runs past the data, then
//! byte-aligns. The decoder mirrors the padding exactly, so it consumes
//! every written byte and nothing more. Losing any trailing byte is
//! reported as [`ArithError::Eof`].

use crate::config::ArithConfig;
use crate::model::Model;
use crate::params::Parameters;
use oxiarith_core::{ArithError, BitRead, BitWrite, ByteCount, ByteRead, ByteWrite, Result};

/// Renormalization case for the current interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scale {
    /// E1: lower half.
    Lower,
    /// E2: upper half.
    Upper,
    /// E3: middle half.
    Middle,
}

/// One arithmetic coding session, either encoding or decoding.
///
/// A codec owns its model and carries its state from symbol to symbol. Use
/// a fresh codec (and model) for every stream; a codec that has processed
/// the EOF symbol refuses further work.
///
/// # Example
///
/// ```rust
/// use oxiarith::{ArithConfig, Codec};
/// use oxiarith_core::{BitReader, BitWriter};
/// use std::io::Cursor;
///
/// let config = ArithConfig::COMPACT;
/// let mut compressed = Vec::new();
/// {
///     let mut codec = Codec::with_config(config).unwrap();
///     let mut input = Cursor::new(b"abracadabra".to_vec());
///     let mut reader = BitReader::new(&mut input);
///     let mut writer = BitWriter::new(&mut compressed);
///     codec.compress_bytes(&mut reader, &mut writer).unwrap();
/// }
///
/// let mut codec = Codec::with_config(config).unwrap();
/// let mut reader = BitReader::new(Cursor::new(&compressed));
/// let mut output = Vec::new();
/// let (decompressed, read) = codec.decompress_bytes(&mut reader, &mut output).unwrap();
/// assert_eq!(output, b"abracadabra");
/// assert_eq!(decompressed, 11);
/// assert_eq!(read, compressed.len() as u64);
/// ```
#[derive(Debug)]
pub struct Codec {
    /// Lower end of the interval (inclusive).
    low: u64,
    /// Upper end of the interval (inclusive).
    high: u64,
    /// E3 steps whose output bit is still undecided.
    pending: u64,
    /// Decoder lookahead register.
    code: u64,
    /// Whether `code` has been filled.
    primed: bool,
    /// Set once the EOF symbol has been processed.
    finished: bool,
    /// Copy of the model's parameters.
    params: Parameters,
    /// Frequency model.
    model: Box<dyn Model>,
}

impl Codec {
    /// Start a session over the given model.
    pub fn new(model: Box<dyn Model>) -> Self {
        let params = *model.parameters();
        Self {
            low: params.code_min,
            high: params.code_max,
            pending: 0,
            code: 0,
            primed: false,
            finished: false,
            params,
            model,
        }
    }

    /// Start a session with a fresh model built from `config`.
    pub fn with_config(config: ArithConfig) -> Result<Self> {
        Ok(Self::new(config.build_model()?))
    }

    /// Lower end of the current interval.
    pub fn low(&self) -> u64 {
        self.low
    }

    /// Upper end of the current interval.
    pub fn high(&self) -> u64 {
        self.high
    }

    /// Number of undecided E3 bits.
    pub fn pending_bits(&self) -> u64 {
        self.pending
    }

    /// Whether the EOF symbol has been processed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The session's parameters.
    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    /// The session's model.
    pub fn model(&self) -> &dyn Model {
        self.model.as_ref()
    }

    fn ensure_active(&self) -> Result<()> {
        if self.finished {
            return Err(ArithError::invalid_input(
                "codec session already terminated by EOF",
            ));
        }
        Ok(())
    }

    fn ensure_byte_symbols(&self) -> Result<()> {
        if self.params.symbol_bits != 8 {
            return Err(ArithError::invalid_input(format!(
                "byte streams need 8-bit symbols, codec uses {}-bit symbols",
                self.params.symbol_bits
            )));
        }
        Ok(())
    }

    /// Narrow the interval to the cumulative range `[sym_low, sym_high)` out
    /// of `total`.
    #[inline]
    fn narrow(&mut self, sym_low: u64, sym_high: u64, total: u64) {
        let range = self.high - self.low + 1;
        self.high = self.low + range * sym_high / total - 1;
        self.low += range * sym_low / total;
    }

    /// Renormalization case that applies, if any.
    #[inline]
    fn scale_case(&self) -> Option<Scale> {
        let p = &self.params;
        if self.high < p.code_half {
            Some(Scale::Lower)
        } else if self.low >= p.code_half {
            Some(Scale::Upper)
        } else if self.low >= p.code_one_fourth && self.high < p.code_three_fourths {
            Some(Scale::Middle)
        } else {
            None
        }
    }

    /// Apply one doubling step to the interval.
    #[inline]
    fn rescale_interval(&mut self, case: Scale) {
        match case {
            Scale::Lower => {}
            Scale::Upper => {
                self.low -= self.params.code_half;
                self.high -= self.params.code_half;
            }
            Scale::Middle => {
                self.low -= self.params.code_one_fourth;
                self.high -= self.params.code_one_fourth;
            }
        }
        self.low <<= 1;
        self.high = (self.high << 1) | 1;
    }

    /// Write `bit` followed by every pending bit, inverted.
    fn emit<W: BitWrite + ?Sized>(&mut self, bit: bool, output: &mut W) -> Result<()> {
        output.write_bit(bit)?;
        while self.pending > 0 {
            output.write_bit(!bit)?;
            self.pending -= 1;
        }
        Ok(())
    }

    /// Encode one symbol.
    ///
    /// Encoding the EOF symbol also terminates the stream and byte-aligns
    /// `output`; the codec cannot be used afterwards.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `symbol` is out of range or the session has already
    /// ended, plus any error from `output`.
    pub fn compress_symbol<W: BitWrite + ?Sized>(
        &mut self,
        symbol: usize,
        output: &mut W,
    ) -> Result<()> {
        self.ensure_active()?;
        let (sym_low, sym_high) = self.model.get_frequency(symbol)?;
        let total = self.model.total_frequency();
        self.narrow(sym_low, sym_high, total);

        let mut steps = 0u64;
        while let Some(case) = self.scale_case() {
            match case {
                Scale::Lower => self.emit(false, output)?,
                Scale::Upper => self.emit(true, output)?,
                Scale::Middle => self.pending += 1,
            }
            self.rescale_interval(case);
            steps += 1;
        }
        self.model.update(symbol)?;

        if symbol == self.params.symbol_eof {
            self.terminate(steps, output)?;
        }
        Ok(())
    }

    /// Emit the disambiguating bits, the lookahead padding and the final
    /// partial byte.
    fn terminate<W: BitWrite + ?Sized>(&mut self, eof_steps: u64, output: &mut W) -> Result<()> {
        self.pending += 1;
        let bit = self.low >= self.params.code_one_fourth;
        self.emit(bit, output)?;

        let padding = (self.params.code_bits as u64).saturating_sub(eof_steps + 2);
        for _ in 0..padding {
            output.write_bit(false)?;
        }
        output.flush_bits()?;
        self.finished = true;
        Ok(())
    }

    /// Encode every byte of `input` followed by EOF.
    ///
    /// Returns `(decompressed, compressed)` byte counts as reported by the
    /// two streams.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the parameters do not use 8-bit symbols, plus any
    /// error from the streams.
    pub fn compress_bytes<R, W>(&mut self, input: &mut R, output: &mut W) -> Result<(u64, u64)>
    where
        R: ByteRead + ByteCount + ?Sized,
        W: BitWrite + ByteCount + ?Sized,
    {
        self.ensure_byte_symbols()?;
        log::debug!(
            "arith: compress session, {}-bit frequencies, {}-bit codes",
            self.params.freq_bits,
            self.params.code_bits
        );
        loop {
            match input.read_byte() {
                Ok(byte) => self.compress_symbol(byte as usize, output)?,
                Err(e) if e.is_eof() => break,
                Err(e) => return Err(e),
            }
        }
        self.compress_symbol(self.params.symbol_eof, output)?;

        let counts = (input.byte_count(), output.byte_count());
        log::debug!(
            "arith: compressed {} bytes into {} bytes (final total frequency {})",
            counts.0,
            counts.1,
            self.model.total_frequency()
        );
        Ok(counts)
    }

    /// Decode one symbol.
    ///
    /// The first call fills the `code_bits`-wide lookahead register. When
    /// the EOF symbol comes out, the trailing padding is consumed and the
    /// session ends.
    ///
    /// # Errors
    ///
    /// `Eof` if `input` runs out, `InvalidInput` if the stream cannot have
    /// been produced by a matching encoder or the session has already ended.
    pub fn decompress_symbol<R: BitRead + ?Sized>(&mut self, input: &mut R) -> Result<usize> {
        self.ensure_active()?;
        if !self.primed {
            for _ in 0..self.params.code_bits {
                self.code = (self.code << 1) | input.read_bit()? as u64;
            }
            self.primed = true;
        }

        if self.code < self.low || self.code > self.high {
            return Err(ArithError::invalid_input(format!(
                "code value {:#x} outside interval [{:#x}, {:#x}]",
                self.code, self.low, self.high
            )));
        }

        let total = self.model.total_frequency();
        let range = self.high - self.low + 1;
        let value = ((self.code - self.low + 1) * total - 1) / range;
        let (symbol, sym_low, sym_high) = self.model.get_symbol(value)?;
        self.narrow(sym_low, sym_high, total);

        if symbol == self.params.symbol_eof {
            let mut steps = 0u64;
            while let Some(case) = self.scale_case() {
                self.rescale_interval(case);
                steps += 1;
            }
            let trailing = (steps + 2).saturating_sub(self.params.code_bits as u64);
            for _ in 0..trailing {
                input.read_bit()?;
            }
            self.model.update(symbol)?;
            self.finished = true;
            return Ok(symbol);
        }

        while let Some(case) = self.scale_case() {
            match case {
                Scale::Lower => {}
                Scale::Upper => self.code -= self.params.code_half,
                Scale::Middle => self.code -= self.params.code_one_fourth,
            }
            self.rescale_interval(case);
            self.code = (self.code << 1) | input.read_bit()? as u64;
        }
        self.model.update(symbol)?;
        Ok(symbol)
    }

    /// Decode symbols into `output` until EOF.
    ///
    /// Returns `(decompressed, compressed)` byte counts as reported by the
    /// two streams.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the parameters do not use 8-bit symbols, `Eof` if
    /// `input` ends before the EOF symbol, plus any error from the streams.
    pub fn decompress_bytes<R, W>(&mut self, input: &mut R, output: &mut W) -> Result<(u64, u64)>
    where
        R: BitRead + ByteCount + ?Sized,
        W: ByteWrite + ByteCount + ?Sized,
    {
        self.ensure_byte_symbols()?;
        log::debug!(
            "arith: decompress session, {}-bit frequencies, {}-bit codes",
            self.params.freq_bits,
            self.params.code_bits
        );
        loop {
            let symbol = self.decompress_symbol(input)?;
            if symbol == self.params.symbol_eof {
                break;
            }
            output.write_byte(symbol as u8)?;
        }

        let counts = (output.byte_count(), input.byte_count());
        log::debug!(
            "arith: decompressed {} bytes from {} bytes",
            counts.0,
            counts.1
        );
        Ok(counts)
    }
}
