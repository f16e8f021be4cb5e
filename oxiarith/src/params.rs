//! Numeric parameters shared by the models and the codec.

use oxiarith_core::{ArithError, Result};

/// Fixed numeric constants derived from the symbol, frequency and code widths.
///
/// All fields are plain values so the renormalization loop never recomputes
/// the quarter boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameters {
    /// Bit width of the symbols being encoded (8 for byte streams).
    pub symbol_bits: u32,
    /// Code of the end-of-stream symbol, one past the largest data symbol.
    pub symbol_eof: usize,
    /// Number of distinct symbols including EOF.
    pub symbol_count: usize,
    /// Bit width of the cumulative frequencies.
    pub freq_bits: u32,
    /// Upper bound of the total frequency.
    pub freq_max: u64,
    /// Bit width of the code range.
    pub code_bits: u32,
    /// Lower limit of the code range, always zero.
    pub code_min: u64,
    /// Upper limit of the code range.
    pub code_max: u64,
    /// First quarter boundary of the code range.
    pub code_one_fourth: u64,
    /// Midpoint of the code range.
    pub code_half: u64,
    /// Third quarter boundary of the code range.
    pub code_three_fourths: u64,
}

impl Parameters {
    /// Derive all parameter values from the symbol, frequency and code widths.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::InvalidInput`] when a width is zero, when
    /// `freq_bits < symbol_bits + 2` (the initial table would not fit),
    /// when `code_bits < freq_bits + 2` (`freq_max` would reach the first
    /// quarter of the code range), or when `code_bits + freq_bits > 64`
    /// (range products would overflow `u64`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use oxiarith::Parameters;
    ///
    /// let params = Parameters::new(8, 12, 16).unwrap();
    /// assert_eq!(params.freq_max, 4095);
    /// assert_eq!(params.code_one_fourth, 16384);
    ///
    /// assert!(Parameters::new(8, 15, 16).is_err());
    /// ```
    pub fn new(symbol_bits: u32, freq_bits: u32, code_bits: u32) -> Result<Self> {
        if symbol_bits == 0 || freq_bits == 0 || code_bits == 0 {
            return Err(ArithError::invalid_input(format!(
                "bit widths must be non-zero (symbol {symbol_bits}, freq {freq_bits}, code {code_bits})"
            )));
        }

        let (sym, freq, code) = (symbol_bits as u64, freq_bits as u64, code_bits as u64);
        if code < freq + 2 {
            return Err(ArithError::invalid_input(format!(
                "{freq_bits}-bit frequencies do not fit below a quarter of a {code_bits}-bit code range"
            )));
        }
        if freq < sym + 2 {
            return Err(ArithError::invalid_input(format!(
                "{freq_bits}-bit frequencies cannot hold {symbol_bits}-bit symbols"
            )));
        }
        if code + freq > 64 {
            return Err(ArithError::invalid_input(format!(
                "{code_bits}-bit codes with {freq_bits}-bit frequencies overflow 64-bit arithmetic"
            )));
        }

        let symbol_eof = 1usize << symbol_bits;
        let code_one_fourth = 1u64 << (code_bits - 2);

        Ok(Self {
            symbol_bits,
            symbol_eof,
            symbol_count: symbol_eof + 1,
            freq_bits,
            freq_max: (1u64 << freq_bits) - 1,
            code_bits,
            code_min: 0,
            code_max: (1u64 << code_bits) - 1,
            code_one_fourth,
            code_half: 2 * code_one_fourth,
            code_three_fourths: 3 * code_one_fourth,
        })
    }
}
