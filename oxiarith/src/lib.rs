//! # OxiArith: Pure Rust Adaptive Arithmetic Coding
//!
//! This crate provides a lossless adaptive arithmetic coder for byte
//! streams.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Adaptive**: Symbol statistics are learned on the fly, no tables are
//!   transmitted
//! - **Two models**: A linear-scan model and a Fenwick-tree model that
//!   produce byte-identical output
//! - **Tunable precision**: Frequency and code widths up to 64 bits of
//!   combined arithmetic
//!
//! ## Stream Format
//!
//! The compressed stream is a raw MSB-first bit sequence with no header.
//! Every input byte is encoded as one symbol, followed by a dedicated EOF
//! symbol (value 256), a few terminating bits and zero padding to the next
//! byte boundary. The decoder must be configured with the same
//! [`ArithConfig`] widths as the encoder.
//!
//! ## Example
//!
//! ```rust
//! use oxiarith::{ArithConfig, compress_to_vec, decompress_to_vec};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT".repeat(20);
//!
//! let compressed = compress_to_vec(&original, ArithConfig::default()).unwrap();
//! assert!(compressed.len() < original.len());
//!
//! let decompressed = decompress_to_vec(&compressed, ArithConfig::default()).unwrap();
//! assert_eq!(decompressed, original);
//! ```
//!
//! ## Streaming
//!
//! ```rust
//! use oxiarith::{ModelKind, Parameters, compress, decompress};
//! use std::io::Cursor;
//!
//! let params = Parameters::new(8, 30, 32).unwrap();
//! let mut compressed = Vec::new();
//! let (read, written) = compress(
//!     Cursor::new(b"hello world"),
//!     &mut compressed,
//!     ModelKind::Tree.build(params),
//! )
//! .unwrap();
//! assert_eq!(read, 11);
//! assert_eq!(written, compressed.len() as u64);
//!
//! let mut restored = Vec::new();
//! decompress(
//!     Cursor::new(&compressed),
//!     &mut restored,
//!     ModelKind::Linear.build(params),
//! )
//! .unwrap();
//! assert_eq!(restored, b"hello world");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod codec;
mod config;
pub mod model;
mod params;

pub use codec::Codec;
pub use config::{ArithConfig, ModelKind};
pub use model::{AdaptiveLinearModel, AdaptiveTreeModel, Model};
pub use params::Parameters;

pub use oxiarith_core::{ArithError, ErrorKind, Result};

use oxiarith_core::{BitReader, BitWriter};
use std::io::{Read, Write};

/// Compress everything readable from `input` into `output`.
///
/// `model` must be fresh and use 8-bit symbols. Returns
/// `(decompressed, compressed)`: the bytes read from `input` and the bytes
/// written to `output`.
///
/// Bytes are pulled one at a time; wrap files in `std::io::BufReader`.
pub fn compress<R: Read, W: Write>(
    input: R,
    output: W,
    model: Box<dyn Model>,
) -> Result<(u64, u64)> {
    let mut codec = Codec::new(model);
    let mut reader = BitReader::new(input);
    let mut writer = BitWriter::new(output);
    let counts = codec.compress_bytes(&mut reader, &mut writer)?;
    writer.flush()?;
    Ok(counts)
}

/// Decompress a stream produced by [`compress`] from `input` into `output`.
///
/// `model` must be fresh and configured like the encoder's. Returns
/// `(decompressed, compressed)`: the bytes written to `output` and the
/// bytes read from `input`. Reading stops right after the encoded stream.
pub fn decompress<R: Read, W: Write>(
    input: R,
    output: W,
    model: Box<dyn Model>,
) -> Result<(u64, u64)> {
    let mut codec = Codec::new(model);
    let mut reader = BitReader::new(input);
    let mut writer = BitWriter::new(output);
    let counts = codec.decompress_bytes(&mut reader, &mut writer)?;
    writer.flush()?;
    Ok(counts)
}

/// Compress a byte slice with the given configuration.
pub fn compress_to_vec(data: &[u8], config: ArithConfig) -> Result<Vec<u8>> {
    let model = config.build_model()?;
    let mut output = Vec::with_capacity(data.len() / 2 + 8);
    compress(data, &mut output, model)?;
    Ok(output)
}

/// Decompress a byte slice with the given configuration.
pub fn decompress_to_vec(data: &[u8], config: ArithConfig) -> Result<Vec<u8>> {
    let model = config.build_model()?;
    let mut output = Vec::with_capacity(data.len() * 2);
    decompress(data, &mut output, model)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_default() {
        let data = b"Hello, World! This is a test of arithmetic coding.";
        let compressed = compress_to_vec(data, ArithConfig::default()).unwrap();
        let decompressed = decompress_to_vec(&compressed, ArithConfig::default()).unwrap();
        assert_eq!(decompressed, data);
    }

    #[test]
    fn test_counts() {
        let data = vec![b'z'; 1000];
        let params = Parameters::new(8, 22, 24).unwrap();

        let mut compressed = Vec::new();
        let (read, written) =
            compress(data.as_slice(), &mut compressed, ModelKind::Tree.build(params)).unwrap();
        assert_eq!(read, 1000);
        assert_eq!(written, compressed.len() as u64);
        assert!(written < 150);

        let mut restored = Vec::new();
        let (decompressed, consumed) =
            decompress(compressed.as_slice(), &mut restored, ModelKind::Tree.build(params))
                .unwrap();
        assert_eq!(decompressed, 1000);
        assert_eq!(consumed, written);
        assert_eq!(restored, data);
    }

    #[test]
    fn test_rejects_non_byte_model() {
        let params = Parameters::new(7, 12, 16).unwrap();
        let err = compress(&b"abc"[..], Vec::new(), ModelKind::Linear.build(params)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
