//! # OxiArith Core
//!
//! Core components for the OxiArith arithmetic coding library.
//!
//! This crate provides the building blocks the codec is written against:
//!
//! - [`bitstream`]: MSB-first bit-level I/O with byte accounting
//! - [`traits`]: Bit and byte stream traits consumed by the codec
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! OxiArith is organized in layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L4: Unified API                                         │
//! │     compress/decompress entry points, CLI               │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     Parameters, adaptive models, arithmetic codec       │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: BitStream (this crate)                              │
//! │     BitReader/BitWriter, stream traits, errors          │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxiarith_core::bitstream::BitReader;
//! use oxiarith_core::traits::ByteCount;
//! use std::io::Cursor;
//!
//! let data = vec![0xAB, 0xCD];
//! let mut reader = BitReader::new(Cursor::new(data));
//! let bits = reader.read_bits(12).unwrap();
//! assert_eq!(bits, 0xABC);
//! assert_eq!(reader.byte_count(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;
pub mod traits;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{ArithError, ErrorKind, Result};
pub use traits::{BitRead, BitWrite, ByteCount, ByteRead, ByteWrite};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitstream::{BitReader, BitWriter};
    pub use crate::error::{ArithError, ErrorKind, Result};
    pub use crate::traits::{BitRead, BitWrite, ByteCount, ByteRead, ByteWrite};
}
