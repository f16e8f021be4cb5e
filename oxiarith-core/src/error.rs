//! Error types for OxiArith operations.
//!
//! Every failure in the workspace collapses into one of three kinds: the
//! input ran out ([`ArithError::Eof`]), the data or parameters are
//! inconsistent ([`ArithError::InvalidInput`]), or the underlying byte
//! stream failed ([`ArithError::Io`]).

use std::io;
use thiserror::Error;

/// The main error type for OxiArith operations.
#[derive(Debug, Error)]
pub enum ArithError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input stream ended before a complete symbol could be read.
    #[error("Unexpected end of stream at bit position {position}")]
    Eof {
        /// Number of bits successfully consumed before the stream ran dry.
        position: u64,
    },

    /// Structurally or numerically inconsistent input.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of the inconsistency.
        message: String,
    },
}

/// Coarse classification of an [`ArithError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input exhausted.
    Eof,
    /// Invalid parameters, symbol, cumulative value or stream contents.
    InvalidInput,
    /// Failure reported by an underlying stream.
    Io,
}

/// Result type alias for OxiArith operations.
pub type Result<T> = std::result::Result<T, ArithError>;

impl ArithError {
    /// Create an end-of-stream error.
    pub fn eof(position: u64) -> Self {
        Self::Eof { position }
    }

    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) => ErrorKind::Io,
            Self::Eof { .. } => ErrorKind::Eof,
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
        }
    }

    /// Check whether this error signals an exhausted input.
    pub fn is_eof(&self) -> bool {
        self.kind() == ErrorKind::Eof
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ArithError::eof(42);
        assert!(err.to_string().contains("42"));

        let err = ArithError::invalid_input("symbol 300 out of range");
        assert!(err.to_string().contains("symbol 300"));
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(ArithError::eof(0).kind(), ErrorKind::Eof);
        assert_eq!(
            ArithError::invalid_input("bad").kind(),
            ErrorKind::InvalidInput
        );
        assert!(ArithError::eof(8).is_eof());
        assert!(!ArithError::invalid_input("bad").is_eof());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: ArithError = io_err.into();
        assert!(matches!(err, ArithError::Io(_)));
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
