//! Codec configuration presets.

use crate::model::{AdaptiveLinearModel, AdaptiveTreeModel, Model};
use crate::params::Parameters;
use oxiarith_core::Result;
use std::fmt;

/// Which frequency model backs a codec session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelKind {
    /// [`AdaptiveLinearModel`]: linear scans, O(n) per symbol.
    Linear,
    /// [`AdaptiveTreeModel`]: Fenwick tree, O(log n) per symbol.
    #[default]
    Tree,
}

impl ModelKind {
    /// Instantiate a fresh model of this kind.
    pub fn build(self, params: Parameters) -> Box<dyn Model> {
        match self {
            Self::Linear => Box::new(AdaptiveLinearModel::new(params)),
            Self::Tree => Box::new(AdaptiveTreeModel::new(params)),
        }
    }

    /// Short lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Tree => "tree",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Arithmetic codec configuration.
///
/// Both ends of a stream must use the same configuration; nothing about it
/// is recorded in the compressed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArithConfig {
    /// Symbol width in bits (8 for byte streams).
    pub symbol_bits: u32,
    /// Frequency width in bits.
    pub freq_bits: u32,
    /// Code range width in bits.
    pub code_bits: u32,
    /// Frequency model.
    pub model: ModelKind,
}

impl ArithConfig {
    /// Narrow 16-bit code range. Adapts quickly, compresses least.
    ///
    /// - 8-bit symbols
    /// - 14-bit frequencies
    /// - 16-bit codes
    pub const COMPACT: Self = Self {
        symbol_bits: 8,
        freq_bits: 14,
        code_bits: 16,
        model: ModelKind::Tree,
    };

    /// Middle ground between adaptation speed and precision.
    ///
    /// - 8-bit symbols
    /// - 22-bit frequencies
    /// - 24-bit codes
    pub const BALANCED: Self = Self {
        symbol_bits: 8,
        freq_bits: 22,
        code_bits: 24,
        model: ModelKind::Tree,
    };

    /// Wide 32-bit code range, the default.
    ///
    /// - 8-bit symbols
    /// - 30-bit frequencies
    /// - 32-bit codes
    pub const PRECISE: Self = Self {
        symbol_bits: 8,
        freq_bits: 30,
        code_bits: 32,
        model: ModelKind::Tree,
    };

    /// Byte-oriented configuration with custom frequency and code widths.
    pub fn new(freq_bits: u32, code_bits: u32) -> Self {
        Self {
            symbol_bits: 8,
            freq_bits,
            code_bits,
            model: ModelKind::Tree,
        }
    }

    /// Replace the frequency model.
    pub fn with_model(mut self, model: ModelKind) -> Self {
        self.model = model;
        self
    }

    /// Validate the widths and derive the parameters.
    pub fn parameters(&self) -> Result<Parameters> {
        Parameters::new(self.symbol_bits, self.freq_bits, self.code_bits)
    }

    /// Validate the widths and instantiate a fresh model.
    pub fn build_model(&self) -> Result<Box<dyn Model>> {
        Ok(self.model.build(self.parameters()?))
    }
}

impl Default for ArithConfig {
    fn default() -> Self {
        Self::PRECISE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for config in [ArithConfig::COMPACT, ArithConfig::BALANCED, ArithConfig::PRECISE] {
            let params = config.parameters().unwrap();
            assert_eq!(params.symbol_count, 257);
            assert_eq!(params.code_bits, params.freq_bits + 2);
        }
    }

    #[test]
    fn test_default_config() {
        let config = ArithConfig::default();
        assert_eq!(config, ArithConfig::PRECISE);
        assert_eq!(config.model, ModelKind::Tree);
    }

    #[test]
    fn test_with_model() {
        let config = ArithConfig::new(12, 16).with_model(ModelKind::Linear);
        assert_eq!(config.model, ModelKind::Linear);
        assert_eq!(config.model.to_string(), "linear");

        let model = config.build_model().unwrap();
        assert_eq!(model.parameters().freq_max, 4095);
        assert_eq!(model.total_frequency(), 257);
    }

    #[test]
    fn test_invalid_widths() {
        assert!(ArithConfig::new(15, 16).build_model().is_err());
    }
}
