//! Adaptive symbol frequency models.
//!
//! A model maps every symbol to a half-open cumulative frequency range
//! `[low, high)` and maps cumulative values back to symbols. Both models in
//! this module start from a uniform table (frequency 1 per symbol, EOF
//! included) and apply the same update rule:
//!
//! 1. If the total frequency has reached `freq_max`, every frequency is
//!    halved (rounding down, never below 1) until it no longer has.
//! 2. The observed symbol's frequency is incremented by one.
//!
//! Because the rule is shared, [`AdaptiveLinearModel`] and
//! [`AdaptiveTreeModel`] always hold identical tables and the codec produces
//! byte-identical output with either of them.

mod linear;
mod tree;

use crate::params::Parameters;
use oxiarith_core::{ArithError, Result};
use std::fmt::Debug;

pub use linear::AdaptiveLinearModel;
pub use tree::AdaptiveTreeModel;

/// Probability model driven by the arithmetic codec.
pub trait Model: Debug {
    /// Returns the arithmetic parameters.
    fn parameters(&self) -> &Parameters;

    /// Returns the current total frequency (never above `freq_max`).
    fn total_frequency(&self) -> u64;

    /// Returns the cumulative frequency range `[low, high)` of `symbol`.
    ///
    /// Fails with `InvalidInput` if `symbol >= symbol_count`.
    fn get_frequency(&self, symbol: usize) -> Result<(u64, u64)>;

    /// Returns the symbol whose cumulative range contains `value`, together
    /// with that range.
    ///
    /// Fails with `InvalidInput` if `value >= total_frequency()`.
    fn get_symbol(&self, value: u64) -> Result<(usize, u64, u64)>;

    /// Registers one observation of `symbol`.
    fn update(&mut self, symbol: usize) -> Result<()>;

    /// Returns the cumulative range of every symbol, in symbol order.
    ///
    /// Diagnostic snapshot; the codec never calls it.
    fn get_freq_table(&self) -> Vec<(u64, u64)>;
}

/// Halving rule applied on overflow.
#[inline]
pub(crate) fn halve(freq: u64) -> u64 {
    (freq / 2).max(1)
}

pub(crate) fn check_symbol(params: &Parameters, symbol: usize) -> Result<()> {
    if symbol >= params.symbol_count {
        return Err(ArithError::invalid_input(format!(
            "symbol {symbol} out of range (symbol count {})",
            params.symbol_count
        )));
    }
    Ok(())
}

pub(crate) fn check_value(value: u64, total: u64) -> Result<()> {
    if value >= total {
        return Err(ArithError::invalid_input(format!(
            "cumulative value {value} out of range (total frequency {total})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halve_floor() {
        assert_eq!(halve(1), 1);
        assert_eq!(halve(2), 1);
        assert_eq!(halve(3), 1);
        assert_eq!(halve(9), 4);
    }

    #[test]
    fn test_models_share_rescale_rule() {
        // 1-bit symbols: 0, 1 and EOF, freq_max = 7
        let params = Parameters::new(1, 3, 5).unwrap();
        let mut linear = AdaptiveLinearModel::new(params);
        let mut tree = AdaptiveTreeModel::new(params);

        for symbol in [0, 0, 0, 0, 1, 0, 2, 0, 0, 1, 1, 1, 1, 0] {
            linear.update(symbol).unwrap();
            tree.update(symbol).unwrap();
            assert_eq!(linear.get_freq_table(), tree.get_freq_table());
            assert_eq!(linear.total_frequency(), tree.total_frequency());
            assert!(linear.total_frequency() <= params.freq_max);
        }
    }
}
