//! Adaptive model backed by a plain frequency array.

use super::{Model, check_symbol, check_value, halve};
use crate::params::Parameters;
use oxiarith_core::{ArithError, Result};

/// Adaptive model that keeps one frequency per symbol and answers every
/// query with a linear scan.
///
/// Simple but O(symbol count) per operation; mainly useful as a reference
/// for [`AdaptiveTreeModel`](super::AdaptiveTreeModel) and for benchmarks.
#[derive(Debug, Clone)]
pub struct AdaptiveLinearModel {
    /// Frequency of each symbol.
    freq: Vec<u64>,
    /// Sum of `freq`.
    total: u64,
    /// Arithmetic parameters.
    params: Parameters,
}

impl AdaptiveLinearModel {
    /// Create a model with a uniform table.
    pub fn new(params: Parameters) -> Self {
        Self {
            freq: vec![1; params.symbol_count],
            total: params.symbol_count as u64,
            params,
        }
    }

    /// Per-symbol frequencies.
    pub fn frequencies(&self) -> &[u64] {
        &self.freq
    }

    fn rescale(&mut self) {
        let before = self.total;
        for f in &mut self.freq {
            *f = halve(*f);
        }
        self.total = self.freq.iter().sum();
        log::trace!("linear model: rescaled total frequency {before} -> {}", self.total);
    }
}

impl Model for AdaptiveLinearModel {
    fn parameters(&self) -> &Parameters {
        &self.params
    }

    fn total_frequency(&self) -> u64 {
        self.total
    }

    fn get_frequency(&self, symbol: usize) -> Result<(u64, u64)> {
        check_symbol(&self.params, symbol)?;
        let low: u64 = self.freq[..symbol].iter().sum();
        Ok((low, low + self.freq[symbol]))
    }

    fn get_symbol(&self, value: u64) -> Result<(usize, u64, u64)> {
        check_value(value, self.total)?;
        let mut low = 0u64;
        for (symbol, &f) in self.freq.iter().enumerate() {
            let high = low + f;
            if value < high {
                return Ok((symbol, low, high));
            }
            low = high;
        }
        Err(ArithError::invalid_input(format!(
            "cumulative value {value} not covered by frequency table"
        )))
    }

    fn update(&mut self, symbol: usize) -> Result<()> {
        check_symbol(&self.params, symbol)?;
        while self.total >= self.params.freq_max {
            self.rescale();
        }
        self.freq[symbol] += 1;
        self.total += 1;
        Ok(())
    }

    fn get_freq_table(&self) -> Vec<(u64, u64)> {
        let mut low = 0u64;
        self.freq
            .iter()
            .map(|&f| {
                let range = (low, low + f);
                low += f;
                range
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn byte_model() -> AdaptiveLinearModel {
        AdaptiveLinearModel::new(Parameters::new(8, 14, 16).unwrap())
    }

    #[test]
    fn test_uniform_start() {
        let model = byte_model();
        assert_eq!(model.total_frequency(), 257);
        assert_eq!(model.get_frequency(0).unwrap(), (0, 1));
        assert_eq!(model.get_frequency(100).unwrap(), (100, 101));
        assert_eq!(model.get_frequency(256).unwrap(), (256, 257));
        assert_eq!(model.get_symbol(0).unwrap(), (0, 0, 1));
        assert_eq!(model.get_symbol(256).unwrap(), (256, 256, 257));
    }

    #[test]
    fn test_out_of_range() {
        let model = byte_model();
        assert!(matches!(
            model.get_frequency(257),
            Err(ArithError::InvalidInput { .. })
        ));
        assert!(matches!(
            model.get_symbol(257),
            Err(ArithError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_update_shifts_ranges() {
        let mut model = byte_model();
        model.update(b'a' as usize).unwrap();
        model.update(b'a' as usize).unwrap();

        assert_eq!(model.total_frequency(), 259);
        assert_eq!(model.get_frequency(97).unwrap(), (97, 100));
        assert_eq!(model.get_frequency(98).unwrap(), (100, 101));

        // Half-open boundaries belong to the symbol that starts there
        assert_eq!(model.get_symbol(97).unwrap(), (97, 97, 100));
        assert_eq!(model.get_symbol(99).unwrap(), (97, 97, 100));
        assert_eq!(model.get_symbol(100).unwrap(), (98, 100, 101));
    }

    #[test]
    fn test_rescale_on_overflow() {
        // Symbols 0, 1 and EOF; freq_max = 7
        let mut model = AdaptiveLinearModel::new(Parameters::new(1, 3, 5).unwrap());
        for _ in 0..4 {
            model.update(0).unwrap();
        }
        assert_eq!(model.frequencies(), &[5, 1, 1]);
        assert_eq!(model.total_frequency(), 7);

        // Total is at freq_max: halve to [2, 1, 1] then increment
        model.update(0).unwrap();
        assert_eq!(model.frequencies(), &[3, 1, 1]);
        assert_eq!(model.total_frequency(), 5);
    }

    #[test]
    fn test_freq_table() {
        let mut model = byte_model();
        model.update(1).unwrap();
        let table = model.get_freq_table();
        assert_eq!(table.len(), 257);
        assert_eq!(table[0], (0, 1));
        assert_eq!(table[1], (1, 3));
        assert_eq!(table[2], (3, 4));
        assert_eq!(table[256], (257, 258));
    }
}
