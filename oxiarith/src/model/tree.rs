//! Adaptive model backed by a Fenwick (binary indexed) tree.
//!
//! The tree is 1-indexed: slot `i` holds the sum of the `lowbit(i)`
//! frequencies ending at symbol `i - 1`, and slot 0 is unused. Prefix sums,
//! point updates and the value-to-symbol search are all O(log n).

use super::{Model, check_symbol, check_value, halve};
use crate::params::Parameters;
use oxiarith_core::Result;

/// Lowest set bit of `i`.
#[inline(always)]
fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

/// Adaptive model with logarithmic queries and updates.
///
/// Produces exactly the same cumulative ranges as
/// [`AdaptiveLinearModel`](super::AdaptiveLinearModel).
#[derive(Debug, Clone)]
pub struct AdaptiveTreeModel {
    /// Fenwick tree, `symbol_count + 1` slots.
    tree: Vec<u64>,
    /// Sum of all frequencies.
    total: u64,
    /// Highest power of two not above `symbol_count`.
    top: usize,
    /// Arithmetic parameters.
    params: Parameters,
}

impl AdaptiveTreeModel {
    /// Create a model with a uniform table.
    pub fn new(params: Parameters) -> Self {
        let n = params.symbol_count;
        Self {
            tree: Self::build(&vec![1; n]),
            total: n as u64,
            // symbol_count is 2^k + 1, never a power of two
            top: n.next_power_of_two() >> 1,
            params,
        }
    }

    /// Build a tree from plain frequencies in linear time.
    fn build(freq: &[u64]) -> Vec<u64> {
        let n = freq.len();
        let mut tree = vec![0u64; n + 1];
        tree[1..].copy_from_slice(freq);
        for i in 1..=n {
            let parent = i + lowbit(i);
            if parent <= n {
                tree[parent] += tree[i];
            }
        }
        tree
    }

    /// Sum of the frequencies of symbols `[0, end)`.
    fn prefix(&self, end: usize) -> u64 {
        let mut sum = 0;
        let mut i = end;
        while i > 0 {
            sum += self.tree[i];
            i -= lowbit(i);
        }
        sum
    }

    /// Cumulative range of `symbol`, walking both prefix paths until they
    /// meet so the shared part is only summed once.
    fn range(&self, symbol: usize) -> (u64, u64) {
        let (mut h, mut l) = (symbol + 1, symbol);
        let (mut sum_h, mut sum_l) = (0u64, 0u64);
        while h != l {
            if h > l {
                sum_h += self.tree[h];
                h -= lowbit(h);
            } else {
                sum_l += self.tree[l];
                l -= lowbit(l);
            }
        }
        let common = self.prefix(h);
        (common + sum_l, common + sum_h)
    }

    /// Per-symbol frequencies recovered from the tree.
    pub fn frequencies(&self) -> Vec<u64> {
        (0..self.params.symbol_count)
            .map(|symbol| {
                let (low, high) = self.range(symbol);
                high - low
            })
            .collect()
    }

    fn rescale(&mut self) {
        let before = self.total;
        let freq: Vec<u64> = self.frequencies().into_iter().map(halve).collect();
        self.total = freq.iter().sum();
        self.tree = Self::build(&freq);
        log::trace!("tree model: rescaled total frequency {before} -> {}", self.total);
    }
}

impl Model for AdaptiveTreeModel {
    fn parameters(&self) -> &Parameters {
        &self.params
    }

    fn total_frequency(&self) -> u64 {
        self.total
    }

    fn get_frequency(&self, symbol: usize) -> Result<(u64, u64)> {
        check_symbol(&self.params, symbol)?;
        Ok(self.range(symbol))
    }

    fn get_symbol(&self, value: u64) -> Result<(usize, u64, u64)> {
        check_value(value, self.total)?;

        // Largest `pos` with prefix(pos) <= value; that is the symbol index.
        let n = self.params.symbol_count;
        let mut pos = 0usize;
        let mut rem = value;
        let mut step = self.top;
        while step > 0 {
            let next = pos + step;
            if next <= n && self.tree[next] <= rem {
                pos = next;
                rem -= self.tree[next];
            }
            step >>= 1;
        }

        let (low, high) = self.range(pos);
        debug_assert_eq!(low, value - rem);
        Ok((pos, low, high))
    }

    fn update(&mut self, symbol: usize) -> Result<()> {
        check_symbol(&self.params, symbol)?;
        while self.total >= self.params.freq_max {
            self.rescale();
        }
        let n = self.params.symbol_count;
        let mut i = symbol + 1;
        while i <= n {
            self.tree[i] += 1;
            i += lowbit(i);
        }
        self.total += 1;
        Ok(())
    }

    fn get_freq_table(&self) -> Vec<(u64, u64)> {
        (0..self.params.symbol_count)
            .map(|symbol| self.range(symbol))
            .collect()
    }
}
