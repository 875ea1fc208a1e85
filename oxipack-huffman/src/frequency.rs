//! Byte frequency counting.

use oxipack_core::error::{OxiPackError, Result};

/// Occurrence count of every byte value in an input.
///
/// Built once per encode and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; 256],
}

impl FrequencyTable {
    /// Count the bytes of `data`.
    ///
    /// Fails with `InvalidInput` if `data` is empty (no symbols to encode).
    pub fn from_data(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return Err(OxiPackError::invalid_input(
                "cannot build a frequency table from empty data",
            ));
        }

        let mut counts = [0u64; 256];
        for &byte in data {
            counts[byte as usize] += 1;
        }

        Ok(Self { counts })
    }

    /// Use precomputed counts, indexed by byte value.
    ///
    /// Fails with `InvalidInput` if every count is zero.
    pub fn from_counts(counts: [u64; 256]) -> Result<Self> {
        if counts.iter().all(|&c| c == 0) {
            return Err(OxiPackError::invalid_input(
                "frequency table has no symbols",
            ));
        }
        Ok(Self { counts })
    }

    /// Count for `symbol`.
    pub fn get(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Number of distinct symbols present.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Present symbols and their counts, in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(symbol, &c)| (symbol as u8, c))
    }
}
