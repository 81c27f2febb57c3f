//! Rank-based code assignment
//!
//! This is the "Huffman" half of the compression lab, except that no tree is
//! ever built. Symbols are counted, sorted by descending count and each rank
//! gets a fixed binary code derived from its index:
//!
//! | rank | length | code  |
//! |------|--------|-------|
//! | 0    | 1      | `0`   |
//! | 1    | 1      | `1`   |
//! | 2    | 2      | `10`  |
//! | 3    | 2      | `11`  |
//! | 4    | 3      | `100` |
//!
//! The resulting codes are not prefix-free (`1` is a prefix of `10`), so the
//! bit string cannot be decoded unambiguously. The lab shows the estimate
//! anyway and flags the ambiguity through [`CodeAssignment::is_prefix_free`].

use std::collections::HashMap;

/// A symbol together with how often it occurs in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolCount {
    pub symbol: char,
    pub count: usize,
}

/// Occurrence counts sorted by descending count
///
/// Symbols with equal counts keep the order in which they were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<SymbolCount>,
}

impl FrequencyTable {
    pub fn from_text(text: &str) -> Self {
        let mut positions: HashMap<char, usize> = HashMap::new();
        let mut entries: Vec<SymbolCount> = Vec::new();

        for symbol in text.chars() {
            match positions.get(&symbol) {
                Some(&index) => entries[index].count += 1,
                None => {
                    positions.insert(symbol, entries.len());
                    entries.push(SymbolCount { symbol, count: 1 });
                }
            }
        }

        // sort_by is stable, so ties stay in first-seen order
        entries.sort_by(|a, b| b.count.cmp(&a.count));

        Self { entries }
    }

    pub fn entries(&self) -> &[SymbolCount] {
        &self.entries
    }

    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, always equal to the input length in chars
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    pub fn count_of(&self, symbol: char) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.symbol == symbol)
            .map(|entry| entry.count)
    }
}

/// A ranked symbol and the code it was given
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedCode {
    pub symbol: char,
    pub count: usize,
    pub code: String,
}

impl RankedCode {
    pub fn bits(&self) -> usize {
        self.code.len()
    }

    /// Bits this symbol contributes to the encoded output
    pub fn weighted_bits(&self) -> usize {
        self.count * self.bits()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeAssignment {
    codes: Vec<RankedCode>,
}

impl CodeAssignment {
    pub fn codes(&self) -> &[RankedCode] {
        &self.codes
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn code_for(&self, symbol: char) -> Option<&str> {
        self.codes
            .iter()
            .find(|code| code.symbol == symbol)
            .map(|code| code.code.as_str())
    }

    /// Sum of the counts carried over from the frequency table
    pub fn total_count(&self) -> usize {
        self.codes.iter().map(|code| code.count).sum()
    }

    /// Estimated encoded size: `Σ count × code length`
    pub fn total_bits(&self) -> usize {
        self.codes.iter().map(RankedCode::weighted_bits).sum()
    }

    /// `total_bits` rounded up to whole bytes
    pub fn compressed_bytes(&self) -> usize {
        self.total_bits().div_ceil(8)
    }

    /// Whether no code is a prefix of another one
    ///
    /// Only assignments with at most two symbols pass.
    pub fn is_prefix_free(&self) -> bool {
        self.codes.iter().enumerate().all(|(i, a)| {
            self.codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !b.code.starts_with(a.code.as_str()))
        })
    }
}

impl From<&FrequencyTable> for CodeAssignment {
    fn from(table: &FrequencyTable) -> Self {
        let codes = table
            .entries()
            .iter()
            .enumerate()
            .map(|(rank, entry)| RankedCode {
                symbol: entry.symbol,
                count: entry.count,
                code: rank_code(rank),
            })
            .collect();

        Self { codes }
    }
}

/// `max(1, ceil(log2(rank + 1)))`
pub fn code_length(rank: usize) -> usize {
    // ceil(log2(n)) for n >= 1 is the bit length of n - 1, and n - 1 == rank
    let bit_length = (usize::BITS - rank.leading_zeros()) as usize;
    bit_length.max(1)
}

/// Binary representation of `rank`, left padded to [`code_length`]
pub fn rank_code(rank: usize) -> String {
    format!("{rank:0width$b}", width = code_length(rank))
}

pub fn build_frequency_ranks(text: &str) -> CodeAssignment {
    CodeAssignment::from(&FrequencyTable::from_text(text))
}
