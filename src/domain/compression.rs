//! Toy compressors
//!
//! Three deliberately simple schemes over short strings. None of them
//! produces a real bit stream; they estimate sizes so the lab can compare
//! them side by side.

pub mod frequency;
pub mod run_length;
pub mod samples;
pub mod window_match;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

pub use frequency::{build_frequency_ranks, CodeAssignment, FrequencyTable, RankedCode};
pub use run_length::{run_length_decode, run_length_encode, RleRun};
pub use samples::{builtin_samples, Sample};
pub use window_match::{expand_tokens, windowed_match, LzToken, WindowSize, WindowedMatches};

/// Bits charged per char of the uncompressed input
pub const ORIGINAL_BITS_PER_CHAR: usize = 8;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    #[default]
    #[strum(to_string = "Rank coding")]
    RankCoding,
    #[strum(to_string = "Windowed match")]
    WindowedMatch,
    #[strum(to_string = "Run length")]
    RunLength,
}

impl Scheme {
    pub fn next(self) -> Self {
        let schemes: Vec<Scheme> = Scheme::iter().collect();
        let index = schemes.iter().position(|s| *s == self).unwrap_or(0);
        schemes[(index + 1) % schemes.len()]
    }

    pub fn previous(self) -> Self {
        let schemes: Vec<Scheme> = Scheme::iter().collect();
        let index = schemes.iter().position(|s| *s == self).unwrap_or(0);
        schemes[(index + schemes.len() - 1) % schemes.len()]
    }
}

/// Scheme-specific output kept for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoded {
    Ranks(CodeAssignment),
    Tokens(Vec<LzToken>),
    Runs(Vec<RleRun>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionReport {
    pub scheme: Scheme,
    pub original_chars: usize,
    pub compressed_bits: usize,
    pub encoded: Encoded,
}

impl CompressionReport {
    pub fn original_bits(&self) -> usize {
        self.original_chars * ORIGINAL_BITS_PER_CHAR
    }

    pub fn original_bytes(&self) -> usize {
        self.original_chars
    }

    pub fn compressed_bytes(&self) -> usize {
        self.compressed_bits.div_ceil(8)
    }

    /// compressed / original, `None` for empty input
    pub fn ratio(&self) -> Option<f64> {
        if self.original_chars == 0 {
            return None;
        }
        Some(self.compressed_bytes() as f64 / self.original_bytes() as f64)
    }

    /// Percentage of bytes saved; negative when the scheme expands the input
    pub fn space_saving(&self) -> Option<f64> {
        self.ratio().map(|ratio| (1.0 - ratio) * 100.0)
    }

    pub fn expands(&self) -> bool {
        self.compressed_bytes() > self.original_bytes()
    }
}

pub fn compress(text: &str, scheme: Scheme, window: WindowSize) -> CompressionReport {
    let original_chars = text.chars().count();

    let (compressed_bits, encoded) = match scheme {
        Scheme::RankCoding => {
            let assignment = build_frequency_ranks(text);
            (assignment.total_bits(), Encoded::Ranks(assignment))
        }
        Scheme::WindowedMatch => {
            let tokens: Vec<LzToken> = windowed_match(text, window).collect();
            let bits = tokens.iter().map(LzToken::encoded_bits).sum();
            (bits, Encoded::Tokens(tokens))
        }
        Scheme::RunLength => {
            let runs = run_length_encode(text);
            (runs.len() * run_length::RUN_BYTES * 8, Encoded::Runs(runs))
        }
    };

    CompressionReport {
        scheme,
        original_chars,
        compressed_bits,
        encoded,
    }
}
