//! Windowed LZ77-style match finder
//!
//! Every position scans the preceding window from left to right and keeps the
//! first strictly longer match, so on equal lengths the earliest starting
//! offset wins. Matches may run into the look-ahead (`"aaaa"` becomes a
//! literal followed by a reference of distance 1) and are cut at
//! [`MAX_MATCH_LEN`] chars. There is no hash chain; the
//! scan is `O(n × window)`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Shortest match worth a reference
pub const MIN_MATCH_LEN: usize = 3;

/// Longest match a reference may cover, so the length fits in 8 bits
pub const MAX_MATCH_LEN: usize = 255;

/// Bits charged for a literal: 1 flag bit + 8 bits of symbol
pub const LITERAL_BITS: usize = 9;

/// Bits charged for a reference: 1 flag bit + 8 bits distance + 8 bits length
pub const REFERENCE_BITS: usize = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LzToken {
    Literal(char),
    Reference { distance: usize, length: usize },
}

impl LzToken {
    /// Number of input chars this token stands for
    pub fn span(&self) -> usize {
        match self {
            LzToken::Literal(_) => 1,
            LzToken::Reference { length, .. } => *length,
        }
    }

    pub fn encoded_bits(&self) -> usize {
        match self {
            LzToken::Literal(_) => LITERAL_BITS,
            LzToken::Reference { .. } => REFERENCE_BITS,
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, LzToken::Reference { .. })
    }
}

impl fmt::Display for LzToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LzToken::Literal(c) => write!(f, "{c}"),
            LzToken::Reference { distance, length } => write!(f, "<{distance},{length}>"),
        }
    }
}

/// Back-window length in chars, kept within `8..=255`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "usize", into = "usize")]
pub struct WindowSize(usize);

impl WindowSize {
    pub const MIN: usize = 8;
    pub const MAX: usize = 255;
    pub const PRESETS: [usize; 4] = [8, 32, 64, 255];

    pub fn new(size: usize) -> Self {
        Self(size.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(&self) -> usize {
        self.0
    }

    /// Next larger preset, wrapping to the smallest one
    pub fn next_preset(&self) -> Self {
        Self::PRESETS
            .iter()
            .find(|&&preset| preset > self.0)
            .map(|&preset| Self(preset))
            .unwrap_or(Self(Self::PRESETS[0]))
    }

    /// Next smaller preset, wrapping to the largest one
    pub fn previous_preset(&self) -> Self {
        Self::PRESETS
            .iter()
            .rev()
            .find(|&&preset| preset < self.0)
            .map(|&preset| Self(preset))
            .unwrap_or(Self(Self::PRESETS[Self::PRESETS.len() - 1]))
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self(32)
    }
}

impl From<usize> for WindowSize {
    fn from(size: usize) -> Self {
        Self::new(size)
    }
}

impl From<WindowSize> for usize {
    fn from(size: WindowSize) -> Self {
        size.0
    }
}

/// Lazy token sequence over a snapshot of the input
///
/// The iterator is finite and can be restarted with [`WindowedMatches::restarted`]
/// (or simply cloned before consumption).
#[derive(Debug, Clone)]
pub struct WindowedMatches {
    chars: Vec<char>,
    window: usize,
    position: usize,
}

impl WindowedMatches {
    pub fn new(text: &str, window: WindowSize) -> Self {
        Self {
            chars: text.chars().collect(),
            window: window.get(),
            position: 0,
        }
    }

    /// A fresh iterator over the same input
    pub fn restarted(&self) -> Self {
        Self {
            chars: self.chars.clone(),
            window: self.window,
            position: 0,
        }
    }

    /// Longest match for the current position as `(start, length)`
    fn longest_match(&self) -> (usize, usize) {
        let position = self.position;
        let window_start = position.saturating_sub(self.window);
        let mut best = (0, 0);

        for candidate in window_start..position {
            let mut length = 0;
            while length < MAX_MATCH_LEN
                && position + length < self.chars.len()
                && self.chars[candidate + length] == self.chars[position + length]
            {
                length += 1;
            }
            if length > best.1 {
                best = (candidate, length);
            }
        }

        best
    }
}

impl Iterator for WindowedMatches {
    type Item = LzToken;

    fn next(&mut self) -> Option<Self::Item> {
        let symbol = *self.chars.get(self.position)?;
        let (start, length) = self.longest_match();

        if length >= MIN_MATCH_LEN {
            let distance = self.position - start;
            self.position += length;
            Some(LzToken::Reference { distance, length })
        } else {
            self.position += 1;
            Some(LzToken::Literal(symbol))
        }
    }
}

pub fn windowed_match(text: &str, window: WindowSize) -> WindowedMatches {
    WindowedMatches::new(text, window)
}

/// Rebuild the text a token sequence stands for
///
/// References pointing before the start of the output are skipped.
pub fn expand_tokens<'a>(tokens: impl IntoIterator<Item = &'a LzToken>) -> String {
    let mut output: Vec<char> = Vec::new();

    for token in tokens {
        match *token {
            LzToken::Literal(c) => output.push(c),
            LzToken::Reference { distance, length } => {
                let Some(start) = output.len().checked_sub(distance) else {
                    continue;
                };
                // char by char so overlapping references repeat correctly
                for offset in 0..length {
                    let c = output[start + offset];
                    output.push(c);
                }
            }
        }
    }

    output.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn tokens(text: &str, window: usize) -> Vec<LzToken> {
        windowed_match(text, WindowSize::new(window)).collect()
    }

    #[test]
    fn test_empty_input_yields_no_tokens() {
        assert!(tokens("", 32).is_empty());
    }

    #[test]
    fn test_short_repeats_stay_literal() {
        assert_eq!(
            tokens("abab", 32),
            vec![
                LzToken::Literal('a'),
                LzToken::Literal('b'),
                LzToken::Literal('a'),
                LzToken::Literal('b'),
            ]
        );
    }

    #[test]
    fn test_repeat_becomes_reference() {
        assert_eq!(
            tokens("abcabc", 32),
            vec![
                LzToken::Literal('a'),
                LzToken::Literal('b'),
                LzToken::Literal('c'),
                LzToken::Reference {
                    distance: 3,
                    length: 3
                },
            ]
        );
    }

    #[test]
    fn test_overlapping_match() {
        assert_eq!(
            tokens("aaaaaaa", 32),
            vec![
                LzToken::Literal('a'),
                LzToken::Reference {
                    distance: 1,
                    length: 6
                },
            ]
        );
    }

    #[test]
    fn test_equal_lengths_prefer_earliest_offset() {
        // "abcX" and "abcY" both give a 3-char match for the trailing "abc"
        let result = tokens("abcXabcYabc", 32);
        assert_eq!(
            result.last(),
            Some(&LzToken::Reference {
                distance: 8,
                length: 3
            })
        );
    }

    #[test]
    fn test_window_limits_search() {
        let text = "abcdefghijklmnopabc";
        // "abc" sits 16 chars back, outside an 8-char window
        assert!(tokens(text, 8).iter().all(|t| !t.is_reference()));
        assert!(tokens(text, 32).iter().any(|t| t.is_reference()));
    }

    #[test]
    fn test_iterator_is_restartable() {
        let mut matches = windowed_match("abcabcabc", WindowSize::default());
        let first: Vec<LzToken> = matches.by_ref().collect();
        assert_eq!(matches.next(), None);

        let second: Vec<LzToken> = matches.restarted().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_expand_tokens_restores_input() {
        let text = "the cat sat on the mat, the cat sat on the hat";
        let result = tokens(text, 64);
        assert_eq!(expand_tokens(&result), text);
    }

    #[test]
    fn test_token_display() {
        assert_eq!(LzToken::Literal('x').to_string(), "x");
        assert_eq!(
            LzToken::Reference {
                distance: 4,
                length: 3
            }
            .to_string(),
            "<4,3>"
        );
    }

    #[rstest]
    #[case(0, 8)]
    #[case(8, 8)]
    #[case(100, 100)]
    #[case(1000, 255)]
    fn test_window_size_clamped(#[case] raw: usize, #[case] expected: usize) {
        assert_eq!(WindowSize::new(raw).get(), expected);
    }

    #[test]
    fn test_window_size_presets_wrap() {
        assert_eq!(WindowSize::new(8).next_preset().get(), 32);
        assert_eq!(WindowSize::new(255).next_preset().get(), 8);
        assert_eq!(WindowSize::new(8).previous_preset().get(), 255);
        assert_eq!(WindowSize::new(40).previous_preset().get(), 32);
    }

    #[test]
    fn test_long_run_is_split_into_capped_references() {
        let text = "a".repeat(1000);
        let encoded = tokens(&text, 32);

        assert_eq!(encoded[0], LzToken::Literal('a'));
        assert_eq!(
            encoded[1..].iter().map(LzToken::span).collect::<Vec<_>>(),
            vec![255, 255, 255, 234]
        );
        assert_eq!(expand_tokens(&encoded), text);
    }
}
