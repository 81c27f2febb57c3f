use pretty_assertions::assert_eq;
use proptest::prelude::*;

use conceptlab::domain::compression::{
    build_frequency_ranks, builtin_samples, compress, expand_tokens, run_length_decode,
    run_length_encode, windowed_match, Encoded, FrequencyTable, LzToken, RleRun, Scheme,
    WindowSize,
};

/// Short alphabets so inputs actually repeat
fn repetitive_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ab]{0,80}",
        "[a-d ]{0,120}",
        "(the cat |sat |on )+",
        any::<String>(),
    ]
}

proptest! {
    #[test]
    fn run_length_restores_input(text in repetitive_text()) {
        prop_assert_eq!(run_length_decode(&run_length_encode(&text)), text);
    }

    #[test]
    fn run_length_runs_are_maximal(text in repetitive_text()) {
        let runs = run_length_encode(&text);
        for pair in runs.windows(2) {
            prop_assert_ne!(pair[0].symbol, pair[1].symbol);
        }
        prop_assert!(runs.iter().all(|run| run.count > 0));
    }

    #[test]
    fn frequency_counts_cover_every_char(text in repetitive_text()) {
        let length = text.chars().count();
        let table = FrequencyTable::from_text(&text);

        prop_assert_eq!(table.total(), length);
        prop_assert_eq!(table.entries().iter().map(|e| e.count).sum::<usize>(), length);
        prop_assert_eq!(build_frequency_ranks(&text).total_count(), length);
    }

    #[test]
    fn frequency_table_is_sorted_descending(text in repetitive_text()) {
        let table = FrequencyTable::from_text(&text);
        for pair in table.entries().windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
    }

    #[test]
    fn windowed_tokens_cover_every_char(
        text in repetitive_text(),
        window in WindowSize::MIN..=WindowSize::MAX,
    ) {
        let tokens: Vec<LzToken> = windowed_match(&text, WindowSize::new(window)).collect();

        prop_assert_eq!(tokens.iter().map(LzToken::span).sum::<usize>(), text.chars().count());
        prop_assert_eq!(expand_tokens(&tokens), text);
    }

    #[test]
    fn windowed_references_stay_inside_window(
        text in repetitive_text(),
        window in WindowSize::MIN..=WindowSize::MAX,
    ) {
        for token in windowed_match(&text, WindowSize::new(window)) {
            if let LzToken::Reference { distance, length } = token {
                prop_assert!(distance >= 1 && distance <= window);
                prop_assert!((3..=255).contains(&length));
            }
        }
    }
}

#[test]
fn test_long_runs_sample() {
    let text = "AAAAAABBBBBBCCCCCCDDDDDDEEEEEEAAAAAA";
    assert_eq!(text.chars().count(), 36);

    let runs = run_length_encode(text);
    assert_eq!(
        runs,
        vec![
            RleRun::new('A', 6),
            RleRun::new('B', 6),
            RleRun::new('C', 6),
            RleRun::new('D', 6),
            RleRun::new('E', 6),
            RleRun::new('A', 6),
        ]
    );
    assert_eq!(run_length_decode(&runs), text);

    let report = compress(text, Scheme::RunLength, WindowSize::default());
    assert_eq!(report.compressed_bytes(), 12);
    assert!(!report.expands());
}

#[test]
fn test_long_runs_is_a_builtin_sample() {
    let samples = builtin_samples();
    assert_eq!(samples[0].text, "AAAAAABBBBBBCCCCCCDDDDDDEEEEEEAAAAAA");
}

#[test]
fn test_every_scheme_reports_empty_input() {
    for scheme in [Scheme::RankCoding, Scheme::WindowedMatch, Scheme::RunLength] {
        let report = compress("", scheme, WindowSize::default());
        assert_eq!(report.original_chars, 0);
        assert_eq!(report.compressed_bits, 0);
        assert_eq!(report.ratio(), None);
    }
}

#[test]
fn test_run_length_expands_text_without_repeats() {
    let report = compress("abcdefghijklmnopqrstuvwxyz", Scheme::RunLength, WindowSize::default());

    assert!(report.expands());
    assert!(matches!(report.encoded, Encoded::Runs(ref runs) if runs.len() == 26));
}
