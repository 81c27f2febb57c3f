use pretty_assertions::assert_eq;
use proptest::prelude::*;

use conceptlab::domain::pricing::{
    compare_models, format_usd, quote, quote_or_zero, PriceQuote, PricingError, RateEntry,
    RateTable, Workload,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_gpt4_reference_workload() -> Result<(), PricingError> {
    let quote = quote(
        RateTable::builtin(),
        "openai",
        "gpt-4",
        Workload::new(1000, 500, 100),
    )?;

    assert_close(quote.per_request_cost, 0.06);
    assert_close(quote.daily_cost, 6.0);
    assert_close(quote.monthly_cost, 180.0);
    assert_eq!(format_usd(quote.per_request_cost, 2), "$0.06");
    assert_eq!(format_usd(quote.daily_cost, 2), "$6.00");
    assert_eq!(format_usd(quote.monthly_cost, 2), "$180.00");
    Ok(())
}

#[test]
fn test_unknown_model() {
    let workload = Workload::new(1000, 500, 100);

    assert_eq!(
        quote(RateTable::builtin(), "acme", "rocket", workload),
        Err(PricingError::UnknownModel {
            provider: "acme".into(),
            model: "rocket".into(),
        })
    );
    assert_eq!(
        quote_or_zero(RateTable::builtin(), "acme", "rocket", workload),
        PriceQuote::default()
    );
}

#[test]
fn test_configured_rates_join_the_comparison() {
    let entry = RateEntry {
        provider: "acme".into(),
        model: "free".into(),
        input_per_1k: 0.0,
        output_per_1k: 0.0,
    };
    let table = RateTable::with_overrides([&entry]);
    let rows = compare_models(&table, Workload::new(1000, 500, 100));

    assert_eq!(rows.len(), RateTable::builtin().len() + 1);
    assert_eq!(rows[0].0.provider, "acme");
    assert_close(rows[0].1.monthly_cost, 0.0);
}

#[test]
fn test_negative_configured_rate_keeps_cost_monotonic() -> Result<(), PricingError> {
    let entry = RateEntry {
        provider: "openai".into(),
        model: "gpt-4".into(),
        input_per_1k: -0.03,
        output_per_1k: 0.06,
    };
    let table = RateTable::with_overrides([&entry]);

    let lower = quote(&table, "openai", "gpt-4", Workload::new(1000, 500, 100))?;
    let higher = quote(&table, "openai", "gpt-4", Workload::new(1000, 500, 200))?;
    assert_close(lower.monthly_cost, 180.0);
    assert!(higher.monthly_cost > lower.monthly_cost);
    Ok(())
}

proptest! {
    #[test]
    fn monthly_cost_grows_with_requests(
        input in 0u64..100_000,
        output in 0u64..100_000,
        requests in 0u64..1_000_000,
        extra in 1u64..1_000,
    ) {
        for (key, _) in RateTable::builtin().iter() {
            let lower = quote_or_zero(
                RateTable::builtin(), &key.provider, &key.model,
                Workload::new(input, output, requests),
            );
            let higher = quote_or_zero(
                RateTable::builtin(), &key.provider, &key.model,
                Workload::new(input, output, requests + extra),
            );
            prop_assert!(higher.monthly_cost >= lower.monthly_cost);
        }
    }

    #[test]
    fn comparison_is_sorted_by_monthly_cost(
        input in 0u64..10_000,
        output in 0u64..10_000,
        requests in 0u64..10_000,
    ) {
        let rows = compare_models(RateTable::builtin(), Workload::new(input, output, requests));
        for pair in rows.windows(2) {
            prop_assert!(pair[0].1.monthly_cost <= pair[1].1.monthly_cost);
        }
    }
}
