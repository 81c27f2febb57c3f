//! LLM API cost model
//!
//! Pure arithmetic over a static per-1K-token rate table. Costs keep full
//! `f64` precision; rounding happens only when formatted for display.

pub mod rate_table;

use thiserror::Error;
use thousands::Separable;

pub use rate_table::{ModelKey, ModelRate, RateEntry, RateTable};

pub const DAYS_PER_MONTH: f64 = 30.0;
pub const DAYS_PER_YEAR: f64 = 365.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("no rate for {provider}/{model}")]
    UnknownModel { provider: String, model: String },
}

/// Token volume for one request and the number of requests per day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Workload {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub requests_per_day: u64,
}

impl Workload {
    pub fn new(input_tokens: u64, output_tokens: u64, requests_per_day: u64) -> Self {
        Self {
            input_tokens,
            output_tokens,
            requests_per_day,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceQuote {
    pub input_token_cost: f64,
    pub output_token_cost: f64,
    pub per_request_cost: f64,
    pub daily_cost: f64,
    pub monthly_cost: f64,
    pub yearly_cost: f64,
}

impl PriceQuote {
    pub fn from_rate(rate: ModelRate, workload: Workload) -> Self {
        let input_token_cost = workload.input_tokens as f64 / 1000.0 * rate.input_per_1k;
        let output_token_cost = workload.output_tokens as f64 / 1000.0 * rate.output_per_1k;
        let per_request_cost = input_token_cost + output_token_cost;
        let daily_cost = per_request_cost * workload.requests_per_day as f64;

        Self {
            input_token_cost,
            output_token_cost,
            per_request_cost,
            daily_cost,
            monthly_cost: daily_cost * DAYS_PER_MONTH,
            yearly_cost: daily_cost * DAYS_PER_YEAR,
        }
    }
}

pub fn quote(
    table: &RateTable,
    provider: &str,
    model: &str,
    workload: Workload,
) -> Result<PriceQuote, PricingError> {
    table
        .get(provider, model)
        .map(|rate| PriceQuote::from_rate(rate, workload))
        .ok_or_else(|| PricingError::UnknownModel {
            provider: provider.to_owned(),
            model: model.to_owned(),
        })
}

/// Like [`quote`], but an unknown model costs nothing
pub fn quote_or_zero(
    table: &RateTable,
    provider: &str,
    model: &str,
    workload: Workload,
) -> PriceQuote {
    quote(table, provider, model, workload).unwrap_or_default()
}

/// Every model in the table priced for `workload`, cheapest monthly cost first
pub fn compare_models(table: &RateTable, workload: Workload) -> Vec<(ModelKey, PriceQuote)> {
    let mut quotes: Vec<(ModelKey, PriceQuote)> = table
        .iter()
        .map(|(key, rate)| (key.clone(), PriceQuote::from_rate(*rate, workload)))
        .collect();

    quotes.sort_by(|(a_key, a), (b_key, b)| {
        a.monthly_cost
            .total_cmp(&b.monthly_cost)
            .then_with(|| a_key.cmp(b_key))
    });

    quotes
}

/// `$1,234.57`
pub fn format_usd(amount: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, amount.abs()).separate_with_commas();
    if amount < 0.0 {
        format!("-${formatted}")
    } else {
        format!("${formatted}")
    }
}
