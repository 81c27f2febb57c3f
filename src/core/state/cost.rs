use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{
    core::{cmd::Cmd, msg::cost::CostMsg},
    domain::pricing::{
        compare_models, quote, ModelKey, PriceQuote, PricingError, RateTable, Workload,
    },
};

/// Tokens added or removed per key press
pub const TOKEN_STEP: u64 = 100;
/// Requests per day added or removed per key press
pub const REQUEST_STEP: u64 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum CostField {
    #[default]
    Provider,
    Model,
    #[strum(to_string = "Input tokens")]
    InputTokens,
    #[strum(to_string = "Output tokens")]
    OutputTokens,
    #[strum(to_string = "Requests / day")]
    RequestsPerDay,
}

impl CostField {
    pub fn next(self) -> Self {
        let fields: Vec<CostField> = CostField::iter().collect();
        let index = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(index + 1) % fields.len()]
    }

    pub fn previous(self) -> Self {
        let fields: Vec<CostField> = CostField::iter().collect();
        let index = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(index + fields.len() - 1) % fields.len()]
    }
}

/// Cost calculator inputs and the quotes derived from them
#[derive(Debug, Clone, PartialEq)]
pub struct CostState {
    table: RateTable,
    pub provider: String,
    pub model: String,
    pub workload: Workload,
    pub focus: CostField,
    quote: Result<PriceQuote, PricingError>,
    comparison: Vec<(ModelKey, PriceQuote)>,
}

impl Default for CostState {
    fn default() -> Self {
        Self::new(RateTable::builtin().clone())
    }
}

impl CostState {
    pub const DEFAULT_PROVIDER: &'static str = "openai";
    pub const DEFAULT_MODEL: &'static str = "gpt-4";

    /// openai/gpt-4 with 1,000 input and 500 output tokens, 100 requests a day
    ///
    /// Falls back to the first model in the table when that one is missing.
    pub fn new(table: RateTable) -> Self {
        let (provider, model) = if table
            .get(Self::DEFAULT_PROVIDER, Self::DEFAULT_MODEL)
            .is_some()
        {
            (Self::DEFAULT_PROVIDER.to_owned(), Self::DEFAULT_MODEL.to_owned())
        } else {
            table
                .iter()
                .next()
                .map(|(key, _)| (key.provider.clone(), key.model.clone()))
                .unwrap_or_default()
        };

        let mut state = Self {
            table,
            provider,
            model,
            workload: Workload::new(1000, 500, 100),
            focus: CostField::default(),
            quote: Ok(PriceQuote::default()),
            comparison: vec![],
        };
        state.recompute();
        state
    }

    pub fn table(&self) -> &RateTable {
        &self.table
    }

    pub fn quote(&self) -> Result<&PriceQuote, &PricingError> {
        self.quote.as_ref()
    }

    /// Every model priced for the current workload, cheapest first
    pub fn comparison(&self) -> &[(ModelKey, PriceQuote)] {
        &self.comparison
    }

    pub fn selected_key(&self) -> ModelKey {
        ModelKey::new(&self.provider, &self.model)
    }

    fn recompute(&mut self) {
        self.quote = quote(&self.table, &self.provider, &self.model, self.workload);
        self.comparison = compare_models(&self.table, self.workload);
    }

    fn cycle_provider(&mut self, forward: bool) {
        let providers = self.table.providers();
        let Some(next) = cycle(&providers, &self.provider, forward) else {
            return;
        };
        let model = self.table.models(next).first().map(|m| (*m).to_owned());

        self.provider = next.to_owned();
        self.model = model.unwrap_or_default();
    }

    fn cycle_model(&mut self, forward: bool) {
        let models = self.table.models(&self.provider);
        if let Some(next) = cycle(&models, &self.model, forward) {
            self.model = next.to_owned();
        }
    }

    fn step(&mut self, forward: bool) {
        let adjust = |value: u64, step: u64| {
            if forward {
                value.saturating_add(step)
            } else {
                value.saturating_sub(step)
            }
        };

        match self.focus {
            CostField::Provider => self.cycle_provider(forward),
            CostField::Model => self.cycle_model(forward),
            CostField::InputTokens => {
                self.workload.input_tokens = adjust(self.workload.input_tokens, TOKEN_STEP)
            }
            CostField::OutputTokens => {
                self.workload.output_tokens = adjust(self.workload.output_tokens, TOKEN_STEP)
            }
            CostField::RequestsPerDay => {
                self.workload.requests_per_day =
                    adjust(self.workload.requests_per_day, REQUEST_STEP)
            }
        }
    }

    pub fn update(&mut self, msg: CostMsg) -> Vec<Cmd> {
        match msg {
            CostMsg::NextField => self.focus = self.focus.next(),
            CostMsg::PreviousField => self.focus = self.focus.previous(),
            CostMsg::Increase => {
                self.step(true);
                self.recompute();
            }
            CostMsg::Decrease => {
                self.step(false);
                self.recompute();
            }
        }
        vec![]
    }
}

/// Neighbour of `current` in `items`, wrapping; the first item when `current` is absent
fn cycle<'a>(items: &[&'a str], current: &str, forward: bool) -> Option<&'a str> {
    if items.is_empty() {
        return None;
    }
    let len = items.len();
    let next = match items.iter().position(|item| *item == current) {
        Some(index) if forward => (index + 1) % len,
        Some(index) => (index + len - 1) % len,
        None => 0,
    };
    Some(items[next])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::pricing::{ModelRate, RateEntry};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_default_quote() {
        let state = CostState::default();
        assert_eq!(state.provider, "openai");
        assert_eq!(state.model, "gpt-4");

        let quote = state.quote().copied().unwrap_or_default();
        assert_close(quote.per_request_cost, 0.06);
        assert_close(quote.daily_cost, 6.0);
        assert_close(quote.monthly_cost, 180.0);
    }

    #[test]
    fn test_fields_cycle() {
        let mut state = CostState::default();
        state.update(CostMsg::PreviousField);
        assert_eq!(state.focus, CostField::RequestsPerDay);
        state.update(CostMsg::NextField);
        assert_eq!(state.focus, CostField::Provider);
    }

    #[test]
    fn test_decrease_clamps_at_zero() {
        let mut state = CostState::default();
        state.focus = CostField::InputTokens;
        for _ in 0..20 {
            state.update(CostMsg::Decrease);
        }
        assert_eq!(state.workload.input_tokens, 0);
    }

    #[test]
    fn test_requests_step_updates_monthly_cost() {
        let mut state = CostState::default();
        state.focus = CostField::RequestsPerDay;
        state.update(CostMsg::Increase);

        assert_eq!(state.workload.requests_per_day, 110);
        let quote = state.quote().copied().unwrap_or_default();
        assert_close(quote.monthly_cost, 198.0);
    }

    #[test]
    fn test_provider_change_selects_its_first_model() {
        let mut state = CostState::default();
        state.update(CostMsg::Increase);

        // providers sort as anthropic, google, openai
        assert_eq!(state.provider, "anthropic");
        assert_eq!(state.model, "claude-3-haiku");
        assert!(state.quote().is_ok());
    }

    #[test]
    fn test_model_cycles_within_provider() {
        let mut state = CostState::default();
        state.focus = CostField::Model;
        state.update(CostMsg::Increase);

        assert_eq!(state.provider, "openai");
        assert_eq!(state.model, "gpt-4-turbo");
    }

    #[test]
    fn test_comparison_marks_selection() {
        let state = CostState::default();
        assert_eq!(state.comparison().len(), state.table().len());
        assert!(state
            .comparison()
            .iter()
            .any(|(key, _)| *key == state.selected_key()));
    }

    #[test]
    fn test_missing_default_falls_back() {
        let table: RateTable = [(ModelKey::new("local", "tiny"), ModelRate::new(0.0, 0.0))]
            .into_iter()
            .collect();
        let state = CostState::new(table);
        assert_eq!((state.provider.as_str(), state.model.as_str()), ("local", "tiny"));
    }

    #[test]
    fn test_override_changes_quote() {
        let entry = RateEntry {
            provider: "openai".into(),
            model: "gpt-4".into(),
            input_per_1k: 0.0,
            output_per_1k: 0.0,
        };
        let state = CostState::new(RateTable::with_overrides([&entry]));
        let quote = state.quote().copied().unwrap_or_default();
        assert_close(quote.monthly_cost, 0.0);
    }

    #[test]
    fn test_cycle_helper() {
        let items = ["a", "b", "c"];
        assert_eq!(cycle(&items, "c", true), Some("a"));
        assert_eq!(cycle(&items, "a", false), Some("c"));
        assert_eq!(cycle(&items, "zzz", true), Some("a"));
        assert_eq!(cycle(&[], "a", true), None);
    }
}
