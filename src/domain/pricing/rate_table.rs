use std::collections::BTreeMap;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// USD per 1,000 tokens
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelRate {
    pub input_per_1k: f64,
    pub output_per_1k: f64,
}

impl ModelRate {
    pub const fn new(input_per_1k: f64, output_per_1k: f64) -> Self {
        Self {
            input_per_1k,
            output_per_1k,
        }
    }

    /// Both prices finite and not negative
    pub fn is_valid(&self) -> bool {
        [self.input_per_1k, self.output_per_1k]
            .iter()
            .all(|price| price.is_finite() && *price >= 0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModelKey {
    pub provider: String,
    pub model: String,
}

impl ModelKey {
    pub fn new(provider: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            model: model.into(),
        }
    }
}

/// A rate table row as it appears in the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    pub provider: String,
    pub model: String,
    pub input_per_1k: f64,
    pub output_per_1k: f64,
}

const BUILTIN_RATES: &[(&str, &str, f64, f64)] = &[
    ("openai", "gpt-4", 0.03, 0.06),
    ("openai", "gpt-4-turbo", 0.01, 0.03),
    ("openai", "gpt-4o", 0.005, 0.015),
    ("openai", "gpt-4o-mini", 0.00015, 0.0006),
    ("openai", "gpt-3.5-turbo", 0.0005, 0.0015),
    ("anthropic", "claude-3-opus", 0.015, 0.075),
    ("anthropic", "claude-3-sonnet", 0.003, 0.015),
    ("anthropic", "claude-3-haiku", 0.00025, 0.00125),
    ("google", "gemini-pro", 0.00025, 0.0005),
    ("google", "gemini-1.5-pro", 0.0035, 0.0105),
];

lazy_static! {
    static ref BUILTIN: RateTable = BUILTIN_RATES
        .iter()
        .map(|&(provider, model, input, output)| {
            (ModelKey::new(provider, model), ModelRate::new(input, output))
        })
        .collect();
}

/// Read-only (provider, model) → rate lookup, ordered by key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    rates: BTreeMap<ModelKey, ModelRate>,
}

impl RateTable {
    pub fn builtin() -> &'static RateTable {
        &BUILTIN
    }

    /// Built-in rates with config entries layered on top
    ///
    /// Entries with a negative or non-finite price are skipped.
    pub fn with_overrides<'a>(entries: impl IntoIterator<Item = &'a RateEntry>) -> Self {
        let mut table = Self::builtin().clone();
        for entry in entries {
            let rate = ModelRate::new(entry.input_per_1k, entry.output_per_1k);
            if !rate.is_valid() {
                log::warn!(
                    "Ignoring pricing entry {}/{}: rates must be finite and not negative",
                    entry.provider,
                    entry.model
                );
                continue;
            }
            table
                .rates
                .insert(ModelKey::new(&entry.provider, &entry.model), rate);
        }
        table
    }

    pub fn get(&self, provider: &str, model: &str) -> Option<ModelRate> {
        self.rates.get(&ModelKey::new(provider, model)).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ModelKey, &ModelRate)> {
        self.rates.iter()
    }

    pub fn providers(&self) -> Vec<&str> {
        let mut providers: Vec<&str> = self.rates.keys().map(|k| k.provider.as_str()).collect();
        providers.dedup();
        providers
    }

    pub fn models(&self, provider: &str) -> Vec<&str> {
        self.rates
            .keys()
            .filter(|k| k.provider == provider)
            .map(|k| k.model.as_str())
            .collect()
    }
}

impl FromIterator<(ModelKey, ModelRate)> for RateTable {
    fn from_iter<T: IntoIterator<Item = (ModelKey, ModelRate)>>(iter: T) -> Self {
        Self {
            rates: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_builtin_table() {
        let table = RateTable::builtin();
        assert_eq!(table.len(), 10);
        assert_eq!(
            table.get("openai", "gpt-4"),
            Some(ModelRate::new(0.03, 0.06))
        );
        assert_eq!(table.get("openai", "gpt-5"), None);
    }

    #[test]
    fn test_providers_sorted_and_unique() {
        assert_eq!(
            RateTable::builtin().providers(),
            vec!["anthropic", "google", "openai"]
        );
    }

    #[test]
    fn test_models_for_provider() {
        assert_eq!(
            RateTable::builtin().models("google"),
            vec!["gemini-1.5-pro", "gemini-pro"]
        );
        assert!(RateTable::builtin().models("nobody").is_empty());
    }

    #[test]
    fn test_overrides_add_and_replace() {
        let entries = vec![
            RateEntry {
                provider: "openai".to_owned(),
                model: "gpt-4".to_owned(),
                input_per_1k: 0.02,
                output_per_1k: 0.04,
            },
            RateEntry {
                provider: "mistral".to_owned(),
                model: "mistral-large".to_owned(),
                input_per_1k: 0.004,
                output_per_1k: 0.012,
            },
        ];
        let table = RateTable::with_overrides(&entries);

        assert_eq!(table.len(), 11);
        assert_eq!(
            table.get("openai", "gpt-4"),
            Some(ModelRate::new(0.02, 0.04))
        );
        assert!(table.providers().contains(&"mistral"));
        // builtin table is untouched
        assert_eq!(
            RateTable::builtin().get("openai", "gpt-4"),
            Some(ModelRate::new(0.03, 0.06))
        );
    }

    #[rstest]
    #[case(-0.03, 0.06)]
    #[case(0.03, f64::NAN)]
    #[case(f64::INFINITY, 0.06)]
    fn test_invalid_overrides_are_skipped(#[case] input: f64, #[case] output: f64) {
        let entries = vec![
            RateEntry {
                provider: "openai".to_owned(),
                model: "gpt-4".to_owned(),
                input_per_1k: input,
                output_per_1k: output,
            },
            RateEntry {
                provider: "acme".to_owned(),
                model: "broken".to_owned(),
                input_per_1k: input,
                output_per_1k: output,
            },
        ];
        let table = RateTable::with_overrides(&entries);

        assert_eq!(table.len(), 10);
        assert_eq!(
            table.get("openai", "gpt-4"),
            Some(ModelRate::new(0.03, 0.06))
        );
        assert_eq!(table.get("acme", "broken"), None);
    }
}
