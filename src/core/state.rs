pub mod compression;
pub mod cost;
pub mod editor;
pub mod navigation;
pub mod rate_limit;
pub mod system;

use compression::CompressionState;
use cost::CostState;
use navigation::{NavigationState, Tab};
use rate_limit::RateLimitState;
use system::SystemState;

use crate::{
    domain::{
        compression::{builtin_samples, Scheme, WindowSize},
        pricing::RateTable,
    },
    infrastructure::config::Config,
    presentation::config::Mode,
};

/// Unified application state
///
/// The three widget states never read each other; only the shell parts
/// (navigation, system) look across them.
#[derive(Debug, Clone)]
pub struct AppState {
    pub navigation: NavigationState,
    pub compression: CompressionState,
    pub cost: CostState,
    pub rate_limit: RateLimitState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    pub config: Config,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl AppState {
    /// Builds every widget from the loaded configuration
    ///
    /// Configured samples follow the built-in ones and configured rates
    /// override built-in entries with the same key.
    pub fn new(config: Config) -> Self {
        let mut samples = builtin_samples();
        samples.extend(config.samples.iter().cloned());

        Self {
            navigation: NavigationState::default(),
            compression: CompressionState::new(samples, Scheme::default(), WindowSize::default()),
            cost: CostState::new(RateTable::with_overrides(&config.pricing)),
            rate_limit: RateLimitState::new(config.simulator),
            system: SystemState::default(),
            config: ConfigState { config },
        }
    }

    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.navigation.current = tab;
        self
    }

    pub fn current_tab(&self) -> Tab {
        self.navigation.current
    }

    /// Key binding scope for the current screen
    pub fn mode(&self) -> Mode {
        match self.current_tab() {
            Tab::Compression if self.compression.editing => Mode::Editing,
            tab => tab.mode(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::{
        compression::Sample,
        pricing::RateEntry,
        rate_limit::{SimulatorSettings, Strategy},
    };

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert_eq!(state.current_tab(), Tab::Compression);
        assert_eq!(state.mode(), Mode::Compression);
        assert!(!state.system.should_quit);
        assert!(!state.rate_limit.is_running());
    }

    #[test]
    fn test_editing_mode_only_on_compression_tab() {
        let mut state = AppState::default();
        state.compression.editing = true;
        assert_eq!(state.mode(), Mode::Editing);

        let state = state.with_tab(Tab::Cost);
        assert_eq!(state.mode(), Mode::Cost);
    }

    #[test]
    fn test_config_flows_into_widgets() {
        let config = Config {
            samples: vec![Sample::new("mine", "zzz")],
            pricing: vec![RateEntry {
                provider: "local".into(),
                model: "tiny".into(),
                input_per_1k: 0.0,
                output_per_1k: 0.0,
            }],
            simulator: SimulatorSettings {
                strategy: Strategy::Queue,
                ..Default::default()
            },
            ..Default::default()
        };
        let state = AppState::new(config);

        assert_eq!(
            state.compression.samples.last().map(|s| s.name.as_str()),
            Some("mine")
        );
        assert!(state.cost.table().get("local", "tiny").is_some());
        assert_eq!(state.rate_limit.simulator.strategy(), Strategy::Queue);
    }
}
