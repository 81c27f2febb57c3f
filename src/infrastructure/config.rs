use config::ConfigError;
use serde::Deserialize;

use crate::{
    domain::{compression::Sample, pricing::RateEntry, rate_limit::SimulatorSettings},
    presentation::config::{keybindings::KeyBindings, styles::Styles},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub styles: Styles,
    #[serde(default)]
    pub simulator: SimulatorSettings,
    #[serde(default)]
    pub pricing: Vec<RateEntry>,
    #[serde(default)]
    pub samples: Vec<Sample>,
}

impl Config {
    /// Embedded defaults layered under the first user config file found
    ///
    /// A missing user file is fine; the embedded defaults are used as is.
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder();

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            let path = config_dir.join(file);
            if path.exists() {
                log::info!("Loading config from {}", path.display());
                found_config = true;
            }
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }

        if !found_config {
            log::info!(
                "No configuration file in {}, using defaults",
                config_dir.display()
            );
            return Ok(default_config);
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        Ok(cfg.merged_over(default_config))
    }

    /// The defaults shipped inside the binary
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Fill in every binding and style the user did not set from `defaults`
    pub fn merged_over(mut self, defaults: Config) -> Self {
        for (mode, default_bindings) in defaults.keybindings.iter() {
            let user_bindings = self.keybindings.entry(*mode).or_default();
            for (key, action) in default_bindings.iter() {
                user_bindings
                    .entry(key.clone())
                    .or_insert_with(|| action.clone());
            }
        }
        for (mode, default_styles) in defaults.styles.iter() {
            let user_styles = self.styles.entry(*mode).or_default();
            for (name, style) in default_styles.iter() {
                user_styles.entry(name.clone()).or_insert_with(|| *style);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        domain::rate_limit::Strategy,
        presentation::config::keybindings::{Action, Mode},
    };

    #[test]
    fn test_embedded_config_parses() {
        let cfg = Config::embedded().unwrap();

        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(cfg.keybindings.action_for(Mode::Cost, q), Some(&Action::Quit));
        assert_eq!(cfg.simulator, SimulatorSettings::default());
        assert!(cfg.pricing.is_empty());
        assert!(cfg.styles.get(&Mode::Global).is_some());
    }

    #[test]
    fn test_config_new_succeeds_without_user_file() {
        // a user config may exist on the machine running the tests; either way
        // loading must succeed and the default bindings must be present
        let cfg = Config::new().unwrap();
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert!(cfg.keybindings.action_for(Mode::Global, tab).is_some());
    }

    #[test]
    fn test_user_bindings_win_over_defaults() {
        let user: Config = json5::from_str(
            r#"{
                "keybindings": { "Global": { "<q>": "Suspend" } },
                "simulator": { "strategy": "backoff" },
                "pricing": [
                    { "provider": "acme", "model": "tiny", "input_per_1k": 0.1, "output_per_1k": 0.2 },
                ],
            }"#,
        )
        .unwrap();
        let cfg = user.merged_over(Config::embedded().unwrap());

        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(cfg.keybindings.action_for(Mode::Global, q), Some(&Action::Suspend));
        assert_eq!(
            cfg.keybindings.action_for(Mode::Global, tab),
            Some(&Action::NextTab)
        );
        assert_eq!(cfg.simulator.strategy, Strategy::Backoff);
        assert_eq!(cfg.simulator.max_per_window, 60);
        assert_eq!(cfg.pricing.len(), 1);
    }
}
