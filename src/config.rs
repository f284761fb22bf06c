use std::path::Path;

use crate::ai::SearchConfig;
use crate::error::ConfigError;

/// UI tuning knobs.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Delay before a scheduled computer move is played, in milliseconds.
    /// Human input is ignored while the move is pending.
    pub ai_delay_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig { ai_delay_ms: 400 }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.depth == 0 {
            return Err(ConfigError::Validation("search.depth must be >= 1".into()));
        }
        if self.search.adjacent_weight < 0 {
            return Err(ConfigError::Validation(
                "search.adjacent_weight must be >= 0".into(),
            ));
        }
        if self.search.center_weight < self.search.adjacent_weight {
            return Err(ConfigError::Validation(
                "search.center_weight must be >= search.adjacent_weight".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.search.depth, 9);
        assert_eq!(config.ui.ai_delay_ms, 400);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: AppConfig = toml::from_str("[search]\ndepth = 5\n").unwrap();
        assert_eq!(config.search.depth, 5);
        assert_eq!(
            config.search.center_weight,
            SearchConfig::default().center_weight
        );
        assert_eq!(config.ui.ai_delay_ms, 400);
    }

    #[test]
    fn zero_depth_is_rejected() {
        let config: AppConfig = toml::from_str("[search]\ndepth = 0\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn inverted_weights_are_rejected() {
        let config: AppConfig =
            toml::from_str("[search]\ncenter_weight = 1\nadjacent_weight = 3\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_or_default_without_file() {
        let config = AppConfig::load_or_default(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config.search.depth, AppConfig::default().search.depth);
    }
}
