use std::path::Path;

use crate::ai::AgentKind;
use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub play: PlayConfig,
}

/// Self-play match settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    pub num_games: usize,
    /// Games still running after this many plies are abandoned
    pub max_plies: usize,
    /// Seed for dice and random agents; fresh entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub agent_x: AgentKind,
    pub agent_o: AgentKind,
    pub log_interval: usize,
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig {
            num_games: 100,
            max_plies: 2_000,
            seed: None,
            agent_x: AgentKind::Greedy,
            agent_o: AgentKind::Random,
            log_interval: 10,
        }
    }
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

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.play.num_games == 0 {
            return Err(ConfigError::Validation(
                "play.num_games must be > 0".into(),
            ));
        }
        if self.play.max_plies == 0 {
            return Err(ConfigError::Validation(
                "play.max_plies must be > 0".into(),
            ));
        }
        if self.play.log_interval == 0 {
            return Err(ConfigError::Validation(
                "play.log_interval must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
