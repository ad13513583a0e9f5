use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::finance::ViewPeriod;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub storage: StorageConfig,
    pub assistant: AssistantConfig,
    pub calendar: CalendarConfig,
    pub finances: FinancesConfig,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Json,
    Sqlite,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssistantConfig {
    pub reply_delay_ms: u64,
    pub transcript_limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarConfig {
    pub upcoming_limit: usize,
    pub events_per_day: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancesConfig {
    pub default_period: ViewPeriod,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    pub fn load_or_create() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nonprofit-crm")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nonprofit-crm");

        Self {
            storage: StorageConfig {
                backend: StorageBackend::Json,
                data_dir,
            },
            assistant: AssistantConfig {
                reply_delay_ms: 500,
                transcript_limit: 20,
            },
            calendar: CalendarConfig {
                upcoming_limit: 8,
                events_per_day: 2,
            },
            finances: FinancesConfig {
                default_period: ViewPeriod::Monthly,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_json_backend() {
        let config = Config::default();
        assert_eq!(config.storage.backend, StorageBackend::Json);
    }

    #[test]
    fn default_config_delays_assistant_half_a_second() {
        let config = Config::default();
        assert_eq!(config.assistant.reply_delay_ms, 500);
    }

    #[test]
    fn default_config_keeps_twenty_transcript_entries() {
        let config = Config::default();
        assert_eq!(config.assistant.transcript_limit, 20);
    }

    #[test]
    fn default_config_shows_eight_upcoming_events() {
        let config = Config::default();
        assert_eq!(config.calendar.upcoming_limit, 8);
        assert_eq!(config.calendar.events_per_day, 2);
    }

    #[test]
    fn parse_valid_toml_config() {
        let toml_content = r#"
            [storage]
            backend = "sqlite"
            data_dir = "/tmp/crm"

            [assistant]
            reply_delay_ms = 0
            transcript_limit = 50

            [calendar]
            upcoming_limit = 5
            events_per_day = 3

            [finances]
            default_period = "yearly"
        "#;

        let config = Config::from_toml(toml_content).unwrap();

        assert_eq!(config.storage.backend, StorageBackend::Sqlite);
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/crm"));
        assert_eq!(config.assistant.transcript_limit, 50);
        assert_eq!(config.calendar.upcoming_limit, 5);
        assert_eq!(config.finances.default_period, ViewPeriod::Yearly);
    }

    #[test]
    fn parse_invalid_toml_returns_error() {
        let invalid_toml = "this is not valid toml";
        let result = Config::from_toml(invalid_toml);
        assert!(result.is_err());
    }

    #[test]
    fn default_config_survives_toml_round_trip() {
        let config = Config::default();
        let content = toml::to_string_pretty(&config).unwrap();

        assert_eq!(Config::from_toml(&content).unwrap(), config);
    }
}
