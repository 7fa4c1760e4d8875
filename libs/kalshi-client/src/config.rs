use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config file: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Top-level configuration for the exploratory binaries.
///
/// Credentials never live here; they come from the environment (see
/// [`crate::credentials::Credentials::from_env`]).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BotConfig {
    #[serde(default)]
    pub exchange: ExchangeConfig,
    #[serde(default)]
    pub explorer: ExplorerConfig,
}

/// Exchange API connection settings. Timeouts and pagination pacing are
/// explicit here rather than inherited from transport defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeConfig {
    pub api_base_url: String,
    /// Base URL for the unauthenticated orderbook endpoint.
    pub orderbook_base_url: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    /// Page size for cursor pagination.
    pub page_limit: u32,
    /// Pause between pages, for exchange rate limits.
    pub page_delay_ms: u64,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.elections.kalshi.com/trade-api/v2".to_string(),
            orderbook_base_url: "https://api.elections.kalshi.com/trade-api/v2".to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            page_limit: 200,
            page_delay_ms: 100,
        }
    }
}

/// Bounds for the market-exploration walk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// How many series to walk per run.
    pub max_series: usize,
    /// Event page size requested per series.
    pub events_per_series: u32,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            max_series: 50,
            events_per_series: 200,
        }
    }
}

impl BotConfig {
    /// Load configuration from a YAML file.
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let yaml_content = std::fs::read_to_string(config_path)?;
        let config: BotConfig = serde_yaml::from_str(&yaml_content)?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.exchange.api_base_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "api_base_url must not be empty".to_string(),
            ));
        }

        if self.exchange.timeout_secs == 0 || self.exchange.connect_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "timeouts must be greater than 0".to_string(),
            ));
        }

        if self.exchange.page_limit == 0 || self.exchange.page_limit > 200 {
            return Err(ConfigError::ValidationError(
                "page_limit must be between 1 and 200".to_string(),
            ));
        }

        if self.explorer.max_series == 0 {
            return Err(ConfigError::ValidationError(
                "max_series must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
