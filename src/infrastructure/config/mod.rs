use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};
use crate::domain::water::IngestConfig;

/// Environment variable prefix, e.g. `WATERTREAT_MAX_FILE_SIZE`
pub const ENV_PREFIX: &str = "WATERTREAT_";

pub const DEFAULT_CONFIG_FILE: &str = "watertreat.toml";

/// Process-level settings for embedding services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Deployment environment name
    pub environment: String,

    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,

    /// Upload limit in bytes
    pub max_file_size: usize,

    /// Fixed CSV delimiter; detected when unset
    pub delimiter: Option<char>,
}

impl Default for Settings {
    fn default() -> Self {
        let ingest = IngestConfig::default();
        Self {
            environment: "development".to_string(),
            log_filter: "info".to_string(),
            max_file_size: ingest.max_file_size,
            delimiter: None,
        }
    }
}

impl Settings {
    /// Defaults, then `watertreat.toml`, then `WATERTREAT_*` variables.
    /// A `.env` file is loaded into the environment first when present.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    pub fn load_from(config_file: impl AsRef<Path>) -> Result<Self> {
        Self::from_figment(
            Self::base_figment()
                .merge(Toml::file(config_file.as_ref()))
                .merge(Env::prefixed(ENV_PREFIX)),
        )
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let settings: Settings = figment
            .extract()
            .map_err(|e| AppError::ConfigError(e.to_string()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the CSV reader cannot use
    pub fn validate(&self) -> Result<()> {
        if let Some(delimiter) = self.delimiter {
            if !delimiter.is_ascii() {
                return Err(AppError::ConfigError(format!(
                    "delimiter {:?} must be a single ASCII character",
                    delimiter
                )));
            }
        }

        self.ingest_config().validate().map_err(AppError::ConfigError)
    }

    pub fn base_figment() -> Figment {
        Figment::from(Serialized::defaults(Settings::default()))
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    /// Ingest options derived from these settings
    pub fn ingest_config(&self) -> IngestConfig {
        let mut config = IngestConfig::new().with_max_file_size(self.max_file_size);
        if let Some(delimiter) = self.delimiter {
            config = config.with_delimiter(delimiter as u8);
        }
        config
    }
}
