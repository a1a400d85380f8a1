use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use thiserror::Error;

use crate::core::{DEFAULT_MAX_SCORE, DEFAULT_PARALLEL_THRESHOLD};
use crate::models::ScoringWeights;

/// Errors that can occur while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default = "default_max_score")]
    pub max_score: i64,
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            weights: WeightsConfig::default(),
            max_score: default_max_score(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

fn default_max_score() -> i64 { DEFAULT_MAX_SCORE }
fn default_parallel_threshold() -> usize { DEFAULT_PARALLEL_THRESHOLD }

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_property_type_weight")]
    pub property_type: i64,
    #[serde(default = "default_budget_weight")]
    pub budget: i64,
    #[serde(default = "default_rooms_weight")]
    pub rooms: i64,
    #[serde(default = "default_feature_match_weight")]
    pub feature_match: i64,
    #[serde(default = "default_feature_miss_penalty")]
    pub feature_miss: i64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            property_type: default_property_type_weight(),
            budget: default_budget_weight(),
            rooms: default_rooms_weight(),
            feature_match: default_feature_match_weight(),
            feature_miss: default_feature_miss_penalty(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            property_type: config.property_type,
            budget: config.budget,
            rooms: config.rooms,
            feature_match: config.feature_match,
            feature_miss: config.feature_miss,
        }
    }
}

fn default_property_type_weight() -> i64 { 15 }
fn default_budget_weight() -> i64 { 20 }
fn default_rooms_weight() -> i64 { 10 }
fn default_feature_match_weight() -> i64 { 5 }
fn default_feature_miss_penalty() -> i64 { 2 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with ESTATE__)
    pub fn load() -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., ESTATE__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        Self::finish(settings)
    }

    fn finish(config: Config) -> Result<Self, SettingsError> {
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings the service cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.server.port == 0 {
            return Err(SettingsError::Invalid {
                key: "server.port",
                reason: "must be non-zero".to_string(),
            });
        }
        if self.scoring.max_score <= 0 {
            return Err(SettingsError::Invalid {
                key: "scoring.max_score",
                reason: format!("must be positive, got {}", self.scoring.max_score),
            });
        }
        if self.scoring.weights.feature_miss < 0 {
            return Err(SettingsError::Invalid {
                key: "scoring.weights.feature_miss",
                reason: "is a penalty magnitude and cannot be negative".to_string(),
            });
        }
        Ok(())
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("ESTATE")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
