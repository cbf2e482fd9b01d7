//! CLI configuration

use serde::Deserialize;

/// Intake pipeline configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// Log level
    pub log_level: String,
    /// Pretty-print the output JSON
    pub pretty: bool,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            pretty: true,
        }
    }
}

impl IntakeConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("FNOL"))
            .build()?
            .try_deserialize()
    }
}
