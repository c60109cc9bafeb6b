use serde::{Deserialize, Serialize};

use super::codec::CodecConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::registry::RegistryConfig;
use crate::dns_record::TypeRegistry;

const LOCAL_CONFIG_PATH: &str = "rrhex.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/rrhex/config.toml";

/// Main configuration structure for rrhex
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Wire codec behaviour
    #[serde(default)]
    pub codec: CodecConfig,

    /// Record types the encoder accepts by name
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. rrhex.toml in current directory
    /// 3. /etc/rrhex/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if overrides.strict {
            self.codec.strict = true;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LoggingConfig::is_valid_level(&self.logging.level) {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }

        self.registry.record_types()?;
        Ok(())
    }

    pub fn build_registry(&self) -> Result<TypeRegistry, ConfigError> {
        self.registry.build()
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = self.to_toml()?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file that would be loaded implicitly
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub strict: bool,
    pub log_level: Option<String>,
}
