use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use crate::dns_record::{RecordType, TypeRegistry};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RegistryConfig {
    /// Record types accepted by name. Empty enables every known type.
    #[serde(default)]
    pub types: Vec<String>,
}

impl RegistryConfig {
    pub fn record_types(&self) -> Result<Vec<RecordType>, ConfigError> {
        self.types
            .iter()
            .map(|name| {
                name.parse::<RecordType>()
                    .map_err(|e| ConfigError::Validation(format!("registry.types: {}", e)))
            })
            .collect()
    }

    pub fn build(&self) -> Result<TypeRegistry, ConfigError> {
        if self.types.is_empty() {
            return Ok(TypeRegistry::standard());
        }
        Ok(TypeRegistry::with_types(self.record_types()?))
    }
}
