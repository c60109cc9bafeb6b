//! rrhex domain layer: record model, type registry, errors and configuration
pub mod config;
pub mod dns_record;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{RecordDescription, RecordType, TypeRegistry, CLASS_IN, DEFAULT_TTL};
pub use errors::{DecodeError, EncodeError, RegistryError, WireField, MAX_DATA_LEN};
