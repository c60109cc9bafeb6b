pub mod codec;
pub mod errors;
pub mod logging;
pub mod registry;
pub mod root;

pub use codec::CodecConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use registry::RegistryConfig;
pub use root::{CliOverrides, Config};
