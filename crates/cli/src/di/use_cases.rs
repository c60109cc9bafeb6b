use rrhex_application::use_cases::{DecodeRecordsUseCase, EncodeRecordsUseCase};
use rrhex_application::LabelLimits;
use rrhex_domain::{Config, TypeRegistry};
use std::sync::Arc;
use tracing::debug;

pub struct UseCases {
    pub registry: Arc<TypeRegistry>,
    pub encode: EncodeRecordsUseCase,
    pub decode: DecodeRecordsUseCase,
}

impl UseCases {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let registry = Arc::new(config.build_registry()?);
        let limits = LabelLimits::from_config(&config.codec);

        debug!(
            types = registry.len(),
            strict = limits.is_strict(),
            "Codec configured"
        );

        Ok(Self {
            encode: EncodeRecordsUseCase::new(registry.clone(), limits),
            decode: DecodeRecordsUseCase::new(registry.clone(), limits),
            registry,
        })
    }
}
