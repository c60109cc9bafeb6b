use std::sync::Arc;

use rrhex_domain::{EncodeError, RecordDescription, TypeRegistry};
use tracing::debug;

use crate::codec::{LabelLimits, RecordEncoder};

pub struct EncodeRecordsUseCase {
    encoder: RecordEncoder,
}

impl EncodeRecordsUseCase {
    pub fn new(registry: Arc<TypeRegistry>, limits: LabelLimits) -> Self {
        Self {
            encoder: RecordEncoder::new(registry, limits),
        }
    }

    /// Encodes `records` and returns the wire bytes as lower-case hex.
    pub fn execute(&self, records: &[RecordDescription]) -> Result<String, EncodeError> {
        debug!(records = records.len(), "Encoding resource records");

        let bytes = self.encoder.encode(records).map_err(|e| {
            debug!(error = %e, record = e.record(), "Encoding failed");
            e
        })?;

        debug!(bytes = bytes.len(), "Resource records encoded");
        Ok(hex::encode(bytes))
    }
}
