use std::sync::Arc;

use rrhex_domain::{DecodeError, RecordDescription, TypeRegistry};
use tracing::debug;

use crate::codec::{parse_hex_input, LabelLimits, RecordDecoder};

pub struct DecodeRecordsUseCase {
    decoder: RecordDecoder,
}

impl DecodeRecordsUseCase {
    pub fn new(registry: Arc<TypeRegistry>, limits: LabelLimits) -> Self {
        Self {
            decoder: RecordDecoder::new(registry, limits),
        }
    }

    /// Validates `input` as hex and decodes the records it carries.
    pub fn execute(&self, input: &str) -> Result<Vec<RecordDescription>, DecodeError> {
        let bytes = parse_hex_input(input).map_err(|e| {
            debug!(error = %e, "Rejected hex input");
            e
        })?;

        debug!(bytes = bytes.len(), "Decoding resource records");

        let records = self.decoder.decode(&bytes).map_err(|e| {
            debug!(error = %e, offset = ?e.offset(), "Decoding failed");
            e
        })?;

        debug!(records = records.len(), "Resource records decoded");
        Ok(records)
    }
}
