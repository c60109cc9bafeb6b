//! rrhex application layer: the resource-record wire codec and its use cases
use std::sync::Arc;

use rrhex_domain::{DecodeError, EncodeError, RecordDescription, TypeRegistry};

pub mod codec;
pub mod use_cases;

pub use codec::{parse_hex_input, LabelLimits, RecordDecoder, RecordEncoder};
pub use use_cases::{DecodeRecordsUseCase, EncodeRecordsUseCase};

/// Encodes `records` to hex with the standard registry and lenient limits.
pub fn encode(records: &[RecordDescription]) -> Result<String, EncodeError> {
    EncodeRecordsUseCase::new(Arc::new(TypeRegistry::standard()), LabelLimits::LENIENT)
        .execute(records)
}

/// Decodes hex `input` with the standard registry and lenient limits.
pub fn decode(input: &str) -> Result<Vec<RecordDescription>, DecodeError> {
    DecodeRecordsUseCase::new(Arc::new(TypeRegistry::standard()), LabelLimits::LENIENT)
        .execute(input)
}
