use std::sync::Arc;

use rrhex_domain::{EncodeError, RecordDescription, TypeRegistry, MAX_DATA_LEN};

use super::limits::LabelLimits;
use super::wire::{append_u16, append_u32};

/// Fixed part of a record after the name: type, class, ttl, rdlength.
const FIXED_FIELDS_LEN: usize = 2 + 2 + 4 + 2;

/// Serializes record descriptions into uncompressed resource-record wire format.
pub struct RecordEncoder {
    registry: Arc<TypeRegistry>,
    limits: LabelLimits,
}

impl RecordEncoder {
    pub fn new(registry: Arc<TypeRegistry>, limits: LabelLimits) -> Self {
        Self { registry, limits }
    }

    /// Encodes `records` back to back, in input order.
    ///
    /// The first failing record aborts the call; no partial buffer is returned.
    pub fn encode(&self, records: &[RecordDescription]) -> Result<Vec<u8>, EncodeError> {
        let capacity = records.iter().map(estimated_len).sum();
        let mut out = Vec::with_capacity(capacity);

        for (index, record) in records.iter().enumerate() {
            self.encode_record(index, record, &mut out)?;
        }

        Ok(out)
    }

    fn encode_record(
        &self,
        index: usize,
        record: &RecordDescription,
        out: &mut Vec<u8>,
    ) -> Result<(), EncodeError> {
        self.append_name(index, record, out)?;

        let type_code =
            self.registry
                .resolve(&record.record_type)
                .map_err(|_| EncodeError::UnknownRecordType {
                    record: index,
                    name: record.record_type.clone(),
                })?;

        append_u16(out, type_code);
        append_u16(out, record.class);
        append_u32(out, record.ttl);

        let data = hex::decode(&record.data).map_err(|e| EncodeError::InvalidHexData {
            record: index,
            reason: e.to_string(),
        })?;
        if data.len() > MAX_DATA_LEN {
            return Err(EncodeError::DataTooLarge {
                record: index,
                len: data.len(),
            });
        }

        append_u16(out, data.len() as u16);
        out.extend_from_slice(&data);
        Ok(())
    }

    fn append_name(
        &self,
        index: usize,
        record: &RecordDescription,
        out: &mut Vec<u8>,
    ) -> Result<(), EncodeError> {
        let start = out.len();
        let max_label_len = self.limits.max_label_len();

        for (position, label) in record.labels().enumerate() {
            let bytes = label.as_bytes();
            if bytes.is_empty() {
                return Err(EncodeError::InvalidLabel {
                    record: index,
                    label: position,
                    domain: record.domain.clone(),
                });
            }
            if bytes.len() > max_label_len {
                return Err(EncodeError::LabelTooLong {
                    record: index,
                    label: label.to_string(),
                    len: bytes.len(),
                    max: max_label_len,
                });
            }

            out.push(bytes.len() as u8);
            out.extend_from_slice(bytes);
        }
        out.push(0);

        if let Some(max) = self.limits.max_name_len() {
            let len = out.len() - start;
            if len > max {
                return Err(EncodeError::NameTooLong {
                    record: index,
                    domain: record.domain.clone(),
                    len,
                    max,
                });
            }
        }

        Ok(())
    }
}

fn estimated_len(record: &RecordDescription) -> usize {
    // dotted text is one byte shorter than its label encoding, plus terminator
    let name = if record.is_root() {
        1
    } else {
        record.domain.len() + 2
    };
    name + FIXED_FIELDS_LEN + record.data.len() / 2
}
