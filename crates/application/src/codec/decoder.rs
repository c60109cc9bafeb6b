use std::sync::Arc;

use rrhex_domain::{DecodeError, RecordDescription, TypeRegistry, WireField};

use super::limits::LabelLimits;
use super::wire::WireReader;

/// Top two bits of a length byte that mark a compression pointer.
const POINTER_MASK: u8 = 0xC0;

/// Parses a buffer of back-to-back resource records.
///
/// The type code of each record is reported through the registry's reverse
/// lookup, so codes outside the registry come back as `TYPE<n>`.
pub struct RecordDecoder {
    registry: Arc<TypeRegistry>,
    limits: LabelLimits,
}

impl RecordDecoder {
    pub fn new(registry: Arc<TypeRegistry>, limits: LabelLimits) -> Self {
        Self { registry, limits }
    }

    /// Decodes every record in `buf`. An empty buffer yields no records.
    ///
    /// Decoding succeeds only when the last record ends exactly at the end of
    /// the buffer; any short or malformed record fails the whole call.
    pub fn decode(&self, buf: &[u8]) -> Result<Vec<RecordDescription>, DecodeError> {
        let mut reader = WireReader::new(buf);
        let mut records = Vec::new();

        while !reader.is_at_end() {
            reader.set_record(records.len());
            records.push(self.decode_record(&mut reader)?);
        }

        Ok(records)
    }

    fn decode_record(&self, reader: &mut WireReader<'_>) -> Result<RecordDescription, DecodeError> {
        let domain = self.read_name(reader)?;

        let type_code = reader.read_u16(WireField::Type)?;
        let class = reader.read_u16(WireField::Class)?;
        let ttl = reader.read_u32(WireField::Ttl)?;
        let data_len = reader.read_u16(WireField::DataLength)? as usize;
        let data = reader.take(data_len, WireField::Data)?;

        Ok(RecordDescription {
            domain,
            record_type: self.registry.name_for(type_code),
            class,
            ttl,
            data: hex::encode(data),
        })
    }

    fn read_name(&self, reader: &mut WireReader<'_>) -> Result<String, DecodeError> {
        let start = reader.position();
        let mut labels: Vec<&str> = Vec::new();

        loop {
            let offset = reader.position();
            let len = reader.read_u8(WireField::Label)?;
            if len == 0 {
                break;
            }

            if len as usize > self.limits.max_label_len() {
                let reason = if len & POINTER_MASK == POINTER_MASK {
                    "compression pointers are not supported".to_string()
                } else {
                    format!(
                        "label length {} exceeds {}",
                        len,
                        self.limits.max_label_len()
                    )
                };
                return Err(reader.malformed(offset, reason));
            }

            let bytes = reader.take(len as usize, WireField::Label)?;
            if bytes.contains(&b'.') {
                return Err(reader.malformed(offset + 1, "label contains a '.' byte"));
            }
            let label = std::str::from_utf8(bytes)
                .map_err(|_| reader.malformed(offset + 1, "label is not valid UTF-8"))?;
            labels.push(label);
        }

        if let Some(max) = self.limits.max_name_len() {
            let len = reader.position() - start;
            if len > max {
                return Err(reader.malformed(
                    start,
                    format!("name is {} bytes (limit {})", len, max),
                ));
            }
        }

        Ok(labels.join("."))
    }
}
