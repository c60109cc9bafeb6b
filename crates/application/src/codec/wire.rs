use rrhex_domain::{DecodeError, WireField};

pub(crate) fn append_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_be_bytes());
}

pub(crate) fn append_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_be_bytes());
}

/// Bounds-checked cursor over a record buffer.
///
/// Every read either yields exactly the requested bytes or fails with
/// `TruncatedInput` without moving the cursor.
pub(crate) struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
    record: usize,
}

impl<'a> WireReader<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            record: 0,
        }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// Index of the record being read, reported in errors.
    pub(crate) fn set_record(&mut self, record: usize) {
        self.record = record;
    }

    pub(crate) fn take(&mut self, len: usize, field: WireField) -> Result<&'a [u8], DecodeError> {
        let available = self.remaining();
        if len > available {
            return Err(DecodeError::TruncatedInput {
                record: self.record,
                offset: self.pos,
                field,
                needed: len,
                available,
            });
        }

        let bytes = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    pub(crate) fn read_u8(&mut self, field: WireField) -> Result<u8, DecodeError> {
        Ok(self.take(1, field)?[0])
    }

    pub(crate) fn read_u16(&mut self, field: WireField) -> Result<u16, DecodeError> {
        let b = self.take(2, field)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    pub(crate) fn read_u32(&mut self, field: WireField) -> Result<u32, DecodeError> {
        let b = self.take(4, field)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub(crate) fn malformed(&self, offset: usize, reason: impl Into<String>) -> DecodeError {
        DecodeError::MalformedInput {
            record: self.record,
            offset,
            reason: reason.into(),
        }
    }
}
