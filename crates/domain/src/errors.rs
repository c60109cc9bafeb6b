use std::fmt;
use thiserror::Error;

/// Largest RDATA length representable in the 16-bit length prefix.
pub const MAX_DATA_LEN: usize = u16::MAX as usize;

/// Fields of a resource record in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireField {
    Label,
    Type,
    Class,
    Ttl,
    DataLength,
    Data,
}

impl WireField {
    pub fn as_str(&self) -> &'static str {
        match self {
            WireField::Label => "label",
            WireField::Type => "type",
            WireField::Class => "class",
            WireField::Ttl => "ttl",
            WireField::DataLength => "rdlength",
            WireField::Data => "rdata",
        }
    }
}

impl fmt::Display for WireField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unknown record type: {0}")]
    UnknownRecordType(String),
}

/// Failure of an encode call. `record` is the zero-based index of the
/// offending input record; nothing is emitted when any record fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Record {record}: unknown record type '{name}'")]
    UnknownRecordType { record: usize, name: String },

    #[error("Record {record}: label {label} of '{domain}' is empty")]
    InvalidLabel {
        record: usize,
        label: usize,
        domain: String,
    },

    #[error("Record {record}: label '{label}' is {len} bytes (limit {max})")]
    LabelTooLong {
        record: usize,
        label: String,
        len: usize,
        max: usize,
    },

    #[error("Record {record}: name '{domain}' encodes to {len} bytes (limit {max})")]
    NameTooLong {
        record: usize,
        domain: String,
        len: usize,
        max: usize,
    },

    #[error("Record {record}: invalid hex data: {reason}")]
    InvalidHexData { record: usize, reason: String },

    #[error("Record {record}: data is {len} bytes (limit 65535)")]
    DataTooLarge { record: usize, len: usize },
}

impl EncodeError {
    pub fn record(&self) -> usize {
        match self {
            EncodeError::UnknownRecordType { record, .. }
            | EncodeError::InvalidLabel { record, .. }
            | EncodeError::LabelTooLong { record, .. }
            | EncodeError::NameTooLong { record, .. }
            | EncodeError::InvalidHexData { record, .. }
            | EncodeError::DataTooLarge { record, .. } => *record,
        }
    }
}

/// Failure of a decode call. Offsets are byte positions in the decoded
/// buffer, not in the hex text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Invalid hex input: {0}")]
    InvalidHexData(String),

    #[error(
        "Record {record}: truncated {field} at offset {offset} \
         (needed {needed} bytes, {available} available)"
    )]
    TruncatedInput {
        record: usize,
        offset: usize,
        field: WireField,
        needed: usize,
        available: usize,
    },

    #[error("Record {record}: malformed input at offset {offset}: {reason}")]
    MalformedInput {
        record: usize,
        offset: usize,
        reason: String,
    },
}

impl DecodeError {
    /// Byte offset of the failure, when it happened inside the buffer.
    pub fn offset(&self) -> Option<usize> {
        match self {
            DecodeError::InvalidHexData(_) => None,
            DecodeError::TruncatedInput { offset, .. }
            | DecodeError::MalformedInput { offset, .. } => Some(*offset),
        }
    }
}
