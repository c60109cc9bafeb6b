use serde::{Deserialize, Serialize};

/// Wire value of the Internet class.
pub const CLASS_IN: u16 = 1;

pub const DEFAULT_TTL: u32 = 3600;

/// One resource record as supplied to the encoder or produced by the decoder.
///
/// `data` is the RDATA as a hex string; the decoder always emits lower-case
/// digits. An empty `domain` is the root name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDescription {
    #[serde(default)]
    pub domain: String,

    #[serde(rename = "type")]
    pub record_type: String,

    #[serde(default = "default_class")]
    pub class: u16,

    #[serde(default = "default_ttl")]
    pub ttl: u32,

    #[serde(default)]
    pub data: String,
}

impl RecordDescription {
    pub fn new(
        domain: impl Into<String>,
        record_type: impl Into<String>,
        class: u16,
        ttl: u32,
        data: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            record_type: record_type.into(),
            class,
            ttl,
            data: data.into(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.domain.is_empty()
    }

    /// Dot-separated labels of `domain`; the root name has none.
    ///
    /// Empty labels (`"a..b"`, a trailing dot) are yielded as-is so the
    /// encoder can reject them.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        (!self.is_root())
            .then(|| self.domain.split('.'))
            .into_iter()
            .flatten()
    }
}

fn default_class() -> u16 {
    CLASS_IN
}

fn default_ttl() -> u32 {
    DEFAULT_TTL
}
