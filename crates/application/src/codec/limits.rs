use rrhex_domain::config::CodecConfig;

/// RFC 1035 §2.3.4 label ceiling.
pub const RFC_MAX_LABEL_LEN: usize = 63;

/// RFC 1035 §2.3.4 ceiling for a whole encoded name, terminator included.
pub const RFC_MAX_NAME_LEN: usize = 255;

/// Length rules applied to domain names on both encode and decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelLimits {
    max_label_len: usize,
    max_name_len: Option<usize>,
}

impl LabelLimits {
    /// Only the length byte bounds a label; names are unbounded.
    pub const LENIENT: Self = Self {
        max_label_len: u8::MAX as usize,
        max_name_len: None,
    };

    /// Protocol limits. Length bytes above 63 (compression pointers and
    /// extended label types) are rejected on decode.
    pub const STRICT: Self = Self {
        max_label_len: RFC_MAX_LABEL_LEN,
        max_name_len: Some(RFC_MAX_NAME_LEN),
    };

    pub fn from_config(config: &CodecConfig) -> Self {
        if config.strict {
            Self::STRICT
        } else {
            Self::LENIENT
        }
    }

    pub fn max_label_len(&self) -> usize {
        self.max_label_len
    }

    pub fn max_name_len(&self) -> Option<usize> {
        self.max_name_len
    }

    pub fn is_strict(&self) -> bool {
        *self == Self::STRICT
    }
}

impl Default for LabelLimits {
    fn default() -> Self {
        Self::LENIENT
    }
}
