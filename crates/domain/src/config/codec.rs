use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CodecConfig {
    /// Enforce RFC 1035 length limits (63-byte labels, 255-byte names) and
    /// reject compression pointers on decode.
    #[serde(default)]
    pub strict: bool,
}
