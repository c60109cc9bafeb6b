pub mod decoder;
pub mod encoder;
pub mod hex_input;
pub mod limits;
mod wire;

pub use decoder::RecordDecoder;
pub use encoder::RecordEncoder;
pub use hex_input::parse_hex_input;
pub use limits::{LabelLimits, RFC_MAX_LABEL_LEN, RFC_MAX_NAME_LEN};
