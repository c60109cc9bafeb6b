pub mod record;
pub mod record_type;
pub mod registry;

pub use record::{RecordDescription, CLASS_IN, DEFAULT_TTL};
pub use record_type::RecordType;
pub use registry::TypeRegistry;
