mod decode_records;
mod encode_records;

pub use decode_records::DecodeRecordsUseCase;
pub use encode_records::EncodeRecordsUseCase;
