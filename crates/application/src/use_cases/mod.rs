pub mod codec;

pub use codec::{DecodeRecordsUseCase, EncodeRecordsUseCase};
