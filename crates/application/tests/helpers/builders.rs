#![allow(dead_code)]
use rrhex_application::{LabelLimits, RecordDecoder, RecordEncoder};
use rrhex_domain::{RecordDescription, RecordType, TypeRegistry};
use std::sync::Arc;

/// Wire form of `RecordBuilder::new().build()`.
pub const EXAMPLE_A_HEX: &str = "076578616d706c6503636f6d000001000100000e100004c0a80001";

pub struct RecordBuilder {
    domain: String,
    record_type: String,
    class: u16,
    ttl: u32,
    data: String,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            domain: "example.com".to_string(),
            record_type: "A".to_string(),
            class: 1,
            ttl: 3600,
            data: "c0a80001".to_string(),
        }
    }

    pub fn domain(mut self, domain: &str) -> Self {
        self.domain = domain.to_string();
        self
    }

    pub fn record_type(mut self, record_type: &str) -> Self {
        self.record_type = record_type.to_string();
        self
    }

    pub fn class(mut self, class: u16) -> Self {
        self.class = class;
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn data(mut self, data: &str) -> Self {
        self.data = data.to_string();
        self
    }

    pub fn build(self) -> RecordDescription {
        RecordDescription::new(
            self.domain,
            self.record_type,
            self.class,
            self.ttl,
            self.data,
        )
    }
}

/// Registry holding only the minimum A / AAAA / CAA entries.
pub fn minimal_registry() -> Arc<TypeRegistry> {
    Arc::new(TypeRegistry::with_types([
        RecordType::A,
        RecordType::AAAA,
        RecordType::CAA,
    ]))
}

pub fn encoder(limits: LabelLimits) -> RecordEncoder {
    RecordEncoder::new(Arc::new(TypeRegistry::standard()), limits)
}

pub fn decoder(limits: LabelLimits) -> RecordDecoder {
    RecordDecoder::new(Arc::new(TypeRegistry::standard()), limits)
}
