use rrhex_application::{DecodeRecordsUseCase, EncodeRecordsUseCase, LabelLimits};
use rrhex_domain::{DecodeError, EncodeError, TypeRegistry};
use std::sync::Arc;

mod helpers;
use helpers::{minimal_registry, RecordBuilder, EXAMPLE_A_HEX};

#[test]
fn test_encode_use_case_returns_hex() {
    let use_case = EncodeRecordsUseCase::new(minimal_registry(), LabelLimits::LENIENT);
    let hex = use_case.execute(&[RecordBuilder::new().build()]).unwrap();
    assert_eq!(hex, EXAMPLE_A_HEX);
}

#[test]
fn test_encode_use_case_unknown_type() {
    let use_case = EncodeRecordsUseCase::new(minimal_registry(), LabelLimits::LENIENT);
    let result = use_case.execute(&[
        RecordBuilder::new()
            .domain("example.com")
            .record_type("MX")
            .build(),
    ]);

    assert_eq!(
        result,
        Err(EncodeError::UnknownRecordType {
            record: 0,
            name: "MX".to_string()
        })
    );
}

#[test]
fn test_decode_use_case_validates_hex_first() {
    let use_case = DecodeRecordsUseCase::new(Arc::new(TypeRegistry::standard()), LabelLimits::LENIENT);
    assert!(matches!(
        use_case.execute("0761g2"),
        Err(DecodeError::InvalidHexData(_))
    ));
}

#[test]
fn test_decode_use_case_returns_records() {
    let use_case = DecodeRecordsUseCase::new(minimal_registry(), LabelLimits::STRICT);
    let records = use_case.execute(EXAMPLE_A_HEX).unwrap();
    assert_eq!(records, vec![RecordBuilder::new().build()]);
}

#[test]
fn test_use_cases_are_reusable() {
    let use_case = EncodeRecordsUseCase::new(minimal_registry(), LabelLimits::LENIENT);
    let first = use_case.execute(&[RecordBuilder::new().build()]).unwrap();
    assert!(use_case.execute(&[RecordBuilder::new().data("x").build()]).is_err());
    let second = use_case.execute(&[RecordBuilder::new().build()]).unwrap();
    assert_eq!(first, second);
}
