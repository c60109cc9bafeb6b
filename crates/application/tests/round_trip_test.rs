use rrhex_application::{decode, encode, DecodeRecordsUseCase, EncodeRecordsUseCase, LabelLimits};
use rrhex_domain::{RecordDescription, RecordType, TypeRegistry};
use std::sync::Arc;

mod helpers;
use helpers::RecordBuilder;

fn sample_records() -> Vec<RecordDescription> {
    vec![
        RecordBuilder::new().build(),
        RecordBuilder::new()
            .domain("ipv6.example.org")
            .record_type("AAAA")
            .ttl(86_400)
            .data("20010db8000000000000000000000001")
            .build(),
        RecordBuilder::new()
            .domain("")
            .record_type("CAA")
            .class(255)
            .ttl(u32::MAX)
            .data("0005697373756565786d706c652e6e6574")
            .build(),
        RecordBuilder::new()
            .domain("_sip._tcp.example.com")
            .record_type("TXT")
            .class(0)
            .ttl(0)
            .data("")
            .build(),
        RecordBuilder::new()
            .domain("caf\u{e9}.example")
            .record_type("TYPE65280")
            .class(u16::MAX)
            .data("00ff")
            .build(),
    ]
}

#[test]
fn test_decode_inverts_encode() {
    let records = sample_records();
    let hex = encode(&records).unwrap();
    assert_eq!(decode(&hex).unwrap(), records);
}

#[test]
fn test_reencoding_decoded_records_is_stable() {
    let hex = encode(&sample_records()).unwrap();
    let reencoded = encode(&decode(&hex).unwrap()).unwrap();
    assert_eq!(reencoded, hex);
}

#[test]
fn test_zero_length_data_round_trip() {
    let record = RecordBuilder::new().data("").build();
    let hex = encode(std::slice::from_ref(&record)).unwrap();
    assert_eq!(decode(&hex).unwrap(), vec![record]);
}

#[test]
fn test_long_label_round_trip() {
    let record = RecordBuilder::new()
        .domain(&format!("{}.com", "x".repeat(255)))
        .build();
    let hex = encode(std::slice::from_ref(&record)).unwrap();
    assert_eq!(decode(&hex).unwrap(), vec![record]);
}

#[test]
fn test_max_data_round_trip() {
    let record = RecordBuilder::new().data(&"ab".repeat(65535)).build();
    let hex = encode(std::slice::from_ref(&record)).unwrap();
    assert_eq!(decode(&hex).unwrap(), vec![record]);
}

#[test]
fn test_restricted_registry_round_trip_uses_generic_names() {
    let registry = Arc::new(TypeRegistry::with_types([RecordType::A]));
    let encode_use_case = EncodeRecordsUseCase::new(registry.clone(), LabelLimits::STRICT);
    let decode_use_case = DecodeRecordsUseCase::new(registry, LabelLimits::STRICT);

    let records = vec![
        RecordBuilder::new().build(),
        RecordBuilder::new().record_type("TYPE28").data("").build(),
    ];

    let hex = encode_use_case.execute(&records).unwrap();
    let decoded = decode_use_case.execute(&hex).unwrap();

    assert_eq!(decoded, records);
    assert_eq!(encode_use_case.execute(&decoded).unwrap(), hex);
}

#[test]
fn test_records_shared_across_threads() {
    let records = Arc::new(sample_records());
    let expected = encode(&records).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let records = records.clone();
            std::thread::spawn(move || encode(&records).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
