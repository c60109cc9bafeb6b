use rrhex_domain::{RecordDescription, CLASS_IN, DEFAULT_TTL};

#[test]
fn test_labels_split_on_dots() {
    let record = RecordDescription::new("www.example.com", "A", CLASS_IN, 300, "");
    let labels: Vec<&str> = record.labels().collect();
    assert_eq!(labels, vec!["www", "example", "com"]);
}

#[test]
fn test_root_domain_has_no_labels() {
    let record = RecordDescription::new("", "A", CLASS_IN, 300, "");
    assert!(record.is_root());
    assert_eq!(record.labels().count(), 0);
}

#[test]
fn test_empty_labels_are_kept() {
    let record = RecordDescription::new("example.com.", "A", CLASS_IN, 300, "");
    let labels: Vec<&str> = record.labels().collect();
    assert_eq!(labels, vec!["example", "com", ""]);

    let record = RecordDescription::new(".", "A", CLASS_IN, 300, "");
    assert_eq!(record.labels().count(), 2);
}

#[test]
fn test_json_shape_uses_type_key() {
    let record = RecordDescription::new("example.com", "A", 1, 3600, "c0a80001");
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "domain": "example.com",
            "type": "A",
            "class": 1,
            "ttl": 3600,
            "data": "c0a80001"
        })
    );
}

#[test]
fn test_json_defaults() {
    let record: RecordDescription = serde_json::from_str(r#"{"type": "AAAA"}"#).unwrap();

    assert_eq!(record.domain, "");
    assert_eq!(record.class, CLASS_IN);
    assert_eq!(record.ttl, DEFAULT_TTL);
    assert_eq!(record.data, "");
}

#[test]
fn test_json_rejects_out_of_range_fields() {
    let result: Result<RecordDescription, _> =
        serde_json::from_str(r#"{"type": "A", "class": 70000}"#);
    assert!(result.is_err());

    let result: Result<RecordDescription, _> = serde_json::from_str(r#"{"type": "A", "ttl": -1}"#);
    assert!(result.is_err());
}
