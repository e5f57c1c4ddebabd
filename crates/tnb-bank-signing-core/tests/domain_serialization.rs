use tnb_bank_signing_core::{BankAddress, BankRecord, Protocol};

#[test]
fn bank_record_without_keys_deserializes_as_absent() {
    let json = r#"{
        "nickname": "",
        "ip_address": "54.183.16.194",
        "port": 80,
        "protocol": "http",
        "account_number": "0cdd4ba0",
        "node_identifier": "59479a31"
    }"#;
    let record: BankRecord = serde_json::from_str(json).expect("parse record");
    assert_eq!(record.account_signing_key, None);
    assert!(!record.has_signing_keys());
    assert_eq!(record.address(), BankAddress::new("http://54.183.16.194:80"));
    assert_eq!(record.display_name(), "http://54.183.16.194:80");
}

#[test]
fn absent_keys_are_omitted_when_serializing() {
    let record = BankRecord {
        nickname: "Main".to_owned(),
        ip_address: "10.0.0.5".to_owned(),
        port: 443,
        protocol: Protocol::Https,
        account_signing_key: Some("acc".to_owned()),
        ..BankRecord::default()
    };
    let value = serde_json::to_value(&record).expect("serialize");
    assert_eq!(value["protocol"], "https");
    assert_eq!(value["account_signing_key"], "acc");
    assert!(value.get("node_signing_key").is_none());
}

#[test]
fn address_serializes_as_plain_string() {
    let address = BankAddress::new("https://bank.example:443");
    let json = serde_json::to_string(&address).expect("serialize");
    assert_eq!(json, "\"https://bank.example:443\"");
}
