#![allow(dead_code)]

use std::collections::BTreeMap;

use tnb_bank_signing_core::{
    BankAddress, BankRecord, ClipboardPort, Item, NotifierPort, PortError, Protocol, Severity,
};

#[derive(Debug, Default)]
pub struct RecordingClipboard {
    pub writes: Vec<String>,
}

impl ClipboardPort for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), PortError> {
        self.writes.push(text.to_owned());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct BrokenClipboard;

impl ClipboardPort for BrokenClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), PortError> {
        Err(PortError::Unavailable("no display".to_owned()))
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub notices: Vec<(String, Severity)>,
}

impl NotifierPort for RecordingNotifier {
    fn notify(&mut self, message: &str, severity: Severity) {
        self.notices.push((message.to_owned(), severity));
    }
}

pub fn bank(account_key: Option<&str>, node_key: Option<&str>) -> BankRecord {
    BankRecord {
        nickname: "Primary bank".to_owned(),
        ip_address: "54.183.16.194".to_owned(),
        port: 80,
        protocol: Protocol::Http,
        account_number: "0cdd4ba04456ca169baca3d66eace869520c62fe84421329086e03d91a68acdb".to_owned(),
        node_identifier: "59479a31c3b91d96bb7a0b3e07f18d4bf301f1bb0bde05f8d36d9611dcbe7cbf".to_owned(),
        account_signing_key: account_key.map(ToOwned::to_owned),
        node_signing_key: node_key.map(ToOwned::to_owned),
    }
}

pub fn registry_with(record: BankRecord) -> (BankAddress, BTreeMap<BankAddress, BankRecord>) {
    let address = record.address();
    let mut registry = BTreeMap::new();
    registry.insert(address.clone(), record);
    (address, registry)
}

pub fn items() -> Vec<Item> {
    vec![
        Item::new("account-number", "Account Number", "0cdd4ba0"),
        Item::new("node-identifier", "Node Identifier", "59479a31"),
        Item::new("signing-key", "Account Signing Key", "e5e2a96b"),
    ]
}
