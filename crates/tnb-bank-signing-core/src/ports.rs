use std::collections::BTreeMap;

use thiserror::Error;

use crate::domain::{BankAddress, BankRecord, Severity};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PortError {
    #[error("port unavailable: {0}")]
    Unavailable(String),
    #[error("transport error: {0}")]
    Transport(String),
}

/// Read-only view of the managed bank registry.
pub trait BankRegistryPort {
    fn get(&self, address: &BankAddress) -> Option<&BankRecord>;
}

impl BankRegistryPort for BTreeMap<BankAddress, BankRecord> {
    fn get(&self, address: &BankAddress) -> Option<&BankRecord> {
        BTreeMap::get(self, address)
    }
}

pub trait ClipboardPort {
    fn write_text(&mut self, text: &str) -> Result<(), PortError>;
}

impl<T: ClipboardPort + ?Sized> ClipboardPort for Box<T> {
    fn write_text(&mut self, text: &str) -> Result<(), PortError> {
        (**self).write_text(text)
    }
}

/// Fire-and-forget notification surface.
pub trait NotifierPort {
    fn notify(&mut self, message: &str, severity: Severity);
}
