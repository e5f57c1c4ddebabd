use std::fmt;

use serde::{Deserialize, Serialize};

/// Network address of a managed bank, `<protocol>://<ip>:<port>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BankAddress(pub String);

impl BankAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn from_parts(protocol: Protocol, ip_address: &str, port: u16) -> Self {
        Self(format!("{}://{}:{}", protocol, ip_address, port))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BankAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    #[default]
    Http,
    Https,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Http => f.write_str("http"),
            Protocol::Https => f.write_str("https"),
        }
    }
}

/// A bank the user manages, as held by the registry.
///
/// Signing keys are optional. An empty string is treated the same as a
/// missing key everywhere in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BankRecord {
    #[serde(default)]
    pub nickname: String,
    pub ip_address: String,
    pub port: u16,
    #[serde(default)]
    pub protocol: Protocol,
    #[serde(default)]
    pub account_number: String,
    #[serde(default)]
    pub node_identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_signing_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_signing_key: Option<String>,
}

impl BankRecord {
    pub fn address(&self) -> BankAddress {
        BankAddress::from_parts(self.protocol, &self.ip_address, self.port)
    }

    pub fn account_signing_key(&self) -> Option<&str> {
        non_empty(self.account_signing_key.as_deref())
    }

    pub fn node_signing_key(&self) -> Option<&str> {
        non_empty(self.node_signing_key.as_deref())
    }

    pub fn has_signing_keys(&self) -> bool {
        self.account_signing_key().is_some() && self.node_signing_key().is_some()
    }

    /// Display name: nickname when set, otherwise the address.
    pub fn display_name(&self) -> String {
        if self.nickname.trim().is_empty() {
            self.address().to_string()
        } else {
            self.nickname.clone()
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// One row of the tile: a label and the value copied when the row is activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub key: String,
    pub title: String,
    pub value: String,
}

impl Item {
    pub fn new(key: impl Into<String>, title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Success,
    Warning,
    Error,
}
