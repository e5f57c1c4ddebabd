//! Application state types
//!
//! The managed bank registry and the items the tile is fed with.

use std::collections::BTreeMap;

use tnb_bank_signing_core::{BankAddress, BankRecord, BankRegistryPort, Item};

/// Managed banks keyed by address. The tile reads it, the key editor writes it.
#[derive(Debug, Clone, Default)]
pub struct ManagedBanks {
    banks: BTreeMap<BankAddress, BankRecord>,
}

impl ManagedBanks {
    /// Later records replace earlier ones with the same address.
    pub fn from_records(records: impl IntoIterator<Item = BankRecord>) -> Self {
        let mut banks = BTreeMap::new();
        for record in records {
            let address = record.address();
            if banks.insert(address.clone(), record).is_some() {
                tracing::warn!(%address, "duplicate bank record, keeping the later one");
            }
        }
        Self { banks }
    }

    pub fn addresses(&self) -> impl Iterator<Item = &BankAddress> {
        self.banks.keys()
    }

    pub fn first_address(&self) -> Option<BankAddress> {
        self.banks.keys().next().cloned()
    }

    pub fn contains(&self, address: &BankAddress) -> bool {
        self.banks.contains_key(address)
    }

    /// Stores new signing keys. Blank input clears the key.
    /// Returns false when no bank is registered at `address`.
    pub fn update_signing_keys(
        &mut self,
        address: &BankAddress,
        account_signing_key: &str,
        node_signing_key: &str,
    ) -> bool {
        let Some(record) = self.banks.get_mut(address) else {
            return false;
        };
        record.account_signing_key = normalize_key(account_signing_key);
        record.node_signing_key = normalize_key(node_signing_key);
        true
    }
}

impl BankRegistryPort for ManagedBanks {
    fn get(&self, address: &BankAddress) -> Option<&BankRecord> {
        self.banks.get(address)
    }
}

fn normalize_key(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Rows shown for a bank: identifiers first, then whichever signing keys are set.
pub fn signing_detail_items(record: &BankRecord) -> Vec<Item> {
    let mut items = vec![
        Item::new("account-number", "Account Number", &record.account_number),
        Item::new("node-identifier", "Node Identifier", &record.node_identifier),
    ];
    if let Some(key) = record.account_signing_key() {
        items.push(Item::new("account-signing-key", "Account Signing Key", key));
    }
    if let Some(key) = record.node_signing_key() {
        items.push(Item::new("node-signing-key", "Node Signing Key", key));
    }
    items
}

/// The bank currently selected in the header.
#[derive(Debug, Clone, Default)]
pub struct ActiveBank {
    address: Option<BankAddress>,
}

impl ActiveBank {
    pub fn new(address: Option<BankAddress>) -> Self {
        Self { address }
    }

    pub fn address(&self) -> Option<&BankAddress> {
        self.address.as_ref()
    }

    /// Returns true when the selection changed.
    pub fn select(&mut self, address: BankAddress) -> bool {
        if self.address.as_ref() == Some(&address) {
            return false;
        }
        tracing::info!(%address, "active bank changed");
        self.address = Some(address);
        true
    }
}
