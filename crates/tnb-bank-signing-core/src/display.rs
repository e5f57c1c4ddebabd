//! Action button label derivation

use crate::domain::BankRecord;

pub const ADD_SIGNING_KEYS: &str = "Add Signing Keys";
pub const EDIT_SIGNING_KEYS: &str = "Edit Signing Keys";

pub fn signing_keys_button_label(record: &BankRecord) -> &'static str {
    if record.has_signing_keys() {
        EDIT_SIGNING_KEYS
    } else {
        ADD_SIGNING_KEYS
    }
}

/// Single-slot cache of the label, keyed on the record it was derived from.
#[derive(Debug, Default)]
pub struct LabelCache {
    cached: Option<(BankRecord, &'static str)>,
    computations: u64,
}

impl LabelCache {
    pub fn label_for(&mut self, record: &BankRecord) -> &'static str {
        if let Some((cached_record, label)) = &self.cached {
            if cached_record == record {
                return *label;
            }
        }
        let label = signing_keys_button_label(record);
        self.computations += 1;
        self.cached = Some((record.clone(), label));
        label
    }

    /// Number of times the label was actually derived.
    pub fn computations(&self) -> u64 {
        self.computations
    }
}
