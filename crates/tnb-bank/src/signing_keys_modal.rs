//! Overlay for adding or editing a bank's signing keys

use eframe::egui;
use tnb_bank_signing_core::{signing_keys_button_label, BankAddress, BankRecord};

use crate::ui::{self, IconType};

/// Action returned after rendering the modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    None,
    Close,
    Save {
        account_signing_key: String,
        node_signing_key: String,
    },
}

#[derive(Debug, Clone)]
pub struct SigningKeysModal {
    address: BankAddress,
    title: &'static str,
    account_signing_key: String,
    node_signing_key: String,
}

impl SigningKeysModal {
    /// Mounts the modal pre-filled from `record`.
    pub fn mount(address: BankAddress, record: &BankRecord) -> Self {
        tracing::debug!(%address, "signing keys modal mounted");
        Self {
            address,
            title: signing_keys_button_label(record),
            account_signing_key: record.account_signing_key().unwrap_or_default().to_owned(),
            node_signing_key: record.node_signing_key().unwrap_or_default().to_owned(),
        }
    }

    pub fn address(&self) -> &BankAddress {
        &self.address
    }

    pub fn show(&mut self, ctx: &egui::Context) -> ModalAction {
        let mut action = ModalAction::None;
        let mut open = true;

        egui::Window::new(self.title)
            .id(egui::Id::new("signing_keys_modal"))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([420.0, 220.0])
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.label(ui::icon(IconType::Key, 16.0));
                    ui.label(egui::RichText::new(self.address.as_str()).monospace().weak());
                });
                ui.add_space(12.0);

                ui.label("Account Signing Key");
                ui::key_input(ui, &mut self.account_signing_key, "Account signing key");
                ui.add_space(8.0);
                ui.label("Node Signing Key");
                ui::key_input(ui, &mut self.node_signing_key, "Node signing key");
                ui.add_space(16.0);

                ui.horizontal(|ui| {
                    if ui::primary_button(ui, "Save").clicked() {
                        action = ModalAction::Save {
                            account_signing_key: self.account_signing_key.clone(),
                            node_signing_key: self.node_signing_key.clone(),
                        };
                    }
                    if ui::secondary_button(ui, "Cancel").clicked() {
                        action = ModalAction::Close;
                    }
                });
            });

        if !open && action == ModalAction::None {
            action = ModalAction::Close;
        }
        action
    }
}
