//! Main application state and update loop

use std::time::Duration;

use eframe::egui;
use tnb_bank_signing_core::{
    BankAddress, BankRegistryPort, BankSigningTile, ClipboardPort, Item, Severity, TileEvent,
};

use crate::config::AppConfig;
use crate::signing_keys_modal::{ModalAction, SigningKeysModal};
use crate::state::{self, ActiveBank, ManagedBanks};
use crate::theme::StyleSheet;
use crate::tile_view;
use crate::toast::Toasts;
use crate::ui::{self, SystemClipboard};

const ACTIVE_BANK_KEY: &str = "active_bank";

/// The main application state
pub struct App {
    /// Managed banks, the registry the tile reads from
    banks: ManagedBanks,
    /// Bank selected in the header
    active: ActiveBank,
    /// Tile instance for the active bank, remounted on bank change
    tile: BankSigningTile,
    /// Key editor overlay, present iff the tile's editor is open
    editor: Option<SigningKeysModal>,
    toasts: Toasts,
    clipboard: Box<dyn ClipboardPort>,
    styles: StyleSheet,
    tile_class_name: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let configured = config.active_bank.clone();
        let mut app = Self::from_config(config, Box::new(SystemClipboard));

        // Restore the last selected bank when it is still managed
        let stored: Option<BankAddress> = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, ACTIVE_BANK_KEY));
        if let Some(address) = stored.filter(|a| app.banks.contains(a)) {
            if let Some(configured) = configured.filter(|c| *c != address) {
                tracing::warn!(
                    %configured,
                    stored = %address,
                    "restored bank selection overrides configured active bank"
                );
            }
            app.select_bank(address);
        }
        app
    }

    pub fn from_config(config: AppConfig, clipboard: Box<dyn ClipboardPort>) -> Self {
        let banks = ManagedBanks::from_records(config.banks);
        let active = match config.active_bank {
            Some(address) if banks.contains(&address) => Some(address),
            Some(address) => {
                tracing::warn!(%address, "configured active bank is not managed, using first bank");
                banks.first_address()
            }
            None => banks.first_address(),
        };

        let mut styles = StyleSheet::tile_defaults();
        styles.extend(&config.style_overrides);

        Self {
            banks,
            active: ActiveBank::new(active),
            tile: BankSigningTile::new(),
            editor: None,
            toasts: Toasts::new(Duration::from_millis(config.toast_duration_ms)),
            clipboard,
            styles,
            tile_class_name: config.tile_class_name,
        }
    }

    fn select_bank(&mut self, address: BankAddress) {
        if self.active.select(address) {
            self.tile = BankSigningTile::new();
            self.editor = None;
        }
    }

    fn active_items(&self) -> Vec<Item> {
        self.active
            .address()
            .and_then(|address| self.banks.get(address))
            .map(state::signing_detail_items)
            .unwrap_or_default()
    }

    fn dispatch(&mut self, events: Vec<TileEvent>, items: &[Item]) {
        for event in events {
            if let Err(err) = self
                .tile
                .handle(event, items, &mut self.clipboard, &mut self.toasts)
            {
                tracing::warn!(%err, "tile event failed");
                self.toasts.push(err.to_string(), Severity::Error);
            }
        }
        self.sync_editor();
    }

    /// Mounts or unmounts the overlay to follow the tile's editor state.
    fn sync_editor(&mut self) {
        match (self.tile.editor_visible(), self.editor.is_some()) {
            (true, false) => {
                let Some(address) = self.active.address() else {
                    return;
                };
                if let Some(record) = self.banks.get(address) {
                    self.editor = Some(SigningKeysModal::mount(address.clone(), record));
                }
            }
            (false, true) => {
                self.editor = None;
                tracing::debug!("signing keys modal unmounted");
            }
            _ => {}
        }
    }

    fn close_editor(&mut self) {
        self.tile.close_editor();
        self.sync_editor();
    }

    fn apply_modal_action(&mut self, action: ModalAction, address: &BankAddress) {
        match action {
            ModalAction::None => {}
            ModalAction::Close => self.close_editor(),
            ModalAction::Save {
                account_signing_key,
                node_signing_key,
            } => {
                if self
                    .banks
                    .update_signing_keys(address, &account_signing_key, &node_signing_key)
                {
                    tracing::info!(%address, "signing keys updated");
                    self.toasts.push("Signing keys updated", Severity::Success);
                } else {
                    tracing::warn!(%address, "bank disappeared before keys were saved");
                    self.toasts.push("Bank is no longer managed", Severity::Error);
                }
                self.close_editor();
            }
        }
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(
                egui::RichText::new("🏦 TNB Bank")
                    .size(22.0)
                    .color(egui::Color32::from_rgb(0, 212, 170)),
            );
            ui.add_space(30.0);
            ui.separator();
            ui.add_space(10.0);
            ui.label("Bank:");

            let mut selected = self.active.address().cloned();
            let selected_text = selected
                .as_ref()
                .and_then(|a| self.banks.get(a))
                .map(|r| r.display_name())
                .unwrap_or_else(|| "No banks".to_owned());
            egui::ComboBox::from_id_salt("bank_select")
                .selected_text(selected_text)
                .width(220.0)
                .show_ui(ui, |ui| {
                    for address in self.banks.addresses() {
                        let name = self
                            .banks
                            .get(address)
                            .map(|r| r.display_name())
                            .unwrap_or_else(|| address.to_string());
                        ui.selectable_value(&mut selected, Some(address.clone()), name);
                    }
                });
            if let Some(address) = selected {
                self.select_bank(address);
            }
        });
    }

    fn render_signing_details(&mut self, ui: &mut egui::Ui) {
        ui::styled_heading(ui, "Signing Details");
        ui.add_space(10.0);

        let Some(address) = self.active.address().cloned() else {
            ui::error_message(ui, "No managed banks configured");
            return;
        };
        let items = self.active_items();
        match self
            .tile
            .render(&address, &self.banks, self.tile_class_name.as_deref(), &items)
        {
            Ok(view) => {
                let events = tile_view::render(ui, &view, &self.styles);
                self.dispatch(events, &items);
            }
            Err(err) => {
                tracing::warn!(%err, "cannot render signing details");
                ui::error_message(ui, &err.to_string());
            }
        }
    }

    fn render_editor(&mut self, ctx: &egui::Context) {
        let Some(modal) = self.editor.as_mut() else {
            return;
        };
        let address = modal.address().clone();
        let action = modal.show(ctx);
        self.apply_modal_action(action, &address);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            self.render_header(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(10.0);
                self.render_signing_details(ui);
                ui.add_space(20.0);
            });
        });

        self.render_editor(ctx);
        self.toasts.show(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Some(address) = self.active.address() {
            eframe::set_value(storage, ACTIVE_BANK_KEY, address);
        }
    }
}
