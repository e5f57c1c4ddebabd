//! UI helper components

use eframe::egui;
use tnb_bank_signing_core::{ClipboardPort, PortError};

use crate::theme::ACCENT;

/// System clipboard backed by arboard.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardPort for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), PortError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| PortError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| PortError::Transport(e.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconType {
    ContentCopy,
    Key,
}

impl IconType {
    pub fn glyph(self) -> &'static str {
        match self {
            IconType::ContentCopy => "📋",
            IconType::Key => "🔑",
        }
    }
}

pub fn icon(icon: IconType, size: f32) -> egui::RichText {
    egui::RichText::new(icon.glyph()).size(size)
}

/// Styled heading with accent color
pub fn styled_heading(ui: &mut egui::Ui, text: &str) {
    ui.heading(egui::RichText::new(text).color(egui::Color32::from_rgb(0, 212, 170)));
}

/// Error message display
pub fn error_message(ui: &mut egui::Ui, message: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("❌").size(16.0));
        ui.label(egui::RichText::new(message).color(egui::Color32::from_rgb(220, 80, 80)));
    });
}

/// Primary action button - teal/accent colored, prominent
pub fn primary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let btn = egui::Button::new(egui::RichText::new(text).size(14.0).color(egui::Color32::WHITE))
        .min_size(egui::vec2(130.0, 34.0))
        .fill(ACCENT);
    ui.add(btn)
}

/// Light button used inside tiles
pub fn white_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let btn = egui::Button::new(egui::RichText::new(text).size(14.0).color(egui::Color32::BLACK))
        .min_size(egui::vec2(130.0, 34.0))
        .fill(egui::Color32::WHITE);
    ui.add(btn)
}

/// Secondary action button - subdued, outline style
pub fn secondary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let btn = egui::Button::new(egui::RichText::new(text).size(14.0))
        .min_size(egui::vec2(90.0, 34.0));
    ui.add(btn)
}

/// Single-line monospace input for key material
pub fn key_input(ui: &mut egui::Ui, value: &mut String, hint: &str) -> egui::Response {
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(f32::INFINITY)
            .font(egui::TextStyle::Monospace),
    )
}
