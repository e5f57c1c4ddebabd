//! egui rendering of the bank signing details tile

use eframe::egui;
use tnb_bank_signing_core::{TileEvent, TileRow, TileView, COPY_LABEL};

use crate::theme::StyleSheet;
use crate::ui::{self, IconType};

/// Draws `view` and returns the input collected this frame.
pub fn render(ui: &mut egui::Ui, view: &TileView, styles: &StyleSheet) -> Vec<TileEvent> {
    let mut events = Vec::new();

    styles
        .resolve(&view.root_classes)
        .frame()
        .inner_margin(16.0)
        .stroke(egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            for row in &view.rows {
                ui.push_id(&row.key, |ui| {
                    if let Some(event) = render_row(ui, row, styles) {
                        events.push(event);
                    }
                });
                ui.add_space(12.0);
            }
            if ui::white_button(ui, view.button_label).clicked() {
                events.push(TileEvent::ActionButtonPressed);
            }
        });

    events
}

fn render_row(ui: &mut egui::Ui, row: &TileRow, styles: &StyleSheet) -> Option<TileEvent> {
    let mut event = None;

    styles.resolve(&row.top_classes).frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            let title = styles.resolve(&row.title_classes);
            ui.label(title.rich_text(&row.title));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let container = styles.resolve(&row.copy_container_classes);
                let icon_style =
                    styles.nested(&row.copy_container_classes, &row.copy_icon_classes);
                let text_style =
                    styles.nested(&row.copy_container_classes, &row.copy_text_classes);
                let response = container
                    .frame()
                    .inner_margin(egui::Margin::symmetric(6.0, 2.0))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(icon_style.rich_text(IconType::ContentCopy.glyph()));
                            ui.label(text_style.rich_text(COPY_LABEL));
                        });
                    })
                    .response
                    .interact(egui::Sense::click())
                    .on_hover_cursor(egui::CursorIcon::PointingHand)
                    .on_hover_text("Copy to clipboard");
                if response.clicked() {
                    event = Some(TileEvent::CopyRequested {
                        value: row.value.clone(),
                    });
                }
            });
        });
    });

    let value = styles.resolve(&row.value_classes);
    ui.add(egui::Label::new(value.rich_text(&row.value)).wrap());

    event
}
