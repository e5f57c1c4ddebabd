//! Toast notifications stacked in the bottom-right corner

use std::collections::VecDeque;
use std::time::Duration;

use eframe::egui;
use tnb_bank_signing_core::{NotifierPort, Severity};
use web_time::Instant;

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    created: Instant,
}

#[derive(Debug)]
pub struct Toasts {
    entries: VecDeque<Toast>,
    duration: Duration,
}

impl Toasts {
    pub fn new(duration: Duration) -> Self {
        Self {
            entries: VecDeque::new(),
            duration,
        }
    }

    pub fn push(&mut self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        tracing::info!(?severity, %message, "toast");
        self.entries.push_back(Toast {
            message,
            severity,
            created: Instant::now(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.entries.iter()
    }

    /// Drops toasts older than the configured duration.
    pub fn prune(&mut self, now: Instant) {
        let duration = self.duration;
        self.entries
            .retain(|toast| now.saturating_duration_since(toast.created) < duration);
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        self.prune(Instant::now());
        if self.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in &self.entries {
                    egui::Frame::popup(ui.style())
                        .fill(severity_color(toast.severity))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(&toast.message).color(egui::Color32::WHITE),
                            );
                        });
                    ui.add_space(6.0);
                }
            });

        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

impl NotifierPort for Toasts {
    fn notify(&mut self, message: &str, severity: Severity) {
        self.push(message, severity);
    }
}

fn severity_color(severity: Severity) -> egui::Color32 {
    match severity {
        Severity::Success => egui::Color32::from_rgb(40, 140, 90),
        Severity::Warning => egui::Color32::from_rgb(200, 150, 40),
        Severity::Error => egui::Color32::from_rgb(180, 60, 60),
    }
}
