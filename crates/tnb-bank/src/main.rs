//! TNB Bank: desktop shell for the bank signing details tile

use eframe::egui;

mod app;
mod config;
mod signing_keys_modal;
mod state;
mod theme;
mod tile_view;
mod toast;
mod ui;

fn main() -> eyre::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting TNB Bank");

    let config = config::AppConfig::from_env()?;
    tracing::info!(banks = config.banks.len(), "configuration loaded");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("TNB Bank")
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "TNB Bank",
        native_options,
        Box::new(|cc| Ok(Box::new(app::App::new(cc, config)))),
    )
    .map_err(|e| eyre::eyre!("failed to run application: {e}"))
}
