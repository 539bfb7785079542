//! graphIQ - Interactive bar chart studio
//!
//! Desktop entry point: loads configuration, installs logging and opens the window.

use anyhow::Context;
use eframe::egui;
use graphiq::config::AppConfig;
use graphiq::gui::GraphiqApp;
use graphiq::telemetry;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()
        .with_context(|| format!("loading {}", AppConfig::config_path().display()))?;
    if !telemetry::init_tracing(&config.log_filter) {
        warn!("a tracing subscriber was already installed; keeping it");
    }
    info!(export_dir = %config.export_dir.display(), "starting graphIQ");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([900.0, 600.0])
            .with_title("graphIQ"),
        ..Default::default()
    };

    eframe::run_native(
        "graphIQ",
        options,
        Box::new(move |cc| Ok(Box::new(GraphiqApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("window failed: {e}"))
}
