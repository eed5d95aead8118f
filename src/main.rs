//! StormRunner - side-scrolling weather adventure
//!
//! Main entry point for the application.

use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use stormrunner::storage::config::{self, GameConfig, GAME_TITLE};

mod app;

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting StormRunner v{}", env!("CARGO_PKG_VERSION"));

    let config = config::load_config().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        GameConfig {
            data_dir: config::get_data_dir(),
            ..GameConfig::default()
        }
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([640.0, 360.0])
            .with_title(config.display.title.as_str()),
        ..Default::default()
    };

    eframe::run_native(
        GAME_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(app::StormRunnerApp::new(cc, config)))),
    )
}
