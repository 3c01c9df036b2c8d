//! Newsboard - Static News Metrics Dashboard
//!
//! Renders a single-page dashboard of sample news-site metrics: monthly
//! ratings, article counts, sentiment trend, a regional intensity map, and
//! the top headline cards.

mod config;
mod data;
mod charts;
mod gui;

use config::DashboardConfig;
use eframe::egui;
use gui::DashboardApp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "newsboard=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Newsboard v{}", env!("CARGO_PKG_VERSION"));

    // One immutable configuration value, handed to the app at startup
    let config = DashboardConfig::default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window.size)
            .with_min_inner_size(config.window.min_size)
            .with_title(&config.window.title),
        ..Default::default()
    };

    // Run the application
    let app_name = config.window.title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, config)?))),
    )
}
