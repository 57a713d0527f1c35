use anyhow::Context;
use iced::{Application, Settings, Size};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod ui;

use app::LecternApp;
use config::AppConfig;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;

    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting Lectern v{}", env!("CARGO_PKG_VERSION"));

    let window = iced::window::Settings {
        size: Size::new(config.window.width, config.window.height),
        min_size: Some(Size::new(config.window.min_width, config.window.min_height)),
        position: iced::window::Position::Centered,
        ..Default::default()
    };

    // Run the application
    LecternApp::run(Settings {
        window,
        ..Settings::with_flags(config)
    })
    .context("running the application")?;

    Ok(())
}
