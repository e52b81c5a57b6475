//! Checkers GUI Application
//!
//! Two-player checkers on one screen. The board can be drawn either on a
//! canvas or as a grid of widgets; both talk to the same rules engine.
//!
//! Settings are read from `checkers.toml` (or the path given as the first
//! argument). `RUST_LOG` overrides the configured log filter.

mod app;
mod canvas_board;
mod config;
mod input;
mod styles;
mod widget_board;

use anyhow::Context;
use app::CheckersApp;
use config::{GuiConfig, DEFAULT_CONFIG_PATH};
use iced::application;
use input::BoardGeometry;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let config_found = path.exists();
    let config = if config_found {
        GuiConfig::load(&path).with_context(|| format!("loading {}", path.display()))?
    } else {
        GuiConfig::default()
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if config_found {
        info!(path = %path.display(), "loaded config");
    } else {
        warn!(path = %path.display(), "config file not found, using defaults");
    }

    let extent = BoardGeometry::new(config.square_size).extent();
    let window = (extent + styles::PANEL_WIDTH + 80.0, extent.max(300.0) + 40.0);

    application(CheckersApp::title, CheckersApp::update, CheckersApp::view)
        .theme(CheckersApp::theme)
        .window_size(window)
        .run_with(move || CheckersApp::new(config))?;

    Ok(())
}
