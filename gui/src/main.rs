// GUI main entry point using Dioxus
#![allow(non_snake_case)] // Common for Dioxus components

use anyhow::Context;
use dioxus::prelude::*;
use dioxus_desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

mod app;
mod components;
mod config;
mod error;
mod state;

use app::App;
use config::AppConfig;

fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides the default `info` level.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting Circle of Fifths GUI (Dioxus Desktop)...");

    let app_config = AppConfig::load_default()
        .context("Failed to load embedded default configuration")
        .inspect_err(|e| tracing::error!("{:#}. Exiting.", e))?;
    tracing::info!(
        "Loaded configuration version {} (theme: {}).",
        app_config.version,
        app_config.app.theme
    );

    let desktop_config = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(app_config.app.title.clone())
            .with_inner_size(LogicalSize::new(
                f64::from(app_config.app.width),
                f64::from(app_config.app.height),
            )),
    );

    // AppConfig is provided as root context; components read it with `use_context`.
    // The desktop event loop owns the process from here on and never returns.
    LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(app_config)
        .launch(App);

    Ok(())
}
