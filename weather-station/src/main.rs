//! Binary crate for the Weather Station desktop app.
//!
//! This crate focuses on:
//! - Window and renderer bootstrap
//! - Font discovery and registration
//! - The per-frame presentation loop and its one background fetch

use anyhow::Context;
use eframe::egui;

mod app;
mod fetch;
mod font;
mod readout;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Weather Station")
            .with_inner_size(egui::vec2(1280.0, 720.0))
            .with_resizable(true),
        ..Default::default()
    };

    // An outstanding fetch is detached when the runtime is dropped on exit.
    let handle = runtime.handle().clone();
    eframe::run_native(
        "Weather Station",
        options,
        Box::new(move |cc| Ok(Box::new(app::WeatherApp::new(cc, handle)))),
    )
    .map_err(|err| anyhow::anyhow!("Failed to create the application window: {err}"))
}
