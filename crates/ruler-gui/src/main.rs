#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context;
use eframe::egui;

mod app;
mod handlers;
mod logger;
mod state;
mod ui_components;
mod views;
mod worker;

fn main() -> anyhow::Result<()> {
    let logger = logger::AppLogger::new(200);
    logger
        .clone()
        .init()
        .context("Failed to install logger")?;

    // One worker thread is enough: builds are serialized through a single queue
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([400.0, 900.0])
            .with_min_inner_size([250.0, 300.0])
            .with_title("Vertical Ruler"),
        ..Default::default()
    };

    let handle = runtime.handle().clone();
    let result = eframe::run_native(
        "Vertical Ruler",
        options,
        Box::new(move |cc| Ok(Box::new(app::RulerApp::new(cc, handle, logger)))),
    );

    runtime.shutdown_background();
    result.map_err(|e| anyhow::anyhow!("GUI terminated with an error: {e}"))
}
