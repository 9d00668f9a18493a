// Main entry point - configuration, subscriber worker, and UI wiring
mod application;
mod domain;
mod infrastructure;
mod presentation;

use crate::infrastructure::broker;
use crate::infrastructure::config::load_config;
use crate::presentation::app::DashboardApp;
use eframe::egui;
use tokio::sync::mpsc;
use tracing::info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = load_config()?;
    info!(url = %config.broker.url(), "starting pollution dashboard");

    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let subscriber = broker::spawn(&config.broker, events_tx)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 860.0]),
        ..Default::default()
    };
    eframe::run_native(
        "pollution-dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, events_rx)))),
    )
    .map_err(|err| anyhow::anyhow!("dashboard ui failed: {err}"))?;

    subscriber.shutdown();
    Ok(())
}
