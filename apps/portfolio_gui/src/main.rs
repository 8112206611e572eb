use std::path::PathBuf;

mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::Context;
use backend_bridge::commands::BackendCommand;
use clap::Parser;
use controller::events::UiEvent;
use crossbeam_channel::bounded;
use eframe::egui;
use portfolio_core::ViewState;
use tracing_subscriber::EnvFilter;
use ui::PortfolioApp;

#[derive(Parser, Debug)]
#[command(name = "portfolio", about = "Single-page personal portfolio viewer")]
struct Args {
    /// Config file; defaults to ./portfolio.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Forms endpoint the contact form posts to.
    #[arg(long)]
    endpoint: Option<String>,
    /// TOML file replacing the built-in page content.
    #[arg(long)]
    content: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let mut settings = config::load_settings(args.config.as_deref())?;
    settings.apply_cli_overrides(args.endpoint, args.content);
    let endpoint = settings.endpoint_url()?;
    let content = settings.load_content()?;
    tracing::info!(
        probe_offset = settings.probe_offset,
        indicator_ms = settings.indicator_duration_ms,
        "portfolio settings loaded"
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(endpoint, settings.request_timeout(), cmd_rx, ui_tx)
        .context("failed to spawn backend worker thread")?;

    let view = ViewState::new(settings.probe_offset, settings.indicator_duration());
    let title = format!("{} · Portfolio", content.owner_name);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(PortfolioApp::new(cmd_tx, ui_rx, content, view)))),
    )
    .map_err(|err| anyhow::anyhow!("portfolio window failed: {err}"))
}
