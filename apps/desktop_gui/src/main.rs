use std::path::PathBuf;

mod backend_bridge;
mod controller;
mod ui;

use anyhow::{anyhow, Context};
use clap::Parser;
use client_core::config::{self, ClientSettings};
use crossbeam_channel::bounded;
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{
    layout::{DEFAULT_WINDOW_SIZE, MIN_WINDOW_SIZE, WINDOW_TITLE},
    DesktopGuiApp,
};

#[derive(Parser, Debug)]
#[command(about = "Ask questions about your uploaded PDF documents")]
struct Args {
    /// Base URL of the document backend serving /pdfs, /upload and /search.
    #[arg(long)]
    server_url: Option<String>,
    /// tracing-subscriber filter directive, e.g. `info` or `desktop_gui=debug`.
    #[arg(long)]
    log_filter: Option<String>,
    /// Settings file to read instead of ./civil_pdf_assistant.toml.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn resolve_settings(args: Args) -> anyhow::Result<ClientSettings> {
    let mut settings = match &args.config {
        Some(path) => config::load_settings_from(path, |name| std::env::var(name).ok()),
        None => config::load_settings(),
    }
    .context("failed to load settings")?;
    settings.apply_overrides(args.server_url, args.log_filter)?;
    Ok(settings)
}

fn main() -> anyhow::Result<()> {
    let settings = resolve_settings(Args::parse())?;
    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .init();
    tracing::info!(server_url = %settings.server_url, "starting desktop gui");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, settings.server_url);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(DesktopGuiApp::new(cmd_tx, ui_rx, &cc.egui_ctx)))),
    )
    .map_err(|err| anyhow!("desktop gui exited with error: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_override_defaults() {
        let args = Args::try_parse_from([
            "desktop_gui",
            "--server-url",
            "http://docs.local:9000/",
            "--log-filter",
            "debug",
            "--config",
            "/nonexistent/civil_pdf_assistant.toml",
        ])
        .expect("parse args");

        let settings = resolve_settings(args).expect("settings");
        assert_eq!(settings.server_url, "http://docs.local:9000");
        assert_eq!(settings.log_filter, "debug");
    }

    #[test]
    fn invalid_server_url_flag_is_rejected() {
        let args = Args::try_parse_from([
            "desktop_gui",
            "--server-url",
            "ftp://docs.local",
            "--config",
            "/nonexistent/civil_pdf_assistant.toml",
        ])
        .expect("parse args");

        assert!(resolve_settings(args).is_err());
    }
}
