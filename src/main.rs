mod app;
mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    init_logging(&cli);
    app::run(cli)
}

/// The TUI owns the terminal, so it logs to a file; subcommands log to stderr.
fn init_logging(cli: &cli::Cli) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| cli.log_level.clone()),
    );

    if cli.command.is_some() {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
        return;
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(tui_log_writer(eatnow::config::Config::config_dir())),
        )
        .init();
}

/// Log file writer for the TUI, or a sink when the file can't be opened.
/// The warning is printed before the alternate screen takes over.
fn tui_log_writer(dir: Result<PathBuf>) -> BoxMakeWriter {
    match dir.and_then(|dir| open_log_file(&dir)) {
        Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
        Err(e) => {
            eprintln!("Warning: file logging disabled: {:#}", e);
            BoxMakeWriter::new(std::io::sink)
        }
    }
}

fn open_log_file(dir: &Path) -> Result<File> {
    std::fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = dir.join("eatnow.log");
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}
