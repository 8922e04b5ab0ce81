mod bridge;
mod codec;
mod config;
mod engine;
mod models;
mod repl;
mod storage;
mod store;
mod types;
mod views;

use std::io::{stderr, stdin, stdout, BufWriter};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::bridge::{LocalFileBridge, PanelClipboard};
use crate::config::{parse_log_level, Cli};
use crate::engine::{Session, TerminalRenderer};
use crate::repl::Repl;
use crate::storage::{FileBackend, MemoryBackend, PersistenceBackend};

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(parse_log_level(&cli.log_level));

    if cli.ephemeral {
        run(&cli, MemoryBackend::new())
    } else {
        run(&cli, FileBackend::new(&cli.data_dir))
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the table and command replies, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn run<P: PersistenceBackend>(cli: &Cli, backend: P) -> Result<()> {
    let renderer = TerminalRenderer::new(BufWriter::new(stdout()));
    let session = Session::new(renderer, backend)?;
    let files = LocalFileBridge::new(&cli.export_dir);
    let clipboard = PanelClipboard::new(stdout());

    let mut repl = Repl::new(session, files, clipboard);
    repl.run(stdin().lock(), stdout())?;

    info!("Session ended with [{}] transactions", repl.session().store().len());

    Ok(())
}
