//! Timetravel - tic-tac-toe with a time-travel move history.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, PlayArgs};
use std::path::Path;
use std::sync::Mutex;
use timetravel::{TuiConfig, render_text, replay, tui};
use timetravel_tictactoe::HistoryOrder;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play(PlayArgs::default())) {
        Command::Play(args) => run_play(args, cli.log_file.as_deref()),
        Command::Replay {
            cells,
            json,
            reverse_history,
        } => run_replay(cells, json, reverse_history, cli.log_file.as_deref()),
    }
}

/// Run the interactive terminal UI
fn run_play(args: PlayArgs, log_file: Option<&Path>) -> Result<()> {
    let config = TuiConfig::load_or_default(&args.config)?
        .with_overrides(args.reverse_history, args.no_highlight);

    // The UI owns the terminal; logs go to a file or nowhere.
    if let Some(path) = log_file {
        init_file_tracing(path, config.log_filter())?;
    }
    info!(?config, "Configuration resolved");

    tui::run_tui(&config)
}

/// Print the result of a fixed sequence of moves
fn run_replay(
    cells: Vec<u8>,
    json: bool,
    reverse_history: bool,
    log_file: Option<&Path>,
) -> Result<()> {
    match log_file {
        Some(path) => init_file_tracing(path, TuiConfig::default().log_filter())?,
        None => tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .init(),
    }

    let order = if reverse_history {
        HistoryOrder::Descending
    } else {
        HistoryOrder::Ascending
    };
    let cells: Vec<usize> = cells.into_iter().map(usize::from).collect();
    info!(?cells, "Replaying moves");
    let view = replay(&cells, order)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_text(&view));
    }
    Ok(())
}

fn init_file_tracing(path: &Path, default_filter: &str) -> Result<()> {
    let file = std::fs::File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    info!(path = %path.display(), "File logging initialized");
    Ok(())
}
