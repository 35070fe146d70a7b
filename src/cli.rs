//! Command-line interface for timetravel.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Timetravel - tic-tac-toe with a rewindable move history
#[derive(Parser, Debug)]
#[command(name = "timetravel")]
#[command(about = "Tic-tac-toe with a time-travel move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Write logs to this file (the terminal UI owns the screen)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play(PlayArgs),

    /// Apply cells to a new game and print the result
    Replay {
        /// Cells to play in order (0-8, row-major)
        #[arg(value_parser = clap::value_parser!(u8).range(0..9))]
        cells: Vec<u8>,

        /// Print the view model as JSON
        #[arg(long)]
        json: bool,

        /// List the history newest first
        #[arg(long)]
        reverse_history: bool,
    },
}

/// Options for the terminal UI.
#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "timetravel.toml")]
    pub config: PathBuf,

    /// List the history newest first
    #[arg(long)]
    pub reverse_history: bool,

    /// Do not highlight the winning line
    #[arg(long)]
    pub no_highlight: bool,
}

impl Default for PlayArgs {
    fn default() -> Self {
        Self {
            config: PathBuf::from("timetravel.toml"),
            reverse_history: false,
            no_highlight: false,
        }
    }
}
