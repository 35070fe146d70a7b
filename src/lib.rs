//! Timetravel - terminal tic-tac-toe with a rewindable move history.
//!
//! The game rules and history live in [`timetravel_tictactoe`]; this crate
//! adds the terminal front end, its configuration, and a plain-text replay.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for the terminal UI
//! - **TUI**: ratatui event loop turning key presses into game commands
//! - **Replay**: apply a list of cells and print the resulting view

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod replay;
pub mod tui;

pub use config::{ConfigError, TuiConfig};
pub use replay::{render_text, replay};
