//! Tic-tac-toe with a time-travel move history.
//!
//! The game is an immutable [`GameState`] plus pure transitions:
//!
//! - [`GameState::play_move`] marks a cell, discarding any rewound future.
//! - [`GameState::jump_to_step`] shows an earlier board without touching
//!   the history.
//!
//! A [`Session`] owns the current state, accepts [`Command`]s from the
//! presentation layer and produces a [`ViewModel`] to draw.
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::{GameState, GameStatus, Player};
//!
//! let state = GameState::replay(&[0, 4, 1, 5, 2]);
//! assert_eq!(state.current_status(), GameStatus::Won(Player::X));
//!
//! let rewound = state.jump_to_step(3).unwrap();
//! assert_eq!(rewound.next_player(), Player::O);
//! assert_eq!(rewound.history().len(), 6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod state;
mod types;
mod view;

pub use action::Command;
pub use error::{IllegalMove, IndexError, MoveError};
pub use history::{History, Snapshot};
pub use position::Position;
pub use rules::{GameStatus, WinLine, find_win_line, is_full, winner};
pub use session::Session;
pub use state::GameState;
pub use types::{Board, Player, Square};
pub use view::{HistoryEntry, HistoryOrder, ViewModel, move_description};
