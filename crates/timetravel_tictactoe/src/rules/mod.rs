//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are kept apart from the board
//! storage and the history so every snapshot can be judged on its own.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::is_full;
pub use status::GameStatus;
pub use win::{WinLine, find_win_line, winner};
