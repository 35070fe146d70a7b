//! Commands the presentation layer sends to the game.
//!
//! Commands describe the requested transition; the [`Session`](crate::Session)
//! decides what it means for the current state.

use serde::{Deserialize, Serialize};

/// A user interaction forwarded by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Command {
    /// A board cell (0-8) was clicked.
    #[display("click cell {}", _0)]
    CellClick(usize),

    /// A history entry was clicked.
    #[display("go to step {}", _0)]
    HistoryEntryClick(usize),

    /// The history order toggle was clicked.
    #[display("toggle history order")]
    ToggleHistoryOrder,
}
