//! Status classification for a board position.

use super::super::{Board, Player};
use super::{is_full, winner};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of the game as shown to the players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// A player completed a line.
    #[display("Winner: {}", _0)]
    Won(Player),
    /// The board is full and nobody won.
    #[display("Tie")]
    Tie,
    /// The game continues with the given player to move.
    #[display("Next player: {}", _0)]
    InProgress(Player),
}

impl GameStatus {
    /// Classifies a board.
    ///
    /// A completed line always wins over a full board, and a full board
    /// over the next-player prompt.
    #[instrument]
    pub fn classify(board: &Board, next_player: Player) -> Self {
        if let Some(player) = winner(board) {
            GameStatus::Won(player)
        } else if is_full(board) {
            GameStatus::Tie
        } else {
            GameStatus::InProgress(next_player)
        }
    }
}
