//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the 8 triples of positions that make three-in-a-row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([Position; 3]);

impl WinLine {
    /// Every winning line, in detection order: rows, columns, diagonals.
    pub const ALL: [WinLine; 8] = [
        // Rows
        WinLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
        WinLine([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
        WinLine([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
        // Columns
        WinLine([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
        WinLine([Position::TopCenter, Position::Center, Position::BottomCenter]),
        WinLine([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
        // Diagonals
        WinLine([Position::TopLeft, Position::Center, Position::BottomRight]),
        WinLine([Position::TopRight, Position::Center, Position::BottomLeft]),
    ];

    /// Positions on the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Board indices on the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Finds the first completed line on the board.
///
/// Returns `Some(line)` for the first line (in [`WinLine::ALL`] order) whose
/// three squares hold the same mark, `None` otherwise.
#[instrument]
pub fn find_win_line(board: &Board) -> Option<WinLine> {
    WinLine::ALL.into_iter().find(|line| {
        let [a, b, c] = line.positions();
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn winner(board: &Board) -> Option<Player> {
    find_win_line(board).and_then(|line| board.get(line.positions()[0]).player())
}
