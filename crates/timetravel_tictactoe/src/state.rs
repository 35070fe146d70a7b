//! Game state and the pure reducer over it.
//!
//! `GameState` is an immutable value. Moves and jumps return a new state;
//! the caller decides which state is current.

use super::error::{IllegalMove, IndexError, MoveError};
use super::history::{History, Snapshot};
use super::rules::{GameStatus, find_win_line};
use super::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

#[cfg(debug_assertions)]
use super::invariants::{GameStateInvariants, InvariantSet};

/// Complete game state: the history and which step is on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) history: History,
    pub(crate) current_step: usize,
    pub(crate) next_player: Player,
}

impl GameState {
    /// Creates a new game: empty board, step 0, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current_step: 0,
            next_player: Player::X,
        }
    }

    /// Returns the move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the step currently shown.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the player to move.
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    /// Returns the snapshot at the current step.
    pub fn current(&self) -> &Snapshot {
        // `current_step < history.len()` holds for every constructed state.
        &self.history.snapshots()[self.current_step]
    }

    /// Classifies the board at the current step.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn current_status(&self) -> GameStatus {
        GameStatus::classify(self.current().board(), self.next_player)
    }

    /// Plays `cell` for the player to move.
    ///
    /// Returns an unchanged copy when the move is refused: the game is
    /// already won, the cell is occupied, or the index is off the board.
    #[instrument(skip(self), fields(step = self.current_step, player = %self.next_player))]
    pub fn play_move(&self, cell: usize) -> Self {
        match self.try_play_move(cell) {
            Ok(next) => next,
            Err(e) => {
                debug!(error = %e, "Move ignored");
                self.clone()
            }
        }
    }

    /// Plays `cell` for the player to move, reporting why a move was refused.
    ///
    /// Any snapshots after the current step are discarded before the new one
    /// is appended.
    ///
    /// # Errors
    ///
    /// - [`IndexError::Cell`] if `cell` is not on the board.
    /// - [`IllegalMove::GameDecided`] if the current board has a winning line.
    /// - [`IllegalMove::CellOccupied`] if the cell already holds a mark.
    #[instrument(skip(self), fields(step = self.current_step, player = %self.next_player))]
    pub fn try_play_move(&self, cell: usize) -> Result<Self, MoveError> {
        let pos = Position::from_index(cell).ok_or(IndexError::Cell(cell))?;
        let current = self.current();

        if find_win_line(current.board()).is_some() {
            return Err(IllegalMove::GameDecided.into());
        }
        if !current.board().is_empty(pos) {
            return Err(IllegalMove::CellOccupied(pos).into());
        }

        let snapshot = Snapshot::new(current.board().with_mark(pos, self.next_player), Some(pos));
        let history = self.history.truncate(self.current_step + 1).append(snapshot);
        let next = Self {
            current_step: history.len() - 1,
            history,
            next_player: self.next_player.opponent(),
        };

        #[cfg(debug_assertions)]
        GameStateInvariants::check_all(&next).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        debug!(position = %pos, step = next.current_step, "Move applied");
        Ok(next)
    }

    /// Shows the board as it was at `step`.
    ///
    /// Only the pointer moves; history is kept until a move is played from
    /// the rewound step.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Step`] if `step` is outside the history.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to_step(&self, step: usize) -> Result<Self, IndexError> {
        self.history.at(step)?;
        Ok(Self {
            history: self.history.clone(),
            current_step: step,
            next_player: Player::for_step(step),
        })
    }

    /// Applies `cells` in order from a new game, ignoring refused moves.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Self {
        cells
            .iter()
            .fold(Self::new(), |state, &cell| state.play_move(cell))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.current_step(), 0);
        assert_eq!(state.next_player(), Player::X);
        assert_eq!(state.current_status(), GameStatus::InProgress(Player::X));
    }

    #[test]
    fn test_play_move_marks_and_flips() {
        let state = GameState::new().play_move(4);
        assert_eq!(state.current_step(), 1);
        assert_eq!(state.next_player(), Player::O);
        assert_eq!(
            state.current().board().get(Position::Center),
            Square::Occupied(Player::X)
        );
        assert_eq!(state.current().last_played(), Some(Position::Center));
    }

    #[test]
    fn test_try_play_move_reports_reason() {
        let state = GameState::new().play_move(4);
        assert_eq!(
            state.try_play_move(4),
            Err(MoveError::Illegal(IllegalMove::CellOccupied(Position::Center)))
        );
        assert_eq!(
            state.try_play_move(9),
            Err(MoveError::Index(IndexError::Cell(9)))
        );

        let won = GameState::replay(&[0, 4, 1, 5, 2]);
        assert_eq!(
            won.try_play_move(8),
            Err(MoveError::Illegal(IllegalMove::GameDecided))
        );
    }

    #[test]
    fn test_jump_does_not_touch_history() {
        let state = GameState::replay(&[0, 4, 1]);
        let rewound = state.jump_to_step(1).expect("step 1 exists");
        assert_eq!(rewound.history(), state.history());
        assert_eq!(rewound.current_step(), 1);
        assert_eq!(rewound.next_player(), Player::O);

        assert_eq!(
            state.jump_to_step(4),
            Err(IndexError::Step { step: 4, len: 4 })
        );
    }
}
