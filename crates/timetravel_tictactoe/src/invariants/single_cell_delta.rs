//! History delta invariant: each step adds exactly one mark.

use super::super::{GameState, Player, Square};
use super::Invariant;

/// Invariant: every snapshot differs from its predecessor in exactly its
/// `last_played` cell, which was empty before and now holds the mark of the
/// player whose turn it was.
///
/// Step 0 must be the empty board with no `last_played`.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameState> for SingleCellDeltaInvariant {
    fn holds(state: &GameState) -> bool {
        let snapshots = state.history.snapshots();

        let Some(first) = snapshots.first() else {
            return false;
        };
        if first.last_played().is_some() || first.board().occupied() != 0 {
            return false;
        }

        snapshots.windows(2).enumerate().all(|(i, pair)| {
            let [before, after] = pair else {
                return false;
            };
            let Some(pos) = after.last_played() else {
                return false;
            };
            let changed = before
                .board()
                .squares()
                .iter()
                .zip(after.board().squares())
                .filter(|(a, b)| a != b)
                .count();

            changed == 1
                && before.board().is_empty(pos)
                && after.board().get(pos) == Square::Occupied(Player::for_step(i))
        })
    }

    fn description() -> &'static str {
        "Each history step places exactly one mark on an empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{History, Position, Snapshot};

    #[test]
    fn test_new_game_holds() {
        assert!(SingleCellDeltaInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_rewound_and_replayed_holds() {
        let state = GameState::replay(&[0, 4, 1, 5, 2])
            .jump_to_step(2)
            .expect("step 2 exists")
            .play_move(8);
        assert!(SingleCellDeltaInvariant::holds(&state));
    }

    #[test]
    fn test_two_marks_in_one_step_violates() {
        let board = crate::Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::Center, Player::O);
        let mut state = GameState::new();
        state.history = History::new().append(Snapshot::new(board, Some(Position::TopLeft)));
        assert!(!SingleCellDeltaInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_mark_violates() {
        let board = crate::Board::new().with_mark(Position::TopLeft, Player::O);
        let mut state = GameState::new();
        state.history = History::new().append(Snapshot::new(board, Some(Position::TopLeft)));
        assert!(!SingleCellDeltaInvariant::holds(&state));
    }
}
