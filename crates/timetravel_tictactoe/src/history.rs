//! Append-only log of board snapshots.
//!
//! Every operation returns a new [`History`]; recorded snapshots are never
//! edited in place, which is what makes rewinding to any step safe.

use super::error::IndexError;
use super::{Board, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A board as it stood after one step, plus the cell that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Snapshot {
    board: Board,
    last_played: Option<Position>,
}

impl Snapshot {
    /// The empty starting board.
    pub fn initial() -> Self {
        Self::new(Board::new(), None)
    }

    /// Board at this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell played to reach this step, `None` for the starting board.
    pub fn last_played(&self) -> Option<Position> {
        self.last_played
    }
}

/// Ordered snapshots from game start, indexed by step.
///
/// Never empty: step 0 is always the starting board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// Creates a history holding only the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
        }
    }

    /// Returns a new history with `snapshot` added after the last element.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn append(&self, snapshot: Snapshot) -> Self {
        let mut snapshots = Vec::with_capacity(self.snapshots.len() + 1);
        snapshots.extend_from_slice(&self.snapshots);
        snapshots.push(snapshot);
        Self { snapshots }
    }

    /// Returns the prefix holding the first `keep_len` snapshots.
    ///
    /// Asking for more than the history holds returns it whole. A
    /// `keep_len` of 0 would drop the starting board; debug builds panic on
    /// it and release builds keep the starting board.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn truncate(&self, keep_len: usize) -> Self {
        debug_assert!(keep_len >= 1, "history must keep the starting board");
        let keep_len = keep_len.clamp(1, self.snapshots.len());
        if keep_len < self.snapshots.len() {
            debug!(
                discarded = self.snapshots.len() - keep_len,
                "Discarding rewound future"
            );
        }
        Self {
            snapshots: self.snapshots[..keep_len].to_vec(),
        }
    }

    /// Returns the snapshot at `step`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Step`] if `step` is outside `[0, len)`.
    pub fn at(&self, step: usize) -> Result<&Snapshot, IndexError> {
        self.snapshots.get(step).ok_or(IndexError::Step {
            step,
            len: self.snapshots.len(),
        })
    }

    /// Most recent snapshot.
    pub fn latest(&self) -> &Snapshot {
        // `snapshots` always holds the starting board.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Number of snapshots, including the starting board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Iterates snapshots from game start.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Snapshot> + ExactSizeIterator {
        self.snapshots.iter()
    }

    /// All snapshots as a slice.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    fn step(board: &Board, pos: Position, player: Player) -> Snapshot {
        Snapshot::new(board.with_mark(pos, player), Some(pos))
    }

    #[test]
    fn test_new_history_has_starting_board() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.at(0), Ok(&Snapshot::initial()));
        assert_eq!(history.latest().last_played(), None);
    }

    #[test]
    fn test_append_returns_new_history() {
        let history = History::new();
        let snapshot = step(&Board::new(), Position::Center, Player::X);
        let appended = history.append(snapshot);

        assert_eq!(history.len(), 1);
        assert_eq!(appended.len(), 2);
        assert_eq!(appended.at(1), Ok(&snapshot));
        assert_eq!(appended.at(0), history.at(0));
    }

    #[test]
    fn test_truncate_keeps_prefix() {
        let first = step(&Board::new(), Position::TopLeft, Player::X);
        let second = step(first.board(), Position::Center, Player::O);
        let history = History::new().append(first).append(second);

        let truncated = history.truncate(2);
        assert_eq!(truncated.len(), 2);
        assert_eq!(truncated.latest(), &first);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_truncate_past_end_keeps_everything() {
        let history = History::new().append(step(&Board::new(), Position::Center, Player::X));
        assert_eq!(history.truncate(10).len(), 2);
        assert_eq!(history.truncate(1), History::new());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "history must keep the starting board")]
    fn test_truncate_to_zero_panics() {
        let history = History::new().append(step(&Board::new(), Position::Center, Player::X));
        let _ = history.truncate(0);
    }

    #[test]
    fn test_at_out_of_range() {
        let history = History::new();
        assert_eq!(history.at(1), Err(IndexError::Step { step: 1, len: 1 }));
    }
}
