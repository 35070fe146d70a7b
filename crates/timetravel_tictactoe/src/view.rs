//! Render-ready view of a game for the presentation layer.

use super::history::Snapshot;
use super::rules::{GameStatus, WinLine, find_win_line};
use super::{Board, GameState};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Display order of the history list.
///
/// Affects presentation only, never the history itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HistoryOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Most recent move first.
    Descending,
}

impl HistoryOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label for the order toggle.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "History Order ▼",
            Self::Descending => "History Order ▲",
        }
    }
}

/// Describes the history entry for `step`.
///
/// Step 0 is the game start; later steps name the move number and the
/// column/row of the cell played.
#[instrument]
pub fn move_description(step: usize, snapshot: &Snapshot) -> String {
    match (step, snapshot.last_played()) {
        (0, _) | (_, None) => "Go to game start".to_string(),
        (step, Some(pos)) => format!("Go to move #{} ({},{})", step, pos.col(), pos.row()),
    }
}

/// One line of the history list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct HistoryEntry {
    /// Step this entry jumps to.
    step: usize,
    /// Text shown for the entry.
    label: String,
    /// Whether this step is on the board.
    is_selected: bool,
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ViewModel {
    /// Board at the current step.
    board: Board,
    /// Status of the current board.
    status: GameStatus,
    /// Status line text.
    status_text: String,
    /// History list in display order.
    history_entries: Vec<HistoryEntry>,
    /// Completed line on the current board, if any.
    win_line: Option<WinLine>,
    /// Display order of `history_entries`.
    order: HistoryOrder,
}

impl ViewModel {
    /// Builds the view of `state` with the history listed in `order`.
    #[instrument(skip(state), fields(step = state.current_step()))]
    pub fn new(state: &GameState, order: HistoryOrder) -> Self {
        let current = state.current();
        let status = state.current_status();

        let mut history_entries: Vec<_> = state
            .history()
            .iter()
            .enumerate()
            .map(|(step, snapshot)| {
                HistoryEntry::new(
                    step,
                    move_description(step, snapshot),
                    step == state.current_step(),
                )
            })
            .collect();
        if order == HistoryOrder::Descending {
            history_entries.reverse();
        }

        Self {
            board: *current.board(),
            status,
            status_text: status.to_string(),
            history_entries,
            win_line: find_win_line(current.board()),
            order,
        }
    }
}
