//! The single mutable game cell owned by the presentation layer.

use super::action::Command;
use super::error::IndexError;
use super::view::{HistoryOrder, ViewModel};
use super::GameState;
use tracing::{debug, info, instrument};

/// Owns the current [`GameState`] and the history display order.
///
/// Each command replaces the state with the reducer's result; old states
/// are simply dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    state: GameState,
    order: HistoryOrder,
}

impl Session {
    /// Starts a new game with the history listed in `order`.
    #[instrument]
    pub fn new(order: HistoryOrder) -> Self {
        Self {
            state: GameState::new(),
            order,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current history display order.
    pub fn order(&self) -> HistoryOrder {
        self.order
    }

    /// Builds the view of the current state.
    pub fn view(&self) -> ViewModel {
        ViewModel::new(&self.state, self.order)
    }

    /// Applies a command.
    ///
    /// Refused moves (occupied cell, decided game) leave the state as it is.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] when the command names a cell or step that
    /// does not exist; the state is left untouched.
    #[instrument(skip(self), fields(step = self.state.current_step()))]
    pub fn dispatch(&mut self, command: Command) -> Result<(), IndexError> {
        debug!(%command, "Dispatching command");
        match command {
            Command::CellClick(cell) => {
                if cell >= 9 {
                    return Err(IndexError::Cell(cell));
                }
                self.state = self.state.play_move(cell);
            }
            Command::HistoryEntryClick(step) => {
                self.state = self.state.jump_to_step(step)?;
            }
            Command::ToggleHistoryOrder => {
                self.order = self.order.toggle();
                info!(order = ?self.order, "History order toggled");
            }
        }
        Ok(())
    }
}
