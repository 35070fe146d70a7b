//! Step range invariant: the current step addresses a recorded snapshot.

use super::super::GameState;
use super::Invariant;

/// Invariant: `current_step < history.len()`.
pub struct StepInRangeInvariant;

impl Invariant<GameState> for StepInRangeInvariant {
    fn holds(state: &GameState) -> bool {
        state.current_step < state.history.len()
    }

    fn description() -> &'static str {
        "Current step lies within the history"
    }
}
