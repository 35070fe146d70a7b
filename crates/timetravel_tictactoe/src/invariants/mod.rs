//! First-class invariants over [`GameState`](crate::GameState).
//!
//! Invariants are logical properties that must hold after every transition.
//! They are testable on their own and are checked as a postcondition of
//! every move in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all invariants hold, or every violation otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(results: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = results
        .iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

pub mod single_cell_delta;
pub mod step_in_range;
pub mod turn_parity;

pub use single_cell_delta::SingleCellDeltaInvariant;
pub use step_in_range::StepInRangeInvariant;
pub use turn_parity::TurnParityInvariant;

/// All game state invariants as a composable set.
pub type GameStateInvariants = (
    StepInRangeInvariant,
    TurnParityInvariant,
    SingleCellDeltaInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, Player};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameStateInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jumps() {
        let state = GameState::replay(&[0, 4, 1, 5]);
        assert!(GameStateInvariants::check_all(&state).is_ok());

        let rewound = state.jump_to_step(1).expect("step 1 exists").play_move(8);
        assert!(GameStateInvariants::check_all(&rewound).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut state = GameState::replay(&[0, 4]);
        // Step 7 is past the end and belongs to O.
        state.current_step = 7;
        state.next_player = Player::X;

        let violations = GameStateInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (StepInRangeInvariant, TurnParityInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}
