//! Turn parity invariant: X moves on even steps, O on odd ones.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: `next_player` agrees with the parity of `current_step`.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(state: &GameState) -> bool {
        state.next_player == Player::for_step(state.current_step)
    }

    fn description() -> &'static str {
        "Next player matches the parity of the current step"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternation_holds_through_game() {
        let mut state = GameState::new();
        for cell in [0, 4, 8, 2, 6] {
            state = state.play_move(cell);
            assert!(TurnParityInvariant::holds(&state));
        }
    }

    #[test]
    fn test_jump_restores_parity() {
        let state = GameState::replay(&[0, 4, 8]);
        for step in 0..state.history().len() {
            let rewound = state.jump_to_step(step).expect("step exists");
            assert!(TurnParityInvariant::holds(&rewound));
        }
    }

    #[test]
    fn test_wrong_player_violates() {
        let mut state = GameState::replay(&[0]);
        state.next_player = Player::X;
        assert!(!TurnParityInvariant::holds(&state));
    }
}
