//! Key bindings for the terminal UI.

use crossterm::event::KeyCode;
use timetravel_tictactoe::{Command, Position};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the history list.
    History,
}

impl Focus {
    /// Returns the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Leave the game.
    Quit,
    /// Switch focus between the board and the history list.
    SwitchFocus,
    /// Move the board cursor.
    MoveCursor(Position),
    /// Move the history selection by this many entries.
    ScrollHistory(isize),
    /// Activate whatever the focused pane has selected.
    Activate,
    /// Forward a command to the game.
    Dispatch(Command),
}

/// Maps a key press to an action given the focused pane and board cursor.
pub fn action_for_key(focus: Focus, cursor: Position, key: KeyCode) -> Option<KeyAction> {
    match (focus, key) {
        (_, KeyCode::Char('q') | KeyCode::Esc) => Some(KeyAction::Quit),
        (_, KeyCode::Tab | KeyCode::BackTab) => Some(KeyAction::SwitchFocus),
        (_, KeyCode::Char('o')) => Some(KeyAction::Dispatch(Command::ToggleHistoryOrder)),
        (_, KeyCode::Char(c)) if digit_cell(c).is_some() => {
            digit_cell(c).map(|cell| KeyAction::Dispatch(Command::CellClick(cell)))
        }
        (_, KeyCode::Enter | KeyCode::Char(' ')) => Some(KeyAction::Activate),
        (Focus::Board, KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Some(KeyAction::MoveCursor(move_cursor(cursor, key)))
        }
        (Focus::History, KeyCode::Up) => Some(KeyAction::ScrollHistory(-1)),
        (Focus::History, KeyCode::Down) => Some(KeyAction::ScrollHistory(1)),
        _ => None,
    }
}

/// Maps the keys `1`-`9` to cells 0-8.
pub fn digit_cell(c: char) -> Option<usize> {
    match c.to_digit(10) {
        Some(d @ 1..=9) => Some(d as usize - 1),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (col, row) = (cursor.col(), cursor.row());
    let (col, row) = match key {
        KeyCode::Left => (col.saturating_sub(1), row),
        KeyCode::Right => ((col + 1).min(2), row),
        KeyCode::Up => (col, row.saturating_sub(1)),
        KeyCode::Down => (col, (row + 1).min(2)),
        _ => (col, row),
    };
    Position::from_col_row(col, row).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Right), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
    }

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(digit_cell('1'), Some(0));
        assert_eq!(digit_cell('9'), Some(8));
        assert_eq!(digit_cell('0'), None);
        assert_eq!(digit_cell('x'), None);
    }

    #[test]
    fn test_arrows_follow_focus() {
        assert_eq!(
            action_for_key(Focus::Board, Position::Center, KeyCode::Up),
            Some(KeyAction::MoveCursor(Position::TopCenter))
        );
        assert_eq!(
            action_for_key(Focus::History, Position::Center, KeyCode::Up),
            Some(KeyAction::ScrollHistory(-1))
        );
        assert_eq!(
            action_for_key(Focus::History, Position::Center, KeyCode::Left),
            None
        );
    }

    #[test]
    fn test_global_keys() {
        assert_eq!(
            action_for_key(Focus::History, Position::Center, KeyCode::Char('5')),
            Some(KeyAction::Dispatch(Command::CellClick(4)))
        );
        assert_eq!(
            action_for_key(Focus::Board, Position::Center, KeyCode::Char('o')),
            Some(KeyAction::Dispatch(Command::ToggleHistoryOrder))
        );
        assert_eq!(
            action_for_key(Focus::Board, Position::Center, KeyCode::Esc),
            Some(KeyAction::Quit)
        );
    }
}
