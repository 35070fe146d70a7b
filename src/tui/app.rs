//! Application state and logic.

use super::input::{Focus, KeyAction, action_for_key};
use crate::TuiConfig;
use crossterm::event::KeyCode;
use timetravel_tictactoe::{Command, IndexError, Position, Session, ViewModel};
use tracing::{debug, instrument};

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    session: Session,
    cursor: Position,
    focus: Focus,
    history_cursor: usize,
    highlight_win_line: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument(skip(config))]
    pub fn new(config: &TuiConfig) -> Self {
        let mut app = Self {
            session: Session::new(config.history_order()),
            cursor: Position::Center,
            focus: Focus::Board,
            history_cursor: 0,
            highlight_win_line: *config.highlight_win_line(),
            should_quit: false,
        };
        app.sync_history_cursor();
        app
    }

    /// Gets the game session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Builds the view of the current game.
    pub fn view(&self) -> ViewModel {
        self.session.view()
    }

    /// Board cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane receiving navigation keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Index of the highlighted entry in the displayed history list.
    pub fn history_cursor(&self) -> usize {
        self.history_cursor
    }

    /// Whether the winning line is drawn highlighted.
    pub fn highlight_win_line(&self) -> bool {
        self.highlight_win_line
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if a key produced a cell or step the game does
    /// not have.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Result<(), IndexError> {
        let Some(action) = action_for_key(self.focus, self.cursor, key) else {
            return Ok(());
        };
        debug!(?action, "Key action");

        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::SwitchFocus => self.focus = self.focus.toggle(),
            KeyAction::MoveCursor(pos) => self.cursor = pos,
            KeyAction::ScrollHistory(delta) => {
                let last = self.session.state().history().len() - 1;
                self.history_cursor = self.history_cursor.saturating_add_signed(delta).min(last);
            }
            KeyAction::Activate => match self.focus {
                Focus::Board => self.dispatch(Command::CellClick(self.cursor.to_index()))?,
                Focus::History => {
                    let step = self
                        .view()
                        .history_entries()
                        .get(self.history_cursor)
                        .map(|entry| *entry.step())
                        .unwrap_or(self.history_cursor);
                    self.dispatch(Command::HistoryEntryClick(step))?;
                }
            },
            KeyAction::Dispatch(command) => self.dispatch(command)?,
        }
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> Result<(), IndexError> {
        self.session.dispatch(command)?;
        if let Command::CellClick(cell) = command {
            self.cursor = Position::from_index(cell).unwrap_or(self.cursor);
        }
        self.sync_history_cursor();
        Ok(())
    }

    /// Points the history cursor at the entry for the current step.
    fn sync_history_cursor(&mut self) {
        if let Some(index) = self
            .view()
            .history_entries()
            .iter()
            .position(|entry| *entry.is_selected())
        {
            self.history_cursor = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timetravel_tictactoe::{HistoryOrder, Player};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key).expect("valid key");
        }
    }

    #[test]
    fn test_digits_play_moves() {
        let mut app = App::new(&TuiConfig::default());
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5')]);

        let state = app.session().state();
        assert_eq!(state.history().len(), 3);
        assert_eq!(state.next_player(), Player::X);
        assert_eq!(app.cursor(), Position::Center);
        assert_eq!(app.history_cursor(), 2);
    }

    #[test]
    fn test_cursor_and_enter_play_move() {
        let mut app = App::new(&TuiConfig::default());
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);

        assert_eq!(
            app.session().state().current().last_played(),
            Some(Position::TopLeft)
        );
    }

    #[test]
    fn test_history_navigation_rewinds() {
        let mut app = App::new(&TuiConfig::default());
        press(
            &mut app,
            &[
                KeyCode::Char('1'),
                KeyCode::Char('5'),
                KeyCode::Char('2'),
                KeyCode::Tab,
                KeyCode::Up,
                KeyCode::Up,
                KeyCode::Enter,
            ],
        );

        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.session().state().current_step(), 1);
        assert_eq!(app.session().state().history().len(), 4);
    }

    #[test]
    fn test_reversed_history_navigation() {
        let config = TuiConfig::default().with_overrides(true, false);
        let mut app = App::new(&config);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5')]);

        // Newest first: the current step sits at the top.
        assert_eq!(app.session().order(), HistoryOrder::Descending);
        assert_eq!(app.history_cursor(), 0);

        press(&mut app, &[KeyCode::Tab, KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
        assert_eq!(app.session().state().current_step(), 0);
        assert_eq!(app.history_cursor(), 2);
    }

    #[test]
    fn test_toggle_keeps_cursor_on_current_step() {
        let mut app = App::new(&TuiConfig::default());
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5'), KeyCode::Char('o')]);

        assert_eq!(app.session().order(), HistoryOrder::Descending);
        assert_eq!(app.history_cursor(), 0);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(&TuiConfig::default());
        press(&mut app, &[KeyCode::Char('q')]);
        assert!(app.should_quit());
    }
}
