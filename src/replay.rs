//! Non-interactive replay of a sequence of cells.

use timetravel_tictactoe::{Command, HistoryOrder, IndexError, Session, ViewModel};
use tracing::{debug, instrument};

/// Plays `cells` on a new game the way clicks would and returns the view.
///
/// Refused moves are skipped silently.
///
/// # Errors
///
/// Returns [`IndexError::Cell`] for a cell outside 0-8.
#[instrument]
pub fn replay(cells: &[usize], order: HistoryOrder) -> Result<ViewModel, IndexError> {
    let mut session = Session::new(order);
    for &cell in cells {
        session.dispatch(Command::CellClick(cell))?;
    }
    debug!(steps = session.state().history().len(), "Replay finished");
    Ok(session.view())
}

/// Formats a view as plain text: board, status, and history list.
pub fn render_text(view: &ViewModel) -> String {
    let mut out = view.board().display();
    out.push_str("\n\n");
    out.push_str(view.status_text());
    out.push('\n');

    if let Some(line) = view.win_line() {
        let [a, b, c] = line.indices();
        out.push_str(&format!("Winning line: {}, {}, {}\n", a, b, c));
    }

    out.push('\n');
    out.push_str(view.order().label());
    out.push('\n');
    for entry in view.history_entries() {
        let marker = if *entry.is_selected() { '>' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, entry.label()));
    }
    out
}
