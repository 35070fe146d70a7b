//! History panel rendering.

use super::super::app::App;
use super::super::input::Focus;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use timetravel_tictactoe::ViewModel;

/// Renders the order toggle and the list of history entries.
pub fn render_history(f: &mut Frame, area: Rect, app: &App, view: &ViewModel) {
    let border_style = if app.focus() == Focus::History {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("History");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let toggle = Paragraph::new(format!("[o] {}", view.order().label()))
        .style(Style::default().fg(Color::Magenta));
    f.render_widget(toggle, chunks[0]);

    let items: Vec<ListItem> = view
        .history_entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let marker = if *entry.is_selected() { "▶ " } else { "  " };
            let mut style = if *entry.is_selected() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if app.focus() == Focus::History && app.history_cursor() == index {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(format!("{}{}", marker, entry.label()))).style(style)
        })
        .collect();

    f.render_widget(List::new(items), chunks[1]);
}
