use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, Mode};
use crate::tui::colors;
use crate::tui::ui::centered_rect;

/// Render the key binding overview for the grid and tag bar
pub fn render_help_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let dialog_area = centered_rect(60, 80, area);
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(" Keys ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER_FOCUS));

    let mut lines = Vec::new();
    for mode in [Mode::Grid, Mode::Tags] {
        lines.push(Line::from(Span::styled(
            mode.to_string(),
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, action) in app.dispatcher().bindings_for(&mode) {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<12}", key), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(action.description(), Style::default().fg(colors::MUTED)),
            ]));
        }
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).block(block), dialog_area);
}
