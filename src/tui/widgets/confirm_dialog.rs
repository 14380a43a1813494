use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::tui::colors;
use crate::tui::ui::centered_rect;

/// Render the clear-favorites confirmation
pub fn render_confirm_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let dialog_area = centered_rect(50, 30, area);

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(" Clear Favorites ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::ERROR));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let [message_area, _, button_area] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let count = app.session.state().favorites.len();
    let lines = vec![
        Line::from("Remove every favorite?"),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} {}", count, if count == 1 { "color" } else { "colors" }),
            Style::default()
                .fg(colors::HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), message_area);

    let buttons = Line::from(vec![
        Span::styled(
            " [y] Yes ",
            Style::default()
                .fg(colors::ERROR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            " [n] No ",
            Style::default()
                .fg(colors::SUCCESS)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(buttons), button_area);
}
