use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Mode};
use crate::tui::colors;

/// Render the help footer widget
pub fn render_help_footer(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.mode {
        Mode::Grid => grid_mode_help(),
        Mode::Tags => tags_mode_help(),
        Mode::Dialog => dialog_mode_help(),
    };

    let spans: Vec<Span> = help_text
        .iter()
        .flat_map(|(key, desc)| {
            vec![
                Span::styled(*key, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(": "),
                Span::styled(*desc, Style::default().fg(colors::MUTED)),
                Span::raw("  "),
            ]
        })
        .collect();

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line).style(Style::default().bg(colors::BAR_BG));

    frame.render_widget(paragraph, area);
}

fn grid_mode_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("hjkl", "Move"),
        ("Enter", "Copy"),
        ("f", "Favorite"),
        ("F", "Favorites only"),
        ("L", "Layout"),
        ("c", "Format"),
        ("Tab", "Tags"),
        ("?", "Help"),
        ("q", "Quit"),
    ]
}

fn tags_mode_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("h/l", "Move"),
        ("j/k", "Row"),
        ("Enter", "Toggle"),
        ("x", "Clear tags"),
        ("Tab", "Grid"),
        ("?", "Help"),
    ]
}

fn dialog_mode_help() -> Vec<(&'static str, &'static str)> {
    vec![("y", "Yes"), ("n", "No"), ("Esc", "Close")]
}
