use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::color::{contrast_color, contrast_ratio};
use crate::palette::LayoutName;
use crate::session::Selection;
use crate::tui::colors;

/// Render the selected color's details
pub fn render_detail_panel(frame: &mut Frame, app: &App, area: Rect) {
    let title = match app.session.selection() {
        Selection::Implicit(_) => " Details (only match) ",
        _ => " Details ",
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    let Some(entry) = app.session.selected_entry() else {
        let empty = Paragraph::new("No color selected")
            .block(block)
            .style(Style::default().fg(colors::MUTED));
        frame.render_widget(empty, area);
        return;
    };

    let format = app.session.state().format;
    let foreground = contrast_color(entry.rgb);
    let ratio = contrast_ratio(entry.rgb, foreground.rgb());

    let positions = LayoutName::ALL
        .iter()
        .map(|layout| match entry.placement(*layout) {
            Some(coordinate) => format!("{} {}", layout, coordinate),
            None => format!("{} -", layout),
        })
        .collect::<Vec<_>>()
        .join("  ");

    let tags = entry
        .tags
        .iter()
        .map(|tag| tag.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let favorite = if app.session.is_favorite(entry) { " ★" } else { "" };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                "    ",
                Style::default().bg(colors::swatch(entry.rgb)),
            ),
            Span::raw(" "),
            Span::styled(
                format!("{}{}", entry.name, favorite),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Value: ", Style::default().fg(colors::MUTED)),
            Span::styled(entry.formatted(format), Style::default().fg(colors::HIGHLIGHT)),
        ]),
        Line::from(vec![
            Span::styled("Text:  ", Style::default().fg(colors::MUTED)),
            Span::raw(format!("{} ({:.1}:1)", foreground.hex(), ratio)),
        ]),
        Line::from(vec![
            Span::styled("At:    ", Style::default().fg(colors::MUTED)),
            Span::raw(positions),
        ]),
        Line::from(vec![
            Span::styled("Tags:  ", Style::default().fg(colors::MUTED)),
            Span::raw(tags),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
