use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::app::App;
use crate::tui::colors;

use super::truncate;

/// List every favorite; ones hidden by the layout or filters are dimmed
pub fn render_favorites_panel(frame: &mut Frame, app: &App, area: Rect) {
    let favorites = app.session.favorite_entries();
    let shown = favorites.iter().filter(|f| f.visible).count();

    let block = Block::default()
        .title(format!(" Favorites {}/{} ", shown, favorites.len()))
        .borders(Borders::ALL);

    let width = block.inner(area).width.saturating_sub(3) as usize;
    let items: Vec<ListItem> = favorites
        .iter()
        .map(|favorite| {
            let entry = favorite.entry;
            let name_style = if favorite.visible {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(colors::MUTED)
                    .add_modifier(Modifier::CROSSED_OUT)
            };
            ListItem::new(Line::from(vec![
                Span::styled("  ", Style::default().bg(colors::swatch(entry.rgb))),
                Span::raw(" "),
                Span::styled(truncate(&entry.name, width), name_style),
            ]))
        })
        .collect();

    if items.is_empty() {
        let hint = ListItem::new(Span::styled(
            "f on a swatch to add",
            Style::default().fg(colors::MUTED),
        ));
        frame.render_widget(List::new(vec![hint]).block(block), area);
        return;
    }

    frame.render_widget(List::new(items).block(block), area);
}
