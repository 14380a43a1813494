use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, DialogKind, NotificationLevel};

use super::colors;
use super::widgets::{
    render_confirm_dialog, render_detail_panel, render_favorites_panel, render_help_dialog,
    render_help_footer, render_swatch_grid, render_tag_bar, truncate,
};

/// Width of the detail / favorites column
const SIDE_PANEL_WIDTH: u16 = 34;

/// Main render function
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.hit_areas.clear();

    // Main layout: header, filters, body, footer
    let [header_area, filter_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, app, header_area);
    render_tag_bar(frame, app, filter_area);

    let [grid_area, side_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(SIDE_PANEL_WIDTH)])
            .areas(body_area);

    render_swatch_grid(frame, app, grid_area);

    let [detail_area, favorites_area] =
        Layout::vertical([Constraint::Length(8), Constraint::Fill(1)]).areas(side_area);
    render_detail_panel(frame, app, detail_area);
    render_favorites_panel(frame, app, favorites_area);

    render_help_footer(frame, app, footer_area);

    match app.dialog {
        DialogKind::None => {}
        DialogKind::ConfirmClearFavorites => render_confirm_dialog(frame, app, area),
        DialogKind::Help => render_help_dialog(frame, app, area),
    }

    // Render notifications (stacked popups in bottom-right)
    if !app.notifications.is_empty() {
        render_notifications(frame, app, area);
    }
}

/// Render header bar
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.session.state();
    let title = "swatchgrid";
    let status = format!(
        "{} · {} · {} shown  [{}]",
        state.layout,
        state.format,
        app.session.grid().occupied(),
        app.mode
    );

    let padding = (area.width as usize).saturating_sub(title.width() + status.width());
    let header_text = Line::from(vec![
        Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(padding)),
        Span::styled(status, Style::default().fg(colors::PRIMARY)),
    ]);

    let header = Paragraph::new(header_text).style(Style::default().bg(colors::BAR_BG));

    frame.render_widget(header, area);
}

/// Render notifications as stacked popups in bottom-right
/// Oldest at top, newest at bottom
fn render_notifications(frame: &mut Frame, app: &App, area: Rect) {
    const POPUP_WIDTH: u16 = 40;
    const POPUP_HEIGHT: u16 = 3;
    const MAX_VISIBLE: usize = 5;

    let start_idx = app.notifications.len().saturating_sub(MAX_VISIBLE);
    let count = app.notifications.len() - start_idx;

    for (i, notification) in app.notifications[start_idx..].iter().enumerate() {
        let (label, border_color) = match notification.level {
            NotificationLevel::Info => ("INFO", colors::PRIMARY),
            NotificationLevel::Error => ("ERROR", colors::ERROR),
        };

        let slide_offset = notification.slide_offset(POPUP_WIDTH + 2);

        // i=0 is oldest (top), i=count-1 is newest (bottom)
        let y_offset = (count - 1 - i) as u16 * POPUP_HEIGHT;
        let base_x = area.width.saturating_sub(POPUP_WIDTH + 1);
        let popup_x = base_x + slide_offset;
        let popup_y = area.height.saturating_sub(POPUP_HEIGHT + 1 + y_offset);

        // Fully slid out of view
        if popup_x >= area.width {
            continue;
        }

        let visible_width = area.width.saturating_sub(popup_x).min(POPUP_WIDTH);
        if visible_width == 0 {
            continue;
        }

        let popup_area = Rect {
            x: popup_x,
            y: popup_y,
            width: visible_width,
            height: POPUP_HEIGHT,
        };

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(format!(" {} ", label))
            .title_style(
                Style::default()
                    .fg(border_color)
                    .add_modifier(Modifier::BOLD),
            );

        let msg = truncate(&notification.message, visible_width.saturating_sub(2) as usize);
        frame.render_widget(Paragraph::new(msg).block(block), popup_area);
    }
}

/// Create a centered rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [_, center, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center);

    center
}
