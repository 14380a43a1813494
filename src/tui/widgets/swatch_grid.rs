use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, HitTarget, Mode};
use crate::palette::{ColorEntry, Coordinate};
use crate::session::DisplayOption;
use crate::tui::colors;

use super::truncate;

/// Render the swatch grid and record a click target per cell
pub fn render_swatch_grid(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = app.session.state().layout;
    let border = if app.mode == Mode::Grid {
        colors::BORDER_FOCUS
    } else {
        colors::BORDER
    };

    let grid = app.session.grid();
    let block = Block::default()
        .title(format!(" {} {}×{} ", layout.title(), grid.cols, grid.rows))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if grid.cols == 0 || grid.rows == 0 || inner.width < grid.cols || inner.height < grid.rows {
        let msg = Paragraph::new("Terminal too small").style(Style::default().fg(colors::MUTED));
        frame.render_widget(msg, inner);
        return;
    }

    let cell_width = inner.width / grid.cols;
    let cell_height = inner.height / grid.rows;
    let gap = u16::from(cell_width > 3);

    let show_names = app.session.state().shows(DisplayOption::Names);
    let copied = app.session.copied().map(|feedback| feedback.id);
    let selected = app.session.selection().id();
    let mut hits = Vec::new();

    for row in 1..=grid.rows {
        for col in 1..=grid.cols {
            let coordinate = Coordinate::new(col, row);
            let cell_area = Rect {
                x: inner.x + (col - 1) * cell_width,
                y: inner.y + (row - 1) * cell_height,
                width: cell_width - gap,
                height: cell_height,
            };
            let cell = CellState {
                entry: grid.cell(coordinate),
                cursor: app.mode == Mode::Grid && app.cursor == coordinate,
                copied: copied == Some(coordinate),
                show_names,
            };
            let selected = cell.entry.is_some_and(|e| Some(e.id) == selected);
            let favorite = cell.entry.is_some_and(|e| app.session.is_favorite(e));

            render_cell(frame, cell_area, &cell, selected, favorite);
            hits.push((cell_area, HitTarget::Cell(coordinate)));
        }
    }

    app.hit_areas.extend(hits);
}

struct CellState<'a> {
    entry: Option<&'a ColorEntry>,
    cursor: bool,
    copied: bool,
    show_names: bool,
}

fn render_cell(frame: &mut Frame, area: Rect, cell: &CellState<'_>, selected: bool, favorite: bool) {
    let width = area.width as usize;
    let cursor_mark = if cell.cursor { "▶" } else { "" };

    let Some(entry) = cell.entry else {
        let style = Style::default().bg(colors::EMPTY_CELL).fg(colors::MUTED);
        frame.render_widget(Paragraph::new(cursor_mark).style(style), area);
        return;
    };

    let mut style = Style::default()
        .bg(colors::swatch(entry.rgb))
        .fg(colors::on_swatch(entry.rgb));
    if selected {
        style = style.add_modifier(Modifier::BOLD);
    }

    let marks = format!(
        "{}{}{}",
        cursor_mark,
        if selected { "●" } else { "" },
        if favorite { "★" } else { "" }
    );
    let label = if cell.copied {
        "Copied!".to_string()
    } else if cell.show_names {
        entry.name.clone()
    } else {
        String::new()
    };

    let lines = if area.height >= 2 {
        vec![
            Line::from(truncate(&marks, width)),
            Line::from(truncate(&label, width)),
        ]
    } else {
        let joined = if marks.is_empty() {
            label
        } else {
            format!("{} {}", marks, label)
        };
        vec![Line::from(truncate(joined.trim_end(), width))]
    };

    frame.render_widget(Paragraph::new(lines).style(style), area);
}
