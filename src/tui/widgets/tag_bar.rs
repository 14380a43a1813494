use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, HitTarget, Mode, TagCursor, TagRow};
use crate::filter::TagCount;
use crate::palette::Tag;
use crate::tui::colors;

/// Render the group row and the label row, two lines each
pub fn render_tag_bar(frame: &mut Frame, app: &mut App, area: Rect) {
    let [groups_area, labels_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Length(2)]).areas(area);

    for (row, row_area) in [(TagRow::Groups, groups_area), (TagRow::Labels, labels_area)] {
        let buttons = app.tag_row(row);
        let styles: Vec<Style> = buttons
            .iter()
            .map(|button| button_style(app, button))
            .collect();
        let focused_index = (app.mode == Mode::Tags && app.tag_cursor.row == row)
            .then_some(app.tag_cursor.index);

        let labels: Vec<String> = buttons
            .iter()
            .enumerate()
            .map(|(index, button)| button_label(button, focused_index == Some(index)))
            .collect();

        for (index, rect) in flow(row_area, &labels).into_iter().enumerate() {
            let Some(rect) = rect else {
                continue;
            };
            let span = Span::styled(labels[index].as_str(), styles[index]);
            frame.render_widget(Paragraph::new(span), rect);
            app.hit_areas
                .push((rect, HitTarget::Tag(TagCursor { row, index })));
        }
    }
}

fn button_label(button: &TagCount, focused: bool) -> String {
    let name = match &button.tag {
        Tag::Favorite => "★ favorites".to_string(),
        other => other.display_name().to_string(),
    };
    let check = if button.active { "✓ " } else { "" };
    let (open, close) = if focused { ("[", "]") } else { (" ", " ") };
    format!("{}{}{} {}{}", open, check, name, button.count, close)
}

fn button_style(app: &App, button: &TagCount) -> Style {
    if !button.is_enabled() {
        return Style::default().fg(colors::DISABLED);
    }

    let style = match &button.tag {
        Tag::Group(group) => app
            .session
            .catalog()
            .group_swatches()
            .iter()
            .find(|swatch| swatch.group == *group)
            .map(|swatch| {
                Style::default()
                    .bg(colors::swatch(swatch.rgb))
                    .fg(colors::on_swatch(swatch.rgb))
            })
            .unwrap_or_default(),
        Tag::Favorite => Style::default().fg(colors::HIGHLIGHT),
        Tag::Label(_) => Style::default().fg(colors::PRIMARY),
    };

    if button.active {
        style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        style
    }
}

/// Lay labels out left to right, wrapping onto the area's next line.
///
/// Labels that do not fit get `None`.
fn flow(area: Rect, labels: &[String]) -> Vec<Option<Rect>> {
    let mut x = area.x;
    let mut y = area.y;
    let right = area.x + area.width;
    let bottom = area.y + area.height;

    labels
        .iter()
        .map(|label| {
            let width = label.width() as u16;
            if x + width > right && x > area.x {
                x = area.x;
                y += 1;
            }
            if y >= bottom || x + width > right {
                return None;
            }
            let rect = Rect::new(x, y, width, 1);
            x += width + 1;
            Some(rect)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_wraps_to_next_line() {
        let labels = vec!["aaaa".to_string(), "bbbb".to_string(), "cccc".to_string()];
        let rects = flow(Rect::new(0, 0, 10, 2), &labels);
        assert_eq!(rects[0], Some(Rect::new(0, 0, 4, 1)));
        assert_eq!(rects[1], Some(Rect::new(5, 0, 4, 1)));
        assert_eq!(rects[2], Some(Rect::new(0, 1, 4, 1)));
    }

    #[test]
    fn test_flow_drops_overflow() {
        let labels = vec!["aaaaaaaa".to_string(); 3];
        let rects = flow(Rect::new(0, 0, 10, 2), &labels);
        assert!(rects[0].is_some());
        assert!(rects[1].is_some());
        assert!(rects[2].is_none());
    }

    #[test]
    fn test_button_label() {
        let button = TagCount {
            tag: Tag::label("warm"),
            count: 19,
            active: true,
        };
        assert_eq!(button_label(&button, false), " ✓ warm 19 ");
        assert_eq!(button_label(&button, true), "[✓ warm 19]");
    }
}
