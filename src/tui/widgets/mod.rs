mod confirm_dialog;
mod detail_panel;
mod favorites_panel;
mod help_dialog;
mod help_footer;
mod swatch_grid;
mod tag_bar;

pub use confirm_dialog::render_confirm_dialog;
pub use detail_panel::render_detail_panel;
pub use favorites_panel::render_favorites_panel;
pub use help_dialog::render_help_dialog;
pub use help_footer::render_help_footer;
pub use swatch_grid::render_swatch_grid;
pub use tag_bar::render_tag_bar;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `width` terminal columns, marking the cut with `…`
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
