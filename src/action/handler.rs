use crate::app::{App, DialogKind, Mode, Notification};
use crate::error::Result;
use crate::palette::{LayoutName, Tag};
use crate::session::{DisplayOption, FavoriteOutcome};

use super::Action;

/// Handles action execution
pub struct ActionHandler;

impl ActionHandler {
    /// Handle an action
    pub fn handle(app: &mut App, action: Action) -> Result<()> {
        match action {
            // Navigation
            Action::MoveUp => Self::handle_move(app, 0, -1),
            Action::MoveDown => Self::handle_move(app, 0, 1),
            Action::MoveLeft => Self::handle_move(app, -1, 0),
            Action::MoveRight => Self::handle_move(app, 1, 0),
            Action::FocusNext => {
                app.mode = match app.mode {
                    Mode::Grid => Mode::Tags,
                    Mode::Tags | Mode::Dialog => Mode::Grid,
                };
            }
            Action::Select => match app.mode {
                Mode::Grid => Self::handle_select_swatch(app),
                Mode::Tags => Self::handle_select_tag(app),
                Mode::Dialog => {}
            },

            // Palette
            Action::ToggleFavorite => Self::handle_toggle_favorite(app),
            Action::ToggleFavoritesFilter => Self::handle_favorites_filter(app),
            Action::CycleLayout => {
                app.session.cycle_layout();
                let layout = app.session.state().layout;
                app.notify(Notification::info(format!("Layout: {}", layout.title())));
            }
            Action::CycleFormat => {
                app.session.cycle_format();
                let format = app.session.state().format;
                app.notify(Notification::info(format!("Format: {}", format)));
            }
            Action::ToggleNames => app.session.toggle_display(DisplayOption::Names),
            Action::Export => Self::handle_export(app),
            Action::ClearTags => app.session.clear_tags(),
            Action::ClearFavorites => {
                if app.session.state().favorites.is_empty() {
                    app.notify(Notification::info("No favorites to clear"));
                } else {
                    app.open_dialog(DialogKind::ConfirmClearFavorites);
                }
            }

            // Dialog
            Action::Confirm => Self::handle_confirm(app),
            Action::Cancel => app.close_dialog(),

            // Other
            Action::ToggleHelp => {
                if app.dialog == DialogKind::Help {
                    app.close_dialog();
                } else {
                    app.open_dialog(DialogKind::Help);
                }
            }
            Action::Quit => {
                if app.has_active_dialog() {
                    app.close_dialog();
                } else {
                    app.should_quit = true;
                }
            }
            Action::ForceQuit => {
                app.should_quit = true;
            }
        }

        app.after_transition();
        Ok(())
    }

    fn handle_move(app: &mut App, dcol: i32, drow: i32) {
        match app.mode {
            Mode::Grid => app.move_cursor(dcol, drow),
            Mode::Tags => {
                if drow != 0 {
                    app.switch_tag_row();
                } else {
                    app.move_tag_cursor(dcol);
                }
            }
            Mode::Dialog => {}
        }
    }

    /// Select the swatch under the cursor and copy its value
    fn handle_select_swatch(app: &mut App) {
        let Some(id) = app.cursor_entry().map(|entry| entry.id) else {
            return;
        };

        app.session.select(id);
        match app.copy_entry(id) {
            Ok(outcome) => app.notify(Notification::info(format!("Copied {}", outcome.text))),
            Err(e) => app.show_error(format!("Copy failed: {}", e)),
        }
    }

    fn handle_select_tag(app: &mut App) {
        let Some(button) = app.tag_cursor_button() else {
            return;
        };
        if !button.is_enabled() {
            return;
        }
        if button.tag == Tag::Favorite {
            Self::handle_favorites_filter(app);
        } else {
            app.session.toggle_tag(&button.tag);
        }
    }

    fn handle_toggle_favorite(app: &mut App) {
        let target = app
            .cursor_entry()
            .or_else(|| app.session.selected_entry())
            .map(|entry| (entry.id, entry.name.clone()));
        let Some((id, name)) = target else {
            return;
        };

        match app.session.toggle_favorite(id) {
            FavoriteOutcome::Added => app.notify(Notification::info(format!("★ {}", name))),
            FavoriteOutcome::Removed => app.notify(Notification::info(format!("☆ {}", name))),
            FavoriteOutcome::Unavailable => app.show_error(format!(
                "{} has no {} position and cannot be a favorite",
                name,
                LayoutName::CANONICAL
            )),
        }
    }

    fn handle_favorites_filter(app: &mut App) {
        if !app.session.favorites_only() && app.session.favorites_count() == 0 {
            app.notify(Notification::info("No favorites match the current filters"));
            return;
        }
        app.session.toggle_tag(&Tag::Favorite);
    }

    fn handle_export(app: &mut App) {
        match app.export() {
            Ok(path) => app.notify(Notification::info(format!("Exported {}", path.display()))),
            Err(e) => {
                tracing::warn!(error = %e, "export failed");
                app.show_error(format!("Export failed: {}", e));
            }
        }
    }

    fn handle_confirm(app: &mut App) {
        match app.dialog {
            DialogKind::ConfirmClearFavorites => {
                app.session.clear_favorites();
                app.notify(Notification::info("Favorites cleared"));
            }
            DialogKind::Help | DialogKind::None => {}
        }
        app.close_dialog();
    }
}
