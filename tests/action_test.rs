//! Tests for key handling through the app

mod common;

use common::{char_key, ctrl, key, TestApp};
use crossterm::event::KeyCode;
use swatchgrid::action::{Action, ActionDispatcher};
use swatchgrid::app::{DialogKind, Mode, NotificationLevel, TagRow};
use swatchgrid::config::{default_bindings, Config, KeyBinding};
use swatchgrid::palette::{ColorGroup, Coordinate, LayoutName, Tag};
use swatchgrid::session::{DisplayOption, Selection};

// ===================
// Dispatcher tests
// ===================

#[test]
fn test_default_bindings_dispatch() {
    let dispatcher = ActionDispatcher::new(&Config::default());
    assert_eq!(dispatcher.dispatch(char_key('j'), &Mode::Grid), Some(Action::MoveDown));
    assert_eq!(dispatcher.dispatch(key(KeyCode::Enter), &Mode::Grid), Some(Action::Select));
    assert_eq!(dispatcher.dispatch(key(KeyCode::Enter), &Mode::Dialog), Some(Action::Confirm));
    assert_eq!(dispatcher.dispatch(char_key('F'), &Mode::Tags), Some(Action::ToggleFavoritesFilter));
    assert_eq!(dispatcher.dispatch(ctrl('c'), &Mode::Dialog), Some(Action::ForceQuit));
}

#[test]
fn test_default_bindings_cover_every_action() {
    let bound: Vec<Action> = default_bindings()
        .iter()
        .filter_map(|b| b.action.as_deref())
        .filter_map(Action::from_str)
        .collect();

    for action in [
        Action::MoveUp,
        Action::FocusNext,
        Action::Select,
        Action::ToggleFavorite,
        Action::ToggleFavoritesFilter,
        Action::CycleLayout,
        Action::CycleFormat,
        Action::ToggleNames,
        Action::Export,
        Action::ClearTags,
        Action::ClearFavorites,
        Action::Confirm,
        Action::Cancel,
        Action::ToggleHelp,
        Action::Quit,
        Action::ForceQuit,
    ] {
        assert!(bound.contains(&action), "{:?} has no default key", action);
    }
}

#[test]
fn test_user_binding_overrides_default() {
    let config = Config {
        bindings: vec![KeyBinding::new("q").with_action("Export")],
        ..Default::default()
    };
    let dispatcher = ActionDispatcher::new(&config);
    assert_eq!(dispatcher.dispatch(char_key('q'), &Mode::Grid), Some(Action::Export));
}

#[test]
fn test_disabled_binding() {
    let config = Config {
        bindings: vec![KeyBinding::new("q").with_action("None")],
        ..Default::default()
    };
    let mut t = TestApp::with_config(config, "");
    t.type_chars("q");
    assert!(!t.app.should_quit);
}

// ===================
// Grid navigation tests
// ===================

#[test]
fn test_cursor_moves_and_clamps() {
    let mut t = TestApp::new("");
    assert_eq!(t.app.cursor, Coordinate::new(1, 1));

    t.type_chars("kh");
    assert_eq!(t.app.cursor, Coordinate::new(1, 1));

    t.type_chars("jjl");
    assert_eq!(t.app.cursor, Coordinate::new(2, 3));

    t.press(&[key(KeyCode::Left), key(KeyCode::Up)]);
    assert_eq!(t.app.cursor, Coordinate::new(1, 2));
}

#[test]
fn test_cursor_clamped_after_layout_switch() {
    let mut t = TestApp::new("");
    for _ in 0..20 {
        t.type_chars("lj");
    }
    t.type_chars("L");

    let (cols, rows) = t.app.session.catalog().extent(LayoutName::Push);
    assert!(t.app.cursor.col <= cols);
    assert!(t.app.cursor.row <= rows);
}

// ===================
// Copy tests
// ===================

#[test]
fn test_enter_selects_and_copies() {
    let mut t = TestApp::new("");
    let salmon = t.entry_named("Salmon");

    t.press(&[key(KeyCode::Enter)]);

    assert_eq!(t.app.session.selection(), Selection::Explicit(salmon));
    assert_eq!(t.clipboard.last().as_deref(), Some("#ff94a6"));
    assert_eq!(t.app.session.copied().map(|f| f.id), Some(Coordinate::new(1, 1)));
    assert_eq!(t.app.notifications.last().unwrap().message, "Copied #ff94a6");
}

#[test]
fn test_copy_follows_format() {
    let mut t = TestApp::new("");
    t.type_chars("c");
    assert_eq!(t.app.state_string(), "format=rgb");

    t.press(&[key(KeyCode::Char(' '))]);
    assert_eq!(t.clipboard.last().as_deref(), Some("rgb(255, 148, 166)"));
}

#[test]
fn test_copy_failure_notifies() {
    let mut t = TestApp::new("");
    let clipboard = common::FailingClipboard;
    t.app = swatchgrid::App::with_services(
        Config::default(),
        swatchgrid::Catalog::builtin().unwrap(),
        Default::default(),
        Box::new(clipboard),
        Box::new(t.exporter.clone()),
    );

    t.press(&[key(KeyCode::Enter)]);

    let notification = t.app.notifications.last().unwrap();
    assert_eq!(notification.level, NotificationLevel::Error);
    assert!(notification.message.starts_with("Copy failed"));
    assert!(t.app.session.copied().is_none());
}

#[test]
fn test_enter_on_empty_cell_does_nothing() {
    let mut t = TestApp::new("tags=cg%3Ablue");
    t.press(&[key(KeyCode::Enter)]);
    assert!(t.clipboard.last().is_none());
}

// ===================
// Tag bar tests
// ===================

#[test]
fn test_tab_focuses_tag_bar() {
    let mut t = TestApp::new("");
    t.press(&[key(KeyCode::Tab)]);
    assert_eq!(t.app.mode, Mode::Tags);

    t.press(&[key(KeyCode::Esc)]);
    assert_eq!(t.app.mode, Mode::Grid);
}

#[test]
fn test_select_group_button() {
    let mut t = TestApp::new("");
    t.press(&[key(KeyCode::Tab), key(KeyCode::Enter)]);

    assert_eq!(t.app.session.state().tags, vec![Tag::Group(ColorGroup::Red)]);
    assert_eq!(t.app.session.visible_entries().len(), 5);
    assert_eq!(t.app.state_string(), "tags=cg%3Ared");

    t.press(&[key(KeyCode::Enter)]);
    assert!(t.app.session.state().tags.is_empty());
    assert_eq!(t.app.state_string(), "");
}

#[test]
fn test_group_buttons_replace_each_other() {
    let mut t = TestApp::new("");
    t.press(&[key(KeyCode::Tab), key(KeyCode::Enter)]);
    t.type_chars("l");
    t.press(&[key(KeyCode::Enter)]);

    let groups: Vec<_> = t
        .app
        .session
        .state()
        .tags
        .iter()
        .filter(|tag| tag.is_group())
        .cloned()
        .collect();
    assert_eq!(groups, vec![Tag::Group(ColorGroup::Orange)]);
}

#[test]
fn test_tag_rows_switch_and_wrap() {
    let mut t = TestApp::new("");
    t.press(&[key(KeyCode::Tab)]);
    assert_eq!(t.app.tag_cursor.row, TagRow::Groups);

    t.type_chars("j");
    assert_eq!(t.app.tag_cursor.row, TagRow::Labels);
    assert_eq!(t.app.tag_cursor_button().unwrap().tag, Tag::Favorite);

    t.type_chars("kh");
    let groups = t.app.tag_row(TagRow::Groups).len();
    assert_eq!(t.app.tag_cursor.row, TagRow::Groups);
    assert_eq!(t.app.tag_cursor.index, groups - 1);
}

#[test]
fn test_disabled_favorite_button_ignored() {
    let mut t = TestApp::new("");
    t.press(&[key(KeyCode::Tab)]);
    t.type_chars("j");
    t.press(&[key(KeyCode::Enter)]);
    assert!(!t.app.session.favorites_only());
}

#[test]
fn test_clear_tags() {
    let mut t = TestApp::new("tags=cg%3Ared%2Cwarm");
    assert_eq!(t.app.session.state().tags.len(), 2);
    t.type_chars("x");
    assert!(t.app.session.state().tags.is_empty());
}

// ===================
// Favorite tests
// ===================

#[test]
fn test_favorite_under_cursor() {
    let mut t = TestApp::new("");
    t.type_chars("f");
    assert_eq!(t.app.state_string(), "favorites=1-1");

    t.type_chars("f");
    assert_eq!(t.app.state_string(), "");
}

#[test]
fn test_favorite_key_only_in_grid() {
    let mut t = TestApp::new("");
    t.press(&[key(KeyCode::Tab)]);
    t.type_chars("f");
    assert!(t.app.session.state().favorites.is_empty());
}

#[test]
fn test_favorites_filter_flow() {
    let mut t = TestApp::new("");
    let salmon = t.entry_named("Salmon");

    t.type_chars("F");
    assert!(!t.app.session.favorites_only());
    assert_eq!(
        t.app.notifications.last().unwrap().message,
        "No favorites match the current filters"
    );

    t.type_chars("fjF");
    assert!(t.app.session.favorites_only());
    assert_eq!(t.app.session.selection(), Selection::Implicit(salmon));
    assert_eq!(t.app.cursor, Coordinate::new(1, 1));

    // Removing the only favorite switches the filter off again
    t.type_chars("f");
    assert!(!t.app.session.favorites_only());
    assert!(t.app.session.state().favorites.is_empty());
}

#[test]
fn test_unplaced_favorite_in_push() {
    // Terracotta sits at live 1-3 and has no push position
    let mut t = TestApp::new("favorites=1-3");
    t.type_chars("L");
    assert_eq!(t.app.session.state().layout, LayoutName::Push);
    assert_eq!(t.app.session.favorites_count(), 0);

    let favorites = t.app.session.favorite_entries();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].entry.name, "Terracotta");
    assert!(!favorites[0].visible);
}

// ===================
// Dialog tests
// ===================

#[test]
fn test_clear_favorites_confirm() {
    let mut t = TestApp::new("favorites=1-1%2C1-2");
    t.type_chars("X");
    assert_eq!(t.app.dialog, DialogKind::ConfirmClearFavorites);
    assert_eq!(t.app.mode, Mode::Dialog);

    t.type_chars("y");
    assert_eq!(t.app.dialog, DialogKind::None);
    assert_eq!(t.app.mode, Mode::Grid);
    assert!(t.app.session.state().favorites.is_empty());
}

#[test]
fn test_clear_favorites_cancel() {
    let mut t = TestApp::new("favorites=1-1");
    t.type_chars("X");
    t.press(&[key(KeyCode::Esc)]);
    assert_eq!(t.app.dialog, DialogKind::None);
    assert_eq!(t.app.session.state().favorites.len(), 1);
}

#[test]
fn test_clear_favorites_without_favorites() {
    let mut t = TestApp::new("");
    t.type_chars("X");
    assert_eq!(t.app.dialog, DialogKind::None);
}

#[test]
fn test_help_returns_to_previous_mode() {
    let mut t = TestApp::new("");
    t.press(&[key(KeyCode::Tab)]);
    t.type_chars("?");
    assert_eq!(t.app.dialog, DialogKind::Help);

    t.type_chars("?");
    assert_eq!(t.app.dialog, DialogKind::None);
    assert_eq!(t.app.mode, Mode::Tags);
}

#[test]
fn test_dialog_blocks_grid_keys() {
    let mut t = TestApp::new("");
    t.type_chars("?j");
    assert_eq!(t.app.cursor, Coordinate::new(1, 1));
}

// ===================
// Other actions
// ===================

#[test]
fn test_cycle_layout_notifies() {
    let mut t = TestApp::new("");
    t.type_chars("L");
    assert_eq!(t.app.notifications.last().unwrap().message, "Layout: Push");
    assert_eq!(t.app.state_string(), "layout=push");

    t.type_chars("L");
    assert_eq!(t.app.state_string(), "");
}

#[test]
fn test_toggle_names() {
    let mut t = TestApp::new("");
    t.type_chars("n");
    assert!(!t.app.session.state().shows(DisplayOption::Names));
    t.type_chars("n");
    assert!(t.app.session.state().shows(DisplayOption::Names));
}

#[test]
fn test_export_key() {
    // Without tags the export carries the whole catalog
    let mut t = TestApp::new("layout=push&format=hsl");
    t.type_chars("e");

    let (name, content) = t.exporter.last().unwrap();
    assert_eq!(name, "palette-hsl-push.json");
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["format"], "hsl");
    assert_eq!(value["colors"].as_array().unwrap().len(), 70);
}

#[test]
fn test_quit_and_force_quit() {
    let mut t = TestApp::new("");
    t.type_chars("q");
    assert!(t.app.should_quit);

    let mut t = TestApp::new("");
    t.type_chars("?");
    t.press(&[ctrl('c')]);
    assert!(t.app.should_quit);
}
