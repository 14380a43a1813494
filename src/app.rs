use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;
use ratatui::layout::{Position, Rect};
use tachyonfx::Interpolation;

use crate::action::{Action, ActionDispatcher, ActionHandler};
use crate::clipboard::{Clipboard, Osc52Clipboard};
use crate::config::Config;
use crate::error::Result;
use crate::export::{Exporter, FileExporter};
use crate::filter::TagCount;
use crate::palette::{Catalog, ColorEntry, Coordinate, EntryId, Tag};
use crate::session::persist::{load_state, save_state, QueryStore};
use crate::session::{CopyOutcome, FilterState, Selection, Session};
use crate::tui::{render, Event, EventHandler, Terminal};

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Moving over the swatch grid
    #[default]
    Grid,
    /// Moving over the tag and group buttons
    Tags,
    Dialog,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Grid => write!(f, "Grid"),
            Mode::Tags => write!(f, "Tags"),
            Mode::Dialog => write!(f, "Dialog"),
        }
    }
}

/// Dialog types (UI only - what to display)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogKind {
    #[default]
    None,
    ConfirmClearFavorites,
    Help,
}

/// Notification level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// Notification duration
const NOTIFICATION_DURATION: Duration = Duration::from_secs(3);

/// Slide-out animation duration
const SLIDE_OUT_DURATION_MS: u128 = 300;

/// Notification with slide-out animation
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub expires_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, level: NotificationLevel) -> Self {
        Self {
            message: message.into(),
            level,
            expires_at: Instant::now() + NOTIFICATION_DURATION,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Info)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Error)
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    /// Calculate slide-out offset (0 to popup_width) for the last 300ms
    /// Returns 0 when not sliding, increases as it slides out
    pub fn slide_offset(&self, popup_width: u16) -> u16 {
        let now = Instant::now();
        if now >= self.expires_at {
            return popup_width;
        }
        let remaining_ms = self.expires_at.duration_since(now).as_millis();

        if remaining_ms >= SLIDE_OUT_DURATION_MS {
            return 0;
        }

        let progress = 1.0 - (remaining_ms as f32 / SLIDE_OUT_DURATION_MS as f32);
        let eased = Interpolation::QuadOut.alpha(progress);

        (popup_width as f32 * eased) as u16
    }
}

/// Row of the tag bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagRow {
    /// Color group buttons
    Groups,
    /// Favorites filter followed by the descriptive labels
    Labels,
}

/// Position of the tag bar cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagCursor {
    pub row: TagRow,
    pub index: usize,
}

impl Default for TagCursor {
    fn default() -> Self {
        Self {
            row: TagRow::Groups,
            index: 0,
        }
    }
}

/// Clickable region recorded by the last render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Cell(Coordinate),
    Tag(TagCursor),
}

/// Main application state
pub struct App {
    pub config: Config,
    pub session: Session,
    pub mode: Mode,
    pub dialog: DialogKind,

    /// Grid cursor in the current layout
    pub cursor: Coordinate,
    pub tag_cursor: TagCursor,

    // Notifications (stacked, newest at end)
    pub notifications: Vec<Notification>,

    /// Click targets from the last frame
    pub hit_areas: Vec<(Rect, HitTarget)>,

    // Exit flag
    pub should_quit: bool,

    /// Mode to return to when a dialog closes
    focus: Mode,
    defaults: FilterState,
    state_store: QueryStore,
    clipboard: Box<dyn Clipboard>,
    exporter: Box<dyn Exporter>,
    action_dispatcher: ActionDispatcher,
}

impl App {
    /// Create the application with the terminal clipboard and the configured
    /// export directory
    pub fn new(config: Config, catalog: Catalog, state_store: QueryStore) -> Self {
        let exporter = FileExporter::new(config.export.dir());
        Self::with_services(
            config,
            catalog,
            state_store,
            Box::new(Osc52Clipboard::stdout()),
            Box::new(exporter),
        )
    }

    pub fn with_services(
        config: Config,
        catalog: Catalog,
        state_store: QueryStore,
        clipboard: Box<dyn Clipboard>,
        exporter: Box<dyn Exporter>,
    ) -> Self {
        let defaults = config.defaults.filter_state();
        let state = load_state(&state_store, &defaults);
        let session = Session::new(catalog, state);
        let action_dispatcher = ActionDispatcher::new(&config);

        let mut app = Self {
            config,
            session,
            mode: Mode::Grid,
            dialog: DialogKind::None,
            cursor: Coordinate::new(1, 1),
            tag_cursor: TagCursor::default(),
            notifications: Vec::new(),
            hit_areas: Vec::new(),
            should_quit: false,
            focus: Mode::Grid,
            defaults,
            state_store,
            clipboard,
            exporter,
            action_dispatcher,
        };
        app.after_transition();
        app
    }

    /// Run the application main loop
    pub async fn run(&mut self, mut terminal: Terminal) -> Result<()> {
        let event_handler = EventHandler::default();

        while !self.should_quit {
            terminal.draw(|frame| render(frame, self))?;

            if let Some(event) = event_handler.poll()? {
                self.handle_event(event)?;
            }

            self.tick(Instant::now());
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key) => self.handle_key(key)?,
            Event::Click { column, row } => self.handle_click(column, row)?,
            Event::Resize => {
                // Terminal handles resize automatically
            }
            Event::Tick => {
                // Expiry is checked after every event
            }
        }
        Ok(())
    }

    /// Dispatch a key press through the bindings
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if let Some(action) = self.action_dispatcher.dispatch(key, &self.mode) {
            tracing::trace!(?action, mode = %self.mode, "dispatch");
            ActionHandler::handle(self, action)?;
        }
        Ok(())
    }

    /// Clicking a swatch or tag button focuses it and selects it
    pub fn handle_click(&mut self, column: u16, row: u16) -> Result<()> {
        if self.has_active_dialog() {
            return Ok(());
        }
        let position = Position::new(column, row);
        let Some(target) = self
            .hit_areas
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
        else {
            return Ok(());
        };

        match target {
            HitTarget::Cell(coordinate) => {
                self.mode = Mode::Grid;
                self.cursor = coordinate;
            }
            HitTarget::Tag(tag_cursor) => {
                self.mode = Mode::Tags;
                self.tag_cursor = tag_cursor;
            }
        }
        ActionHandler::handle(self, Action::Select)
    }

    /// Expire copy feedback and notifications
    pub fn tick(&mut self, now: Instant) {
        self.session.clear_expired_feedback(now);
        self.notifications.retain(|n| !n.is_expired_at(now));
    }

    pub fn dispatcher(&self) -> &ActionDispatcher {
        &self.action_dispatcher
    }

    /// Copy an entry through the app's clipboard
    pub fn copy_entry(&mut self, id: EntryId) -> Result<CopyOutcome> {
        self.session.copy(id, self.clipboard.as_mut(), Instant::now())
    }

    /// Write the export document for the current view
    pub fn export(&mut self) -> Result<PathBuf> {
        let json = self.session.export_document().to_json()?;
        let file_name = self.session.export_file_name(self.config.export.file_prefix());
        self.exporter.export(json.as_bytes(), &file_name)
    }

    /// Session state string as it stands now
    pub fn state_string(&self) -> String {
        self.state_store.to_query_string()
    }

    /// Persist the session and keep cursors in range; call after every
    /// session transition
    pub fn after_transition(&mut self) {
        save_state(&mut self.state_store, self.session.state(), &self.defaults);

        if let Selection::Implicit(id) = self.session.selection() {
            let layout = self.session.state().layout;
            if let Some(coordinate) = self.session.catalog().get(id).and_then(|e| e.placement(layout)) {
                self.cursor = coordinate;
            }
        }
        self.clamp_cursor();
        self.clamp_tag_cursor();
    }

    // ===================
    // Dialogs
    // ===================

    /// Check if there's an active dialog
    pub fn has_active_dialog(&self) -> bool {
        !matches!(self.dialog, DialogKind::None)
    }

    pub fn open_dialog(&mut self, dialog: DialogKind) {
        if !self.has_active_dialog() {
            self.focus = self.mode;
        }
        self.dialog = dialog;
        self.mode = Mode::Dialog;
    }

    pub fn close_dialog(&mut self) {
        if !self.has_active_dialog() {
            return;
        }
        self.dialog = DialogKind::None;
        self.mode = self.focus;
    }

    /// Show error notification
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.notifications.push(Notification::error(message));
    }

    /// Show notification
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    // ===================
    // Grid cursor
    // ===================

    /// Move the grid cursor, clamped to the layout extent
    pub fn move_cursor(&mut self, dcol: i32, drow: i32) {
        let (cols, rows) = self.session.catalog().extent(self.session.state().layout);
        let step = |value: u16, delta: i32, max: u16| -> u16 {
            (i32::from(value) + delta).clamp(1, i32::from(max.max(1))) as u16
        };
        self.cursor = Coordinate::new(step(self.cursor.col, dcol, cols), step(self.cursor.row, drow, rows));
    }

    fn clamp_cursor(&mut self) {
        self.move_cursor(0, 0);
    }

    /// Visible entry under the grid cursor
    pub fn cursor_entry(&self) -> Option<&ColorEntry> {
        self.session.grid().cell(self.cursor)
    }

    // ===================
    // Tag bar
    // ===================

    /// Buttons of one tag bar row with their match previews
    pub fn tag_row(&self, row: TagRow) -> Vec<TagCount> {
        match row {
            TagRow::Groups => self.session.group_counts(),
            TagRow::Labels => {
                let favorite = TagCount {
                    tag: Tag::Favorite,
                    count: self.session.favorites_count(),
                    active: self.session.favorites_only(),
                };
                std::iter::once(favorite)
                    .chain(self.session.tag_counts())
                    .collect()
            }
        }
    }

    /// Button under the tag cursor
    pub fn tag_cursor_button(&self) -> Option<TagCount> {
        self.tag_row(self.tag_cursor.row)
            .into_iter()
            .nth(self.tag_cursor.index)
    }

    pub fn move_tag_cursor(&mut self, delta: i32) {
        let len = self.tag_row(self.tag_cursor.row).len();
        if len == 0 {
            return;
        }
        let index = (self.tag_cursor.index as i64 + i64::from(delta)).rem_euclid(len as i64);
        self.tag_cursor.index = index as usize;
    }

    pub fn switch_tag_row(&mut self) {
        self.tag_cursor.row = match self.tag_cursor.row {
            TagRow::Groups => TagRow::Labels,
            TagRow::Labels => TagRow::Groups,
        };
        self.clamp_tag_cursor();
    }

    fn clamp_tag_cursor(&mut self) {
        let len = self.tag_row(self.tag_cursor.row).len();
        self.tag_cursor.index = self.tag_cursor.index.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===================
    // Notification tests
    // ===================

    #[test]
    fn test_notification_expiry() {
        let notification = Notification::info("Test");
        assert!(!notification.is_expired_at(Instant::now()));
        assert!(notification.is_expired_at(notification.expires_at));
    }

    #[test]
    fn test_notification_slide_offset_not_sliding_initially() {
        let notification = Notification::info("Test");
        assert_eq!(notification.slide_offset(100), 0);
    }
}
