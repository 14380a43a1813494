//! Session state machine
//!
//! Owns the persisted [`FilterState`] plus the transient selection and copy
//! feedback. Every transition re-derives the visible set, turns off an empty
//! favorites filter and reconciles the selection before returning, so the
//! renderer never observes a half-updated state.

pub mod persist;

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::clipboard::Clipboard;
use crate::color::ColorFormat;
use crate::error::Result;
use crate::export::{export_file_name, ExportDocument};
use crate::filter::{self, FilterCriteria, Grid, TagCount};
use crate::palette::{Catalog, ColorEntry, Coordinate, EntryId, LayoutName, Tag};

/// How long the "copied" marker stays on a cell
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(1500);

/// Cosmetic display toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayOption {
    Names,
}

impl DisplayOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayOption::Names => "names",
        }
    }
}

impl std::str::FromStr for DisplayOption {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "names" => Ok(DisplayOption::Names),
            _ => Err(crate::error::Error::InvalidStateValue {
                key: "display".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// User-controlled filter state; everything here is persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub layout: LayoutName,
    pub format: ColorFormat,
    /// Active tags in selection order; `Tag::Favorite` enables the
    /// favorites-only filter
    pub tags: Vec<Tag>,
    pub display: Vec<DisplayOption>,
    /// Canonical ids of favorite entries
    pub favorites: BTreeSet<Coordinate>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            layout: LayoutName::default(),
            format: ColorFormat::default(),
            tags: Vec::new(),
            display: vec![DisplayOption::Names],
            favorites: BTreeSet::new(),
        }
    }
}

impl FilterState {
    pub fn shows(&self, option: DisplayOption) -> bool {
        self.display.contains(&option)
    }

    pub fn favorites_only(&self) -> bool {
        self.tags.contains(&Tag::Favorite)
    }
}

/// Currently selected color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    /// Picked by the user
    Explicit(EntryId),
    /// Picked because it is the only visible entry
    Implicit(EntryId),
}

impl Selection {
    pub fn id(&self) -> Option<EntryId> {
        match self {
            Selection::None => None,
            Selection::Explicit(id) | Selection::Implicit(id) => Some(*id),
        }
    }
}

/// "Copied" marker on a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyFeedback {
    /// Position in the layout that was displayed when copying
    pub id: Coordinate,
    pub expires_at: Instant,
}

/// Result of a successful clipboard copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOutcome {
    pub text: String,
    /// Cell marked as copied, if the entry exists in the current layout
    pub feedback: Option<Coordinate>,
}

/// Result of toggling a favorite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteOutcome {
    Added,
    Removed,
    /// Entry has no canonical position and cannot be a favorite
    Unavailable,
}

/// A favorite and whether it is currently shown in the grid
#[derive(Debug, Clone, Copy)]
pub struct FavoriteEntry<'c> {
    pub entry: &'c ColorEntry,
    pub visible: bool,
}

/// Explorer session over one catalog
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    state: FilterState,
    selection: Selection,
    copied: Option<CopyFeedback>,
    visible: Vec<EntryId>,
}

impl Session {
    pub fn new(catalog: Catalog, state: FilterState) -> Self {
        let mut session = Self {
            catalog,
            state,
            selection: Selection::None,
            copied: None,
            visible: Vec::new(),
        };
        session.reconcile();
        session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected_entry(&self) -> Option<&ColorEntry> {
        self.selection.id().and_then(|id| self.catalog.get(id))
    }

    pub fn copied(&self) -> Option<CopyFeedback> {
        self.copied
    }

    pub fn criteria(&self) -> FilterCriteria<'_> {
        FilterCriteria::new(self.state.layout, &self.state.tags, &self.state.favorites)
    }

    pub fn favorites_only(&self) -> bool {
        self.state.favorites_only()
    }

    pub fn visible_entries(&self) -> Vec<&ColorEntry> {
        self.visible
            .iter()
            .filter_map(|id| self.catalog.get(*id))
            .collect()
    }

    pub fn is_visible(&self, id: EntryId) -> bool {
        self.visible.contains(&id)
    }

    pub fn grid(&self) -> Grid<'_> {
        filter::place_into_grid(&self.visible_entries(), &self.catalog, self.state.layout)
    }

    pub fn tag_counts(&self) -> Vec<TagCount> {
        filter::tag_counts(&self.catalog, &self.criteria())
    }

    pub fn group_counts(&self) -> Vec<TagCount> {
        filter::group_counts(&self.catalog, &self.criteria())
    }

    pub fn favorites_count(&self) -> usize {
        filter::favorites_count(&self.catalog, &self.criteria())
    }

    pub fn is_favorite(&self, entry: &ColorEntry) -> bool {
        entry
            .canonical_id()
            .is_some_and(|id| self.state.favorites.contains(&id))
    }

    /// Every favorite in catalog order, flagged with grid visibility
    pub fn favorite_entries(&self) -> Vec<FavoriteEntry<'_>> {
        let filtering = self.criteria().is_filtering();
        self.catalog
            .entries()
            .iter()
            .filter(|entry| self.is_favorite(entry))
            .map(|entry| FavoriteEntry {
                entry,
                visible: entry.placement(self.state.layout).is_some()
                    && (!filtering || self.visible.contains(&entry.id)),
            })
            .collect()
    }

    /// Select an entry the user clicked.
    ///
    /// Returns whether the entry ended up selected; entries that are not
    /// shown in the current grid cannot be selected.
    pub fn select(&mut self, id: EntryId) -> bool {
        if self.catalog.get(id).is_none() {
            return false;
        }
        if self.selection.id() != Some(id) {
            self.selection = Selection::Explicit(id);
        }
        self.reconcile();
        self.selection.id() == Some(id)
    }

    pub fn toggle_tag(&mut self, tag: &Tag) {
        self.state.tags = filter::toggle_tag(&self.state.tags, tag);
        tracing::debug!(%tag, tags = ?self.state.tags, "toggled tag");
        self.reconcile();
    }

    /// Drop every tag, including the favorites filter
    pub fn clear_tags(&mut self) {
        self.state.tags.clear();
        self.reconcile();
    }

    pub fn set_layout(&mut self, layout: LayoutName) {
        if self.state.layout == layout {
            return;
        }
        self.state.layout = layout;
        // Feedback ids are layout positions; they mean nothing after a switch
        self.copied = None;
        self.reconcile();
    }

    pub fn cycle_layout(&mut self) {
        self.set_layout(self.state.layout.next());
    }

    pub fn set_format(&mut self, format: ColorFormat) {
        self.state.format = format;
    }

    pub fn cycle_format(&mut self) {
        self.set_format(self.state.format.next());
    }

    pub fn toggle_display(&mut self, option: DisplayOption) {
        if self.state.shows(option) {
            self.state.display.retain(|o| *o != option);
        } else {
            self.state.display.push(option);
        }
    }

    /// Flip favorite membership using the entry's canonical id
    pub fn toggle_favorite(&mut self, id: EntryId) -> FavoriteOutcome {
        let Some(entry) = self.catalog.get(id) else {
            return FavoriteOutcome::Unavailable;
        };
        let Some(key) = entry.canonical_id() else {
            tracing::warn!(
                name = %entry.name,
                "cannot favorite a color without a {} position",
                LayoutName::CANONICAL
            );
            return FavoriteOutcome::Unavailable;
        };

        let outcome = if self.state.favorites.remove(&key) {
            FavoriteOutcome::Removed
        } else {
            self.state.favorites.insert(key);
            FavoriteOutcome::Added
        };
        self.reconcile();
        outcome
    }

    pub fn clear_favorites(&mut self) {
        self.state.favorites.clear();
        self.reconcile();
    }

    /// Copy an entry's formatted value and mark its cell.
    ///
    /// A clipboard failure leaves the feedback untouched and is returned to
    /// the caller. Entries absent from the current layout are still copied
    /// but get no marker.
    pub fn copy(&mut self, id: EntryId, clipboard: &mut dyn Clipboard, now: Instant) -> Result<CopyOutcome> {
        let Some(entry) = self.catalog.get(id) else {
            return Err(crate::error::Error::UnknownEntry(id.0));
        };
        let text = entry.formatted(self.state.format);

        if let Err(e) = clipboard.write(&text) {
            tracing::warn!(error = %e, name = %entry.name, "clipboard write failed");
            return Err(e);
        }

        let feedback = entry.placement(self.state.layout);
        match feedback {
            Some(coordinate) => {
                self.copied = Some(CopyFeedback {
                    id: coordinate,
                    expires_at: now + COPY_FEEDBACK_DURATION,
                });
            }
            None => {
                tracing::warn!(
                    name = %entry.name,
                    layout = %self.state.layout,
                    "copied a color that has no position in the current layout"
                );
                self.copied = None;
            }
        }

        Ok(CopyOutcome { text, feedback })
    }

    /// Clear the copy marker once its time is up
    pub fn clear_expired_feedback(&mut self, now: Instant) {
        if self.copied.is_some_and(|feedback| now >= feedback.expires_at) {
            self.copied = None;
        }
    }

    pub fn clear_feedback(&mut self) {
        self.copied = None;
    }

    /// Export document for the current view
    pub fn export_document(&self) -> ExportDocument {
        ExportDocument::build(
            &self.visible_entries(),
            self.state.format,
            &self.state.tags,
            &self.state.favorites,
        )
    }

    pub fn export_file_name(&self, prefix: &str) -> String {
        export_file_name(prefix, self.state.format, self.state.layout)
    }

    fn reconcile(&mut self) {
        if self.state.favorites_only() && self.favorites_count() == 0 {
            tracing::debug!("favorites filter matches nothing; turning it off");
            // The selection was only reachable through the favorites view
            self.selection = Selection::None;
            self.state.tags.retain(|tag| *tag != Tag::Favorite);
        }

        let criteria = self.criteria();
        let filtering = criteria.is_filtering();
        self.visible = filter::visible_entries(&self.catalog, &criteria)
            .iter()
            .map(|entry| entry.id)
            .collect();

        if let [only] = self.visible.as_slice() {
            if self.selection.id() != Some(*only) {
                self.selection = Selection::Implicit(*only);
            }
            return;
        }

        let Some(entry) = self.selected_entry() else {
            return;
        };
        let in_layout = entry.placement(self.state.layout).is_some();
        let filtered_out = filtering && !self.visible.contains(&entry.id);
        if !in_layout || filtered_out {
            self.selection = Selection::None;
        }
    }
}
