//! Filter engine
//!
//! Pure functions deriving the visible subset, button previews and grid
//! placement from the catalog and explicit filter criteria. Nothing here
//! reads session state; callers pass everything in.

mod grid;

pub use grid::{place_into_grid, Grid};

use std::collections::BTreeSet;

use crate::palette::{Catalog, ColorEntry, Coordinate, LayoutName, Tag};

/// Inputs of the visibility predicate
#[derive(Debug, Clone, Copy)]
pub struct FilterCriteria<'a> {
    pub layout: LayoutName,
    pub tags: &'a [Tag],
    pub favorites: &'a BTreeSet<Coordinate>,
}

impl<'a> FilterCriteria<'a> {
    pub fn new(layout: LayoutName, tags: &'a [Tag], favorites: &'a BTreeSet<Coordinate>) -> Self {
        Self {
            layout,
            tags,
            favorites,
        }
    }

    /// Any tag or the favorites filter active
    pub fn is_filtering(&self) -> bool {
        !self.tags.is_empty()
    }

    pub fn favorites_only(&self) -> bool {
        self.tags.contains(&Tag::Favorite)
    }
}

/// Whether `entry` exists in the layout and satisfies every active tag
pub fn is_visible(entry: &ColorEntry, criteria: &FilterCriteria<'_>) -> bool {
    matches_tags(entry, criteria.layout, criteria.tags, criteria.favorites)
}

fn matches_tags(
    entry: &ColorEntry,
    layout: LayoutName,
    tags: &[Tag],
    favorites: &BTreeSet<Coordinate>,
) -> bool {
    if entry.placement(layout).is_none() {
        return false;
    }

    tags.iter().all(|tag| match tag {
        Tag::Favorite => entry
            .canonical_id()
            .is_some_and(|id| favorites.contains(&id)),
        other => entry.has_tag(other),
    })
}

/// Entries shown for the criteria, in catalog order.
///
/// With no active tags every entry is returned, including ones without a
/// placement in the current layout; grid placement skips those.
pub fn visible_entries<'c>(catalog: &'c Catalog, criteria: &FilterCriteria<'_>) -> Vec<&'c ColorEntry> {
    if !criteria.is_filtering() {
        return catalog.entries().iter().collect();
    }

    catalog
        .entries()
        .iter()
        .filter(|entry| is_visible(entry, criteria))
        .collect()
}

/// Toggle `tag` in an ordered tag list.
///
/// Active tags are removed. A new color group replaces any active group;
/// labels accumulate.
pub fn toggle_tag(tags: &[Tag], tag: &Tag) -> Vec<Tag> {
    if tags.contains(tag) {
        return tags.iter().filter(|t| *t != tag).cloned().collect();
    }

    let mut next: Vec<Tag> = if tag.is_group() {
        tags.iter().filter(|t| !t.is_group()).cloned().collect()
    } else {
        tags.to_vec()
    };
    next.push(tag.clone());
    next
}

/// Active tags with `candidate` added when it is not already there
fn hypothetical_tags(tags: &[Tag], candidate: &Tag) -> Vec<Tag> {
    let mut next = tags.to_vec();
    if !tags.contains(candidate) {
        next.push(candidate.clone());
    }
    next
}

/// Number of entries that would be visible with `candidate` added to the
/// active tags.
///
/// Layout presence is always required, even with no other tags. A group
/// candidate is added next to an active group, so it previews 0.
pub fn match_count(catalog: &Catalog, criteria: &FilterCriteria<'_>, candidate: &Tag) -> usize {
    let tags = hypothetical_tags(criteria.tags, candidate);
    catalog
        .entries()
        .iter()
        .filter(|entry| matches_tags(entry, criteria.layout, &tags, criteria.favorites))
        .count()
}

/// Favorites present in the layout that match the active non-favorite tags
pub fn favorites_count(catalog: &Catalog, criteria: &FilterCriteria<'_>) -> usize {
    let tags: Vec<Tag> = criteria
        .tags
        .iter()
        .filter(|tag| **tag != Tag::Favorite)
        .cloned()
        .collect();

    catalog
        .entries()
        .iter()
        .filter(|entry| {
            entry
                .canonical_id()
                .is_some_and(|id| criteria.favorites.contains(&id))
        })
        .filter(|entry| matches_tags(entry, criteria.layout, &tags, criteria.favorites))
        .count()
}

/// Preview count for one filter button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub tag: Tag,
    pub count: usize,
    pub active: bool,
}

impl TagCount {
    /// Label buttons with no matches are disabled unless already active.
    /// Group buttons stay enabled so one group can replace another.
    pub fn is_enabled(&self) -> bool {
        self.tag.is_group() || self.active || self.count > 0
    }
}

/// Counts for every label in the catalog (sorted)
pub fn tag_counts(catalog: &Catalog, criteria: &FilterCriteria<'_>) -> Vec<TagCount> {
    catalog
        .labels()
        .iter()
        .map(|tag| count_for(catalog, criteria, tag))
        .collect()
}

/// Counts for every color group, in group order
pub fn group_counts(catalog: &Catalog, criteria: &FilterCriteria<'_>) -> Vec<TagCount> {
    catalog
        .group_swatches()
        .iter()
        .map(|swatch| count_for(catalog, criteria, &Tag::Group(swatch.group)))
        .collect()
}

fn count_for(catalog: &Catalog, criteria: &FilterCriteria<'_>, tag: &Tag) -> TagCount {
    TagCount {
        tag: tag.clone(),
        count: match_count(catalog, criteria, tag),
        active: criteria.tags.contains(tag),
    }
}
