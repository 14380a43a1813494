use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

use serde::Deserialize;

use crate::color::Rgb;
use crate::error::{Error, Result};

use super::{ColorEntry, ColorGroup, Coordinate, EntryId, LayoutName, Tag};

/// Palette shipped with the binary
pub const BUILTIN_CATALOG: &str = include_str!("../../data/palette.toml");

/// Live row whose swatches color the group buttons
pub const GROUP_SWATCH_ROW: u16 = 2;

/// Group button color when no swatch exists for a group
pub const GROUP_SWATCH_FALLBACK: &str = "#888888";

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default, rename = "color")]
    colors: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    name: String,
    hex: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    live: Option<Coordinate>,
    #[serde(default)]
    push: Option<Coordinate>,
}

/// Color shown on a group filter button
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSwatch {
    pub group: ColorGroup,
    pub hex: String,
    pub rgb: Rgb,
}

/// Immutable palette
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<ColorEntry>,
    extents: BTreeMap<LayoutName, (u16, u16)>,
    labels: Vec<Tag>,
    swatches: Vec<GroupSwatch>,
}

impl Catalog {
    /// Load the built-in palette
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_CATALOG)
    }

    /// Load a palette from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading catalog");
        Self::from_toml(&content)
    }

    /// Parse and validate a palette.
    ///
    /// Fails on malformed hex values, unknown `cg:` groups, more than one
    /// group per entry, the reserved `favorite` tag, zero coordinates and
    /// group-row swatches without a group.
    pub fn from_toml(content: &str) -> Result<Self> {
        let raw: RawCatalog = toml::from_str(content)?;
        if raw.colors.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let entries = raw
            .colors
            .into_iter()
            .enumerate()
            .map(|(idx, raw)| build_entry(EntryId(idx), raw))
            .collect::<Result<Vec<_>>>()?;

        Self::from_entries(entries)
    }

    /// Build a catalog from already constructed entries.
    ///
    /// Entry ids are reassigned to match their position.
    pub fn from_entries(mut entries: Vec<ColorEntry>) -> Result<Self> {
        for (idx, entry) in entries.iter_mut().enumerate() {
            entry.id = EntryId(idx);
        }

        let extents = compute_extents(&entries);
        warn_duplicate_placements(&entries);
        let labels = collect_labels(&entries);
        let swatches = collect_swatches(&entries)?;

        Ok(Self {
            entries,
            extents,
            labels,
            swatches,
        })
    }

    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&ColorEntry> {
        self.entries.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Grid size `(cols, rows)` of a layout: the largest column and row used
    /// by any entry. `(0, 0)` when nothing is placed there.
    pub fn extent(&self, layout: LayoutName) -> (u16, u16) {
        self.extents.get(&layout).copied().unwrap_or((0, 0))
    }

    /// Entry occupying `coordinate` in `layout` (last one wins on duplicates)
    pub fn at(&self, layout: LayoutName, coordinate: Coordinate) -> Option<&ColorEntry> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.placement(layout) == Some(coordinate))
    }

    /// Entry whose canonical id is `id`
    pub fn by_canonical_id(&self, id: Coordinate) -> Option<&ColorEntry> {
        self.at(LayoutName::CANONICAL, id)
    }

    /// Every descriptive label in the catalog, sorted
    pub fn labels(&self) -> &[Tag] {
        &self.labels
    }

    /// One swatch per color group, in group order
    pub fn group_swatches(&self) -> &[GroupSwatch] {
        &self.swatches
    }
}

fn build_entry(id: EntryId, raw: RawEntry) -> Result<ColorEntry> {
    let rgb = Rgb::from_hex(&raw.hex)?;

    let mut tags = Vec::with_capacity(raw.tags.len());
    for text in &raw.tags {
        let tag: Tag = text.parse()?;
        if tag == Tag::Favorite {
            return Err(Error::ReservedTag {
                name: raw.name.clone(),
                tag: text.clone(),
            });
        }
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    if tags.iter().filter(|tag| tag.is_group()).count() > 1 {
        return Err(Error::MultipleColorGroups { name: raw.name });
    }

    let mut placements = BTreeMap::new();
    for (layout, coordinate) in [(LayoutName::Live, raw.live), (LayoutName::Push, raw.push)] {
        let Some(coordinate) = coordinate else {
            continue;
        };
        if !coordinate.is_valid() {
            return Err(Error::InvalidCoordinate(format!(
                "{} in {} for {}",
                coordinate, layout, raw.name
            )));
        }
        placements.insert(layout, coordinate);
    }

    Ok(ColorEntry {
        id,
        name: raw.name,
        hex: raw.hex,
        rgb,
        tags,
        placements,
    })
}

fn compute_extents(entries: &[ColorEntry]) -> BTreeMap<LayoutName, (u16, u16)> {
    let mut extents: BTreeMap<LayoutName, (u16, u16)> = BTreeMap::new();
    for entry in entries {
        for (layout, coordinate) in &entry.placements {
            let extent = extents.entry(*layout).or_insert((0, 0));
            extent.0 = extent.0.max(coordinate.col);
            extent.1 = extent.1.max(coordinate.row);
        }
    }
    extents
}

fn warn_duplicate_placements(entries: &[ColorEntry]) {
    let mut seen: HashMap<(LayoutName, Coordinate), &str> = HashMap::new();
    for entry in entries {
        for (layout, coordinate) in &entry.placements {
            if let Some(previous) = seen.insert((*layout, *coordinate), &entry.name) {
                tracing::warn!(
                    %layout,
                    %coordinate,
                    previous,
                    current = %entry.name,
                    "two catalog entries share a coordinate; the later one wins"
                );
            }
        }
    }
}

fn collect_labels(entries: &[ColorEntry]) -> Vec<Tag> {
    entries
        .iter()
        .flat_map(|entry| entry.tags.iter())
        .filter(|tag| matches!(tag, Tag::Label(_)))
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn collect_swatches(entries: &[ColorEntry]) -> Result<Vec<GroupSwatch>> {
    let mut by_group: HashMap<ColorGroup, &ColorEntry> = HashMap::new();
    for entry in entries {
        let on_swatch_row = entry
            .placement(LayoutName::Live)
            .is_some_and(|coordinate| coordinate.row == GROUP_SWATCH_ROW);
        if !on_swatch_row {
            continue;
        }
        let group = entry.group().ok_or_else(|| Error::MissingColorGroup {
            name: entry.name.clone(),
        })?;
        by_group.insert(group, entry);
    }

    ColorGroup::ALL
        .into_iter()
        .map(|group| match by_group.get(&group) {
            Some(entry) => Ok(GroupSwatch {
                group,
                hex: entry.hex.clone(),
                rgb: entry.rgb,
            }),
            None => Ok(GroupSwatch {
                group,
                hex: GROUP_SWATCH_FALLBACK.to_string(),
                rgb: Rgb::from_hex(GROUP_SWATCH_FALLBACK)?,
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 70);
    }

    #[test]
    fn test_builtin_extents() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.extent(LayoutName::Live), (14, 5));
        assert_eq!(catalog.extent(LayoutName::Push), (8, 8));
    }

    #[test]
    fn test_builtin_every_entry_has_canonical_id() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.entries().iter().all(|e| e.canonical_id().is_some()));
    }

    #[test]
    fn test_builtin_group_swatches() {
        let catalog = Catalog::builtin().unwrap();
        let swatches = catalog.group_swatches();
        assert_eq!(swatches.len(), ColorGroup::ALL.len());
        assert_eq!(swatches[0].group, ColorGroup::Red);
        assert_eq!(swatches[0].hex, "#ff3636");
        assert!(swatches.iter().all(|s| s.hex != GROUP_SWATCH_FALLBACK));
    }

    #[test]
    fn test_builtin_labels_sorted() {
        let catalog = Catalog::builtin().unwrap();
        let labels: Vec<String> = catalog.labels().iter().map(|t| t.to_string()).collect();
        assert_eq!(
            labels,
            vec!["cool", "dark", "muted", "neutral", "pastel", "push", "vibrant", "warm"]
        );
    }

    #[test]
    fn test_unknown_group_is_fatal() {
        let toml = r##"
            [[color]]
            name = "Odd"
            hex = "#123456"
            tags = ["cg:magenta"]
            live = { col = 1, row = 1 }
        "##;
        let err = Catalog::from_toml(toml).unwrap_err();
        assert!(matches!(err, Error::UnknownColorGroup(_)));
    }

    #[test]
    fn test_swatch_row_without_group_is_fatal() {
        let toml = r##"
            [[color]]
            name = "Plain"
            hex = "#123456"
            tags = ["warm"]
            live = { col = 1, row = 2 }
        "##;
        let err = Catalog::from_toml(toml).unwrap_err();
        assert!(matches!(err, Error::MissingColorGroup { .. }));
    }

    #[test]
    fn test_reserved_favorite_tag_rejected() {
        let toml = r##"
            [[color]]
            name = "Sneaky"
            hex = "#123456"
            tags = ["favorite"]
            live = { col = 1, row = 1 }
        "##;
        let err = Catalog::from_toml(toml).unwrap_err();
        assert!(matches!(err, Error::ReservedTag { .. }));
    }

    #[test]
    fn test_two_groups_rejected() {
        let toml = r##"
            [[color]]
            name = "Both"
            hex = "#123456"
            tags = ["cg:red", "cg:blue"]
        "##;
        let err = Catalog::from_toml(toml).unwrap_err();
        assert!(matches!(err, Error::MultipleColorGroups { .. }));
    }

    #[test]
    fn test_invalid_hex_rejected() {
        let toml = r##"
            [[color]]
            name = "Bad"
            hex = "#12345"
        "##;
        assert!(matches!(
            Catalog::from_toml(toml).unwrap_err(),
            Error::InvalidHex(_)
        ));
    }

    #[test]
    fn test_zero_coordinate_rejected() {
        let toml = r##"
            [[color]]
            name = "Zero"
            hex = "#123456"
            push = { col = 0, row = 1 }
        "##;
        assert!(matches!(
            Catalog::from_toml(toml).unwrap_err(),
            Error::InvalidCoordinate(_)
        ));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            Catalog::from_toml("").unwrap_err(),
            Error::EmptyCatalog
        ));
    }

    #[test]
    fn test_missing_groups_fall_back() {
        let toml = r##"
            [[color]]
            name = "Only Red"
            hex = "#ff0000"
            tags = ["cg:red"]
            live = { col = 1, row = 2 }
        "##;
        let catalog = Catalog::from_toml(toml).unwrap();
        let swatches = catalog.group_swatches();
        assert_eq!(swatches[0].hex, "#ff0000");
        assert_eq!(swatches[1].group, ColorGroup::Orange);
        assert_eq!(swatches[1].hex, GROUP_SWATCH_FALLBACK);
    }

    #[test]
    fn test_lookup_by_coordinate() {
        let catalog = Catalog::builtin().unwrap();
        let salmon = catalog.by_canonical_id(Coordinate::new(1, 1)).unwrap();
        assert_eq!(salmon.name, "Salmon");
        let same = catalog.at(LayoutName::Push, Coordinate::new(3, 8)).unwrap();
        assert_eq!(same.id, salmon.id);
        assert!(catalog.at(LayoutName::Live, Coordinate::new(15, 1)).is_none());
    }
}
