//! Palette data model
//!
//! The catalog is loaded once at startup and never mutated. Every entry has
//! a position per layout; the `live` position doubles as the entry's
//! canonical identity for favorites.

mod catalog;

pub use catalog::{Catalog, GroupSwatch, BUILTIN_CATALOG, GROUP_SWATCH_ROW, GROUP_SWATCH_FALLBACK};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color::{ColorFormat, Hsl, Rgb};
use crate::error::{Error, Result};

/// Grid coordinate system
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutName {
    #[default]
    Live,
    Push,
}

impl LayoutName {
    pub const ALL: [LayoutName; 2] = [LayoutName::Live, LayoutName::Push];

    /// Layout whose coordinates identify favorites
    pub const CANONICAL: LayoutName = LayoutName::Live;

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutName::Live => "live",
            LayoutName::Push => "push",
        }
    }

    /// Capitalized name for headings
    pub fn title(&self) -> &'static str {
        match self {
            LayoutName::Live => "Live",
            LayoutName::Push => "Push",
        }
    }

    pub fn next(self) -> Self {
        match self {
            LayoutName::Live => LayoutName::Push,
            LayoutName::Push => LayoutName::Live,
        }
    }
}

impl std::fmt::Display for LayoutName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LayoutName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "live" => Ok(LayoutName::Live),
            "push" => Ok(LayoutName::Push),
            _ => Err(Error::InvalidStateValue {
                key: "layout".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// 1-based grid position within one layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub col: u16,
    pub row: u16,
}

impl Coordinate {
    pub const fn new(col: u16, row: u16) -> Self {
        Self { col, row }
    }

    pub fn is_valid(&self) -> bool {
        self.col >= 1 && self.row >= 1
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.col, self.row)
    }
}

impl std::str::FromStr for Coordinate {
    type Err = Error;

    /// Parse the `col-row` form used in the session state string
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidCoordinate(s.to_string());
        let (col, row) = s.split_once('-').ok_or_else(invalid)?;
        let coordinate = Coordinate {
            col: col.parse().map_err(|_| invalid())?,
            row: row.parse().map_err(|_| invalid())?,
        };
        if !coordinate.is_valid() {
            return Err(invalid());
        }
        Ok(coordinate)
    }
}

/// Mutually exclusive color category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorGroup {
    Red,
    Orange,
    Amber,
    Yellow,
    Lime,
    Green,
    Emerald,
    Teal,
    Sky,
    Blue,
    Violet,
    Purple,
    Pink,
    Neutral,
}

impl ColorGroup {
    pub const ALL: [ColorGroup; 14] = [
        ColorGroup::Red,
        ColorGroup::Orange,
        ColorGroup::Amber,
        ColorGroup::Yellow,
        ColorGroup::Lime,
        ColorGroup::Green,
        ColorGroup::Emerald,
        ColorGroup::Teal,
        ColorGroup::Sky,
        ColorGroup::Blue,
        ColorGroup::Violet,
        ColorGroup::Purple,
        ColorGroup::Pink,
        ColorGroup::Neutral,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ColorGroup::Red => "red",
            ColorGroup::Orange => "orange",
            ColorGroup::Amber => "amber",
            ColorGroup::Yellow => "yellow",
            ColorGroup::Lime => "lime",
            ColorGroup::Green => "green",
            ColorGroup::Emerald => "emerald",
            ColorGroup::Teal => "teal",
            ColorGroup::Sky => "sky",
            ColorGroup::Blue => "blue",
            ColorGroup::Violet => "violet",
            ColorGroup::Purple => "purple",
            ColorGroup::Pink => "pink",
            ColorGroup::Neutral => "neutral",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|group| group.name() == name)
    }
}

/// Filter tag
///
/// `Favorite` is a synthetic tag that never appears on catalog entries; it
/// switches the favorites-only filter on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    Favorite,
    Group(ColorGroup),
    Label(String),
}

impl Tag {
    /// Prefix marking a color group tag
    pub const GROUP_PREFIX: &'static str = "cg:";

    pub const FAVORITE: &'static str = "favorite";

    pub fn label(name: impl Into<String>) -> Self {
        Tag::Label(name.into())
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Tag::Group(_))
    }

    /// Text shown on buttons (group prefix stripped)
    pub fn display_name(&self) -> &str {
        match self {
            Tag::Favorite => Self::FAVORITE,
            Tag::Group(group) => group.name(),
            Tag::Label(label) => label,
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tag::Favorite => f.write_str(Self::FAVORITE),
            Tag::Group(group) => write!(f, "{}{}", Self::GROUP_PREFIX, group.name()),
            Tag::Label(label) => f.write_str(label),
        }
    }
}

impl std::str::FromStr for Tag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == Self::FAVORITE {
            return Ok(Tag::Favorite);
        }
        if let Some(name) = s.strip_prefix(Self::GROUP_PREFIX) {
            return ColorGroup::from_name(name)
                .map(Tag::Group)
                .ok_or_else(|| Error::UnknownColorGroup(s.to_string()));
        }
        Ok(Tag::Label(s.to_string()))
    }
}

impl Serialize for Tag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Index of an entry in its catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(pub usize);

/// One palette color
#[derive(Debug, Clone, PartialEq)]
pub struct ColorEntry {
    pub id: EntryId,
    pub name: String,
    /// Stored `#rrggbb`, kept verbatim
    pub hex: String,
    pub rgb: Rgb,
    pub tags: Vec<Tag>,
    pub placements: BTreeMap<LayoutName, Coordinate>,
}

impl ColorEntry {
    /// Position in `layout`, if the entry exists there
    pub fn placement(&self, layout: LayoutName) -> Option<Coordinate> {
        self.placements.get(&layout).copied()
    }

    /// Favorite identity: the position in the canonical layout
    pub fn canonical_id(&self) -> Option<Coordinate> {
        self.placement(LayoutName::CANONICAL)
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    pub fn group(&self) -> Option<ColorGroup> {
        self.tags.iter().find_map(|tag| match tag {
            Tag::Group(group) => Some(*group),
            _ => None,
        })
    }

    /// Value in the requested display format
    pub fn formatted(&self, format: ColorFormat) -> String {
        match format {
            ColorFormat::Hex => self.hex.clone(),
            ColorFormat::Rgb => self.rgb.to_string(),
            ColorFormat::Hsl => Hsl::from(self.rgb).to_string(),
        }
    }
}
