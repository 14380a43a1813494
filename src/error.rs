use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialize error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid hex color: {0}")]
    InvalidHex(String),

    #[error("Unknown color group: {0}")]
    UnknownColorGroup(String),

    #[error("Reserved tag in catalog entry {name}: {tag}")]
    ReservedTag { name: String, tag: String },

    #[error("Entry {name} has more than one color group tag")]
    MultipleColorGroups { name: String },

    #[error("Swatch {name} on the group row has no color group tag")]
    MissingColorGroup { name: String },

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Invalid state value for {key}: {value}")]
    InvalidStateValue { key: String, value: String },

    #[error("Catalog is empty")]
    EmptyCatalog,

    #[error("Unknown catalog entry: {0}")]
    UnknownEntry(usize),

    #[error("Clipboard write failed: {0}")]
    Clipboard(String),

    #[error("Invalid key binding: {0}")]
    InvalidKeyBinding(String),
}
