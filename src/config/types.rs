use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::ColorFormat;
use crate::export::DEFAULT_FILE_PREFIX;
use crate::palette::LayoutName;
use crate::session::{DisplayOption, FilterState};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub bindings: Vec<KeyBinding>,
}

impl Config {
    /// Merge two configs, with `other` taking precedence.
    ///
    /// Bindings from `other` are tried first, so they shadow ours.
    pub fn merge(self, other: Config) -> Config {
        let mut bindings = other.bindings;
        bindings.extend(self.bindings);

        Config {
            defaults: DefaultsConfig {
                layout: other.defaults.layout.or(self.defaults.layout),
                format: other.defaults.format.or(self.defaults.format),
                display: other.defaults.display.or(self.defaults.display),
            },
            catalog: CatalogConfig {
                path: other.catalog.path.or(self.catalog.path),
            },
            export: ExportConfig {
                dir: other.export.dir.or(self.export.dir),
                file_prefix: other.export.file_prefix.or(self.export.file_prefix),
            },
            bindings,
        }
    }
}

/// Initial values for a session; absent keys in the state string fall
/// back to these
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub layout: Option<LayoutName>,

    #[serde(default)]
    pub format: Option<ColorFormat>,

    /// Display options enabled by default (e.g. `["names"]`)
    #[serde(default)]
    pub display: Option<Vec<DisplayOption>>,
}

impl DefaultsConfig {
    pub fn filter_state(&self) -> FilterState {
        let base = FilterState::default();
        FilterState {
            layout: self.layout.unwrap_or(base.layout),
            format: self.format.unwrap_or(base.format),
            display: self.display.clone().unwrap_or(base.display),
            ..base
        }
    }
}

/// Palette source
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CatalogConfig {
    /// TOML catalog replacing the built-in palette
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Export destination
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ExportConfig {
    /// Directory export files are written to (defaults to the working
    /// directory)
    #[serde(default)]
    pub dir: Option<PathBuf>,

    #[serde(default)]
    pub file_prefix: Option<String>,
}

impl ExportConfig {
    pub fn dir(&self) -> &Path {
        self.dir.as_deref().unwrap_or(Path::new("."))
    }

    pub fn file_prefix(&self) -> &str {
        self.file_prefix.as_deref().unwrap_or(DEFAULT_FILE_PREFIX)
    }
}

/// Key binding configuration (Alacritty-style)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyBinding {
    /// Key to bind (e.g., "j", "Enter", "Esc", "F1")
    pub key: String,

    /// Modifier keys (e.g., "Control", "Shift", "Alt", "Control|Shift")
    #[serde(default)]
    pub mods: Option<String>,

    /// Mode restriction (e.g., "Grid", "Tags", "Dialog", "~Dialog")
    #[serde(default)]
    pub mode: Option<String>,

    /// Built-in action to execute; "None" disables the key
    #[serde(default)]
    pub action: Option<String>,
}

impl KeyBinding {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            mods: None,
            mode: None,
            action: None,
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_mods(mut self, mods: impl Into<String>) -> Self {
        self.mods = Some(mods.into());
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }
}

/// Built-in bindings, consulted after the configured ones
pub fn default_bindings() -> Vec<KeyBinding> {
    let browse = "~Dialog";
    let bind = |key: &str, action: &str, mode: &str| {
        KeyBinding::new(key).with_action(action).with_mode(mode)
    };

    vec![
        // Dialog
        bind("y", "Confirm", "Dialog"),
        bind("Enter", "Confirm", "Dialog"),
        bind("n", "Cancel", "Dialog"),
        bind("Esc", "Cancel", "Dialog"),
        bind("q", "Cancel", "Dialog"),
        bind("?", "Cancel", "Dialog"),
        // Navigation
        bind("k", "MoveUp", browse),
        bind("Up", "MoveUp", browse),
        bind("j", "MoveDown", browse),
        bind("Down", "MoveDown", browse),
        bind("h", "MoveLeft", browse),
        bind("Left", "MoveLeft", browse),
        bind("l", "MoveRight", browse),
        bind("Right", "MoveRight", browse),
        bind("Tab", "FocusNext", browse),
        bind("Esc", "FocusNext", "Tags"),
        bind("Enter", "Select", browse),
        bind("Space", "Select", browse),
        // Palette
        bind("f", "ToggleFavorite", "Grid"),
        bind("F", "ToggleFavoritesFilter", browse),
        bind("L", "CycleLayout", browse),
        bind("c", "CycleFormat", browse),
        bind("n", "ToggleNames", browse),
        bind("e", "Export", browse),
        bind("x", "ClearTags", browse),
        bind("X", "ClearFavorites", browse),
        // Other
        bind("?", "ToggleHelp", browse),
        bind("q", "Quit", browse),
        KeyBinding::new("c")
            .with_mods("Control")
            .with_action("ForceQuit"),
    ]
}
