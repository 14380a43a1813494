mod keybinding;
mod loader;
mod types;

pub use keybinding::{parse_key, parse_modifiers};
pub use loader::{global_config_path, load_config, load_config_file, load_local_config, ConfigError};
pub use types::{default_bindings, CatalogConfig, Config, DefaultsConfig, ExportConfig, KeyBinding};
