use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::{load_config, load_config_file, Config};
use crate::error::Result;
use crate::export::{Exporter, FileExporter};
use crate::palette::Catalog;
use crate::session::persist::{load_state, QueryStore};
use crate::session::Session;

#[derive(Debug, Parser)]
#[command(
    name = "swatchgrid",
    about = "Browse, filter and copy the Live / Push clip color palette",
    version
)]
pub struct Cli {
    /// Session state string to start from (as printed on exit)
    #[arg(long, value_name = "QUERY")]
    pub state: Option<String>,

    /// Config file to use instead of the global + local lookup
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// TOML catalog replacing the built-in palette
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Print the visible colors and exit
    #[arg(long)]
    pub list: bool,

    /// Write the export file into DIR and exit
    #[arg(long, value_name = "DIR")]
    pub export: Option<PathBuf>,
}

impl Cli {
    pub fn load_config(&self) -> std::result::Result<Config, crate::config::ConfigError> {
        match &self.config {
            Some(path) => load_config_file(path),
            None => load_config(),
        }
    }

    /// The catalog named on the command line, else in config, else built in
    pub fn load_catalog(&self, config: &Config) -> Result<Catalog> {
        match self.catalog.as_ref().or(config.catalog.path.as_ref()) {
            Some(path) => Catalog::load(path),
            None => Catalog::builtin(),
        }
    }

    pub fn state_store(&self) -> QueryStore {
        QueryStore::parse(self.state.as_deref().unwrap_or_default())
    }

    /// Whether the run is headless (no TUI)
    pub fn is_headless(&self) -> bool {
        self.list || self.export.is_some()
    }
}

/// Build a session from the state string and configured defaults
pub fn headless_session(catalog: Catalog, store: &QueryStore, config: &Config) -> Session {
    let defaults = config.defaults.filter_state();
    Session::new(catalog, load_state(store, &defaults))
}

/// One line per shown swatch, in grid order: `col-row  value  name`
pub fn list_lines(session: &Session) -> Vec<String> {
    let format = session.state().format;
    let grid = session.grid();

    grid.cells
        .iter()
        .flatten()
        .flatten()
        .filter_map(|entry| {
            let coordinate = entry.placement(grid.layout)?;
            Some(format!("{:<6}{:<22}{}", coordinate.to_string(), entry.formatted(format), entry.name))
        })
        .collect()
}

/// Export the session's view into `dir`
pub fn export_to(session: &Session, dir: &Path, prefix: &str) -> Result<PathBuf> {
    let json = session.export_document().to_json()?;
    FileExporter::new(dir).export(json.as_bytes(), &session.export_file_name(prefix))
}
