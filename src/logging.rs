use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::Result;

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "SWATCHGRID_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Log file location: `<cache_dir>/swatchgrid/swatchgrid.log`
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("swatchgrid").join("swatchgrid.log"))
}

/// Install the global subscriber writing to the log file.
///
/// The TUI owns stdout, so nothing is ever logged there. Without a cache
/// directory logging is simply disabled.
pub fn init() -> Result<()> {
    let Some(path) = log_path() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();

    Ok(())
}
