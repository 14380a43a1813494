pub mod action;
pub mod app;
pub mod cli;
pub mod clipboard;
pub mod color;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod logging;
pub mod palette;
pub mod session;
pub mod tui;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
pub use palette::Catalog;
pub use session::Session;
