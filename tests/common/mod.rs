//! Common test utilities

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use swatchgrid::clipboard::Clipboard;
use swatchgrid::error::{Error, Result};
use swatchgrid::export::Exporter;
use swatchgrid::palette::{ColorEntry, EntryId};
use swatchgrid::session::persist::QueryStore;
use swatchgrid::{App, Catalog, Config};

/// Clipboard that remembers every write
#[derive(Clone, Default)]
pub struct RecordingClipboard {
    pub writes: Rc<RefCell<Vec<String>>>,
}

impl RecordingClipboard {
    pub fn last(&self) -> Option<String> {
        self.writes.borrow().last().cloned()
    }
}

impl Clipboard for RecordingClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        self.writes.borrow_mut().push(text.to_string());
        Ok(())
    }
}

/// Clipboard that always refuses
pub struct FailingClipboard;

impl Clipboard for FailingClipboard {
    fn write(&mut self, _text: &str) -> Result<()> {
        Err(Error::Clipboard("permission denied".to_string()))
    }
}

/// Exporter that keeps files in memory
#[derive(Clone, Default)]
pub struct MemoryExporter {
    pub files: Rc<RefCell<Vec<(String, String)>>>,
}

impl MemoryExporter {
    pub fn last(&self) -> Option<(String, String)> {
        self.files.borrow().last().cloned()
    }
}

impl Exporter for MemoryExporter {
    fn export(&mut self, bytes: &[u8], file_name: &str) -> Result<PathBuf> {
        let content = String::from_utf8_lossy(bytes).into_owned();
        self.files
            .borrow_mut()
            .push((file_name.to_string(), content));
        Ok(PathBuf::from(file_name))
    }
}

/// App over the built-in palette with recording services
pub struct TestApp {
    pub app: App,
    pub clipboard: RecordingClipboard,
    pub exporter: MemoryExporter,
}

impl TestApp {
    pub fn new(query: &str) -> Self {
        Self::with_config(Config::default(), query)
    }

    pub fn with_config(config: Config, query: &str) -> Self {
        let catalog = Catalog::builtin().unwrap();
        Self::with_catalog(config, catalog, query)
    }

    pub fn with_catalog(config: Config, catalog: Catalog, query: &str) -> Self {
        let clipboard = RecordingClipboard::default();
        let exporter = MemoryExporter::default();
        let app = App::with_services(
            config,
            catalog,
            QueryStore::parse(query),
            Box::new(clipboard.clone()),
            Box::new(exporter.clone()),
        );
        Self {
            app,
            clipboard,
            exporter,
        }
    }

    /// Send a sequence of plain key presses
    pub fn press(&mut self, keys: &[KeyEvent]) {
        for key in keys {
            self.app.handle_key(*key).unwrap();
        }
    }

    pub fn type_chars(&mut self, chars: &str) {
        for c in chars.chars() {
            self.app.handle_key(char_key(c)).unwrap();
        }
    }

    pub fn entry_named(&self, name: &str) -> EntryId {
        entry_named(self.app.session.catalog(), name).id
    }
}

pub fn entry_named<'c>(catalog: &'c Catalog, name: &str) -> &'c ColorEntry {
    catalog
        .entries()
        .iter()
        .find(|e| e.name == name)
        .unwrap_or_else(|| panic!("no entry named {}", name))
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn char_key(c: char) -> KeyEvent {
    let mods = if c.is_ascii_uppercase() {
        KeyModifiers::SHIFT
    } else {
        KeyModifiers::NONE
    };
    KeyEvent::new(KeyCode::Char(c), mods)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Single red swatch at live 1-1
pub const SINGLE_RED_CATALOG: &str = r##"
[[color]]
name = "Pure Red"
hex = "#ff0000"
tags = ["cg:red"]
live = { col = 1, row = 1 }
"##;

/// Three swatches, two of them tagged `warm`
pub const SMALL_CATALOG: &str = r##"
[[color]]
name = "Coral"
hex = "#ff7f50"
tags = ["cg:orange", "warm"]
live = { col = 1, row = 1 }
push = { col = 2, row = 1 }

[[color]]
name = "Brick"
hex = "#b22222"
tags = ["cg:red", "warm"]
live = { col = 2, row = 1 }

[[color]]
name = "Navy"
hex = "#000080"
tags = ["cg:blue", "cool"]
live = { col = 3, row = 1 }
push = { col = 1, row = 1 }
"##;
