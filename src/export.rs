use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::color::ColorFormat;
use crate::error::Result;
use crate::palette::{ColorEntry, Coordinate, LayoutName, Tag};

pub const EXPORT_MIME_TYPE: &str = "application/json";
pub const DEFAULT_FILE_PREFIX: &str = "palette";

/// Exported view of the palette
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub format: ColorFormat,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub selected_tags: Vec<Tag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_favorites_only: Option<bool>,
    pub colors: Vec<ExportColor>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportColor {
    pub name: String,
    pub value: String,
    pub tags: Vec<Tag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

impl ExportDocument {
    pub fn build(
        entries: &[&ColorEntry],
        format: ColorFormat,
        tags: &[Tag],
        favorites: &BTreeSet<Coordinate>,
    ) -> Self {
        let colors = entries
            .iter()
            .map(|entry| {
                let favorite = entry
                    .canonical_id()
                    .is_some_and(|id| favorites.contains(&id));
                ExportColor {
                    name: entry.name.clone(),
                    value: entry.formatted(format),
                    tags: entry.tags.clone(),
                    is_favorite: favorite.then_some(true),
                }
            })
            .collect();

        Self {
            format,
            selected_tags: tags.to_vec(),
            show_favorites_only: tags.contains(&Tag::Favorite).then_some(true),
            colors,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// `<prefix>-<format>-<layout>.json`
pub fn export_file_name(prefix: &str, format: ColorFormat, layout: LayoutName) -> String {
    format!("{}-{}-{}.json", prefix, format, layout)
}

/// Destination for exported documents
pub trait Exporter {
    /// Store `bytes` under `file_name`, returning where they went
    fn export(&mut self, bytes: &[u8], file_name: &str) -> Result<PathBuf>;
}

/// Writes export files into a directory
#[derive(Debug, Clone)]
pub struct FileExporter {
    dir: PathBuf,
}

impl FileExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Exporter for FileExporter {
    fn export(&mut self, bytes: &[u8], file_name: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        std::fs::write(&path, bytes)?;
        tracing::info!(path = %path.display(), mime = EXPORT_MIME_TYPE, "exported palette");
        Ok(path)
    }
}
