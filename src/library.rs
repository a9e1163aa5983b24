//! # Song Library
//!
//! A collection of parsed sheets keyed by their path relative to the library
//! root (`rock/Wonderwall.chords`). The path is the stable key setlists refer
//! to; titles are for display and may repeat.
//!
//! Libraries come from a directory on disk ([`SongLibrary::load_dir`]) or
//! from in-memory `(path, text)` pairs ([`SongLibrary::from_sources`]), which
//! is how the bundled song package feeds it.

use crate::config::SheetConfig;
use crate::error::ChordSheetError;
use crate::model::SongDocument;
use crate::parser::SheetParser;
use std::path::Path;
use walkdir::WalkDir;

/// File extensions read as sheets
const SHEET_EXTENSIONS: &[&str] = &["chords", "txt", "json"];

/// A song in the library
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryEntry {
    pub path: String,
    pub document: SongDocument,
}

#[derive(Debug, Clone, Default)]
pub struct SongLibrary {
    entries: Vec<LibraryEntry>,
}

fn is_sheet_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SHEET_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

impl SongLibrary {
    /// Load every sheet under `dir`, recursively.
    ///
    /// Files that cannot be read are skipped with a warning; only a missing or
    /// unreadable root directory is an error.
    pub fn load_dir(dir: impl AsRef<Path>, config: &SheetConfig) -> Result<Self, ChordSheetError> {
        let dir = dir.as_ref();
        let metadata = std::fs::metadata(dir).map_err(|e| ChordSheetError::io(dir, e))?;
        if !metadata.is_dir() {
            return Err(ChordSheetError::io(
                dir,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a directory"),
            ));
        }

        let parser = SheetParser::new(config);
        let mut entries = Vec::new();

        for entry in WalkDir::new(dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && is_sheet_file(e.path()))
        {
            let path = entry.path();
            let content = match std::fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    log::warn!("Skipping {}: {}", path.display(), e);
                    continue;
                }
            };
            let relative = path.strip_prefix(dir).unwrap_or(path);
            let key = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            entries.push(LibraryEntry {
                path: key,
                document: parser.parse_with_path(&content, path),
            });
        }

        log::debug!("Loaded {} songs from {}", entries.len(), dir.display());
        Ok(Self::from_entries(entries))
    }

    /// Build a library from `(path, text)` pairs
    pub fn from_sources<'s>(
        sources: impl IntoIterator<Item = (&'s str, &'s str)>,
        config: &SheetConfig,
    ) -> Self {
        let parser = SheetParser::new(config);
        let entries = sources
            .into_iter()
            .map(|(path, text)| LibraryEntry {
                path: path.to_string(),
                document: parser.parse_with_path(text, path),
            })
            .collect();
        Self::from_entries(entries)
    }

    fn from_entries(mut entries: Vec<LibraryEntry>) -> Self {
        entries.sort_by(|a, b| {
            let key = |e: &LibraryEntry| {
                (
                    e.document.title.to_lowercase(),
                    e.document.artist.to_lowercase(),
                    e.path.clone(),
                )
            };
            key(a).cmp(&key(b))
        });
        Self { entries }
    }

    /// Entries sorted by title, then artist
    pub fn entries(&self) -> &[LibraryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&LibraryEntry> {
        self.entries.iter().find(|e| e.path == path)
    }

    /// Case-insensitive search on title and artist. An empty query matches all.
    pub fn search(&self, query: &str) -> Vec<&LibraryEntry> {
        let query = query.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|e| {
                query.is_empty()
                    || e.document.title.to_lowercase().contains(&query)
                    || e.document.artist.to_lowercase().contains(&query)
            })
            .collect()
    }
}
