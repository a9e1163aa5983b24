//! # Public API
//!
//! Convenience entry points that combine the parser, the cleanup helpers and
//! the transposer for the common loading paths.
//!
//! ## Functions
//!
//! - [`parse_file()`] - Read and parse a sheet from disk (file-name fallback included)
//! - [`parse_file_with_config()`] - Same, with a custom [`SheetConfig`]
//! - [`import_sheet()`] - Build a song from text and metadata scraped off a web page
//! - [`render_transposed()`] - Parse raw text and render it transposed, in one call
//!
//! ## Typical Usage
//!
//! ```rust
//! use chordsheet::{parse, render_plain};
//!
//! let song = parse("Title: Hymn\n===\nG       D\nAmazing grace");
//! let text = render_plain(&song, -2);
//! assert!(text.contains("F       C"));
//! ```

use crate::cleanup::clean_sheet_text;
use crate::config::SheetConfig;
use crate::error::ChordSheetError;
use crate::model::SongDocument;
use crate::parser::SheetParser;
use crate::render::render_plain_with;
use crate::transpose::Transposer;
use std::path::Path;

/// Read a sheet file and parse it with the default configuration.
///
/// Title and artist missing from the sheet are taken from the file name
/// (`Artist - Title.chords`).
///
/// # Errors
/// Returns [`ChordSheetError::Io`] if the file cannot be read. Parsing itself
/// never fails.
pub fn parse_file(path: impl AsRef<Path>) -> Result<SongDocument, ChordSheetError> {
    parse_file_with_config(path, &SheetConfig::default())
}

pub fn parse_file_with_config(
    path: impl AsRef<Path>,
    config: &SheetConfig,
) -> Result<SongDocument, ChordSheetError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ChordSheetError::io(path, e))?;
    Ok(SheetParser::new(config).parse_with_path(&content, path))
}

/// Build a song from a sheet scraped off a chord site.
///
/// The text is cleaned first (tablature and markup removed), then classified.
/// Placeholder metadata such as `N/A` counts as missing.
///
/// # Example
/// ```rust
/// use chordsheet::api::import_sheet;
///
/// let song = import_sheet(
///     Some("Wave"),
///     Some("Tom Jobim"),
///     Some("N/A"),
///     "<b>Dmaj7</b>      Bbdim\ne|--5--|\nVou te contar",
/// );
/// assert_eq!(song.key, None);
/// assert_eq!(song.lines.len(), 1);
/// assert_eq!(song.lines[0].chords, "Dmaj7      Bbdim");
/// ```
pub fn import_sheet(
    title: Option<&str>,
    artist: Option<&str>,
    key: Option<&str>,
    text: &str,
) -> SongDocument {
    let cleaned = clean_sheet_text(text);
    SheetParser::new(&SheetConfig::default()).from_parts(title, artist, key, &cleaned)
}

/// Parse raw sheet text and render it transposed by `semitones`.
pub fn render_transposed(raw: &str, semitones: i32, config: &SheetConfig) -> String {
    let song = SheetParser::new(config).parse(raw);
    render_plain_with(&song, semitones, &Transposer::new(config))
}
