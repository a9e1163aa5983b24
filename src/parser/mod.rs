//! # Sheet Parser
//!
//! Turns raw song-sheet text into a [`SongDocument`]: metadata plus an
//! ordered list of chord row / lyric row pairs.
//!
//! ## Input Dialects
//!
//! ### JSON envelope
//! `{"title": ..., "artist": ..., "key": ..., "content": "..."}`, as handed
//! over by an importer that already extracted the metadata. `chords` is
//! accepted in place of `content`. Missing or placeholder (`N/A`) values
//! fall back to the sentinels.
//!
//! ### Plain text
//! Up to ten leading `Label: value` lines (`Title`/`Título`,
//! `Artist`/`Artista`, `Key`/`Tom`, optionally wrapped in `[...]`), closed by
//! a line of `=`. Without that separator the whole text is the body and the
//! headers found are still applied.
//!
//! ## Pairing
//! Lines are classified one at a time (see [`classify`]). A chord line takes
//! the next line as its lyric row when that line is neither blank nor a chord
//! line itself; otherwise the chord line stands alone. Every source line
//! ends up in exactly one pair, in source order.
//!
//! ## Entry Points
//! - [`parse`] - default configuration
//! - [`parse_with_path`] - adds title/artist taken from the file name
//! - [`SheetParser`] - custom [`SheetConfig`]
//!
//! ## Example
//! ```rust
//! use chordsheet::parse;
//!
//! let song = parse("Título: Asa Branca\nArtista: Luiz Gonzaga\n=====\nG       C\nQuando olhei a terra ardendo");
//! assert_eq!(song.title, "Asa Branca");
//! assert_eq!(song.artist, "Luiz Gonzaga");
//! assert_eq!(song.lines.len(), 1);
//! assert_eq!(song.lines[0].chords, "G       C");
//! ```

pub mod classify;


use crate::config::SheetConfig;
use crate::model::{LinePair, SongDocument, UNKNOWN_ARTIST, UNTITLED};
use classify::LineClassifier;
use serde_json::{Map, Value};
use std::path::Path;

/// Metadata-carrying JSON wrapper around sheet text
///
/// Any JSON object with a string `content` (or `chords`) qualifies. Each
/// metadata field is read on its own; a field of the wrong type counts as
/// missing rather than disqualifying the whole envelope.
#[derive(Debug)]
struct Envelope {
    title: Option<String>,
    artist: Option<String>,
    key: Option<String>,
    content: String,
}

impl Envelope {
    fn from_object(object: &Map<String, Value>) -> Option<Self> {
        let content = ["content", "chords"]
            .iter()
            .find_map(|field| object.get(*field).and_then(Value::as_str))?;
        let text = |field: &str| object.get(field).and_then(Value::as_str).map(str::to_string);

        Some(Self {
            title: text("title"),
            artist: text("artist"),
            key: text("key"),
            content: content.to_string(),
        })
    }
}

/// Header fields found in a plain-text sheet
#[derive(Debug, Default)]
struct Header {
    title: Option<String>,
    artist: Option<String>,
    key: Option<String>,
}

enum HeaderField {
    Title,
    Artist,
    Key,
}

/// Trimmed value, or None for empty strings and the `N/A` placeholder
fn meaningful(value: Option<&str>) -> Option<String> {
    let value = value?.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("n/a") {
        None
    } else {
        Some(value.to_string())
    }
}

fn is_separator(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 3 && trimmed.chars().all(|c| c == '=')
}

/// Parse `Label: value` or `[Label: value]`
fn parse_header_line(line: &str) -> Option<(HeaderField, String)> {
    let trimmed = line.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);
    let (label, value) = inner.split_once(':')?;

    let field = match label.trim().to_lowercase().as_str() {
        "title" | "título" | "titulo" => HeaderField::Title,
        "artist" | "artista" => HeaderField::Artist,
        "key" | "tom" => HeaderField::Key,
        _ => return None,
    };
    Some((field, meaningful(Some(value))?))
}

/// Sheet parser with a fixed configuration
#[derive(Debug, Clone, Copy)]
pub struct SheetParser<'a> {
    config: &'a SheetConfig,
}

impl<'a> SheetParser<'a> {
    pub fn new(config: &'a SheetConfig) -> Self {
        Self { config }
    }

    /// Parse raw sheet text. Never fails.
    pub fn parse(&self, raw: &str) -> SongDocument {
        if let Some(envelope) = Self::parse_envelope(raw) {
            log::debug!("Sheet is a JSON envelope");
            return self.from_parts(
                envelope.title.as_deref(),
                envelope.artist.as_deref(),
                envelope.key.as_deref(),
                &envelope.content,
            );
        }

        let (header, body) = self.split_header(raw);
        SongDocument {
            title: header.title.unwrap_or_else(|| UNTITLED.to_string()),
            artist: header.artist.unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
            key: header.key,
            lines: self.pair_lines(body),
        }
    }

    /// Build a document from metadata that was extracted elsewhere.
    ///
    /// Same rules as the JSON envelope: empty and `N/A` values fall back to
    /// the sentinels, and `content` is classified line by line.
    pub fn from_parts(
        &self,
        title: Option<&str>,
        artist: Option<&str>,
        key: Option<&str>,
        content: &str,
    ) -> SongDocument {
        SongDocument {
            title: meaningful(title).unwrap_or_else(|| UNTITLED.to_string()),
            artist: meaningful(artist).unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
            key: meaningful(key),
            lines: self.pair_lines(content),
        }
    }

    /// Parse, then fill in missing title/artist from a file name such as
    /// `Artist - Title.chords`
    pub fn parse_with_path(&self, raw: &str, path: impl AsRef<Path>) -> SongDocument {
        let mut doc = self.parse(raw);
        apply_filename_fallback(&mut doc, path.as_ref());
        doc
    }

    fn parse_envelope(raw: &str) -> Option<Envelope> {
        if !raw.trim_start().starts_with('{') {
            return None;
        }
        match serde_json::from_str::<Map<String, Value>>(raw) {
            Ok(object) => {
                let envelope = Envelope::from_object(&object);
                if envelope.is_none() {
                    log::debug!("JSON object has no string content, reading as plain text");
                }
                envelope
            }
            Err(e) => {
                log::debug!("Not a sheet envelope, reading as plain text: {}", e);
                None
            }
        }
    }

    /// Scan the leading lines for headers and return the body text
    fn split_header<'r>(&self, raw: &'r str) -> (Header, &'r str) {
        let mut header = Header::default();
        let mut offset = 0;

        for line in raw.split_inclusive('\n').take(self.config.max_header_lines) {
            offset += line.len();
            if is_separator(line) {
                log::debug!("Header separator found, body starts at byte {}", offset);
                return (header, &raw[offset..]);
            }
            if let Some((field, value)) = parse_header_line(line) {
                match field {
                    HeaderField::Title => header.title = Some(value),
                    HeaderField::Artist => header.artist = Some(value),
                    HeaderField::Key => header.key = Some(value),
                }
            }
        }

        (header, raw)
    }

    /// Classify body lines and group them into pairs
    fn pair_lines(&self, body: &str) -> Vec<LinePair> {
        let classifier = LineClassifier::new(self.config);
        let lines: Vec<&str> = body.lines().collect();
        let mut pairs = Vec::with_capacity(lines.len());
        let mut i = 0;

        while i < lines.len() {
            let line = lines[i];

            if line.trim().is_empty() {
                pairs.push(LinePair::blank());
                i += 1;
            } else if classifier.is_chord_line(line) {
                match lines.get(i + 1) {
                    Some(next) if !next.trim().is_empty() && !classifier.is_chord_line(next) => {
                        pairs.push(LinePair::new(line, *next));
                        i += 2;
                    }
                    _ => {
                        pairs.push(LinePair::chords_only(line));
                        i += 1;
                    }
                }
            } else {
                pairs.push(LinePair::lyrics_only(line));
                i += 1;
            }
        }

        pairs
    }
}

fn apply_filename_fallback(doc: &mut SongDocument, path: &Path) {
    let Some(stem) = path.file_stem().map(|s| s.to_string_lossy()) else {
        return;
    };

    let (artist, title) = match stem.split_once(" - ") {
        Some((artist, title)) => (meaningful(Some(artist)), meaningful(Some(title))),
        None => (None, meaningful(Some(stem.as_ref()))),
    };

    if !doc.has_title() {
        if let Some(title) = title {
            doc.title = title;
        }
    }
    if !doc.has_artist() {
        if let Some(artist) = artist {
            doc.artist = artist;
        }
    }
}

/// Parse raw sheet text with the default configuration.
///
/// Never fails: text that matches no known layout becomes a document with
/// sentinel metadata whose lines are classified as usual.
///
/// # Example
/// ```
/// use chordsheet::{parse, LinePair};
///
/// let song = parse("G       D\nAmazing grace");
/// assert_eq!(song.lines, vec![LinePair::new("G       D", "Amazing grace")]);
/// ```
pub fn parse(raw: &str) -> SongDocument {
    SheetParser::new(&SheetConfig::default()).parse(raw)
}

/// Parse with the default configuration and the file-name fallback.
///
/// ```
/// use chordsheet::parse_with_path;
///
/// let song = parse_with_path("C  G\nHello", "songs/Legião Urbana - Tempo Perdido.chords");
/// assert_eq!(song.title, "Tempo Perdido");
/// assert_eq!(song.artist, "Legião Urbana");
/// ```
pub fn parse_with_path(raw: &str, path: impl AsRef<Path>) -> SongDocument {
    SheetParser::new(&SheetConfig::default()).parse_with_path(raw, path)
}
