//! # Song Model Types
//!
//! This module defines the structures produced by the sheet parser and
//! consumed by the transposer and renderers.
//!
//! ## Type Hierarchy
//! ```text
//! SongDocument
//!   ├── title: String   (UNTITLED when unknown)
//!   ├── artist: String  (UNKNOWN_ARTIST when unknown)
//!   ├── key: Option<String>
//!   └── Vec<LinePair>
//!         ├── chords: String  (raw chord row, spacing preserved)
//!         └── lyrics: String  (raw lyric row or section label)
//!
//! ChordSymbol (transient, built by the transposer)
//!   ├── root: Root
//!   │     ├── name: NoteName (A-G)
//!   │     └── accidental: Accidental (natural, #, b)
//!   ├── suffix: String  (m7, sus4, add9, ...)
//!   └── bass: Option<Root>
//! ```
//!
//! ## Key Concepts
//!
//! ### Spacing is data
//! A chord row is stored exactly as it appeared in the sheet. The column of
//! each chord places it above the syllable it belongs to, so nothing in this
//! crate trims or collapses the whitespace of a chord row.
//!
//! ### Immutable documents
//! A `SongDocument` is built once per load. Transposing produces a new
//! document through [`SongDocument::transposed`]; the original chord rows are
//! never rewritten, so repeated transpositions always start from the source.
//!
//! ## Related Modules
//! - `parser` - Creates these types from sheet text
//! - `chord` - Pitch mapping for `Root`
//! - `transpose` - Rewrites chord rows
//! - `render` - Plain-text output

use crate::transpose::Transposer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Title used when neither the sheet nor its file name provides one.
pub const UNTITLED: &str = "Untitled";

/// Artist used when neither the sheet nor its file name provides one.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Note names A through G
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteName {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NoteName {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(NoteName::C),
            'D' => Some(NoteName::D),
            'E' => Some(NoteName::E),
            'F' => Some(NoteName::F),
            'G' => Some(NoteName::G),
            'A' => Some(NoteName::A),
            'B' => Some(NoteName::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            NoteName::C => 'C',
            NoteName::D => 'D',
            NoteName::E => 'E',
            NoteName::F => 'F',
            NoteName::G => 'G',
            NoteName::A => 'A',
            NoteName::B => 'B',
        }
    }
}

/// Accidental written after a note name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Accidental {
    #[default]
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Accidental::Sharp),
            'b' => Some(Accidental::Flat),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        }
    }
}

/// A chord root or bass note: letter plus optional accidental
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Root {
    pub name: NoteName,
    pub accidental: Accidental,
}

impl Root {
    pub fn new(name: NoteName, accidental: Accidental) -> Self {
        Self { name, accidental }
    }

    /// Parse a root from the start of `s`.
    ///
    /// Returns the root and the number of bytes it occupies (1 or 2).
    ///
    /// ```
    /// use chordsheet::{Accidental, NoteName, Root};
    ///
    /// let (root, len) = Root::parse_prefix("Bbm7").unwrap();
    /// assert_eq!(root, Root::new(NoteName::B, Accidental::Flat));
    /// assert_eq!(len, 2);
    /// assert!(Root::parse_prefix("H7").is_none());
    /// ```
    pub fn parse_prefix(s: &str) -> Option<(Self, usize)> {
        let mut chars = s.chars();
        let name = NoteName::from_char(chars.next()?)?;
        match chars.next().and_then(Accidental::from_char) {
            Some(accidental) => Some((Self::new(name, accidental), 2)),
            None => Some((Self::new(name, Accidental::Natural), 1)),
        }
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name.as_char(), self.accidental.as_str())
    }
}

/// A recognized chord symbol such as `Dm7/F`
///
/// Only the root and the bass note carry pitch; the suffix is opaque text
/// that is carried through transposition unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordSymbol {
    pub root: Root,
    pub suffix: String,
    pub bass: Option<Root>,
}

impl fmt::Display for ChordSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.suffix)?;
        if let Some(bass) = &self.bass {
            write!(f, "/{}", bass)?;
        }
        Ok(())
    }
}

/// One displayed line pair: a chord row above a lyric row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LinePair {
    pub chords: String,
    pub lyrics: String,
}

impl LinePair {
    pub fn new(chords: impl Into<String>, lyrics: impl Into<String>) -> Self {
        Self {
            chords: chords.into(),
            lyrics: lyrics.into(),
        }
    }

    pub fn chords_only(chords: impl Into<String>) -> Self {
        Self::new(chords, "")
    }

    pub fn lyrics_only(lyrics: impl Into<String>) -> Self {
        Self::new("", lyrics)
    }

    /// A pair with both rows empty, standing for a blank line in the sheet
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn is_blank(&self) -> bool {
        self.chords.is_empty() && self.lyrics.is_empty()
    }
}

/// A parsed song sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongDocument {
    pub title: String,
    pub artist: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub lines: Vec<LinePair>,
}

impl Default for SongDocument {
    fn default() -> Self {
        Self {
            title: UNTITLED.to_string(),
            artist: UNKNOWN_ARTIST.to_string(),
            key: None,
            lines: Vec::new(),
        }
    }
}

impl SongDocument {
    pub fn has_title(&self) -> bool {
        self.title != UNTITLED
    }

    pub fn has_artist(&self) -> bool {
        self.artist != UNKNOWN_ARTIST
    }

    /// Build a transposed view of this document.
    ///
    /// Every chord row and the key are shifted by `semitones`; lyric rows and
    /// metadata are copied as-is. `self` is left untouched.
    ///
    /// ```
    /// use chordsheet::parse;
    ///
    /// let song = parse("G       D\nAmazing grace");
    /// let up = song.transposed(2);
    /// assert_eq!(up.lines[0].chords, "A       E");
    /// assert_eq!(song.lines[0].chords, "G       D");
    /// ```
    pub fn transposed(&self, semitones: i32) -> SongDocument {
        self.transposed_with(semitones, &Transposer::default())
    }

    pub fn transposed_with(&self, semitones: i32, transposer: &Transposer) -> SongDocument {
        SongDocument {
            title: self.title.clone(),
            artist: self.artist.clone(),
            key: self
                .key
                .as_deref()
                .map(|key| transposer.transpose(key, semitones)),
            lines: self
                .lines
                .iter()
                .map(|line| LinePair {
                    chords: transposer.transpose(&line.chords, semitones),
                    lyrics: line.lyrics.clone(),
                })
                .collect(),
        }
    }
}
