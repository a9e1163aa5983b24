//! # Error Types
//!
//! Parsing and transposition never fail: malformed sheets degrade to a
//! best-effort [`SongDocument`](crate::SongDocument). The errors below only
//! come from the edges of the library where real I/O or user input is
//! involved.
//!
//! ## Error Types
//! - `Io` - Reading a sheet or a setlist file failed
//! - `Config` - A YAML configuration file could not be deserialized
//! - `Json` - A value could not be serialized to JSON
//! - `Storage` - A setlist file exists but does not hold valid JSON
//! - `Setlist` - A setlist operation referred to something that does not exist
//! - `Usage` - Bad command line arguments
//!
//! ## Usage
//! ```rust
//! use chordsheet::{api::parse_file, ChordSheetError};
//!
//! match parse_file("missing.chords") {
//!     Ok(song) => println!("{}", song.title),
//!     Err(ChordSheetError::Io { path, source }) => {
//!         eprintln!("Could not read {}: {}", path, source);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChordSheetError {
    /// A file could not be read or written.
    ///
    /// # Example
    /// ```
    /// # use chordsheet::ChordSheetError;
    /// let err = ChordSheetError::Io {
    ///     path: "songs/a.chords".to_string(),
    ///     source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    /// };
    /// assert_eq!(err.to_string(), "I/O error on songs/a.chords: not found");
    /// ```
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration.
    ///
    /// # Example
    /// ```
    /// # use chordsheet::ChordSheetError;
    /// let err = ChordSheetError::Config("max-header-lines: invalid type".to_string());
    /// assert_eq!(err.to_string(), "Invalid configuration: max-header-lines: invalid type");
    /// ```
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The setlist store holds data that is not a JSON array of setlists.
    #[error("Setlist storage error: {0}")]
    Storage(String),

    /// A setlist operation failed, e.g. an unknown id or an empty name.
    #[error("Setlist error: {0}")]
    Setlist(String),

    /// Command line misuse.
    #[error("{0}")]
    Usage(String),
}

impl ChordSheetError {
    /// Wrap an I/O error together with the path it happened on.
    ///
    /// ```
    /// # use chordsheet::ChordSheetError;
    /// let source = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
    /// let err = ChordSheetError::io("setlists.json", source);
    /// assert_eq!(err.to_string(), "I/O error on setlists.json: not found");
    /// ```
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        ChordSheetError::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}
