pub mod api;
pub mod chord;
pub mod chord_shapes;
pub mod cleanup;
pub mod config;
pub mod error;
pub mod library;
pub mod model;
pub mod parser;
pub mod render;
pub mod setlist;
pub mod transpose;

pub use chord_shapes::ChordShape;
pub use cleanup::{clean_sheet_text, unescape_newlines};
pub use config::SheetConfig;
pub use error::*;
pub use library::{LibraryEntry, SongLibrary};
pub use model::*;
pub use parser::{parse, parse_with_path, SheetParser};
pub use render::render_plain;
pub use setlist::{Setlist, Setlists};
pub use transpose::{transpose, Transposer};
