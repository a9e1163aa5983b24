//! Song sheets bundled into the binary at build time.
//!
//! Every `.chords` and `.json` file under `library/` is embedded by the build
//! script. [`library`] parses them all into a [`SongLibrary`].

use chordsheet::{SheetConfig, SongLibrary};

include!(concat!(env!("OUT_DIR"), "/songs.rs"));

/// A bundled sheet with its library path and raw text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundledSong {
    pub path: &'static str,
    pub content: &'static str,
}

/// Get all bundled sheets
pub fn get_all_songs() -> Vec<BundledSong> {
    SONGS
        .iter()
        .map(|&(path, content)| BundledSong { path, content })
        .collect()
}

/// Get a bundled sheet by path, e.g. `hymns/John Newton - Amazing Grace.chords`
pub fn get_song(path: &str) -> Option<BundledSong> {
    SONGS
        .iter()
        .find(|(p, _)| *p == path)
        .map(|&(path, content)| BundledSong { path, content })
}

/// List all bundled sheet paths
pub fn list_songs() -> Vec<&'static str> {
    SONGS.iter().map(|(path, _)| *path).collect()
}

/// Parse every bundled sheet with the default configuration
pub fn library() -> SongLibrary {
    library_with_config(&SheetConfig::default())
}

pub fn library_with_config(config: &SheetConfig) -> SongLibrary {
    SongLibrary::from_sources(SONGS.iter().copied(), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_songs_are_embedded() {
        let paths = list_songs();
        assert!(paths.contains(&"hymns/John Newton - Amazing Grace.chords"));
        assert!(paths.contains(&"folk/Traditional - Scarborough Fair.chords"));
        assert!(paths.iter().all(|p| !p.contains('\\')));
    }

    #[test]
    fn test_get_song() {
        let song = get_song("hymns/John Newton - Amazing Grace.chords").unwrap();
        assert!(song.content.contains("Amazing grace"));
        assert!(get_song("missing.chords").is_none());
    }

    #[test]
    fn test_library_parses_headers() {
        let library = library();
        assert_eq!(library.len(), get_all_songs().len());

        let entry = library
            .get("hymns/John Newton - Amazing Grace.chords")
            .unwrap();
        assert_eq!(entry.document.title, "Amazing Grace");
        assert_eq!(entry.document.artist, "John Newton");
        assert_eq!(entry.document.key.as_deref(), Some("G"));
        assert!(entry.document.lines.iter().any(|l| !l.chords.is_empty()));

        let fair = library.search("scarborough");
        assert_eq!(fair.len(), 1);
        assert_eq!(fair[0].document.key.as_deref(), Some("Am"));
    }
}
