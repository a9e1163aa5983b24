//! # Setlists
//!
//! Named, ordered collections of song paths (the keys of a
//! [`SongLibrary`](crate::SongLibrary)). Setlists never look inside the
//! songs, so a path that is no longer in the library simply stays in the
//! list until removed.
//!
//! Persistence goes through [`SetlistStore`]; [`MemoryStore`] and
//! [`JsonFileStore`] are provided.
//!
//! ## Example
//! ```rust
//! use chordsheet::setlist::{MemoryStore, Setlists};
//!
//! let mut setlists = Setlists::default();
//! let id = setlists.create("Sunday service")?;
//! setlists.add_song(&id, "hymns/Amazing Grace.chords")?;
//! setlists.add_song(&id, "hymns/Amazing Grace.chords")?; // ignored, already there
//!
//! let mut store = MemoryStore::default();
//! setlists.save(&mut store)?;
//! let reloaded = Setlists::load(&store)?;
//! assert_eq!(reloaded.get(&id).unwrap().songs.len(), 1);
//! # Ok::<(), chordsheet::ChordSheetError>(())
//! ```

use crate::error::ChordSheetError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setlist {
    pub id: String,
    pub name: String,
    pub songs: Vec<String>,
}

/// Where setlists are kept between runs
pub trait SetlistStore {
    fn load(&self) -> Result<Vec<Setlist>, ChordSheetError>;
    fn save(&mut self, setlists: &[Setlist]) -> Result<(), ChordSheetError>;
}

/// Keeps setlists in memory only
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    setlists: Vec<Setlist>,
}

impl SetlistStore for MemoryStore {
    fn load(&self) -> Result<Vec<Setlist>, ChordSheetError> {
        Ok(self.setlists.clone())
    }

    fn save(&mut self, setlists: &[Setlist]) -> Result<(), ChordSheetError> {
        self.setlists = setlists.to_vec();
        Ok(())
    }
}

/// A pretty-printed JSON array in a single file
///
/// A missing file reads as no setlists; a file with invalid JSON is an error
/// rather than being silently replaced on the next save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SetlistStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Setlist>, ChordSheetError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ChordSheetError::io(&self.path, e)),
        };
        serde_json::from_str(&content).map_err(|e| {
            ChordSheetError::Storage(format!("{}: {}", self.path.display(), e))
        })
    }

    fn save(&mut self, setlists: &[Setlist]) -> Result<(), ChordSheetError> {
        let json = serde_json::to_string_pretty(setlists)?;
        std::fs::write(&self.path, json).map_err(|e| ChordSheetError::io(&self.path, e))?;
        log::info!("Saved {} setlists to {}", setlists.len(), self.path.display());
        Ok(())
    }
}

/// The user's setlists, in creation order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Setlists {
    items: Vec<Setlist>,
}

impl Setlists {
    pub fn load(store: &impl SetlistStore) -> Result<Self, ChordSheetError> {
        Ok(Self {
            items: store.load()?,
        })
    }

    pub fn save(&self, store: &mut impl SetlistStore) -> Result<(), ChordSheetError> {
        store.save(&self.items)
    }

    pub fn list(&self) -> &[Setlist] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Setlist> {
        self.items.iter().find(|s| s.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Setlist, ChordSheetError> {
        self.items
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| ChordSheetError::Setlist(format!("No setlist with id {}", id)))
    }

    /// Create an empty setlist and return its id
    pub fn create(&mut self, name: &str) -> Result<String, ChordSheetError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ChordSheetError::Setlist("Setlist name is empty".to_string()));
        }
        let id = uuid::Uuid::new_v4().to_string();
        self.items.push(Setlist {
            id: id.clone(),
            name: name.to_string(),
            songs: Vec::new(),
        });
        Ok(id)
    }

    /// Returns false if there was no such setlist
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|s| s.id != id);
        self.items.len() != before
    }

    /// Append a song. Returns false if the song was already in the setlist.
    pub fn add_song(&mut self, id: &str, song_path: &str) -> Result<bool, ChordSheetError> {
        let setlist = self.get_mut(id)?;
        if setlist.songs.iter().any(|s| s == song_path) {
            return Ok(false);
        }
        setlist.songs.push(song_path.to_string());
        Ok(true)
    }

    /// Remove a song. Returns false if the song was not in the setlist.
    pub fn remove_song(&mut self, id: &str, song_path: &str) -> Result<bool, ChordSheetError> {
        let setlist = self.get_mut(id)?;
        let before = setlist.songs.len();
        setlist.songs.retain(|s| s != song_path);
        Ok(setlist.songs.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rejects_empty_name() {
        let mut setlists = Setlists::default();
        assert!(matches!(setlists.create("   "), Err(ChordSheetError::Setlist(_))));
        let id = setlists.create("  Rehearsal ").unwrap();
        assert_eq!(setlists.get(&id).unwrap().name, "Rehearsal");
    }

    #[test]
    fn test_ids_are_unique() {
        let mut setlists = Setlists::default();
        let a = setlists.create("A").unwrap();
        let b = setlists.create("A").unwrap();
        assert_ne!(a, b);
        assert_eq!(setlists.list().len(), 2);
    }

    #[test]
    fn test_add_and_remove_songs() {
        let mut setlists = Setlists::default();
        let id = setlists.create("Gig").unwrap();
        assert!(setlists.add_song(&id, "a.chords").unwrap());
        assert!(setlists.add_song(&id, "b.chords").unwrap());
        assert!(!setlists.add_song(&id, "a.chords").unwrap());
        assert_eq!(setlists.get(&id).unwrap().songs, vec!["a.chords", "b.chords"]);

        assert!(setlists.remove_song(&id, "a.chords").unwrap());
        assert!(!setlists.remove_song(&id, "a.chords").unwrap());
        assert_eq!(setlists.get(&id).unwrap().songs, vec!["b.chords"]);
    }

    #[test]
    fn test_unknown_id() {
        let mut setlists = Setlists::default();
        assert!(setlists.add_song("nope", "a.chords").is_err());
        assert!(setlists.remove_song("nope", "a.chords").is_err());
        assert!(!setlists.delete("nope"));
    }

    #[test]
    fn test_delete() {
        let mut setlists = Setlists::default();
        let id = setlists.create("Old").unwrap();
        assert!(setlists.delete(&id));
        assert!(setlists.get(&id).is_none());
    }

    #[test]
    fn test_json_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("setlists.json"));
        assert!(Setlists::load(&store).unwrap().list().is_empty());

        let mut setlists = Setlists::default();
        let id = setlists.create("Tour").unwrap();
        setlists.add_song(&id, "rock/Song.chords").unwrap();
        setlists.save(&mut store).unwrap();

        let reloaded = Setlists::load(&store).unwrap();
        assert_eq!(reloaded, setlists);
    }

    #[test]
    fn test_json_file_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("setlists.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(ChordSheetError::Storage(_))));
    }
}
