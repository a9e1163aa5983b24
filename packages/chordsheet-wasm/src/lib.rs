use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct SongSummary<'a> {
    path: &'a str,
    title: &'a str,
    artist: &'a str,
    key: Option<&'a str>,
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Parse a sheet (plain text or JSON envelope) into a song document as JSON
#[wasm_bindgen]
pub fn parse(raw: &str) -> Result<String, JsValue> {
    to_json(&chordsheet::parse(raw))
}

/// Parse a sheet, using `path` (`Artist - Title.chords`) for missing metadata
#[wasm_bindgen]
pub fn parse_with_path(raw: &str, path: &str) -> Result<String, JsValue> {
    to_json(&chordsheet::parse_with_path(raw, path))
}

/// Transpose a single chord row
#[wasm_bindgen]
pub fn transpose(text: &str, semitones: i32) -> String {
    chordsheet::transpose(text, semitones)
}

/// Parse a sheet and return the document transposed by `semitones` as JSON
#[wasm_bindgen]
pub fn transpose_document(raw: &str, semitones: i32) -> Result<String, JsValue> {
    to_json(&chordsheet::parse(raw).transposed(semitones))
}

/// Clean text copied from a chord site (markup, tablature, trailing spaces)
#[wasm_bindgen]
pub fn clean(text: &str) -> String {
    chordsheet::clean_sheet_text(text)
}

/// Guitar fingering for a chord symbol as JSON, or nothing if the chord has no known shape
#[wasm_bindgen]
pub fn chord_shape(name: &str) -> Result<Option<String>, JsValue> {
    chordsheet::chord_shapes::lookup(name)
        .map(to_json)
        .transpose()
}

/// List the bundled songs as a JSON array of `{path, title, artist, key}`
#[wasm_bindgen]
pub fn list_bundled_songs() -> Result<String, JsValue> {
    let library = chordsheet_songs::library();
    let summaries: Vec<SongSummary> = library
        .entries()
        .iter()
        .map(|entry| SongSummary {
            path: &entry.path,
            title: &entry.document.title,
            artist: &entry.document.artist,
            key: entry.document.key.as_deref(),
        })
        .collect();
    to_json(&summaries)
}

/// Get the raw text of a bundled song by path
#[wasm_bindgen]
pub fn get_bundled_song(path: &str) -> Option<String> {
    chordsheet_songs::get_song(path).map(|song| song.content.to_string())
}
