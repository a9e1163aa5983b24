//! # Guitar Chord Shapes
//!
//! Fingering diagrams for common open and barre chords, looked up by chord
//! symbol so a viewer can draw the shape of every chord in the (possibly
//! transposed) sheet.
//!
//! ## Lookup
//! The root is compared by pitch class, so enharmonic spellings such as
//! `Fb` or `B#` find the shape stored under `E` or `C`. The bass note of a
//! slash chord is ignored.
//! Suffix spellings are normalized first: `maj`/`M` mean a major triad and
//! `min` means `m`.
//!
//! ## Example
//! ```rust
//! use chordsheet::chord_shapes::lookup;
//!
//! let shape = lookup("Am/G").unwrap();
//! assert_eq!(shape.name, "Am");
//! assert_eq!(shape.frets, [-1, 0, 2, 2, 1, 0]);
//! assert!(lookup("Fb").is_some()); // same pitch as E
//! assert!(lookup("C#m7b5").is_none());
//! ```

use crate::chord::pitch_class;
use crate::model::{ChordSymbol, Root};
use serde::Serialize;

/// One fingering on a six-string guitar in standard tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChordShape {
    pub name: &'static str,
    /// Fret per string, low E to high e. 0 is open, -1 is muted.
    pub frets: [i8; 6],
    /// Finger per string, 0 for none, 1 for the index finger
    pub fingers: [u8; 6],
    /// Frets covered by a barre
    #[serde(skip_serializing_if = "no_barres")]
    pub barres: &'static [u8],
}

fn no_barres(barres: &&'static [u8]) -> bool {
    barres.is_empty()
}

const fn shape(
    name: &'static str,
    frets: [i8; 6],
    fingers: [u8; 6],
    barres: &'static [u8],
) -> ChordShape {
    ChordShape {
        name,
        frets,
        fingers,
        barres,
    }
}

/// Shapes keyed by root pitch class and normalized suffix
static SHAPES: &[(u8, &str, ChordShape)] = &[
    // Major
    (0, "", shape("C", [-1, 3, 2, 0, 1, 0], [0, 3, 2, 0, 1, 0], &[])),
    (2, "", shape("D", [-1, -1, 0, 2, 3, 2], [0, 0, 0, 1, 3, 2], &[])),
    (4, "", shape("E", [0, 2, 2, 1, 0, 0], [0, 2, 3, 1, 0, 0], &[])),
    (5, "", shape("F", [1, 3, 3, 2, 1, 1], [1, 3, 4, 2, 1, 1], &[1])),
    (7, "", shape("G", [3, 2, 0, 0, 0, 3], [2, 1, 0, 0, 0, 3], &[])),
    (9, "", shape("A", [-1, 0, 2, 2, 2, 0], [0, 0, 1, 2, 3, 0], &[])),
    (11, "", shape("B", [-1, 2, 4, 4, 4, 2], [0, 1, 2, 3, 4, 1], &[2])),
    // Minor
    (0, "m", shape("Cm", [-1, 3, 5, 5, 4, 3], [0, 1, 3, 4, 2, 1], &[3])),
    (2, "m", shape("Dm", [-1, -1, 0, 2, 3, 1], [0, 0, 0, 2, 3, 1], &[])),
    (4, "m", shape("Em", [0, 2, 2, 0, 0, 0], [0, 2, 3, 0, 0, 0], &[])),
    (5, "m", shape("Fm", [1, 3, 3, 1, 1, 1], [1, 3, 4, 1, 1, 1], &[1])),
    (7, "m", shape("Gm", [3, 5, 5, 3, 3, 3], [1, 3, 4, 1, 1, 1], &[3])),
    (9, "m", shape("Am", [-1, 0, 2, 2, 1, 0], [0, 0, 2, 3, 1, 0], &[])),
    (11, "m", shape("Bm", [-1, 2, 4, 4, 3, 2], [0, 1, 3, 4, 2, 1], &[2])),
    // Dominant sevenths
    (2, "7", shape("D7", [-1, -1, 0, 2, 1, 2], [0, 0, 0, 2, 1, 3], &[])),
    (4, "7", shape("E7", [0, 2, 0, 1, 0, 0], [0, 2, 0, 1, 0, 0], &[])),
    (9, "7", shape("A7", [-1, 0, 2, 0, 2, 0], [0, 0, 2, 0, 3, 0], &[])),
];

fn normalize_suffix(suffix: &str) -> &str {
    match suffix {
        "M" | "maj" => "",
        "min" => "m",
        "min7" => "m7",
        other => other,
    }
}

/// Shape for a root and suffix, if one is known
pub fn find(root: Root, suffix: &str) -> Option<&'static ChordShape> {
    let pc = pitch_class(root);
    let suffix = normalize_suffix(suffix);
    SHAPES
        .iter()
        .find(|(p, s, _)| *p == pc && *s == suffix)
        .map(|(_, _, shape)| shape)
}

/// Shape for a recognized chord symbol. The bass note is ignored.
pub fn shape_for(chord: &ChordSymbol) -> Option<&'static ChordShape> {
    find(chord.root, &chord.suffix)
}

/// Parse `name` as a chord symbol and look up its shape
pub fn lookup(name: &str) -> Option<&'static ChordShape> {
    shape_for(&ChordSymbol::parse(name.trim())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::transpose_chord;

    #[test]
    fn test_every_entry_is_reachable_by_its_name() {
        for (_, _, shape) in SHAPES {
            assert_eq!(lookup(shape.name), Some(shape), "{}", shape.name);
        }
    }

    #[test]
    fn test_enharmonic_roots() {
        assert_eq!(lookup("B#").unwrap().name, "C");
        assert_eq!(lookup("Cb").unwrap().name, "B");
        assert_eq!(lookup("E#m").unwrap().name, "Fm");
        assert!(lookup("C#").is_none());
    }

    #[test]
    fn test_suffix_spellings() {
        assert_eq!(lookup("Amin").unwrap().name, "Am");
        assert_eq!(lookup("Gmaj").unwrap().name, "G");
        assert_eq!(lookup("DM").unwrap().name, "D");
        assert!(lookup("Gmaj7").is_none());
    }

    #[test]
    fn test_slash_chord_uses_root_shape() {
        assert_eq!(lookup("D/F#").unwrap().name, "D");
        assert_eq!(lookup(" Em7 "), None);
    }

    #[test]
    fn test_not_a_chord() {
        assert!(lookup("Amazing").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_shape_after_transposition() {
        let chord = ChordSymbol::parse("C7").unwrap();
        let up = transpose_chord(&chord, 2);
        assert_eq!(shape_for(&up).unwrap().name, "D7");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_string(lookup("E").unwrap()).unwrap();
        assert_eq!(json, r#"{"name":"E","frets":[0,2,2,1,0,0],"fingers":[0,2,3,1,0,0]}"#);

        let json = serde_json::to_string(lookup("F").unwrap()).unwrap();
        assert!(json.ends_with(r#""barres":[1]}"#));
    }
}
