use crate::model::SongDocument;
use crate::transpose::Transposer;

/// Render a song as plain text, chord rows above lyric rows.
///
/// Chord rows and the key are transposed by `semitones` at render time; the
/// document itself is not modified.
///
/// # Example
/// ```
/// use chordsheet::{parse, render_plain};
///
/// let song = parse("Title: Hymn\nArtist: Choir\n===\nG       D\nAmazing grace");
/// assert_eq!(render_plain(&song, 2), "Hymn - Choir\n\nA       E\nAmazing grace\n");
/// ```
pub fn render_plain(doc: &SongDocument, semitones: i32) -> String {
    render_plain_with(doc, semitones, &Transposer::default())
}

pub fn render_plain_with(doc: &SongDocument, semitones: i32, transposer: &Transposer) -> String {
    let mut text = String::new();

    text.push_str(&format!("{} - {}\n", doc.title, doc.artist));
    if let Some(key) = &doc.key {
        text.push_str(&format!("Key: {}\n", transposer.transpose(key, semitones)));
    }
    text.push('\n');

    for line in &doc.lines {
        if line.is_blank() {
            text.push('\n');
            continue;
        }
        if !line.chords.is_empty() {
            text.push_str(&transposer.transpose(&line.chords, semitones));
            text.push('\n');
        }
        if !line.lyrics.is_empty() {
            text.push_str(&line.lyrics);
            text.push('\n');
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LinePair;

    #[test]
    fn test_render_with_key_and_blank_lines() {
        let doc = SongDocument {
            title: "Song".to_string(),
            artist: "Band".to_string(),
            key: Some("Bb".to_string()),
            lines: vec![
                LinePair::lyrics_only("[Verse]"),
                LinePair::new("Bb    F", "First line"),
                LinePair::blank(),
                LinePair::chords_only("Eb  Bb"),
            ],
        };
        assert_eq!(
            render_plain(&doc, 2),
            "Song - Band\nKey: C\n\n[Verse]\nC    G\nFirst line\n\nF  C\n"
        );
    }

    #[test]
    fn test_render_untransposed_is_verbatim() {
        let doc = crate::parse("   C        G/B\n  Let it be");
        assert_eq!(
            render_plain(&doc, 0),
            "Untitled - Unknown Artist\n\n   C        G/B\n  Let it be\n"
        );
    }
}
