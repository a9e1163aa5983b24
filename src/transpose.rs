use crate::chord::{recognize, transpose_chord};
use crate::config::SheetConfig;

/// Characters after which a chord may start
fn is_anchor(c: char) -> bool {
    c.is_whitespace() || c == '|' || c == '('
}

/// Rewrites chord rows by a number of semitones
///
/// Holds the extra quality keywords the false-positive guard accepts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transposer<'a> {
    quality_keywords: &'a [String],
}

impl<'a> Transposer<'a> {
    pub fn new(config: &'a SheetConfig) -> Self {
        Self {
            quality_keywords: &config.quality_keywords,
        }
    }

    /// Transpose every chord symbol in `text` by `semitones`.
    ///
    /// Single left-to-right pass. A chord is only recognized at the start of
    /// the text or right after whitespace, `|` or `(`; everything that is not
    /// part of a recognized chord is copied byte for byte, so column
    /// positions of untouched text never move.
    pub fn transpose(&self, text: &str, semitones: i32) -> String {
        if semitones.rem_euclid(12) == 0 {
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len() + 8);
        let mut at_anchor = true;
        let mut pos = 0;

        while pos < text.len() {
            let rest = &text[pos..];

            if at_anchor {
                if let Some((chord, len)) = recognize(rest, self.quality_keywords) {
                    out.push_str(&transpose_chord(&chord, semitones).to_string());
                    pos += len;
                    at_anchor = false;
                    continue;
                }
            }

            let Some(c) = rest.chars().next() else {
                break;
            };
            out.push(c);
            at_anchor = is_anchor(c);
            pos += c.len_utf8();
        }

        out
    }
}

/// Transpose a chord row by `semitones` with the default configuration.
///
/// # Example
/// ```
/// use chordsheet::transpose;
///
/// assert_eq!(transpose("Dm7/F", 2), "Em7/G");
/// assert_eq!(transpose("G       D", 2), "A       E");
/// assert_eq!(transpose("Bb", 2), "C");
/// assert_eq!(transpose("Eb", -1), "D");
/// ```
pub fn transpose(text: &str, semitones: i32) -> String {
    Transposer::default().transpose(text, semitones)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::pitch_class;
    use crate::model::Root;

    #[test]
    fn test_identity_at_zero() {
        for s in ["", "C   G   Am   F", "Amazing grace", "  | Dm7/F |  ", "(Bb) x2"] {
            assert_eq!(transpose(s, 0), s);
        }
    }

    #[test]
    fn test_full_cycle_is_identity() {
        for s in ["C#m7   F#", "Db   Gb/Bb", "E#   Cb", "F  Bb  C7"] {
            assert_eq!(transpose(s, 12), s);
            assert_eq!(transpose(s, -24), s);
        }
    }

    #[test]
    fn test_suffix_and_bass() {
        assert_eq!(transpose("Dm7/F", 2), "Em7/G");
        assert_eq!(transpose("Cmaj7", 1), "C#maj7");
        assert_eq!(transpose("Gsus4", 2), "Asus4");
        assert_eq!(transpose("Bm7(b5)", 1), "Cm7(b5)");
        assert_eq!(transpose("C/E", 2), "D/F#");
    }

    #[test]
    fn test_flat_spellings() {
        assert_eq!(transpose("Bb", 2), "C");
        assert_eq!(transpose("Eb", -1), "D");
        assert_eq!(transpose("Eb", 1), "E");
        assert_eq!(transpose("Ab", 2), "Bb");
        assert_eq!(transpose("F", 1), "Gb");
        assert_eq!(transpose("G", 1), "G#");
    }

    #[test]
    fn test_negative_offsets() {
        assert_eq!(transpose("C", -1), "B");
        assert_eq!(transpose("A", -14), "G");
        assert_eq!(transpose("C#", -2), "B");
    }

    #[test]
    fn test_extreme_offsets_do_not_overflow() {
        assert_eq!(transpose("B", i32::MAX), "F#");
        assert_eq!(transpose("Dm7/F", i32::MAX), "Am7/C");
        assert_eq!(transpose("B", i32::MIN), "D#");
        assert_eq!(transpose("Eb  Bb", i32::MIN), "G  D");
    }

    #[test]
    fn test_spacing_is_preserved() {
        let row = "C       G       Am      F";
        let out = transpose(row, 2);
        assert_eq!(out, "D       A       Bm      G");
        assert_eq!(out.len(), row.len());
    }

    #[test]
    fn test_bar_separators_and_parens() {
        assert_eq!(transpose("| C | G |", 2), "| D | A |");
        assert_eq!(transpose("|C|G|", 2), "|D|A|");
        assert_eq!(transpose("(G) (D)", 2), "(A) (E)");
        assert_eq!(transpose("(G)(D)", 2), "(A)(E)");
    }

    #[test]
    fn test_words_are_not_chords() {
        let line = "Amazing grace, how sweet the sound";
        for n in -11..=11 {
            assert_eq!(transpose(line, n), line);
        }
        assert_eq!(transpose("Dominique", 3), "Dominique");
    }

    #[test]
    fn test_mid_word_letters_are_left_alone() {
        assert_eq!(transpose("xC yG", 2), "xC yG");
        assert_eq!(transpose("C/G/B", 2), "D/A/B");
    }

    #[test]
    fn test_multiline_text() {
        assert_eq!(transpose("C\nG", 2), "D\nA");
    }

    #[test]
    fn test_unicode_text_passes_through() {
        assert_eq!(transpose("Refrão:  C   G", 2), "Refrão:  D   A");
    }

    #[test]
    fn test_additive_composition_by_pitch_class() {
        let row = "C   Dm7   Eb/G   F#m   Bbmaj7";
        for a in -13..=13 {
            for b in [-5, -1, 2, 7] {
                let twice = transpose(&transpose(row, a), b);
                let once = transpose(row, a + b);
                let classes = |s: &str| -> Vec<u8> {
                    s.split(|c: char| c.is_whitespace() || c == '/')
                        .filter(|t| !t.is_empty())
                        .map(|t| pitch_class(Root::parse_prefix(t).unwrap().0))
                        .collect()
                };
                assert_eq!(classes(&twice), classes(&once), "a={} b={}", a, b);
            }
        }
    }

    #[test]
    fn test_additive_composition_literal_for_sharp_rows() {
        let row = "C   G   Am   E7";
        assert_eq!(transpose(&transpose(row, 2), 3), transpose(row, 5));
    }

    #[test]
    fn test_extra_quality_keyword() {
        let config = SheetConfig::default().with_quality_keyword("alt");
        let transposer = Transposer::new(&config);
        assert_eq!(transposer.transpose("G7alt", 2), "A7alt");
        assert_eq!(transpose("G7alt", 2), "G7alt");
    }
}
