//! Chord symbol recognition and pitch spelling
//!
//! A chord symbol is a root (`A`-`G`, optional `#`/`b`), an opaque suffix and
//! an optional `/bass` note. Only the root and bass carry pitch.

use crate::model::{Accidental, ChordSymbol, NoteName, Root};

/// Quality keywords that may legitimately put vowels in a chord suffix
/// (`maj7`, `min9`, `dim`, `aug`, `sus4`, `add9`).
pub const QUALITY_KEYWORDS: &[&str] = &["maj", "min", "dim", "aug", "sus", "add", "m", "M"];

/// Root to pitch class (0 = C ... 11 = B)
///
/// Enharmonic spellings share a pitch class: `C#` and `Db` are both 1,
/// `B#` is 0, `Fb` is 4.
pub fn pitch_class(root: Root) -> u8 {
    let base: i8 = match root.name {
        NoteName::C => 0,
        NoteName::D => 2,
        NoteName::E => 4,
        NoteName::F => 5,
        NoteName::G => 7,
        NoteName::A => 9,
        NoteName::B => 11,
    };
    let acc: i8 = match root.accidental {
        Accidental::Sharp => 1,
        Accidental::Flat => -1,
        Accidental::Natural => 0,
    };
    (base + acc).rem_euclid(12) as u8
}

/// Spell a pitch class with sharps or flats
pub fn spell(pitch_class: u8, prefer_flat: bool) -> Root {
    // 0=C, 1=C#/Db, 2=D, 3=D#/Eb, 4=E, 5=F, 6=F#/Gb, 7=G, 8=G#/Ab, 9=A, 10=A#/Bb, 11=B
    let (name, acc) = match pitch_class % 12 {
        0 => (NoteName::C, Accidental::Natural),
        1 if prefer_flat => (NoteName::D, Accidental::Flat),
        1 => (NoteName::C, Accidental::Sharp),
        2 => (NoteName::D, Accidental::Natural),
        3 if prefer_flat => (NoteName::E, Accidental::Flat),
        3 => (NoteName::D, Accidental::Sharp),
        4 => (NoteName::E, Accidental::Natural),
        5 => (NoteName::F, Accidental::Natural),
        6 if prefer_flat => (NoteName::G, Accidental::Flat),
        6 => (NoteName::F, Accidental::Sharp),
        7 => (NoteName::G, Accidental::Natural),
        8 if prefer_flat => (NoteName::A, Accidental::Flat),
        8 => (NoteName::G, Accidental::Sharp),
        9 => (NoteName::A, Accidental::Natural),
        10 if prefer_flat => (NoteName::B, Accidental::Flat),
        10 => (NoteName::A, Accidental::Sharp),
        _ => (NoteName::B, Accidental::Natural),
    };
    Root::new(name, acc)
}

/// Flat spelling is kept for roots written with a flat, and for F.
pub fn prefers_flats(root: Root) -> bool {
    root.accidental == Accidental::Flat
        || (root.name == NoteName::F && root.accidental == Accidental::Natural)
}

/// Shift a single root by `semitones`, spelling the result with the given preference
pub fn shift_root(root: Root, semitones: i32, prefer_flat: bool) -> Root {
    let shifted = (pitch_class(root) as i32 + semitones.rem_euclid(12)) % 12;
    spell(shifted as u8, prefer_flat)
}

/// Transpose a chord symbol.
///
/// The suffix is carried over unchanged. The bass note is spelled with the
/// same sharp/flat preference as the root so a chord keeps one key flavor.
///
/// ```
/// use chordsheet::{chord::transpose_chord, ChordSymbol};
///
/// let chord = ChordSymbol::parse("Dm7/F").unwrap();
/// assert_eq!(transpose_chord(&chord, 2).to_string(), "Em7/G");
/// ```
pub fn transpose_chord(chord: &ChordSymbol, semitones: i32) -> ChordSymbol {
    let prefer_flat = prefers_flats(chord.root);
    ChordSymbol {
        root: shift_root(chord.root, semitones, prefer_flat),
        suffix: chord.suffix.clone(),
        bass: chord
            .bass
            .map(|bass| shift_root(bass, semitones, prefer_flat)),
    }
}

fn is_vowel(c: char) -> bool {
    matches!(
        c.to_ascii_lowercase(),
        'a' | 'e' | 'i' | 'o' | 'u'
    ) || "áàâãéêíóôõúÁÀÂÃÉÊÍÓÔÕÚ".contains(c)
}

fn ends_suffix(c: char) -> bool {
    c.is_whitespace() || c == '/' || c == ')' || c == '|'
}

/// Check a suffix against the false-positive guard.
///
/// A suffix longer than two characters that contains a vowel is only
/// accepted when the vowels all belong to quality keywords. This keeps
/// capitalized words such as `Amazing` or `Dominique` from being read as
/// chords.
pub fn suffix_is_plausible(suffix: &str, extra_keywords: &[String]) -> bool {
    if suffix.chars().count() <= 2 || !suffix.chars().any(is_vowel) {
        return true;
    }

    let mut keywords: Vec<&str> = QUALITY_KEYWORDS
        .iter()
        .copied()
        .chain(extra_keywords.iter().map(String::as_str))
        .filter(|k| !k.is_empty())
        .collect();
    // Longest first so `maj` is removed before `m`
    keywords.sort_by_key(|k| std::cmp::Reverse(k.len()));

    let mut rest = suffix.to_string();
    for keyword in keywords {
        rest = rest.replace(keyword, "");
    }
    !rest.chars().any(is_vowel)
}

/// Recognize a chord symbol at the start of `s`.
///
/// Returns the symbol and the number of bytes it spans. The caller decides
/// whether the position is a token boundary.
pub fn recognize(s: &str, extra_keywords: &[String]) -> Option<(ChordSymbol, usize)> {
    let (root, mut end) = Root::parse_prefix(s)?;

    let suffix_len = s[end..]
        .char_indices()
        .find(|&(_, c)| ends_suffix(c))
        .map(|(i, _)| i)
        .unwrap_or(s.len() - end);
    let suffix = &s[end..end + suffix_len];
    if !suffix_is_plausible(suffix, extra_keywords) {
        return None;
    }
    end += suffix_len;

    let mut bass = None;
    if let Some(after_slash) = s[end..].strip_prefix('/') {
        if let Some((bass_root, bass_len)) = Root::parse_prefix(after_slash) {
            bass = Some(bass_root);
            end += 1 + bass_len;
        }
    }

    Some((
        ChordSymbol {
            root,
            suffix: suffix.to_string(),
            bass,
        },
        end,
    ))
}

impl ChordSymbol {
    /// Parse a whole token as a chord symbol.
    ///
    /// ```
    /// use chordsheet::ChordSymbol;
    ///
    /// let chord = ChordSymbol::parse("C#m7(b5)").unwrap();
    /// assert_eq!(chord.suffix, "m7(b5");
    /// assert!(ChordSymbol::parse("Amazing").is_none());
    /// assert!(ChordSymbol::parse("Am G").is_none());
    /// ```
    pub fn parse(token: &str) -> Option<Self> {
        Self::parse_with_keywords(token, &[])
    }

    pub fn parse_with_keywords(token: &str, extra_keywords: &[String]) -> Option<Self> {
        match recognize(token, extra_keywords) {
            // Closing parens end a suffix; `C#m7(b5)` is still one chord
            Some((chord, len)) if token[len..].chars().all(|c| c == ')') => Some(chord),
            _ => None,
        }
    }
}
