//! Chord line classification
//!
//! Sheets have no markup telling chord rows from lyric rows, so a line is
//! classified from a handful of features. Each feature is computed by its own
//! function and [`LineFeatures::is_chord_line`] combines them:
//!
//! ```text
//! within_length_bound && has_note && !has_disqualifying_letters
//!     && (has_wide_gap || !is_wordy)
//! ```
//!
//! Section labels and performance notes (`[Intro]`, `Solo:`, `(2x)`) are
//! removed before any letter-based feature looks at the line, since they
//! contain letters that never appear in chords.

use crate::config::SheetConfig;
use crate::model::ChordSymbol;

/// Section and performance words ignored during classification
const ANNOTATION_KEYWORDS: &[&str] = &[
    "intro",
    "riff",
    "solo",
    "outro",
    "final",
    "fim",
    "verse",
    "chorus",
    "bridge",
    "refrão",
    "refrao",
    "ponte",
    "interlude",
    "interlúdio",
    "interludio",
    "instrumental",
    "pre-chorus",
    "pré-refrão",
    "pre-refrao",
    "coda",
    "ending",
    "repeat",
    "parte",
    "primeira",
    "segunda",
    "tab",
];

/// Letters that occur in chord symbols: note names, `M` for major and the
/// lower-case letters of `b`, `m`, `maj`, `min`, `dim`, `aug`, `sus`, `add`
const CHORD_ALPHABET: &str = "ABCDEFGMabdgijmnosuº";

fn trim_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| matches!(c, '[' | ']' | '(' | ')' | '|' | ':' | ',' | '.' | '*'))
}

/// `x2`, `2x`, `3X` and the like
fn is_repeat_marker(word: &str) -> bool {
    let lower = word.to_lowercase();
    let digits = lower
        .strip_prefix('x')
        .or_else(|| lower.strip_suffix('x'))
        .unwrap_or("");
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Features of one line, see the module docs for how they combine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFeatures {
    pub within_length_bound: bool,
    pub has_note: bool,
    pub has_disqualifying_letters: bool,
    pub has_wide_gap: bool,
    pub is_wordy: bool,
}

impl LineFeatures {
    pub fn is_chord_line(&self) -> bool {
        self.within_length_bound
            && self.has_note
            && !self.has_disqualifying_letters
            && (self.has_wide_gap || !self.is_wordy)
    }
}

/// Chord line predicate bound to a configuration
#[derive(Debug, Clone, Copy)]
pub struct LineClassifier<'a> {
    config: &'a SheetConfig,
}

impl<'a> LineClassifier<'a> {
    pub fn new(config: &'a SheetConfig) -> Self {
        Self { config }
    }

    fn is_annotation(&self, token: &str) -> bool {
        let word = trim_punctuation(token).to_lowercase();
        if word.is_empty() {
            return false;
        }
        is_repeat_marker(&word)
            || ANNOTATION_KEYWORDS.contains(&word.as_str())
            || self
                .config
                .annotation_keywords
                .iter()
                .any(|k| k.to_lowercase() == word)
    }

    /// Tokens that take part in letter-based checks
    fn content_tokens<'l>(&self, line: &'l str) -> Vec<&'l str> {
        line.split_whitespace()
            .filter(|token| !self.is_annotation(token))
            .collect()
    }

    pub fn features(&self, line: &str) -> LineFeatures {
        let tokens = self.content_tokens(line);
        LineFeatures {
            within_length_bound: within_length_bound(line, self.config.max_chord_line_chars),
            has_note: has_note(&tokens),
            has_disqualifying_letters: has_disqualifying_letters(
                &tokens,
                &self.config.quality_keywords,
            ),
            has_wide_gap: has_wide_gap(line),
            is_wordy: is_wordy(&tokens, &self.config.quality_keywords),
        }
    }

    pub fn is_chord_line(&self, line: &str) -> bool {
        self.features(line).is_chord_line()
    }
}

/// Chord rows are short; long lines are prose
pub fn within_length_bound(line: &str, max_chars: usize) -> bool {
    line.chars().count() <= max_chars
}

/// At least one candidate note name
pub fn has_note(tokens: &[&str]) -> bool {
    tokens
        .iter()
        .any(|token| token.chars().any(|c| ('A'..='G').contains(&c)))
}

/// A letter that chord notation never uses, e.g. the `r` in `grace`.
/// Letters of configured quality keywords (`alt` in `G7alt`) are allowed.
pub fn has_disqualifying_letters(tokens: &[&str], quality_keywords: &[String]) -> bool {
    tokens.iter().any(|token| {
        let mut rest = token.to_string();
        for keyword in quality_keywords.iter().filter(|k| !k.is_empty()) {
            rest = rest.replace(keyword.as_str(), "");
        }
        rest.chars()
            .any(|c| c.is_alphabetic() && !CHORD_ALPHABET.contains(c))
    })
}

/// Two or more spaces (or a tab) between tokens
pub fn has_wide_gap(line: &str) -> bool {
    let inner = line.trim();
    inner.contains("  ") || inner.contains('\t')
}

/// A multi-letter token that does not read as a chord symbol
pub fn is_wordy(tokens: &[&str], quality_keywords: &[String]) -> bool {
    tokens.iter().any(|token| {
        let core = token.trim_matches(|c: char| matches!(c, '[' | ']' | '(' | '|' | ',' | '.'));
        core.chars().filter(|c| c.is_alphabetic()).count() >= 2
            && ChordSymbol::parse_with_keywords(core, quality_keywords).is_none()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_chord_line(line: &str) -> bool {
        let config = SheetConfig::default();
        LineClassifier::new(&config).is_chord_line(line)
    }

    #[test]
    fn test_spaced_chords() {
        assert!(is_chord_line("G       D"));
        assert!(is_chord_line("C   F   G"));
        assert!(is_chord_line("   Am7     D7/F#    Gmaj7"));
    }

    #[test]
    fn test_single_spaced_chords() {
        assert!(is_chord_line("C G Am F"));
        assert!(is_chord_line("Bb"));
        assert!(is_chord_line("| C | G | Am | F |"));
    }

    #[test]
    fn test_lyrics() {
        assert!(!is_chord_line("Amazing grace"));
        assert!(!is_chord_line("How sweet the sound"));
        assert!(!is_chord_line("Ela dança sozinha"));
        assert!(!is_chord_line("I once was lost"));
    }

    #[test]
    fn test_section_labels() {
        assert!(!is_chord_line("[Chorus]"));
        assert!(!is_chord_line("[Refrão]"));
        assert!(is_chord_line("[Intro] G  D  Em  C"));
        assert!(is_chord_line("Solo: Am G F E"));
        assert!(is_chord_line("C  G  (2x)"));
    }

    #[test]
    fn test_blank_line_is_not_chord_line() {
        assert!(!is_chord_line(""));
        assert!(!is_chord_line("     "));
    }

    #[test]
    fn test_length_bound() {
        let long = "C   ".repeat(30);
        assert!(long.chars().count() > 100);
        assert!(!is_chord_line(&long));
    }

    #[test]
    fn test_length_bound_edges() {
        let at_limit = format!("C{}G", " ".repeat(98));
        assert_eq!(at_limit.chars().count(), 100);
        assert!(is_chord_line(&at_limit));

        let over_limit = format!("C{}G", " ".repeat(99));
        assert_eq!(over_limit.chars().count(), 101);
        assert!(!is_chord_line(&over_limit));
    }

    #[test]
    fn test_single_word_with_chord_letters_only() {
        // Only chord letters, but not a chord symbol and not spaced out
        assert!(!is_chord_line("Amanda"));
        assert!(is_chord_line("Am"));
    }

    #[test]
    fn test_features_breakdown() {
        let config = SheetConfig::default();
        let classifier = LineClassifier::new(&config);

        let f = classifier.features("Amazing grace");
        assert!(f.has_note);
        assert!(f.has_disqualifying_letters);
        assert!(!f.has_wide_gap);
        assert!(f.is_wordy);

        let f = classifier.features("G       D");
        assert!(f.within_length_bound);
        assert!(f.has_note);
        assert!(!f.has_disqualifying_letters);
        assert!(f.has_wide_gap);
        assert!(!f.is_wordy);
    }

    #[test]
    fn test_repeat_markers() {
        assert!(is_repeat_marker("x2"));
        assert!(is_repeat_marker("2x"));
        assert!(is_repeat_marker("3X"));
        assert!(!is_repeat_marker("x"));
        assert!(!is_repeat_marker("xx"));
    }

    #[test]
    fn test_custom_quality_keyword() {
        let config = SheetConfig::default().with_quality_keyword("alt");
        let classifier = LineClassifier::new(&config);
        assert!(classifier.is_chord_line("G7alt   C"));
        assert!(!is_chord_line("G7alt   C"));
    }

    #[test]
    fn test_custom_annotation_keyword() {
        let config = SheetConfig::default().with_annotation_keyword("Vamp");
        let classifier = LineClassifier::new(&config);
        assert!(classifier.is_chord_line("Vamp:  A  D"));
        assert!(!is_chord_line("Vamp:  A  D"));
    }
}
