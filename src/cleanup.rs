//! Import cleanup for sheets copied out of web pages
//!
//! Chord sites wrap sheets in markup and mix in guitar tablature. These
//! helpers bring such text down to plain chord/lyric lines before it is
//! parsed. They are meant for the importing side; [`parse`](crate::parse)
//! itself never rewrites its input.

/// Guitar string names that start a tablature staff line (`e|---`)
const TAB_STRING_NAMES: &[char] = &['e', 'B', 'G', 'D', 'A', 'E'];

/// A tablature line: a string name directly followed by `|`, or a `---` run
pub fn is_tab_line(line: &str) -> bool {
    if line.contains("---") {
        return true;
    }
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if TAB_STRING_NAMES.contains(&c) && chars.peek() == Some(&'|') {
            return true;
        }
    }
    false
}

/// Remove `<...>` markup. An unterminated `<` is kept as text.
pub fn strip_tags(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(open) = rest.find('<') {
        match rest[open..].find('>') {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

/// Clean sheet text copied from a chord site.
///
/// Blank lines are kept (as empty lines), tablature lines are dropped,
/// markup is removed and trailing whitespace is trimmed. Leading whitespace
/// is left alone since it positions chords over lyrics.
///
/// # Example
/// ```
/// use chordsheet::clean_sheet_text;
///
/// let raw = "<b>G</b>      D   \ne|---3---|\nAmazing grace\n   \nHow sweet";
/// assert_eq!(clean_sheet_text(raw), "G      D\nAmazing grace\n\nHow sweet");
/// ```
pub fn clean_sheet_text(text: &str) -> String {
    let mut cleaned = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            cleaned.push(String::new());
            continue;
        }
        if is_tab_line(line) {
            continue;
        }
        cleaned.push(strip_tags(line).trim_end().to_string());
    }

    cleaned.join("\n")
}

/// Turn literal `\n` sequences (backslash, `n`) into real newlines.
///
/// Some stored envelopes carry their content double-escaped; loaders call
/// this before handing the text to the parser.
///
/// ```
/// use chordsheet::unescape_newlines;
///
/// assert_eq!(unescape_newlines(r"C  G\nHello"), "C  G\nHello".to_string());
/// ```
pub fn unescape_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}
