//! Configuration for the sheet parser and the transposer
//!
//! Everything has a default; a YAML file only needs the keys it changes:
//!
//! ```yaml
//! max-header-lines: 12
//! annotation-keywords: [vamp, tag]
//! quality-keywords: [alt]
//! ```

use crate::error::ChordSheetError;
use serde::Deserialize;
use std::path::Path;

/// Parser and transposer parameters
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct SheetConfig {
    /// How many leading lines of a plain-text sheet are scanned for
    /// `Label: value` headers (default: 10)
    pub max_header_lines: usize,

    /// Lines longer than this (in characters) are never chord lines
    /// (default: 100)
    pub max_chord_line_chars: usize,

    /// Section labels and performance notes to ignore when classifying a
    /// line, in addition to the built-in list (intro, riff, solo, ...)
    pub annotation_keywords: Vec<String>,

    /// Chord quality words that may contain vowels, in addition to the
    /// built-in list (maj, min, dim, aug, sus, add)
    pub quality_keywords: Vec<String>,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            max_header_lines: 10,
            max_chord_line_chars: 100,
            annotation_keywords: Vec::new(),
            quality_keywords: Vec::new(),
        }
    }
}

impl SheetConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, ChordSheetError> {
        // An empty document deserializes to unit, not to an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ChordSheetError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChordSheetError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ChordSheetError::io(path, e))?;
        log::debug!("Loaded configuration from {}", path.display());
        Self::from_yaml_str(&content)
    }

    pub fn with_annotation_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.annotation_keywords.push(keyword.into());
        self
    }

    pub fn with_quality_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.quality_keywords.push(keyword.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SheetConfig::default();
        assert_eq!(config.max_header_lines, 10);
        assert_eq!(config.max_chord_line_chars, 100);
        assert!(config.annotation_keywords.is_empty());
    }

    #[test]
    fn test_partial_yaml() {
        let config = SheetConfig::from_yaml_str(
            r#"
max-header-lines: 4
quality-keywords: [alt]
"#,
        )
        .unwrap();
        assert_eq!(config.max_header_lines, 4);
        assert_eq!(config.max_chord_line_chars, 100);
        assert_eq!(config.quality_keywords, vec!["alt".to_string()]);
    }

    #[test]
    fn test_empty_yaml() {
        assert_eq!(SheetConfig::from_yaml_str("").unwrap(), SheetConfig::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = SheetConfig::from_yaml_str("max-lines: 3").unwrap_err();
        assert!(matches!(err, ChordSheetError::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SheetConfig::load("/nonexistent/chordsheet.yaml").unwrap_err();
        assert!(matches!(err, ChordSheetError::Io { .. }));
    }
}
