use std::collections::BTreeMap;

use serde::Deserialize;

pub const DEFAULT_TOML: &str = include_str!("default_patterns.toml");

/// Returns the embedded default pattern TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

/// Parsed pattern document: unit → ordered spellings, plus derivation options.
#[derive(Debug, Clone, Deserialize)]
pub struct PatternConfig {
    #[serde(default)]
    pub options: PatternOptions,
    pub patterns: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct PatternOptions {
    /// Add the katakana form of every hiragana unit not declared explicitly.
    pub mirror_katakana: bool,
    /// Add っ+unit compounds spelled with a doubled leading consonant.
    pub derive_sokuon: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum PatternConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[patterns] table is empty")]
    Empty,
    #[error("empty unit key")]
    EmptyUnit,
    #[error("no spellings for unit: {0}")]
    NoSpellings(String),
    #[error("empty spelling for unit: {0}")]
    EmptySpelling(String),
    #[error("non-ASCII spelling {spelling:?} for unit: {unit}")]
    NonAsciiSpelling { unit: String, spelling: String },
    #[error("duplicate spelling {spelling:?} for unit: {unit}")]
    DuplicateSpelling { unit: String, spelling: String },
    #[error("pattern table already initialized")]
    AlreadyInitialized,
}

/// Parse and validate a pattern TOML document.
pub fn parse_pattern_toml(toml_str: &str) -> Result<PatternConfig, PatternConfigError> {
    let config: PatternConfig =
        toml::from_str(toml_str).map_err(|e| PatternConfigError::Parse(e.to_string()))?;

    if config.patterns.is_empty() {
        return Err(PatternConfigError::Empty);
    }

    for (unit, spellings) in &config.patterns {
        if unit.is_empty() {
            return Err(PatternConfigError::EmptyUnit);
        }
        if spellings.is_empty() {
            return Err(PatternConfigError::NoSpellings(unit.clone()));
        }
        for (i, spelling) in spellings.iter().enumerate() {
            if spelling.is_empty() {
                return Err(PatternConfigError::EmptySpelling(unit.clone()));
            }
            if !spelling.is_ascii() {
                return Err(PatternConfigError::NonAsciiSpelling {
                    unit: unit.clone(),
                    spelling: spelling.clone(),
                });
            }
            if spellings[..i].contains(spelling) {
                return Err(PatternConfigError::DuplicateSpelling {
                    unit: unit.clone(),
                    spelling: spelling.clone(),
                });
            }
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[patterns]
"あ" = ["a"]
"し" = ["shi", "si"]
"#;
        let config = parse_pattern_toml(toml).unwrap();
        assert_eq!(config.patterns.len(), 2);
        assert_eq!(config.patterns["し"], vec!["shi", "si"]);
        assert!(!config.options.mirror_katakana);
        assert!(!config.options.derive_sokuon);
    }

    #[test]
    fn parse_default_toml() {
        let config = parse_pattern_toml(DEFAULT_TOML).unwrap();
        assert!(
            config.patterns.len() > 180,
            "expected 180+ units, got {}",
            config.patterns.len()
        );
        assert!(config.options.mirror_katakana);
        assert!(config.options.derive_sokuon);
        assert_eq!(config.patterns["ん"], vec!["n", "n'", "nn"]);
    }

    #[test]
    fn error_empty_patterns() {
        let err = parse_pattern_toml("[patterns]\n").unwrap_err();
        assert!(matches!(err, PatternConfigError::Empty));
    }

    #[test]
    fn error_no_spellings() {
        let toml = r#"
[patterns]
"か" = []
"#;
        let err = parse_pattern_toml(toml).unwrap_err();
        assert!(matches!(err, PatternConfigError::NoSpellings(ref u) if u == "か"));
    }

    #[test]
    fn error_empty_spelling() {
        let toml = r#"
[patterns]
"か" = ["ka", ""]
"#;
        let err = parse_pattern_toml(toml).unwrap_err();
        assert!(matches!(err, PatternConfigError::EmptySpelling(_)));
    }

    #[test]
    fn error_non_ascii_spelling() {
        let toml = r#"
[patterns]
"か" = ["ｋａ"]
"#;
        let err = parse_pattern_toml(toml).unwrap_err();
        assert!(matches!(err, PatternConfigError::NonAsciiSpelling { .. }));
    }

    #[test]
    fn error_duplicate_spelling() {
        let toml = r#"
[patterns]
"し" = ["shi", "si", "shi"]
"#;
        let err = parse_pattern_toml(toml).unwrap_err();
        match err {
            PatternConfigError::DuplicateSpelling { unit, spelling } => {
                assert_eq!(unit, "し");
                assert_eq!(spelling, "shi");
            }
            other => panic!("expected DuplicateSpelling, got {other:?}"),
        }
    }

    #[test]
    fn error_empty_unit() {
        let toml = r#"
[patterns]
"" = ["a"]
"#;
        let err = parse_pattern_toml(toml).unwrap_err();
        assert!(matches!(err, PatternConfigError::EmptyUnit));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_pattern_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, PatternConfigError::Parse(_)));
    }

    #[test]
    fn error_missing_patterns_table() {
        let err = parse_pattern_toml("[options]\nmirror_katakana = true\n").unwrap_err();
        assert!(matches!(err, PatternConfigError::Parse(_)));
    }
}
