use std::fs;
use std::path::Path;
use std::sync::Arc;

use romaji_core::romaji::{default_toml, parse_pattern_toml, PatternTable};
use romaji_core::segment::Phrase;

use super::{pad, CliError};

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Table from a pattern file, or the process-wide default table.
pub fn load_table(path: Option<&Path>) -> Result<Arc<PatternTable>, CliError> {
    match path {
        Some(path) => {
            let content = read_file(path)?;
            Ok(Arc::new(PatternTable::from_toml(&content)?))
        }
        None => Ok(PatternTable::global()),
    }
}

pub fn export() -> &'static str {
    default_toml()
}

pub fn validate(path: &Path) -> Result<String, CliError> {
    let content = read_file(path)?;
    let declared = parse_pattern_toml(&content)?.patterns.len();
    let table = PatternTable::from_toml(&content)?;
    Ok(format!(
        "OK: {} units declared, {} after derivation",
        declared,
        table.len()
    ))
}

/// One line per unit of `text`: the unit and its spellings.
pub fn spell(table: &PatternTable, text: &str) -> String {
    let phrase = Phrase::segment(text, table);
    let width = phrase
        .units()
        .iter()
        .map(|u| unicode_width::UnicodeWidthStr::width(u.as_str()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for unit in phrase.units() {
        let spellings = table.candidates_for(unit);
        let listed = if spellings.is_empty() {
            "(no spellings)".to_string()
        } else {
            spellings.join(" / ")
        };
        out.push_str(&format!("{}  {}\n", pad(unit, width), listed));
    }
    out
}

pub fn reverse(table: &PatternTable, romaji: &str) -> Option<String> {
    table.unit_for(romaji).map(str::to_owned)
}
