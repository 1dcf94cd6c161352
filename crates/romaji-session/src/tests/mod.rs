mod corpus;

use std::sync::Arc;

use romaji_core::romaji::PatternTable;
use romaji_core::segment::Phrase;

use super::{InputResult, TypingSession};

const TEST_TOML: &str = r#"
[patterns]
"か" = ["ka"]
"き" = ["ki"]
"こ" = ["ko"]
"し" = ["shi", "si"]
"ち" = ["chi", "ti"]
"つ" = ["tsu", "tu"]
"な" = ["na"]
"ん" = ["n", "n'", "nn"]
"じゃ" = ["ja", "jya", "zya"]
"#;

pub(super) fn make_test_table() -> Arc<PatternTable> {
    Arc::new(PatternTable::from_toml(TEST_TOML).unwrap())
}

pub(super) fn session_for(units: &[&str]) -> TypingSession {
    TypingSession::with_phrase(make_test_table(), Phrase::from_units(units.iter().copied()))
}

// Helper: simulate typing a string one character at a time
pub(super) fn type_string(session: &mut TypingSession, s: &str) -> Vec<InputResult> {
    s.chars().map(|ch| session.process_keystroke(ch)).collect()
}

/// Spellings that no shorter spelling of the same unit completes first.
/// `nn` for ん is never reachable: `n` completes the unit on the first key.
pub(super) fn reachable_spellings<'a>(table: &'a PatternTable, unit: &str) -> Vec<&'a str> {
    let all = table.candidates_for(unit);
    all.iter()
        .filter(|c| {
            !all.iter()
                .any(|other| other.len() < c.len() && c.starts_with(other.as_str()))
        })
        .map(String::as_str)
        .collect()
}
