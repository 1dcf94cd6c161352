use romaji_core::romaji::PatternTable;
use romaji_core::segment::Phrase;

use super::types::InputResult;
use super::TypingSession;

/// Index of the first phrase whose opening unit accepts `key` from a fresh
/// state, or `None` when no phrase does.
pub fn lock_on(phrases: &[Phrase], key: char, table: &PatternTable) -> Option<usize> {
    let mut utf8 = [0u8; 4];
    let key: &str = key.encode_utf8(&mut utf8);
    phrases
        .iter()
        .position(|p| p.unit(0).is_some_and(|unit| table.is_valid_prefix(key, unit)))
}

impl TypingSession {
    /// Pick a target with `key` and type it: assigns the first phrase that
    /// accepts `key` and processes the key against it. Leaves the session
    /// untouched when no phrase accepts the key.
    pub fn engage(&mut self, phrases: &[Phrase], key: char) -> Option<(usize, InputResult)> {
        let index = lock_on(phrases, key, &self.table)?;
        self.assign_phrase(phrases[index].clone());
        Some((index, self.process_keystroke(key)))
    }
}
