//! Stateful typing session driving one phrase to completion.
//!
//! `TypingSession` owns the cursor into the current phrase and the romaji
//! typed so far toward the unit under the cursor. Each keystroke is matched
//! against every spelling of that unit at once, so the player never has to
//! pick a spelling up front.

mod key_handlers;
mod response;
mod targeting;
mod types;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tracing::debug;

use romaji_core::romaji::PatternTable;
use romaji_core::segment::Phrase;

pub use targeting::lock_on;
pub use types::{InputResult, ProgressSnapshot};

/// Per-attempt typing state for one phrase.
pub struct TypingSession {
    table: Arc<PatternTable>,
    /// `None` until a phrase is assigned; treated like a finished phrase.
    phrase: Option<Phrase>,
    cursor: usize,
    buffer: String,
}

impl TypingSession {
    pub fn new(table: Arc<PatternTable>) -> Self {
        Self {
            table,
            phrase: None,
            cursor: 0,
            buffer: String::new(),
        }
    }

    pub fn with_phrase(table: Arc<PatternTable>, phrase: Phrase) -> Self {
        let mut session = Self::new(table);
        session.assign_phrase(phrase);
        session
    }

    /// Start over on `phrase`: cursor to the first unit, buffer cleared.
    pub fn assign_phrase(&mut self, phrase: Phrase) {
        debug!(phrase = %phrase, units = phrase.len(), "assign phrase");
        self.phrase = Some(phrase);
        self.cursor = 0;
        self.buffer.clear();
    }

    /// Drop the partial spelling of the current unit; the cursor stays put.
    pub fn clear_current_unit_buffer(&mut self) {
        self.buffer.clear();
    }

    pub fn table(&self) -> &Arc<PatternTable> {
        &self.table
    }

    pub fn phrase(&self) -> Option<&Phrase> {
        self.phrase.as_ref()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// True once every unit is typed, or when no phrase was ever assigned.
    pub fn is_complete(&self) -> bool {
        self.current_unit().is_none()
    }

    pub fn current_unit(&self) -> Option<&str> {
        self.phrase.as_ref()?.unit(self.cursor)
    }

    /// Units already typed, concatenated.
    pub fn typed_prefix(&self) -> String {
        match &self.phrase {
            Some(p) => p.units()[..self.cursor].concat(),
            None => String::new(),
        }
    }

    /// Units not yet completed (including the current one), concatenated.
    pub fn remaining_suffix(&self) -> String {
        match &self.phrase {
            Some(p) => p.units()[self.cursor..].concat(),
            None => String::new(),
        }
    }
}
