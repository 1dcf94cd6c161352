use tracing::{debug, debug_span};

use super::types::InputResult;
use super::TypingSession;

impl TypingSession {
    /// Feed one keystroke. A rejected key leaves cursor and buffer untouched;
    /// the caller decides whether to `clear_current_unit_buffer()`.
    pub fn process_keystroke(&mut self, key: char) -> InputResult {
        let _span = debug_span!("process_keystroke", ?key, cursor = self.cursor).entered();

        let Some(phrase) = self.phrase.as_ref() else {
            return InputResult::ignored();
        };
        let Some(unit) = phrase.unit(self.cursor) else {
            return InputResult::ignored();
        };

        let mut attempt = String::with_capacity(self.buffer.len() + key.len_utf8());
        attempt.push_str(&self.buffer);
        attempt.push(key);

        if !self.table.is_valid_prefix(&attempt, unit) {
            debug!(unit, buffer = %self.buffer, "rejected");
            return InputResult::rejected(self.table.next_chars(&self.buffer, unit));
        }

        let mut result = InputResult::accepted();
        if self.table.is_complete_match(&attempt, unit) {
            debug!(unit, spelling = %attempt, "unit completed");
            self.cursor += 1;
            self.buffer.clear();
            result.unit_completed = true;
            result.phrase_completed = self.cursor == phrase.len();
        } else {
            self.buffer = attempt;
        }

        if result.phrase_completed {
            debug!(units = phrase.len(), "phrase completed");
        } else if let Some(next) = phrase.unit(self.cursor) {
            result.expected = self.table.next_chars(&self.buffer, next);
        }

        result
    }
}
