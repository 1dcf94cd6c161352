use std::collections::BTreeSet;

use romaji_core::segment::Phrase;

use super::types::ProgressSnapshot;
use super::TypingSession;

impl TypingSession {
    pub fn progress_snapshot(&self) -> ProgressSnapshot {
        let current_unit = self.current_unit();
        let (expected, matching) = match current_unit {
            Some(unit) => (
                self.table.next_chars(&self.buffer, unit),
                self.table
                    .matching_candidates(&self.buffer, unit)
                    .into_iter()
                    .map(str::to_owned)
                    .collect(),
            ),
            None => (BTreeSet::new(), Vec::new()),
        };

        ProgressSnapshot {
            cursor: self.cursor,
            total_units: self.phrase.as_ref().map_or(0, Phrase::len),
            buffer: self.buffer.clone(),
            current_unit: current_unit.map(str::to_owned),
            expected,
            matching,
        }
    }
}
