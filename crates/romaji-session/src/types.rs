use std::collections::BTreeSet;

/// Outcome of a single keystroke.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputResult {
    /// The keystroke extends a valid spelling of the current unit.
    pub accepted: bool,
    pub unit_completed: bool,
    pub phrase_completed: bool,
    /// Keys that would legally extend the current buffer. Doubles as the
    /// recovery hint after a rejection; empty once the phrase is done.
    pub expected: BTreeSet<char>,
}

impl InputResult {
    /// No phrase, or the phrase is already finished.
    pub(crate) fn ignored() -> Self {
        Self::default()
    }

    pub(crate) fn rejected(expected: BTreeSet<char>) -> Self {
        Self {
            expected,
            ..Self::default()
        }
    }

    pub(crate) fn accepted() -> Self {
        Self {
            accepted: true,
            ..Self::default()
        }
    }
}

/// Read-only view of session progress for rendering. Recomputed on every
/// call, never shared with the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSnapshot {
    /// Index of the unit being typed; equals `total_units` when done.
    pub cursor: usize,
    pub total_units: usize,
    pub buffer: String,
    pub current_unit: Option<String>,
    pub expected: BTreeSet<char>,
    /// Spellings of the current unit still compatible with `buffer`.
    pub matching: Vec<String>,
}

impl ProgressSnapshot {
    pub fn is_complete(&self) -> bool {
        self.current_unit.is_none()
    }

    /// Hint line such as `[s] (shi/si)`; empty while nothing is buffered.
    pub fn input_display(&self) -> String {
        if self.buffer.is_empty() {
            return String::new();
        }
        if self.current_unit.is_some() {
            format!("[{}] ({})", self.buffer, self.matching.join("/"))
        } else {
            format!("[{}]", self.buffer)
        }
    }
}
