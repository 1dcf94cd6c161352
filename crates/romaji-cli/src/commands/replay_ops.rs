use std::sync::Arc;

use serde::Serialize;

use romaji_core::romaji::PatternTable;
use romaji_core::segment::Phrase;
use romaji_session::TypingSession;

use super::{pad, CliError};

#[derive(Debug, Clone, Copy)]
pub struct ReplayOptions {
    /// Drop the partial spelling after every rejected key, as the game does.
    pub clear_on_reject: bool,
}

#[derive(Debug, Serialize)]
pub struct StepRecord {
    pub key: char,
    pub accepted: bool,
    pub unit_completed: bool,
    pub phrase_completed: bool,
    pub expected: String,
    pub cursor: usize,
    pub buffer: String,
    pub typed: String,
}

#[derive(Debug, Serialize)]
pub struct Replay {
    pub units: Vec<String>,
    pub steps: Vec<StepRecord>,
    pub completed: bool,
    pub misses: usize,
}

/// Feed `keys` one at a time into a fresh session on `text`.
pub fn replay(table: Arc<PatternTable>, text: &str, keys: &str, opts: ReplayOptions) -> Replay {
    let phrase = Phrase::segment(text, &table);
    let units = phrase.units().to_vec();
    let mut session = TypingSession::with_phrase(table, phrase);
    let mut steps = Vec::new();
    let mut misses = 0;

    for key in keys.chars() {
        let was_complete = session.is_complete();
        let r = session.process_keystroke(key);
        if !r.accepted && !was_complete {
            misses += 1;
            if opts.clear_on_reject {
                session.clear_current_unit_buffer();
            }
        }
        steps.push(StepRecord {
            key,
            accepted: r.accepted,
            unit_completed: r.unit_completed,
            phrase_completed: r.phrase_completed,
            expected: r.expected.iter().collect(),
            cursor: session.cursor(),
            buffer: session.buffer().to_string(),
            typed: session.typed_prefix(),
        });
    }

    Replay {
        units,
        steps,
        completed: session.is_complete(),
        misses,
    }
}

pub fn format_text(replay: &Replay) -> String {
    let typed_width = replay
        .steps
        .iter()
        .map(|s| unicode_width::UnicodeWidthStr::width(s.typed.as_str()))
        .max()
        .unwrap_or(0)
        .max("typed".len());

    let mut out = String::new();
    out.push_str(&format!("units: {}\n", replay.units.join(" | ")));
    out.push_str(&format!(
        "  {:>3}  key  {:<10} {}  {:<6} expected\n",
        "#",
        "result",
        pad("typed", typed_width),
        "buffer",
    ));

    for (i, step) in replay.steps.iter().enumerate() {
        let result = if step.phrase_completed {
            "phrase"
        } else if step.unit_completed {
            "unit"
        } else if step.accepted {
            "ok"
        } else {
            "miss"
        };
        out.push_str(&format!(
            "  {:>3}  {:<3}  {:<10} {}  {:<6} {}\n",
            i + 1,
            step.key,
            result,
            pad(&step.typed, typed_width),
            step.buffer,
            step.expected,
        ));
    }

    out.push_str(&format!(
        "{} ({} misses)\n",
        if replay.completed {
            "completed"
        } else {
            "incomplete"
        },
        replay.misses,
    ));
    out
}

pub fn format_json(replay: &Replay) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(replay)?)
}
