//! Romaji spelling table for kana units.
//!
//! Each syllabic unit owns an ordered list of accepted romaji spellings. The
//! table answers prefix questions about those spellings so that a session
//! can follow several candidate spellings at once until one completes.

mod config;
mod table;

pub use config::{
    default_toml, parse_pattern_toml, PatternConfig, PatternConfigError, PatternOptions,
};
pub use table::PatternTable;
