use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, OnceLock};

use tracing::{debug, debug_span};

use super::config::{parse_pattern_toml, PatternConfig, PatternConfigError, DEFAULT_TOML};
use crate::unicode::{
    hiragana_to_katakana, is_doubling_consonant, is_hiragana, is_katakana, is_small_kana,
};

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

const SOKUON: char = 'っ';
const SOKUON_KATAKANA: char = 'ッ';

/// Immutable mapping from syllabic unit to its accepted romaji spellings.
///
/// Built once and shared read-only between any number of sessions. Units that
/// are not in the table have no spellings, so no non-empty input is ever a
/// valid prefix for them.
#[derive(Debug)]
pub struct PatternTable {
    units: BTreeMap<String, Vec<String>>,
    reverse: HashMap<String, String>,
    max_unit_chars: usize,
}

impl PatternTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), PatternConfigError> {
        // Validate eagerly
        parse_pattern_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| PatternConfigError::AlreadyInitialized)
    }

    /// Get or initialize the process-wide table.
    pub fn global() -> Arc<PatternTable> {
        static INSTANCE: OnceLock<Arc<PatternTable>> = OnceLock::new();
        INSTANCE
            .get_or_init(|| {
                let toml_str = CUSTOM_TOML
                    .get()
                    .map(|s| s.as_str())
                    .unwrap_or(DEFAULT_TOML);
                let table = PatternTable::from_toml(toml_str).expect("pattern TOML must be valid");
                Arc::new(table)
            })
            .clone()
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, PatternConfigError> {
        Ok(Self::from_config(parse_pattern_toml(toml_str)?))
    }

    pub fn from_config(config: PatternConfig) -> Self {
        let _span = debug_span!("build_pattern_table", declared = config.patterns.len()).entered();

        let PatternConfig { options, patterns } = config;
        let mut units = patterns;

        // Explicit entries always win over derived ones.
        if options.mirror_katakana {
            for (unit, spellings) in katakana_mirrors(&units) {
                units.entry(unit).or_insert(spellings);
            }
        }
        if options.derive_sokuon {
            for (unit, spellings) in sokuon_compounds(&units) {
                units.entry(unit).or_insert(spellings);
            }
        }

        let reverse = build_reverse(&units);
        let max_unit_chars = units.keys().map(|u| u.chars().count()).max().unwrap_or(0);
        debug!(unit_count = units.len(), max_unit_chars);

        Self {
            units,
            reverse,
            max_unit_chars,
        }
    }

    /// Ordered spellings for `unit`; empty if the unit is unknown.
    pub fn candidates_for(&self, unit: &str) -> &[String] {
        self.units.get(unit).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True iff `input` is a prefix (or the whole) of some spelling of `unit`.
    pub fn is_valid_prefix(&self, input: &str, unit: &str) -> bool {
        self.candidates_for(unit)
            .iter()
            .any(|c| c.starts_with(input))
    }

    /// Spellings of `unit` that start with `input`, in table order.
    pub fn matching_candidates(&self, input: &str, unit: &str) -> Vec<&str> {
        self.candidates_for(unit)
            .iter()
            .filter(|c| c.starts_with(input))
            .map(String::as_str)
            .collect()
    }

    pub fn is_complete_match(&self, input: &str, unit: &str) -> bool {
        self.candidates_for(unit).iter().any(|c| c == input)
    }

    /// Characters that may legally follow `input`. Empty once `input` is a
    /// complete spelling, or when nothing extends it.
    pub fn next_chars(&self, input: &str, unit: &str) -> BTreeSet<char> {
        if self.is_complete_match(input, unit) {
            return BTreeSet::new();
        }
        self.candidates_for(unit)
            .iter()
            .filter_map(|c| c.strip_prefix(input))
            .filter_map(|rest| rest.chars().next())
            .collect()
    }

    /// Reverse lookup: the unit a complete spelling belongs to. When several
    /// units share a spelling, the one with the lowest code point wins.
    pub fn unit_for(&self, spelling: &str) -> Option<&str> {
        self.reverse.get(spelling).map(String::as_str)
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.units.contains_key(unit)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Length in chars of the longest unit, used for greedy segmentation.
    pub fn max_unit_chars(&self) -> usize {
        self.max_unit_chars
    }

    pub fn units(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.units.iter().map(|(u, s)| (u.as_str(), s.as_slice()))
    }
}

fn katakana_mirrors(units: &BTreeMap<String, Vec<String>>) -> Vec<(String, Vec<String>)> {
    units
        .iter()
        .filter(|(unit, _)| unit.chars().any(is_hiragana))
        .map(|(unit, spellings)| (hiragana_to_katakana(unit), spellings.clone()))
        .collect()
}

/// っ+unit compounds: every consonant-led spelling with its first letter
/// doubled, then every spelling behind each standalone small-tsu spelling.
fn sokuon_compounds(units: &BTreeMap<String, Vec<String>>) -> Vec<(String, Vec<String>)> {
    let mut out = Vec::new();
    for (unit, spellings) in units {
        let Some(first) = unit.chars().next() else {
            continue;
        };
        if is_small_kana(first) {
            continue;
        }
        let marker = if is_hiragana(first) {
            SOKUON
        } else if is_katakana(first) {
            SOKUON_KATAKANA
        } else {
            continue;
        };

        let mut compound = Vec::new();
        for spelling in spellings {
            if let Some(lead) = spelling.chars().next().filter(|&c| is_doubling_consonant(c)) {
                push_unique(&mut compound, format!("{lead}{spelling}"));
            }
        }
        if compound.is_empty() {
            continue;
        }
        if let Some(small) = units.get(marker.to_string().as_str()) {
            for prefix in small {
                for spelling in spellings {
                    push_unique(&mut compound, format!("{prefix}{spelling}"));
                }
            }
        }
        out.push((format!("{marker}{unit}"), compound));
    }
    out
}

fn push_unique(list: &mut Vec<String>, spelling: String) {
    if !list.contains(&spelling) {
        list.push(spelling);
    }
}

fn build_reverse(units: &BTreeMap<String, Vec<String>>) -> HashMap<String, String> {
    let mut reverse = HashMap::new();
    // BTreeMap iterates in code point order, so the first insert wins.
    for (unit, spellings) in units {
        for spelling in spellings {
            reverse
                .entry(spelling.clone())
                .or_insert_with(|| unit.clone());
        }
    }
    reverse
}
