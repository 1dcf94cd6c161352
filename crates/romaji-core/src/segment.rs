//! Splitting target text into syllabic units.
//!
//! Segmentation is greedy longest-match against the pattern table, so
//! digraphs (きゃ) and sokuon compounds (っか) become single units. A
//! character that starts no known unit becomes a unit of its own; it can
//! never be typed, which the session surfaces as a stuck unit.

use std::fmt;

use crate::romaji::PatternTable;

/// Ordered sequence of syllabic units forming one typing target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Phrase {
    units: Vec<String>,
}

impl Phrase {
    /// Build a phrase from units the caller already split.
    pub fn from_units<I, S>(units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            units: units.into_iter().map(Into::into).collect(),
        }
    }

    pub fn segment(text: &str, table: &PatternTable) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let longest = table.max_unit_chars().max(1);
        let mut units = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let max_len = longest.min(chars.len() - i);
            let len = (1..=max_len)
                .rev()
                .find(|&len| {
                    let unit: String = chars[i..i + len].iter().collect();
                    table.contains(&unit)
                })
                .unwrap_or(1);
            units.push(chars[i..i + len].iter().collect());
            i += len;
        }

        Self { units }
    }

    pub fn units(&self) -> &[String] {
        &self.units
    }

    pub fn unit(&self, index: usize) -> Option<&str> {
        self.units.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Concatenated text of all units.
    pub fn text(&self) -> String {
        self.units.concat()
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for unit in &self.units {
            f.write_str(unit)?;
        }
        Ok(())
    }
}
