use std::fmt;

use itertools::Itertools;

use crate::report_types::{CharacterFrequencyMap, RankedEntry, Report};

/// Sort the tally by count descending. Equal counts are ordered by ascending
/// code point so the listing does not depend on map iteration order.
pub fn rank_characters(counts: &CharacterFrequencyMap) -> Vec<RankedEntry> {
    counts
        .iter()
        .map(|(&character, &count)| RankedEntry { character, count })
        .sorted_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.character.cmp(&b.character))
        })
        .collect()
}

impl Report {
    pub fn new(
        source: impl Into<String>,
        word_count: usize,
        counts: &CharacterFrequencyMap,
    ) -> Self {
        Self {
            source: source.into(),
            word_count,
            ranked: rank_characters(counts),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Begin report of {} ---", self.source)?;
        writeln!(f, "Found {} total words", self.word_count)?;
        for entry in &self.ranked {
            writeln!(f, "{}: {}", entry.character, entry.count)?;
        }
        writeln!(f, "--- End report ---")
    }
}
